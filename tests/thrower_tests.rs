//! Integration tests for the thrower crate.
//!
//! These tests exercise the full pipeline shape: wrapped effects, promoted
//! total functions, Kleisli arrows and the terminal sentinel policy, with
//! side-effect counters asserting the laziness contract everywhere.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use thrower::Thrower;
use thrower::arrow::{PartialArrow, kleisli};
use thrower::handler::ExceptionHandler;
use thrower::throwers;

fn counting(counter: &Rc<Cell<usize>>, value: i32) -> Thrower<i32, String> {
    let counter = Rc::clone(counter);
    Thrower::new(move || {
        counter.set(counter.get() + 1);
        Ok(value)
    })
}

fn counting_failure(counter: &Rc<Cell<usize>>, message: &str) -> Thrower<i32, String> {
    let counter = Rc::clone(counter);
    let message = message.to_string();
    Thrower::new(move || {
        counter.set(counter.get() + 1);
        Err(message.clone())
    })
}

// =============================================================================
// Laziness Contract
// =============================================================================

#[rstest]
fn composition_performs_zero_side_effects() {
    let counter = Rc::new(Cell::new(0));

    let promoted = throwers::map(|n: i32| n + 1);
    let mapped = promoted(counting(&counter, 1));
    let bound = throwers::bind(counting(&counter, 2), throwers::unit);
    let batch = throwers::sequence(vec![counting(&counter, 3), counting(&counter, 4)]);

    // Assembly alone ran nothing.
    assert_eq!(counter.get(), 0);

    assert_eq!(mapped.evaluate(), Ok(2));
    assert_eq!(bound.evaluate(), Ok(2));
    assert_eq!(batch.evaluate(), Ok(vec![3, 4]));
    assert_eq!(counter.get(), 4);
}

#[rstest]
fn each_evaluation_is_a_fresh_execution() {
    let counter = Rc::new(Cell::new(0));
    let thrower = counting(&counter, 7);

    for _ in 0..5 {
        assert_eq!(thrower.evaluate(), Ok(7));
    }
    assert_eq!(counter.get(), 5);
}

#[rstest]
fn deep_composition_still_runs_each_stage_once_per_evaluation() {
    let counter = Rc::new(Cell::new(0));

    let pipeline = throwers::bind(counting(&counter, 1), {
        let counter = Rc::clone(&counter);
        move |n| {
            let inner = counting(&counter, n + 1);
            throwers::bind(inner, |m| throwers::unit(m * 10))
        }
    });

    assert_eq!(counter.get(), 0);
    assert_eq!(pipeline.evaluate(), Ok(20));
    assert_eq!(counter.get(), 2);

    // A second terminal evaluation re-runs the whole chain.
    assert_eq!(pipeline.evaluate(), Ok(20));
    assert_eq!(counter.get(), 4);
}

// =============================================================================
// Fail-Fast Composition
// =============================================================================

#[rstest]
fn bind_of_unit_five_doubles_positives() {
    let chained = throwers::bind(throwers::unit::<_, String>(5), |n| {
        if n > 0 {
            throwers::unit(n * 2)
        } else {
            throwers::fail("not positive".to_string())
        }
    });
    assert_eq!(chained.evaluate(), Ok(10));
}

#[rstest]
fn first_failure_aborts_the_remainder_of_a_chain() {
    let reached = Rc::new(Cell::new(0));

    let pipeline = throwers::bind(throwers::fail::<i32, _>("upstream".to_string()), {
        let reached = Rc::clone(&reached);
        move |n| {
            reached.set(reached.get() + 1);
            throwers::unit(n + 1)
        }
    });

    assert_eq!(pipeline.evaluate(), Err("upstream".to_string()));
    assert_eq!(reached.get(), 0);
}

#[rstest]
fn sequence_of_empty_input_evaluates_nothing() {
    let batch = throwers::sequence(Vec::<Thrower<i32, String>>::new());
    assert_eq!(batch.evaluate(), Ok(vec![]));
}

#[rstest]
fn sequence_collects_in_input_order() {
    let batch = throwers::sequence(vec![
        throwers::unit::<_, String>(1),
        throwers::unit(2),
        throwers::unit(3),
    ]);
    assert_eq!(batch.evaluate(), Ok(vec![1, 2, 3]));
}

#[rstest]
fn sequence_never_evaluates_elements_after_a_failure() {
    let first = Rc::new(Cell::new(0));
    let bad = Rc::new(Cell::new(0));
    let third = Rc::new(Cell::new(0));

    let batch = throwers::sequence(vec![
        counting(&first, 1),
        counting_failure(&bad, "bad element"),
        counting(&third, 3),
    ]);

    assert_eq!(batch.evaluate(), Err("bad element".to_string()));
    assert_eq!(first.get(), 1);
    assert_eq!(bad.get(), 1);
    assert_eq!(third.get(), 0);
}

// =============================================================================
// Kleisli Arrows in Pipelines
// =============================================================================

struct Halver {
    invocations: Rc<Cell<usize>>,
}

impl PartialArrow<i32, i32, String> for Halver {
    fn try_convert(&self, n: &i32) -> Result<i32, String> {
        self.invocations.set(self.invocations.get() + 1);
        if n % 2 == 0 {
            Ok(n / 2)
        } else {
            Err(format!("{n} is odd"))
        }
    }
}

#[rstest]
fn arrow_output_defers_conversion_until_evaluation() {
    let invocations = Rc::new(Cell::new(0));
    let halve = kleisli(Rc::new(Halver {
        invocations: Rc::clone(&invocations),
    }));

    let pipeline = throwers::bind(throwers::unit(42), halve);
    assert_eq!(invocations.get(), 0);

    assert_eq!(pipeline.evaluate(), Ok(21));
    assert_eq!(invocations.get(), 1);
}

#[rstest]
fn arrow_failure_propagates_through_bind_unchanged() {
    let invocations = Rc::new(Cell::new(0));
    let halve = kleisli(Rc::new(Halver {
        invocations: Rc::clone(&invocations),
    }));

    let pipeline = throwers::bind(throwers::unit(7), halve);
    assert_eq!(pipeline.evaluate(), Err("7 is odd".to_string()));
    assert_eq!(invocations.get(), 1);
}

#[rstest]
fn closure_arrows_chain_like_trait_arrows() {
    let parse = kleisli(Rc::new(|text: &String| {
        text.parse::<i32>().map_err(|error| error.to_string())
    }));
    let halve = kleisli(Rc::new(Halver {
        invocations: Rc::new(Cell::new(0)),
    }));

    let pipeline = throwers::bind(throwers::bind(throwers::unit("84".to_string()), parse), halve);
    assert_eq!(pipeline.evaluate(), Ok(42));
}

// =============================================================================
// Terminal Sentinel Policy
// =============================================================================

#[rstest]
#[case(throwers::unit(9), 9)]
#[case(throwers::fail("no input".to_string()), i64::MIN)]
fn handler_substitutes_the_sentinel_only_on_failure(
    #[case] thrower: Thrower<i64, String>,
    #[case] expected: i64,
) {
    let handler = ExceptionHandler::new(i64::MIN);
    assert_eq!(handler.evaluate(&thrower), expected);
}

#[rstest]
fn handler_is_the_only_place_effects_run() {
    let counter = Rc::new(Cell::new(0));
    let promoted = throwers::map(|n: i32| n * 2);
    let pipeline = promoted(counting(&counter, 21));

    let handler = ExceptionHandler::new(-1);
    assert_eq!(counter.get(), 0);
    assert_eq!(handler.evaluate(&pipeline), 42);
    assert_eq!(counter.get(), 1);
}
