//! Reuses a pure function written for strings so that it operates on a
//! fallible line read from standard input.
//!
//! The main program contains no error handling at all: the read is wrapped
//! in a `Thrower`, the pure length function is promoted with `map`, and the
//! terminal `ExceptionHandler` decides what a failure means. Nothing reads
//! from stdin until the handler's single `evaluate` call.

use std::io::{self, BufRead};

use thrower::handler::ExceptionHandler;
use thrower::thrower::Thrower;
use thrower::throwers;

fn main() {
    let read_line: Thrower<String, io::Error> = Thrower::new(|| {
        let mut buffer = String::new();
        io::stdin().lock().read_line(&mut buffer)?;
        Ok(buffer.trim_end().to_string())
    });

    let length = throwers::map(|line: String| i64::try_from(line.len()).unwrap_or(i64::MAX));

    // A failed read becomes the documented sentinel instead of propagating.
    let handler = ExceptionHandler::new(i64::MIN);
    println!("{}", handler.evaluate(&length(read_line)));
}
