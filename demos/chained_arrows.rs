//! A two-stage resource pipeline built from partial arrows.
//!
//! One arrow opens a file, a second reads its contents; `bind` chains them
//! into a single deferred computation. The filesystem is untouched until the
//! final `evaluate` call, at which point the whole pipeline runs in one go.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::rc::Rc;

use thrower::arrow::{PartialArrow, kleisli};
use thrower::throwers;

struct FileOpener;

impl PartialArrow<PathBuf, File, io::Error> for FileOpener {
    fn try_convert(&self, path: &PathBuf) -> io::Result<File> {
        File::open(path)
    }
}

struct ContentReader;

impl PartialArrow<File, String, io::Error> for ContentReader {
    fn try_convert(&self, file: &File) -> io::Result<String> {
        let mut content = String::new();
        let mut handle = file;
        handle.read_to_string(&mut content)?;
        Ok(content)
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("Cargo.toml"), PathBuf::from);

    let open = kleisli(Rc::new(FileOpener));
    let read = kleisli(Rc::new(ContentReader));

    // Pure assembly: neither arrow has run yet.
    let pipeline = throwers::bind(open(path), read);

    match pipeline.evaluate() {
        Ok(content) => print!("{content}"),
        Err(error) => eprintln!("pipeline failed: {error}"),
    }
}
