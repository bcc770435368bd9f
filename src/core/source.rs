//! Line Source
//!
//! Splits a buffered reader into lines on `\n`. Bytes are decoded lossily so
//! a stray invalid sequence degrades into a diagnostic instead of aborting
//! the file. A final line without a trailing newline is still yielded.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Iterator over the lines of a buffered reader
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                // A failed read poisons the rest of the stream
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Open a file as a line source
pub fn open(path: &Path) -> Result<LineSource<BufReader<File>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(LineSource::new(BufReader::new(file)))
}
