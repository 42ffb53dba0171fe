use crate::profile::TermProfile;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Buffered reader over a file; `.gz` files are decompressed on the fly.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file =
        File::open(path).map_err(|e| Error::from(e).with_context(format!("opening {:?}", path)))?;
    let gzipped = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);
    if gzipped {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// One JSON-encoded [`TermProfile`] per line. Blank lines are skipped.
pub struct ProfileLines<R> {
    lines: io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> ProfileLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for ProfileLines<R> {
    type Item = Result<TermProfile, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(
                        Error::from(e).with_context(format!("line {}", self.line_number))
                    ))
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(
                serde_json::from_str(&line)
                    .map_err(|e| Error::from(e).with_context(format!("line {}", self.line_number))),
            );
        }
    }
}
