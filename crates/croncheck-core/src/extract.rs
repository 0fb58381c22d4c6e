use flate2::read::GzDecoder;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a log file for line reading, transparently decompressing when the
/// filename carries a gzip suffix.
pub fn open_log_reader(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// The file's first line, probing the earliest instant the log reaches
/// back to. `None` for an empty file.
pub fn first_line(path: &Path) -> io::Result<Option<String>> {
    let mut lines = open_log_reader(path)?.lines();
    lines.next().transpose()
}

/// Stream the file and keep the last line matching `pattern`.
///
/// A command may have run several times within one rotation window; the
/// check cares about the most recent execution, so later matches override
/// earlier ones.
pub fn find_execution_line(path: &Path, pattern: &Regex) -> io::Result<Option<String>> {
    let mut found = None;
    for line in open_log_reader(path)?.lines() {
        let line = line?;
        if pattern.is_match(&line) {
            found = Some(line);
        }
    }
    Ok(found)
}
