//! Dictionary file reading
//!
//! Streams a newline-delimited word file one trimmed line at a time, so a
//! dictionary is never held in memory as a whole.

use super::DictionaryError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Open a dictionary file for streaming
///
/// Each item is one trimmed, non-empty line. Read failures part way through
/// surface as an `Err` item.
///
/// # Errors
///
/// Returns `DictionaryError::Open` if the file cannot be opened.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::stream_file;
///
/// for word in stream_file("data/en.txt").unwrap() {
///     println!("{}", word.unwrap());
/// }
/// ```
pub fn stream_file<P: AsRef<Path>>(
    path: P,
) -> Result<impl Iterator<Item = Result<String, DictionaryError>>, DictionaryError> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path).map_err(|source| DictionaryError::Open {
        path: path.clone(),
        source,
    })?;

    Ok(stream_lines(BufReader::new(file), path))
}

fn stream_lines<R: BufRead>(
    reader: R,
    path: PathBuf,
) -> impl Iterator<Item = Result<String, DictionaryError>> {
    reader.lines().filter_map(move |line| match line {
        Ok(line) => {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| Ok(trimmed.to_string()))
        }
        Err(source) => Some(Err(DictionaryError::Read {
            path: path.clone(),
            source,
        })),
    })
}
