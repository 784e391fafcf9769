//! Decoder for the run-length encoded pattern format used by Life pattern
//! collections, described here: https://conwaylife.com/wiki/Run_Length_Encoded
//!
//! The body grammar is the two-state subset: an optional decimal run count
//! followed by `b` (dead), `o` (alive) or `$` (end of row), with `!` ending the
//! pattern. A missing run count means 1.

use std::iter::FusedIterator;
use std::str::CharIndices;

use crate::error::{Error, Result};

/// A horizontal run of `len` live cells starting at `(col, row)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveRun {
    pub col: isize,
    pub row: isize,
    pub len: isize,
}

impl LiveRun {
    /// One past the last column of the run
    pub const fn end(&self) -> isize {
        self.col + self.len
    }
}

/// Lazy sequence of the live runs in RLE text.
///
/// Work and memory are proportional to the text, not to the run counts it
/// contains. The first malformed character yields a single `Err` and ends
/// the sequence.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    chars: CharIndices<'a>,
    origin_col: isize,
    col: isize,
    row: isize,
    /// Run count accumulated so far, `None` until a digit is seen
    count: Option<isize>,
    done: bool,
}

/// Start decoding `text` into live runs with the cursor at `origin`.
pub fn decode_runs(text: &str, origin: (isize, isize)) -> Runs<'_> {
    Runs {
        chars: text.char_indices(),
        origin_col: origin.0,
        col: origin.0,
        row: origin.1,
        count: None,
        done: false,
    }
}

impl Runs<'_> {
    fn fail(&mut self, error: Error) -> Option<Result<LiveRun>> {
        self.done = true;
        Some(Err(error))
    }

    fn take_count(&mut self) -> isize {
        self.count.take().unwrap_or(1)
    }
}

impl Iterator for Runs<'_> {
    type Item = Result<LiveRun>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let Some((offset, c)) = self.chars.next() else {
                self.done = true;
                break;
            };

            match c {
                '0'..='9' => {
                    let digit = (c as u8 - b'0') as isize;
                    let count = self
                        .count
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(digit));
                    match count {
                        Some(n) => self.count = Some(n),
                        None => return self.fail(Error::RunCountOverflow { offset }),
                    }
                }
                'b' | 'o' => {
                    let n = self.take_count();
                    // The end of the run must stay addressable.
                    let Some(end) = self.col.checked_add(n) else {
                        return self.fail(Error::RunCountOverflow { offset });
                    };
                    let run = LiveRun { col: self.col, row: self.row, len: n };
                    self.col = end;
                    if c == 'o' && n > 0 {
                        return Some(Ok(run));
                    }
                }
                '$' => {
                    let n = self.take_count();
                    match self.row.checked_add(n) {
                        Some(row) => self.row = row,
                        None => return self.fail(Error::RunCountOverflow { offset }),
                    }
                    self.col = self.origin_col;
                }
                '!' => self.done = true,
                found => return self.fail(Error::MalformedPattern { offset, found }),
            }
        }
        None
    }
}

impl FusedIterator for Runs<'_> {}

/// Lazy, one-shot sequence of live-cell coordinates decoded from RLE text.
///
/// Yields `(col, row)` pairs relative to nothing but the origin it was
/// created with; coordinates are not checked against any grid. The first
/// malformed character yields a single `Err` and ends the sequence.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    runs: Runs<'a>,
    /// Remainder of the run being expanded
    current: Option<LiveRun>,
}

/// Start decoding `text` with the cursor at `origin`.
pub fn decode(text: &str, origin: (isize, isize)) -> Decoder<'_> {
    Decoder {
        runs: decode_runs(text, origin),
        current: None,
    }
}

/// Decode the whole pattern eagerly, failing on the first malformed character.
pub fn decode_all(text: &str, origin: (isize, isize)) -> Result<Vec<(isize, isize)>> {
    decode(text, origin).collect()
}

impl Iterator for Decoder<'_> {
    type Item = Result<(isize, isize)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(run) = self.current.as_mut().filter(|run| run.len > 0) {
                let cell = (run.col, run.row);
                run.col += 1;
                run.len -= 1;
                return Some(Ok(cell));
            }
            match self.runs.next()? {
                Ok(run) => self.current = Some(run),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl FusedIterator for Decoder<'_> {}

/// A complete RLE file: optional header plus the pattern body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RleDocument {
    /// Declared pattern width (`x = ..`)
    pub width: Option<usize>,
    /// Declared pattern height (`y = ..`)
    pub height: Option<usize>,
    /// Declared rule string, e.g. `B3/S23`
    pub rule: Option<String>,
    /// Pattern body with line breaks and other whitespace removed
    pub body: String,
}

impl RleDocument {
    /// Decode the body at `origin`
    pub fn decode(&self, origin: (isize, isize)) -> Decoder<'_> {
        decode(&self.body, origin)
    }
}

/// Split an RLE file into header and body.
///
/// Lines starting with `#` are comments. The first other line is a header if
/// it starts with `x`. Body lines are joined with whitespace removed, up to
/// and including the line carrying `!`. The body itself is not validated
/// here; decoding it does that.
pub fn parse_document(text: &str) -> Result<RleDocument> {
    let mut document = RleDocument::default();
    let mut seen_content = false;

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !seen_content && line.starts_with('x') {
            seen_content = true;
            parse_header(line, &mut document)?;
            continue;
        }
        seen_content = true;
        document.body.extend(line.chars().filter(|c| !c.is_whitespace()));
        if line.contains('!') {
            break;
        }
    }
    Ok(document)
}

fn parse_header(line: &str, document: &mut RleDocument) -> Result<()> {
    for field in line.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| Error::InvalidHeader(format!("expected `key = value`, got {:?}", field.trim())))?;
        let (key, value) = (key.trim(), value.trim());
        match key {
            "x" => document.width = Some(parse_extent(key, value)?),
            "y" => document.height = Some(parse_extent(key, value)?),
            "rule" => document.rule = Some(value.to_owned()),
            // Other keys are tolerated and ignored.
            _ => (),
        }
    }
    Ok(())
}

fn parse_extent(key: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| Error::InvalidHeader(format!("{key} must be a non-negative integer, got {value:?}")))
}
