use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimestampError;
use crate::timestamp::{TimeOffset, parse_time};

// @module: Transcript segmentation into timed blocks

// @const: Timestamp line regex (mm:ss, hh:mm:ss or hh:mm:ss:ff)
static TIMESTAMP_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}(:[0-9]{2}){1,3}$").unwrap()
});

// @const: Prefix of a first timestamp that triggers the hour correction
const ONE_HOUR_PREFIX: &str = "01:";

/// One parsed timestamp with the paragraphs that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Offset parsed from the timestamp line
    pub start_time: TimeOffset,

    /// Paragraphs in input order, never empty strings
    pub paragraphs: Vec<String>,
}

impl Block {
    pub fn new(start_time: TimeOffset, paragraphs: Vec<String>) -> Self {
        Block { start_time, paragraphs }
    }

    /// A block without text contributes no cues
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Check whether a line, once trimmed, is a timestamp token
pub fn is_timestamp_line(line: &str) -> bool {
    TIMESTAMP_LINE_REGEX.is_match(line.trim())
}

/// Decide the hour correction for the whole file.
///
/// Only the first timestamp line is inspected: the correction is enabled when
/// it starts with `01:`.
pub fn detect_hour_correction<S: AsRef<str>>(lines: &[S]) -> bool {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .find(|line| TIMESTAMP_LINE_REGEX.is_match(line))
        .is_some_and(|first| first.starts_with(ONE_HOUR_PREFIX))
}

/// Group raw lines into paragraphs separated by blank lines.
///
/// Lines are trimmed; consecutive non-blank lines are joined with `\n`.
pub fn collect_paragraphs<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let (mut paragraphs, last) = lines.iter().map(|line| line.as_ref().trim()).fold(
        (Vec::new(), Vec::new()),
        |(mut paragraphs, mut current): (Vec<String>, Vec<&str>), line| {
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line);
            }
            (paragraphs, current)
        },
    );

    if !last.is_empty() {
        paragraphs.push(last.join("\n"));
    }

    paragraphs
}

/// Split transcript lines into timed blocks, in file order.
///
/// Lines before the first timestamp are discarded. When `auto_correct_hour`
/// is set, [`detect_hour_correction`] decides once whether every timestamp
/// loses one hour.
pub fn segment<S: AsRef<str>>(lines: &[S], auto_correct_hour: bool, fps: f64) -> Result<Vec<Block>, TimestampError> {
    let apply_hour_correction = auto_correct_hour && detect_hour_correction(lines);
    if apply_hour_correction {
        debug!("First timestamp starts at 01:, subtracting one hour from every timestamp");
    }

    let mut blocks = Vec::new();
    let mut current: Option<(TimeOffset, Vec<&str>)> = None;
    let mut discarded = 0usize;

    for line in lines {
        let line = line.as_ref();
        let trimmed = line.trim();

        if TIMESTAMP_LINE_REGEX.is_match(trimmed) {
            if let Some((start_time, raw_lines)) = current.take() {
                blocks.push(Block::new(start_time, collect_paragraphs(&raw_lines)));
            }
            let start_time = parse_time(trimmed, apply_hour_correction, fps)?;
            current = Some((start_time, Vec::new()));
        } else if let Some((_, raw_lines)) = current.as_mut() {
            raw_lines.push(line);
        } else if !trimmed.is_empty() {
            discarded += 1;
        }
    }

    if let Some((start_time, raw_lines)) = current {
        blocks.push(Block::new(start_time, collect_paragraphs(&raw_lines)));
    }

    if discarded > 0 {
        warn!("Ignored {} line(s) of text before the first timestamp", discarded);
    }
    if blocks.is_empty() {
        warn!("No timestamp lines found in input");
    }
    debug!("Segmented {} line(s) into {} block(s)", lines.len(), blocks.len());

    Ok(blocks)
}
