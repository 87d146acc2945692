use log::{debug, warn};

use crate::segmenter::Block;
use crate::timestamp::{TimeOffset, format_srt_time};

// @module: SRT cue derivation and serialization

/// Longest time a cue stays on screen
pub const MAX_CUE_DURATION_MS: i64 = 3_000;

/// Single SRT cue
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: 1-based sequence number
    pub index: usize,

    // @field: Display start
    pub start: TimeOffset,

    // @field: Display end
    pub end: TimeOffset,

    // @field: Paragraph text, internal newlines kept
    pub text: String,
}

impl Cue {
    pub fn new(index: usize, start: TimeOffset, end: TimeOffset, text: String) -> Self {
        Cue { index, start, end, text }
    }

    /// Render the cue as index, time range and text lines followed by a newline
    pub fn render(&self, hour_offset: i64) -> String {
        format!(
            "{}\n{} --> {}\n{}\n",
            self.index,
            format_srt_time(self.start, hour_offset),
            format_srt_time(self.end, hour_offset),
            self.text
        )
    }
}

/// Duration of a cue given the interval to the next timestamp.
///
/// Intervals over the cap are clamped to it; anything else, including a
/// negative interval, passes through unchanged.
pub fn cue_duration(interval: TimeOffset) -> TimeOffset {
    if interval.as_millis() > MAX_CUE_DURATION_MS {
        TimeOffset::from_millis(MAX_CUE_DURATION_MS)
    } else {
        interval
    }
}

/// Derive the cues for a sequence of blocks.
///
/// Each block is timed against the next one, so the last block never
/// produces a cue. Every paragraph of a block becomes its own cue sharing
/// the block's time window.
pub fn build_cues(blocks: &[Block]) -> Vec<Cue> {
    let mut cues = Vec::new();

    for pair in blocks.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.is_empty() {
            continue;
        }

        let interval = next.start_time - current.start_time;
        if interval.as_millis() < 0 {
            warn!(
                "Timestamp {} is followed by earlier timestamp {}, cue ends before it starts",
                current.start_time, next.start_time
            );
        }
        let end = current.start_time + cue_duration(interval);

        for paragraph in &current.paragraphs {
            cues.push(Cue::new(cues.len() + 1, current.start_time, end, paragraph.clone()));
        }
    }

    if blocks.last().is_some_and(|last| !last.is_empty()) {
        debug!("Last block has no following timestamp and produces no cue");
    }

    cues
}

/// Serialize blocks as SRT text, adding `hour_offset` to every hour field.
///
/// Cues are separated by a blank line; the output ends right after the last
/// cue's text line and its newline.
pub fn generate(blocks: &[Block], hour_offset: i64) -> String {
    let cues = build_cues(blocks);
    debug!("Generated {} cue(s) from {} block(s)", cues.len(), blocks.len());

    cues.iter()
        .map(|cue| cue.render(hour_offset))
        .collect::<Vec<_>>()
        .join("\n")
}
