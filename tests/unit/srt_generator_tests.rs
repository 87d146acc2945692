/*!
 * Tests for SRT cue derivation and serialization
 */

use timesrt::segmenter::Block;
use timesrt::srt_generator::{Cue, MAX_CUE_DURATION_MS, build_cues, generate};
use timesrt::timestamp::TimeOffset;

fn block(ms: i64, paragraphs: &[&str]) -> Block {
    Block::new(TimeOffset::from_millis(ms), paragraphs.iter().map(|p| p.to_string()).collect())
}

/// Long intervals are capped at three seconds
#[test]
fn test_build_cues_withTenSecondGap_shouldCapAtThreeSeconds() {
    let cues = build_cues(&[block(0, &["a"]), block(10_000, &["b"])]);
    assert_eq!(cues, vec![Cue::new(1, TimeOffset::ZERO, TimeOffset::from_millis(MAX_CUE_DURATION_MS), "a".to_string())]);
}

/// Short intervals end exactly at the next timestamp
#[test]
fn test_build_cues_withTwoSecondGap_shouldEndAtNextTimestamp() {
    let cues = build_cues(&[block(0, &["a"]), block(2_000, &["b"])]);
    assert_eq!(cues[0].end.as_millis(), 2_000);
}

/// Sub-second intervals from frame timestamps pass through exactly
#[test]
fn test_build_cues_withMillisecondGap_shouldKeepMillis() {
    let cues = build_cues(&[block(1_041, &["a"]), block(1_500, &[])]);
    assert_eq!(cues[0].end.as_millis(), 1_500);
}

/// The last block never produces a cue
#[test]
fn test_generate_withThreeBlocks_shouldOmitLastBlockText() {
    let srt = generate(&[block(0, &["one"]), block(1_000, &["two"]), block(2_000, &["three"])], 0);
    assert!(srt.contains("one"));
    assert!(srt.contains("two"));
    assert!(!srt.contains("three"));
}

/// Empty blocks do not consume an index
#[test]
fn test_generate_withEmptyBlock_shouldKeepIndicesContiguous() {
    let srt = generate(&[block(0, &["one"]), block(1_000, &[]), block(2_000, &["two"]), block(2_500, &[])], 0);
    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:01,000\none\n\n2\n00:00:02,000 --> 00:00:02,500\ntwo\n"
    );
}

/// Multi-line paragraphs keep their internal newlines
#[test]
fn test_generate_withMultiLineParagraph_shouldPreserveNewlines() {
    let srt = generate(&[block(0, &["line one\nline two", "next"]), block(1_000, &[])], 0);
    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:01,000\nline one\nline two\n\n2\n00:00:00,000 --> 00:00:01,000\nnext\n"
    );
}

/// Negative hour offsets shift output hours down
#[test]
fn test_generate_withNegativeHourOffset_shouldShiftDown() {
    let srt = generate(&[block(3_600_000, &["late"]), block(3_601_000, &[])], -1);
    assert_eq!(srt, "1\n00:00:00,000 --> 00:00:01,000\nlate\n");
}

/// Rendering a single cue
#[test]
fn test_cue_render_withHourOffset_shouldFormatBothTimes() {
    let cue = Cue::new(7, TimeOffset::from_millis(61_234), TimeOffset::from_millis(64_234), "Hi".to_string());
    assert_eq!(cue.render(0), "7\n00:01:01,234 --> 00:01:04,234\nHi\n");
    assert_eq!(cue.render(10), "7\n10:01:01,234 --> 10:01:04,234\nHi\n");
}
