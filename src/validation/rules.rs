//! Cross-cue rules
//!
//! Checks run once per cue, at the blank line that closes it.

use crate::core::ErrorKind;
use crate::parser::Cue;

/// Validate a closing cue against the previously closed one.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the first cue must be numbered 1 ([`ErrorKind::StartNum`])
/// 2. the cue must have text ([`ErrorKind::NoContent`])
/// 3. it must not start before the previous cue ends ([`ErrorKind::TimeThanLast`])
/// 4. its index must follow the previous one ([`ErrorKind::InvalidNum`])
pub fn check_close(previous: Option<&Cue>, current: &Cue) -> Option<ErrorKind> {
    if previous.is_none() && current.index != Some(1) {
        return Some(ErrorKind::StartNum);
    }

    if !current.has_content() {
        return Some(ErrorKind::NoContent);
    }

    let previous = previous?;

    if starts_before_previous_end(previous, current) {
        return Some(ErrorKind::TimeThanLast);
    }

    if !follows(previous, current) {
        return Some(ErrorKind::InvalidNum);
    }

    None
}

/// An unparsed previous end sorts after every real timestamp, so the cue
/// following a bad timing line is always reported. An unparsed start is
/// never before anything.
fn starts_before_previous_end(previous: &Cue, current: &Cue) -> bool {
    match (current.start(), previous.end()) {
        (Some(start), Some(previous_end)) => start.is_before(&previous_end),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// An unparsed previous index counts as zero, so the successor must be 1.
fn follows(previous: &Cue, current: &Cue) -> bool {
    let expected = previous.index.unwrap_or(0).checked_add(1);
    current.index.is_some() && current.index == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_timing;

    fn cue(index: u32, timing: &str, text: &str) -> Cue {
        Cue {
            index: Some(index),
            timing: Some(parse_timing(timing).expect("valid timing")),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_first_cue_must_be_one() {
        let first = cue(2, "00:00:01,000 --> 00:00:02,000", "Hi");
        assert_eq!(check_close(None, &first), Some(ErrorKind::StartNum));

        let first = cue(1, "00:00:01,000 --> 00:00:02,000", "Hi");
        assert_eq!(check_close(None, &first), None);
    }

    #[test]
    fn test_start_num_wins_over_no_content() {
        let first = cue(3, "00:00:01,000 --> 00:00:02,000", "");
        assert_eq!(check_close(None, &first), Some(ErrorKind::StartNum));
    }

    #[test]
    fn test_no_content() {
        let first = cue(1, "00:00:01,000 --> 00:00:02,000", "");
        assert_eq!(check_close(None, &first), Some(ErrorKind::NoContent));
    }

    #[test]
    fn test_overlap_wins_over_numbering() {
        let previous = cue(1, "00:00:05,000 --> 00:00:10,000", "A");
        let current = cue(5, "00:00:08,000 --> 00:00:12,000", "B");
        assert_eq!(
            check_close(Some(&previous), &current),
            Some(ErrorKind::TimeThanLast)
        );
    }

    #[test]
    fn test_touching_cues_are_allowed() {
        let previous = cue(1, "00:00:05,000 --> 00:00:10,000", "A");
        let current = cue(2, "00:00:10,000 --> 00:00:12,000", "B");
        assert_eq!(check_close(Some(&previous), &current), None);
    }

    #[test]
    fn test_overlap_within_same_second_is_allowed() {
        let previous = cue(1, "00:00:05,000 --> 00:00:10,800", "A");
        let current = cue(2, "00:00:10,200 --> 00:00:12,000", "B");
        assert_eq!(check_close(Some(&previous), &current), None);
    }

    #[test]
    fn test_index_gap() {
        let previous = cue(2, "00:00:01,000 --> 00:00:02,000", "A");
        let current = cue(4, "00:00:03,000 --> 00:00:04,000", "B");
        assert_eq!(
            check_close(Some(&previous), &current),
            Some(ErrorKind::InvalidNum)
        );
    }

    #[test]
    fn test_repeated_index() {
        let previous = cue(2, "00:00:01,000 --> 00:00:02,000", "A");
        let current = cue(2, "00:00:03,000 --> 00:00:04,000", "B");
        assert_eq!(
            check_close(Some(&previous), &current),
            Some(ErrorKind::InvalidNum)
        );
    }

    #[test]
    fn test_missing_timing_is_not_compared() {
        let previous = cue(1, "00:00:05,000 --> 00:00:10,000", "A");
        let current = Cue {
            index: Some(2),
            timing: None,
            text: "B".to_string(),
        };
        assert_eq!(check_close(Some(&previous), &current), None);
    }

    #[test]
    fn test_missing_previous_timing_counts_as_overlap() {
        let previous = Cue {
            index: Some(1),
            timing: None,
            text: "A".to_string(),
        };
        let current = cue(2, "00:00:05,000 --> 00:00:06,000", "B");
        assert_eq!(
            check_close(Some(&previous), &current),
            Some(ErrorKind::TimeThanLast)
        );
    }

    #[test]
    fn test_missing_index_breaks_sequence() {
        let previous = cue(1, "00:00:01,000 --> 00:00:02,000", "A");
        let current = Cue {
            index: None,
            timing: Some(parse_timing("00:00:03,000 --> 00:00:04,000").expect("valid timing")),
            text: "B".to_string(),
        };
        assert_eq!(
            check_close(Some(&previous), &current),
            Some(ErrorKind::InvalidNum)
        );
    }
}
