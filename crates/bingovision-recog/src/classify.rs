//! Acceptance rule for engine results
//!
//! The engine is constrained to digits but still produces noise: partial
//! grid lines read as "1", specks as low-confidence garbage, multi-digit
//! misreads. This module decides whether a raw result becomes a cell
//! value. The rule is applied here, not in the engine.

use crate::engine::EngineOutput;

/// Smallest valid bingo number.
pub const MIN_NUMBER: u32 = 1;
/// Largest valid bingo number; balls never exceed 75.
pub const MAX_NUMBER: u32 = 75;
/// A bingo number is at most two characters.
pub const MAX_TEXT_LEN: usize = 2;
/// Results at or below this confidence are rejected outright.
pub const MIN_CONFIDENCE: f32 = 15.0;
/// Accepted results below this confidence are flagged for user review.
pub const LOW_CONFIDENCE: f32 = 50.0;

/// Outcome of applying the acceptance rule to one engine result.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// A valid bingo number.
    Accepted {
        value: u32,
        /// True when confidence is below [`LOW_CONFIDENCE`]; the value is
        /// kept but surfaced for manual review.
        low_confidence: bool,
    },
    /// Not a usable number; the trimmed raw text is kept as a hint for
    /// manual correction.
    Rejected { hint: String },
}

/// Apply the acceptance rule.
///
/// Accepted iff the trimmed text parses to an integer in
/// [[`MIN_NUMBER`], [`MAX_NUMBER`]], is at most [`MAX_TEXT_LEN`]
/// characters, and confidence exceeds [`MIN_CONFIDENCE`].
pub fn evaluate(output: &EngineOutput) -> Decision {
    let raw = output.text.trim();
    let parsed = raw.parse::<u32>().ok();
    match parsed {
        Some(value)
            if (MIN_NUMBER..=MAX_NUMBER).contains(&value)
                && raw.len() <= MAX_TEXT_LEN
                && output.confidence > MIN_CONFIDENCE =>
        {
            Decision::Accepted {
                value,
                low_confidence: output.confidence < LOW_CONFIDENCE,
            }
        }
        _ => Decision::Rejected { hint: raw.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_digit_is_accepted() {
        let d = evaluate(&EngineOutput::new("7", 80.0));
        assert_eq!(d, Decision::Accepted { value: 7, low_confidence: false });
    }

    #[test]
    fn out_of_range_is_rejected() {
        let d = evaluate(&EngineOutput::new("100", 90.0));
        assert_eq!(d, Decision::Rejected { hint: "100".into() });
        let d = evaluate(&EngineOutput::new("0", 90.0));
        assert_eq!(d, Decision::Rejected { hint: "0".into() });
    }

    #[test]
    fn confidence_floor_rejects_noise() {
        let d = evaluate(&EngineOutput::new("5", 10.0));
        assert_eq!(d, Decision::Rejected { hint: "5".into() });
    }

    #[test]
    fn low_confidence_is_accepted_but_flagged() {
        let d = evaluate(&EngineOutput::new("5", 30.0));
        assert_eq!(d, Decision::Accepted { value: 5, low_confidence: true });
    }

    #[test]
    fn non_numeric_keeps_hint() {
        let d = evaluate(&EngineOutput::new(" 7b \n", 80.0));
        assert_eq!(d, Decision::Rejected { hint: "7b".into() });
    }
}
