//! Acceptance rule regression test
//!
//! Boundary cases of the accept/reject/low-confidence decision.
//!
//! Run with:
//! ```
//! cargo test -p bingovision-recog --test classify_reg
//! ```

use bingovision_recog::{Decision, EngineOutput, evaluate};

fn accepted(value: u32, low_confidence: bool) -> Decision {
    Decision::Accepted { value, low_confidence }
}

fn rejected(hint: &str) -> Decision {
    Decision::Rejected { hint: hint.to_string() }
}

#[test]
fn range_boundaries() {
    assert_eq!(evaluate(&EngineOutput::new("1", 80.0)), accepted(1, false));
    assert_eq!(evaluate(&EngineOutput::new("75", 80.0)), accepted(75, false));
    assert_eq!(evaluate(&EngineOutput::new("0", 80.0)), rejected("0"));
    assert_eq!(evaluate(&EngineOutput::new("76", 80.0)), rejected("76"));
}

#[test]
fn confidence_boundaries() {
    // Floor is strict: exactly 15 is still noise.
    assert_eq!(evaluate(&EngineOutput::new("7", 15.0)), rejected("7"));
    assert_eq!(evaluate(&EngineOutput::new("7", 15.1)), accepted(7, true));
    // Low-confidence flag clears at 50.
    assert_eq!(evaluate(&EngineOutput::new("7", 49.9)), accepted(7, true));
    assert_eq!(evaluate(&EngineOutput::new("7", 50.0)), accepted(7, false));
}

#[test]
fn text_shape() {
    assert_eq!(evaluate(&EngineOutput::new("  42 ", 90.0)), accepted(42, false));
    assert_eq!(evaluate(&EngineOutput::new("", 90.0)), rejected(""));
    assert_eq!(evaluate(&EngineOutput::new("4 2", 90.0)), rejected("4 2"));
    // Leading zeros push past the two-character limit.
    assert_eq!(evaluate(&EngineOutput::new("007", 90.0)), rejected("007"));
}
