/// Map a factuality score in [0, 1] to its reliability label.
///
/// Thresholds are boundary-inclusive on the lower bound of each tier.
pub fn reliability_label(score: f64) -> &'static str {
    if score >= 0.9 {
        "Very Reliable"
    } else if score >= 0.75 {
        "Reliable"
    } else if score >= 0.6 {
        "Mostly Reliable"
    } else if score >= 0.4 {
        "Mixed Reliability"
    } else if score >= 0.25 {
        "Somewhat Unreliable"
    } else {
        "Unreliable"
    }
}
