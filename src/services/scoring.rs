pub const ANSWER_CORRECT: &str = "Yes!";
pub const ANSWER_WRONG: &str = "No :(";

/// Final qualitative assessment for a completed quiz. Thresholds are
/// checked in order on the correct/asked ratio; boundaries are inclusive.
pub fn feedback(correct_count: u32, questions_asked: u32) -> &'static str {
    let ratio = correct_count as f64 / questions_asked as f64;

    if ratio == 1.0 {
        "Excellent! You are fully prepared with this topic."
    } else if ratio >= 0.8 {
        "Good! You answered almost all questions!"
    } else if ratio >= 0.55 {
        "Not bad! Keep going."
    } else {
        "I would recommend you to spend more time for this topic and try again."
    }
}
