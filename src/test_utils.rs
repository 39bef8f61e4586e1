#[cfg(test)]
pub mod fixtures {
    /// Study text spanning several lines, small enough to form a single
    /// segment under the default bound.
    pub fn sample_study_text() -> String {
        [
            "Photosynthesis converts light energy into chemical energy.",
            "It takes place in the chloroplasts of plant cells.",
            "The light-dependent reactions produce ATP and NADPH.",
            "The Calvin cycle fixes carbon dioxide into glucose.",
        ]
        .join("\n")
    }

    /// The JSON shape the generation model is instructed to return.
    pub fn generation_json(question: &str, correct: &str, wrong: &str) -> String {
        serde_json::json!({
            "question": question,
            "correct_answer": correct,
            "wrong_answer": wrong,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_study_text() {
        let text = sample_study_text();
        assert!(text.lines().count() >= 4);
        assert!(text.contains("Photosynthesis"));
    }

    #[test]
    fn test_fixtures_generation_json_parses() {
        let json = generation_json("Q?", "right", "wrong");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["question"], "Q?");
        assert_eq!(value["correct_answer"], "right");
        assert_eq!(value["wrong_answer"], "wrong");
    }
}
