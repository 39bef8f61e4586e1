use serde::Deserialize;

/// Body of an answer submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

/// Query parameters accompanying a document upload. The filename carries
/// the declared format; the body carries the raw document bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadParams {
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_answer_request_deserializes() {
        let request: SubmitAnswerRequest =
            serde_json::from_str(r#"{"answer":"The mitochondrion"}"#).unwrap();
        assert_eq!(request.answer, "The mitochondrion");
    }

    #[test]
    fn submit_answer_request_rejects_missing_field() {
        let parsed = serde_json::from_str::<SubmitAnswerRequest>(r#"{"text":"x"}"#);
        assert!(parsed.is_err());
    }
}
