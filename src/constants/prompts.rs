pub const QUESTION_SYSTEM_PROMPT: &str =
    "You are an AI that generates quiz questions from study material. You answer ONLY with valid JSON and never add explanations, backticks or markdown.";

const QUESTION_PROMPT_TEMPLATE: &str = r#"Based ONLY on the following text:

"""{segment}"""

Create ONE multiple-choice question with EXACTLY:
- 1 correct answer
- 1 wrong answer (plausible but incorrect)

IMPORTANT RULES:
- Answer ONLY with valid JSON.
- No explanations.
- No extra text.
- No backticks.
- No markdown.

JSON format:
{
  "question": "...",
  "correct_answer": "...",
  "wrong_answer": "..."
}"#;

/// Build the user prompt grounding one question in a single text segment.
pub fn build_question_prompt(segment: &str) -> String {
    QUESTION_PROMPT_TEMPLATE.replace("{segment}", segment)
}
