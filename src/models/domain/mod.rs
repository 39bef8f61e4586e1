pub mod document;
pub mod question;
pub mod session;

pub use document::DocumentFormat;
pub use question::{AnswerOption, QuestionRecord};
pub use session::{QuizSession, SessionStatus};
