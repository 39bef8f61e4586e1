pub mod answers;
pub mod extraction_service;
pub mod generation_service;
pub mod quiz_service;
pub mod scoring;
pub mod segmenter;
pub mod session_store;
