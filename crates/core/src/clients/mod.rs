pub mod email;
pub mod llm;

pub use email::EmailClient;
pub use llm::LlmClient;
