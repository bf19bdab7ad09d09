pub mod openai;

pub use openai::OpenAiAuditor;
