pub mod gpt_handler;
pub mod gpt_request;

pub use gpt_handler::{ChatCompletion, CompletionOutput, GptClient};
pub use gpt_request::GptRequestConfig;

pub type SharedCompletion = std::sync::Arc<dyn ChatCompletion>;
