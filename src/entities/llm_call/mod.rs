pub mod model;
pub mod persist;
pub mod routes;

pub use model::{LlmCall, LlmCallStatus, NewLlmCall};
pub use routes::{get_llm_call_route, get_llm_calls_route};
