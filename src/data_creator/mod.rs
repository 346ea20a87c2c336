pub mod pipeline;
pub mod prompt;
pub mod routes;
pub mod state;
pub mod store;
pub mod synthesize;

#[cfg(test)]
pub mod test_support;

pub use pipeline::{run_generation, GenerationOutcome};
pub use state::{AppState, Notice, NoticeLevel};
