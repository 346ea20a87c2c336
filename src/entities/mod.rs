pub mod error;
pub mod generated_table;
pub mod llm_call;
pub mod order_record;
