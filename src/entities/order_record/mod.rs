pub mod model;
pub mod parse;

pub use model::{OrderRecord, ORDER_FIELDS};
pub use parse::{parse_records, INVALID_JSON_MESSAGE};
