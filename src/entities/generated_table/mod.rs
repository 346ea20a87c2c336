pub mod model;
pub mod persist;
pub mod routes;

pub use model::GeneratedTable;
