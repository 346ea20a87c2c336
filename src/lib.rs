pub mod data_creator;
pub mod db;
pub mod entities;
pub mod environment;
pub mod logging;
pub mod openai_handler;
pub mod pagination;
pub mod router;
pub mod schema;
pub mod web;
