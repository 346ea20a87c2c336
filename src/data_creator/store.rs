use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::entities::generated_table::GeneratedTable;

use super::state::{AppState, Notice};

pub const NO_DATA_MESSAGE: &str = "No data to store in DB";

#[derive(Debug, Clone)]
pub struct StoreOutcome {
    pub table: Option<GeneratedTable>,
    pub notice: Notice,
}

/// Writes `state.generated_data` to a new `table_{n}`; an empty batch creates nothing.
pub fn manage_db(state: &AppState, pool: &DbPool) -> Result<StoreOutcome, DataCreatorError> {
    if state.generated_data.is_empty() {
        tracing::warn!("{}", NO_DATA_MESSAGE);
        return Ok(StoreOutcome { table: None, notice: Notice::warning(NO_DATA_MESSAGE) });
    }

    let table = GeneratedTable::store_records(&state.generated_data, pool)?;
    Ok(StoreOutcome {
        table: Some(table),
        notice: Notice::success(format!(
            "Stored {} records in table: {}",
            state.generated_data.len(),
            table
        )),
    })
}
