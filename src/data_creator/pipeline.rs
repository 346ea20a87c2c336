use serde::Serialize;

use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::entities::generated_table::GeneratedTable;
use crate::entities::order_record::OrderRecord;
use crate::openai_handler::ChatCompletion;

use super::state::{AppState, Notice};
use super::store::manage_db;
use super::synthesize::synthesize;

#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub table_name: Option<GeneratedTable>,
    pub records: Vec<OrderRecord>,
    pub notice: Notice,
    pub llm_call_id: Option<String>,
}

/// synthesize, then store. Any error stops the run before a table is created.
pub async fn run_generation(
    request: &str,
    llm: &dyn ChatCompletion,
    pool: &DbPool,
) -> Result<GenerationOutcome, DataCreatorError> {
    let state = AppState::from_request(request);
    let (state, llm_call) = synthesize(state, llm, pool).await?;
    let stored = manage_db(&state, pool)?;

    if let (Some(llm_call), Some(table)) = (&llm_call, &stored.table) {
        if let Err(e) = llm_call.attach_table(&table.name(), state.generated_data.len(), pool) {
            tracing::warn!("llm_call_update_failed id={} error={}", llm_call.id, e);
        }
    }

    Ok(GenerationOutcome {
        table_name: stored.table,
        records: state.generated_data,
        notice: stored.notice,
        llm_call_id: llm_call.map(|llm_call| llm_call.id),
    })
}
