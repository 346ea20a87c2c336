use axum::{
    debug_handler,
    extract::{Extension, Json, Path, Query},
};

use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::pagination::PaginationParams;

use super::model::LlmCall;

#[debug_handler]
pub async fn get_llm_calls_route(
    Extension(pool): Extension<DbPool>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<LlmCall>>, DataCreatorError> {
    let llm_calls = LlmCall::get_paginated(pagination.offset(), pagination.limit(), &pool)?;
    Ok(Json(llm_calls))
}

#[debug_handler]
pub async fn get_llm_call_route(
    Extension(pool): Extension<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<LlmCall>, DataCreatorError> {
    let llm_call = LlmCall::get_by_id(&id, &pool)?;
    Ok(Json(llm_call))
}
