use axum::{
    debug_handler,
    extract::{Extension, Json},
};
use serde::Deserialize;

use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::openai_handler::SharedCompletion;

use super::pipeline::{run_generation, GenerationOutcome};

#[derive(Deserialize)]
pub struct GenerateDto {
    #[serde(default)]
    pub request: String,
}

#[debug_handler]
pub async fn post_generate_route(
    Extension(pool): Extension<DbPool>,
    Extension(llm): Extension<SharedCompletion>,
    Json(payload): Json<GenerateDto>,
) -> Result<Json<GenerationOutcome>, DataCreatorError> {
    let outcome = run_generation(&payload.request, llm.as_ref(), &pool).await?;
    Ok(Json(outcome))
}
