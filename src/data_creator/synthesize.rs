use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::entities::llm_call::{LlmCall, LlmCallStatus, NewLlmCall};
use crate::entities::order_record::parse_records;
use crate::openai_handler::ChatCompletion;

use super::prompt::{user_prompt, SYSTEM_PROMPT};
use super::state::AppState;

/// Asks the model for a batch of orders for the last message and parses them into `state`.
///
/// Every attempt is recorded in `llm_calls`, failures included. Returns the
/// recorded call when recording worked.
pub async fn synthesize(
    state: AppState,
    llm: &dyn ChatCompletion,
    pool: &DbPool,
) -> Result<(AppState, Option<LlmCall>), DataCreatorError> {
    let user_prompt = user_prompt(state.last_message());
    tracing::info!("synthesize request={:?}", user_prompt);

    let completion = match llm.complete(SYSTEM_PROMPT, &user_prompt).await {
        Ok(completion) => completion,
        Err(err) => {
            record_call(
                NewLlmCall::new(
                    LlmCallStatus::ApiError,
                    llm.model(),
                    SYSTEM_PROMPT.to_string(),
                    user_prompt,
                    String::new(),
                    String::new(),
                    String::new(),
                    err.message.clone(),
                ),
                pool,
            );
            return Err(err);
        }
    };

    let text = match completion.text() {
        Ok(text) => text,
        Err(err) => {
            record_call(
                NewLlmCall::from_completion(LlmCallStatus::ApiError, &completion, SYSTEM_PROMPT, &user_prompt, err.message.clone()),
                pool,
            );
            return Err(err);
        }
    };

    match parse_records(text) {
        Ok(records) => {
            tracing::info!("synthesize parsed {} records", records.len());
            let llm_call = record_call(
                NewLlmCall::from_completion(LlmCallStatus::Success, &completion, SYSTEM_PROMPT, &user_prompt, text.to_string()),
                pool,
            );
            Ok((AppState { messages: state.messages, generated_data: records }, llm_call))
        }
        Err(err) => {
            tracing::warn!("synthesize rejected completion: {}", err);
            record_call(
                NewLlmCall::from_completion(LlmCallStatus::InvalidJson, &completion, SYSTEM_PROMPT, &user_prompt, text.to_string()),
                pool,
            );
            Err(err)
        }
    }
}

fn record_call(new_call: NewLlmCall, pool: &DbPool) -> Option<LlmCall> {
    match new_call.create(pool) {
        Ok(llm_call) => Some(llm_call),
        Err(e) => {
            tracing::warn!("llm_persist_failed error={}", e);
            None
        }
    }
}
