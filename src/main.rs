use std::sync::Arc;

use test_data_creator::db;
use test_data_creator::entities::error::DataCreatorError;
use test_data_creator::environment;
use test_data_creator::logging::init_tracing;
use test_data_creator::openai_handler::{GptClient, SharedCompletion};
use test_data_creator::router::create_router;

#[tokio::main]
async fn main() -> Result<(), DataCreatorError> {
    init_tracing();

    let database_url = environment::get_database_url();
    let pool = db::init_pool(&database_url)?;
    tracing::info!("database ready at {}", database_url);

    if environment::get_openai_api_key().is_err() {
        tracing::warn!("OPENAI_API_KEY is not set, generation requests will fail");
    }
    let llm: SharedCompletion = Arc::new(GptClient::from_environment());

    let app = create_router(pool, llm);

    let bind_address = environment::get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| DataCreatorError::from(Box::new(e) as Box<dyn std::error::Error + Send + Sync>))?;
    tracing::info!("listening on {}", bind_address);
    axum::serve(listener, app)
        .await
        .map_err(|e| DataCreatorError::from(Box::new(e) as Box<dyn std::error::Error + Send + Sync>))?;
    Ok(())
}
