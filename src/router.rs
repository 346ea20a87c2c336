use axum::{
    extract::Extension,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{get, post, Router},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::data_creator::routes as generation;
use crate::db::DbPool;
use crate::entities::{generated_table::routes as generated_table, llm_call};
use crate::openai_handler::SharedCompletion;
use crate::web::routes as pages;

pub fn create_router(pool: DbPool, llm: SharedCompletion) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST])
        .allow_headers(Any);

    let api_router = Router::new()
        .route("/generate", post(generation::post_generate_route))
        .route("/tables", get(generated_table::get_tables_route))
        .route("/tables/:name", get(generated_table::get_table_rows_route))
        .route("/llm_calls", get(llm_call::get_llm_calls_route))
        .route("/llm_calls/:id", get(llm_call::get_llm_call_route))
        .layer(cors);

    Router::new()
        .route("/", get(pages::get_index_route))
        .route("/generate", post(pages::post_generate_form_route))
        .route("/tables/:name", get(pages::get_table_page_route))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/public", ServeDir::new("public"))
        .fallback(fallback_handler)
        .layer(Extension(llm))
        .layer(Extension(pool))
}

async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "Ok")
}
