use test_data_creator::data_creator::run_generation;
use test_data_creator::db;
use test_data_creator::entities::error::{DataCreatorError, ErrorType};
use test_data_creator::environment;
use test_data_creator::logging::init_tracing;
use test_data_creator::openai_handler::GptClient;

#[tokio::main]
async fn main() -> Result<(), DataCreatorError> {
    init_tracing();

    let request = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
    if request.trim().is_empty() {
        return Err(DataCreatorError::new(
            400,
            ErrorType::ApiError,
            "usage: generate_once <request, e.g. Generate 10 orders for March 2024>".to_string(),
        ));
    }

    let pool = db::init_pool(&environment::get_database_url())?;
    let llm = GptClient::from_environment();

    let outcome = run_generation(&request, &llm, &pool).await?;
    eprintln!("{}", outcome.notice.message);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
