use axum::{
    debug_handler,
    extract::{Extension, Form, Path},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use crate::data_creator::{run_generation, Notice};
use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::entities::generated_table::GeneratedTable;
use crate::openai_handler::SharedCompletion;

use super::pages::{IndexPage, TablePage};

pub const EMPTY_REQUEST_MESSAGE: &str = "Please enter a request before generating.";

#[derive(Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub request: String,
}

#[debug_handler]
pub async fn get_index_route(
    Extension(pool): Extension<DbPool>,
) -> Result<Html<String>, DataCreatorError> {
    let tables = GeneratedTable::list_names(&pool)?;
    Ok(Html(IndexPage::new(tables).render()?))
}

/// Form submit: always answers with the page, carrying the workflow error as a notice.
#[debug_handler]
pub async fn post_generate_form_route(
    Extension(pool): Extension<DbPool>,
    Extension(llm): Extension<SharedCompletion>,
    Form(form): Form<GenerateForm>,
) -> Result<(StatusCode, Html<String>), DataCreatorError> {
    let request = form.request.trim();
    if request.is_empty() {
        let page = IndexPage::new(GeneratedTable::list_names(&pool)?)
            .with_notice(Notice::warning(EMPTY_REQUEST_MESSAGE));
        return Ok((StatusCode::OK, Html(page.render()?)));
    }

    tracing::info!("generate request received: {:?}", request);
    let (status, page) = match run_generation(request, llm.as_ref(), &pool).await {
        Ok(outcome) => {
            let page = IndexPage::new(Vec::new())
                .with_notice(outcome.notice)
                .with_records(outcome.table_name.map(|table| table.name()), &outcome.records);
            (StatusCode::OK, page)
        }
        Err(err) => {
            tracing::warn!("generation failed: {}", err);
            let page = IndexPage::new(Vec::new()).with_notice(Notice::error(err.message.clone()));
            (err.status(), page)
        }
    };

    let mut page = page.with_request(request);
    page.tables = GeneratedTable::list_names(&pool)?;
    Ok((status, Html(page.render()?)))
}

#[debug_handler]
pub async fn get_table_page_route(
    Extension(pool): Extension<DbPool>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Html<String>), DataCreatorError> {
    match GeneratedTable::load_rows_by_name(&name, &pool) {
        Ok(records) => Ok((StatusCode::OK, Html(TablePage::new(&name, &records).render()?))),
        Err(err) => {
            let page = TablePage::new(&name, &[]).with_notice(Notice::error(err.message.clone()));
            Ok((err.status(), Html(page.render()?)))
        }
    }
}
