use axum::{
    debug_handler,
    extract::{Extension, Json, Path},
};

use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::entities::order_record::OrderRecord;

use super::model::GeneratedTable;

#[debug_handler]
pub async fn get_tables_route(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<Vec<String>>, DataCreatorError> {
    Ok(Json(GeneratedTable::list_names(&pool)?))
}

#[debug_handler]
pub async fn get_table_rows_route(
    Extension(pool): Extension<DbPool>,
    Path(name): Path<String>,
) -> Result<Json<Vec<OrderRecord>>, DataCreatorError> {
    Ok(Json(GeneratedTable::load_rows_by_name(&name, &pool)?))
}
