use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Double, Text};
use diesel::sqlite::SqliteConnection;

use crate::db::DbPool;
use crate::entities::error::{DataCreatorError, ErrorType};
use crate::entities::order_record::{OrderRecord, ORDER_FIELDS};

use super::model::{GeneratedTable, TableNameRow};

const COLUMN_DEFINITIONS: &str = "\"customer_id\" TEXT NOT NULL, \
     \"order_id\" TEXT NOT NULL, \
     \"product_name\" TEXT NOT NULL, \
     \"category\" TEXT NOT NULL, \
     \"price\" REAL NOT NULL, \
     \"quantity\" INTEGER NOT NULL, \
     \"date\" TEXT NOT NULL, \
     \"state\" TEXT NOT NULL, \
     \"city\" TEXT NOT NULL, \
     \"payment_method\" TEXT NOT NULL";

fn quoted_columns() -> String {
    ORDER_FIELDS
        .iter()
        .map(|field| format!("\"{}\"", field))
        .collect::<Vec<String>>()
        .join(", ")
}

impl GeneratedTable {
    pub fn list(pool: &DbPool) -> Result<Vec<GeneratedTable>, DataCreatorError> {
        let mut conn = pool.get()?;
        Ok(Self::list_with_connection(&mut conn)?)
    }

    pub fn list_names(pool: &DbPool) -> Result<Vec<String>, DataCreatorError> {
        Ok(Self::list(pool)?.into_iter().map(|table| table.name()).collect())
    }

    fn list_with_connection(conn: &mut SqliteConnection) -> QueryResult<Vec<GeneratedTable>> {
        let rows = sql_query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE 'table\\_%' ESCAPE '\\'",
        )
        .load::<TableNameRow>(conn)?;
        let mut tables = rows
            .iter()
            .filter_map(|row| GeneratedTable::from_name(&row.name))
            .collect::<Vec<GeneratedTable>>();
        tables.sort();
        Ok(tables)
    }

    fn next_with_connection(conn: &mut SqliteConnection) -> Result<GeneratedTable, DataCreatorError> {
        let tables = Self::list_with_connection(conn)?;
        match tables.last() {
            None => Ok(GeneratedTable::first()),
            Some(last) => last.successor().ok_or_else(|| {
                DataCreatorError::new(
                    500,
                    ErrorType::DatabaseError,
                    format!("No table number left after {}", last.name()),
                )
            }),
        }
    }

    pub fn next(pool: &DbPool) -> Result<GeneratedTable, DataCreatorError> {
        let mut conn = pool.get()?;
        Self::next_with_connection(&mut conn)
    }

    /// Creates the next `table_{n}` and fills it with `records` in one write transaction.
    pub fn store_records(records: &[OrderRecord], pool: &DbPool) -> Result<GeneratedTable, DataCreatorError> {
        let mut conn = pool.get()?;
        let table = conn.immediate_transaction::<_, DataCreatorError, _>(|conn| {
            let table = Self::next_with_connection(conn)?;
            sql_query(format!("CREATE TABLE \"{}\" ({})", table.name(), COLUMN_DEFINITIONS)).execute(conn)?;

            let insert = format!(
                "INSERT INTO \"{}\" ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                table.name(),
                quoted_columns()
            );
            for record in records {
                sql_query(insert.as_str())
                    .bind::<Text, _>(&record.customer_id)
                    .bind::<Text, _>(&record.order_id)
                    .bind::<Text, _>(&record.product_name)
                    .bind::<Text, _>(&record.category)
                    .bind::<Double, _>(record.price)
                    .bind::<BigInt, _>(record.quantity)
                    .bind::<Text, _>(&record.date)
                    .bind::<Text, _>(&record.state)
                    .bind::<Text, _>(&record.city)
                    .bind::<Text, _>(&record.payment_method)
                    .execute(conn)?;
            }
            Ok(table)
        })?;
        tracing::info!("stored {} records in {}", records.len(), table.name());
        Ok(table)
    }

    pub fn load_rows(&self, pool: &DbPool) -> Result<Vec<OrderRecord>, DataCreatorError> {
        let mut conn = pool.get()?;
        let rows = sql_query(format!("SELECT {} FROM \"{}\" ORDER BY rowid", quoted_columns(), self.name()))
            .load::<OrderRecord>(&mut conn)?;
        Ok(rows)
    }

    /// Rows of the table called `name`, 404 when it is not a generated table.
    pub fn load_rows_by_name(name: &str, pool: &DbPool) -> Result<Vec<OrderRecord>, DataCreatorError> {
        let table = GeneratedTable::from_name(name)
            .ok_or_else(|| DataCreatorError::not_found(format!("No generated table named {}", name)))?;
        if !Self::list(pool)?.contains(&table) {
            return Err(DataCreatorError::not_found(format!("No generated table named {}", name)));
        }
        table.load_rows(pool)
    }
}
