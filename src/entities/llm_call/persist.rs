use diesel::prelude::*;

use crate::db::DbPool;
use crate::entities::error::DataCreatorError;
use crate::schema::llm_calls;

use super::model::{LlmCall, NewLlmCall};

impl LlmCall {
    pub fn get_paginated(offset: i64, limit: i64, pool: &DbPool) -> Result<Vec<Self>, DataCreatorError> {
        let mut conn = pool.get()?;
        let llm_calls = llm_calls::table
            .order(llm_calls::created_at.desc())
            .offset(offset)
            .limit(limit)
            .select(LlmCall::as_select())
            .load::<Self>(&mut conn)?;
        Ok(llm_calls)
    }

    pub fn get_by_id(id: &str, pool: &DbPool) -> Result<Self, DataCreatorError> {
        let mut conn = pool.get()?;
        let llm_call = llm_calls::table
            .filter(llm_calls::id.eq(id))
            .select(LlmCall::as_select())
            .first(&mut conn)?;
        Ok(llm_call)
    }

    pub fn attach_table(&self, table_name: &str, record_count: usize, pool: &DbPool) -> Result<LlmCall, DataCreatorError> {
        let mut conn = pool.get()?;
        let llm_call = diesel::update(llm_calls::table.filter(llm_calls::id.eq(&self.id)))
            .set((
                llm_calls::table_name.eq(Some(table_name)),
                llm_calls::record_count.eq(i32::try_from(record_count).unwrap_or(i32::MAX)),
            ))
            .returning(LlmCall::as_returning())
            .get_result(&mut conn)?;
        Ok(llm_call)
    }
}

impl NewLlmCall {
    pub fn create(self, pool: &DbPool) -> Result<LlmCall, DataCreatorError> {
        let mut conn = pool.get()?;
        let llm_call = diesel::insert_into(llm_calls::table)
            .values(&self)
            .returning(LlmCall::as_returning())
            .get_result(&mut conn)?;
        Ok(llm_call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;
    use crate::entities::llm_call::LlmCallStatus;

    fn new_call(output: &str) -> NewLlmCall {
        NewLlmCall::new(
            LlmCallStatus::Success,
            "gpt-test".to_string(),
            "system".to_string(),
            "user".to_string(),
            "{}".to_string(),
            "http://localhost/v1/chat/completions".to_string(),
            "{\"choices\":[]}".to_string(),
            output.to_string(),
        )
    }

    #[test]
    fn test_create_and_find() {
        let db = test_pool();
        let created = new_call("[]").create(&db.pool).unwrap();
        assert_eq!(created.status, "success");
        assert_eq!(created.table_name, None);

        let found = LlmCall::get_by_id(&created.id, &db.pool).unwrap();
        assert_eq!(found.output, "[]");
        assert_eq!(found.created_at, created.created_at);
    }

    #[test]
    fn test_attach_table() {
        let db = test_pool();
        let created = new_call("[{}]").create(&db.pool).unwrap();
        let updated = created.attach_table("table_1", 10, &db.pool).unwrap();
        assert_eq!(updated.table_name.as_deref(), Some("table_1"));
        assert_eq!(updated.record_count, 10);
    }

    #[test]
    fn test_paginated_is_newest_first() {
        let db = test_pool();
        let first = new_call("first").create(&db.pool).unwrap();
        let second = new_call("second").create(&db.pool).unwrap();
        let third = new_call("third").create(&db.pool).unwrap();

        let page = LlmCall::get_paginated(0, 2, &db.pool).unwrap();
        assert_eq!(page.iter().map(|c| c.id.clone()).collect::<Vec<_>>(), vec![third.id, second.id]);
        let page = LlmCall::get_paginated(2, 2, &db.pool).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, first.id);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let db = test_pool();
        let err = LlmCall::get_by_id("missing", &db.pool).unwrap_err();
        assert_eq!(err.status_code, 404);
    }
}
