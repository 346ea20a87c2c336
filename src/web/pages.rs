use minijinja::Environment;
use serde::Serialize;

use crate::data_creator::Notice;
use crate::entities::error::DataCreatorError;
use crate::entities::order_record::{OrderRecord, ORDER_FIELDS};

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("layout.html", include_str!("templates/layout.html"))?;
    env.add_template("records.html", include_str!("templates/records.html"))?;
    env.add_template("index.html", include_str!("templates/index.html"))?;
    env.add_template("table.html", include_str!("templates/table.html"))?;
    Ok(env)
}

fn render<T: Serialize>(name: &str, context: T) -> Result<String, DataCreatorError> {
    let env = environment()?;
    let template = env.get_template(name)?;
    Ok(template.render(context)?)
}

fn rows(records: &[OrderRecord]) -> Vec<Vec<String>> {
    records.iter().map(OrderRecord::cells).collect()
}

#[derive(Serialize, Default)]
pub struct IndexPage {
    pub request: String,
    pub notice: Option<Notice>,
    pub table_name: Option<String>,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub tables: Vec<String>,
}

impl IndexPage {
    pub fn new(tables: Vec<String>) -> IndexPage {
        IndexPage { tables, columns: ORDER_FIELDS.to_vec(), ..Default::default() }
    }

    pub fn with_request(mut self, request: &str) -> IndexPage {
        self.request = request.to_string();
        self
    }

    pub fn with_notice(mut self, notice: Notice) -> IndexPage {
        self.notice = Some(notice);
        self
    }

    pub fn with_records(mut self, table_name: Option<String>, records: &[OrderRecord]) -> IndexPage {
        self.table_name = table_name;
        self.rows = rows(records);
        self
    }

    pub fn render(&self) -> Result<String, DataCreatorError> {
        render("index.html", self)
    }
}

#[derive(Serialize)]
pub struct TablePage {
    pub table_name: String,
    pub notice: Option<Notice>,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TablePage {
    pub fn new(table_name: &str, records: &[OrderRecord]) -> TablePage {
        TablePage {
            table_name: table_name.to_string(),
            notice: None,
            columns: ORDER_FIELDS.to_vec(),
            rows: rows(records),
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> TablePage {
        self.notice = Some(notice);
        self
    }

    pub fn render(&self) -> Result<String, DataCreatorError> {
        render("table.html", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OrderRecord {
        OrderRecord {
            customer_id: "IND1001".to_string(),
            order_id: "ORD1001".to_string(),
            product_name: "<b>Kurta</b>".to_string(),
            category: "Clothing".to_string(),
            price: 1200.0,
            quantity: 2,
            date: "2024-03-08".to_string(),
            state: "Maharashtra".to_string(),
            city: "Mumbai".to_string(),
            payment_method: "Credit Card".to_string(),
        }
    }

    #[test]
    fn test_empty_index_page() {
        let html = IndexPage::new(vec![]).render().unwrap();
        assert!(html.contains("Enter your request (e.g., 'Generate 10 orders for March 2024'):"));
        assert!(html.contains("Generate &amp; Store"));
        assert!(html.contains("Existing Tables in DB"));
        assert!(html.contains("No tables yet."));
        assert!(!html.contains("Generated Data"));
    }

    #[test]
    fn test_index_page_with_results() {
        let html = IndexPage::new(vec!["table_1".to_string(), "table_2".to_string()])
            .with_request("ten orders")
            .with_notice(Notice::success("Stored 1 records in table: table_2"))
            .with_records(Some("table_2".to_string()), &[record()])
            .render()
            .unwrap();
        assert!(html.contains("notice-success"));
        assert!(html.contains("Stored 1 records in table: table_2"));
        assert!(html.contains("Generated Data"));
        assert!(html.contains("<th>payment_method</th>"));
        assert!(html.contains("<td>IND1001</td>"));
        assert!(html.contains("href=\"/tables/table_1\""));
        assert!(html.contains("value=\"ten orders\""));
    }

    #[test]
    fn test_cells_are_escaped() {
        let html = IndexPage::new(vec![]).with_records(None, &[record()]).render().unwrap();
        assert!(!html.contains("<b>Kurta</b>"));
        assert!(html.contains("&lt;b&gt;Kurta&lt;"));
    }

    #[test]
    fn test_table_page() {
        let html = TablePage::new("table_3", &[record(), record()]).render().unwrap();
        assert!(html.contains("<h2>table_3</h2>"));
        assert!(html.contains("2 records"));
    }
}
