use diesel::sql_types::{BigInt, Double, Text};
use diesel::QueryableByName;
use serde::{Deserialize, Serialize};

/// Column order of every generated table, and key order of the records the model is asked for.
pub const ORDER_FIELDS: [&str; 10] = [
    "customer_id",
    "order_id",
    "product_name",
    "category",
    "price",
    "quantity",
    "date",
    "state",
    "city",
    "payment_method",
];

#[derive(Serialize, Deserialize, QueryableByName, Debug, Clone, PartialEq)]
pub struct OrderRecord {
    #[diesel(sql_type = Text)]
    pub customer_id: String,
    #[diesel(sql_type = Text)]
    pub order_id: String,
    #[diesel(sql_type = Text)]
    pub product_name: String,
    #[diesel(sql_type = Text)]
    pub category: String,
    #[diesel(sql_type = Double)]
    pub price: f64,
    #[diesel(sql_type = BigInt)]
    pub quantity: i64,
    #[diesel(sql_type = Text)]
    pub date: String,
    #[diesel(sql_type = Text)]
    pub state: String,
    #[diesel(sql_type = Text)]
    pub city: String,
    #[diesel(sql_type = Text)]
    pub payment_method: String,
}

impl OrderRecord {
    /// Cell values in `ORDER_FIELDS` order, formatted for the preview tables.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.order_id.clone(),
            self.product_name.clone(),
            self.category.clone(),
            format_price(self.price),
            self.quantity.to_string(),
            self.date.clone(),
            self.state.clone(),
            self.city.clone(),
            self.payment_method.clone(),
        ]
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        price.to_string()
    } else {
        format!("{:.2}", price)
    }
}
