use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::entities::error::{DataCreatorError, ErrorType};

use super::model::OrderRecord;

pub const INVALID_JSON_MESSAGE: &str = "AI did not return valid JSON structured data.";

static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn fence_regex() -> &'static Regex {
    FENCE_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^\s*```[A-Za-z]*[ \t]*\r?\n?(?P<body>.*?)\s*```\s*$")
            .expect("code fence regex should compile")
    })
}

/// Drops a surrounding Markdown code fence, if the model wrapped its answer in one.
pub fn strip_code_fence(text: &str) -> &str {
    match fence_regex().captures(text).and_then(|captures| captures.name("body")) {
        Some(body) => body.as_str(),
        None => text.trim(),
    }
}

/// Parses completion text into order records.
///
/// A lone object counts as a one-record batch. The first record failing the
/// field checks rejects the whole batch.
pub fn parse_records(text: &str) -> Result<Vec<OrderRecord>, DataCreatorError> {
    let content = strip_code_fence(text);
    let value: Value = serde_json::from_str(content).map_err(|err| {
        tracing::warn!("completion is not JSON: {}", err);
        validation_error(INVALID_JSON_MESSAGE.to_string())
    })?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(_) => vec![value],
        other => {
            return Err(validation_error(format!(
                "{} Expected an array of records, got {}.",
                INVALID_JSON_MESSAGE,
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| record_from_value(index, item))
        .collect()
}

fn record_from_value(index: usize, item: Value) -> Result<OrderRecord, DataCreatorError> {
    let object = match item {
        Value::Object(object) => object,
        other => {
            return Err(validation_error(format!(
                "record {index}: expected an object, got {}",
                json_kind(&other)
            )))
        }
    };

    Ok(OrderRecord {
        customer_id: string_field(index, &object, "customer_id")?,
        order_id: string_field(index, &object, "order_id")?,
        product_name: string_field(index, &object, "product_name")?,
        category: string_field(index, &object, "category")?,
        price: number_field(index, &object, "price")?,
        quantity: integer_field(index, &object, "quantity")?,
        date: string_field(index, &object, "date")?,
        state: string_field(index, &object, "state")?,
        city: string_field(index, &object, "city")?,
        payment_method: string_field(index, &object, "payment_method")?,
    })
}

fn field<'a>(index: usize, object: &'a Map<String, Value>, name: &str) -> Result<&'a Value, DataCreatorError> {
    match object.get(name) {
        None | Some(Value::Null) => Err(validation_error(format!("record {index}: missing field `{name}`"))),
        Some(value) => Ok(value),
    }
}

fn string_field(index: usize, object: &Map<String, Value>, name: &str) -> Result<String, DataCreatorError> {
    field(index, object, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| validation_error(format!("record {index}: field `{name}` should be a string")))
}

fn number_field(index: usize, object: &Map<String, Value>, name: &str) -> Result<f64, DataCreatorError> {
    field(index, object, name)?
        .as_f64()
        .ok_or_else(|| validation_error(format!("record {index}: field `{name}` should be a number")))
}

fn integer_field(index: usize, object: &Map<String, Value>, name: &str) -> Result<i64, DataCreatorError> {
    let value = field(index, object, name)?;
    if let Some(integer) = value.as_i64() {
        return Ok(integer);
    }
    // 2.0 is still an integer quantity
    match value.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < i64::MAX as f64 => Ok(float as i64),
        _ => Err(validation_error(format!("record {index}: field `{name}` should be an integer"))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn validation_error(message: String) -> DataCreatorError {
    DataCreatorError::new(422, ErrorType::ValidationError, message)
}
