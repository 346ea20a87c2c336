use std::sync::Mutex;

use async_trait::async_trait;

use crate::entities::error::{DataCreatorError, ErrorType};
use crate::openai_handler::{ChatCompletion, CompletionOutput};

pub const TWO_ORDERS: &str = r#"[
 {"customer_id": "IND1001", "order_id": "ORD1001", "product_name": "Kurta", "category": "Clothing", "price": 1200,
  "quantity": 2, "date": "2024-03-08", "state": "Maharashtra", "city": "Mumbai", "payment_method": "Credit Card"},
 {"customer_id": "IND1002", "order_id": "ORD1002", "product_name": "Pressure Cooker", "category": "Kitchen", "price": 2499.5,
  "quantity": 1, "date": "2024-03-09", "state": "Karnataka", "city": "Bengaluru", "payment_method": "UPI"}
]"#;

pub enum StubReply {
    Text(&'static str),
    Status(u16, &'static str),
    Unreachable,
}

/// Answers every completion with a fixed reply and remembers the prompts it saw.
pub struct StubCompletion {
    reply: StubReply,
    pub seen_user_prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    pub fn new(reply: StubReply) -> StubCompletion {
        StubCompletion { reply, seen_user_prompts: Mutex::new(Vec::new()) }
    }

    pub fn text(text: &'static str) -> StubCompletion {
        StubCompletion::new(StubReply::Text(text))
    }
}

#[async_trait]
impl ChatCompletion for StubCompletion {
    fn model(&self) -> String {
        "stub-model".to_string()
    }

    async fn complete(&self, _system_prompt: &str, user_prompt: &str) -> Result<CompletionOutput, DataCreatorError> {
        self.seen_user_prompts.lock().unwrap().push(user_prompt.to_string());
        let (status_code, response, content) = match self.reply {
            StubReply::Text(text) => (
                200,
                serde_json::json!({"choices": [{"message": {"content": text}}]}).to_string(),
                Some(text.to_string()),
            ),
            StubReply::Status(code, body) => (code, body.to_string(), None),
            StubReply::Unreachable => {
                return Err(DataCreatorError::new(502, ErrorType::LlmError, "Failed to send request to GPT: connection refused".to_string()))
            }
        };
        Ok(CompletionOutput {
            model: self.model(),
            request_url: "http://stub/v1/chat/completions".to_string(),
            request: "{}".to_string(),
            status_code,
            response,
            content,
        })
    }
}
