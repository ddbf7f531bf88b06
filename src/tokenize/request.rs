use serde::Serialize;

use crate::core::Message;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Tokenize a conversation after applying the model's chat template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTokenizeRequest {
    pub model: String,
    pub messages: Vec<Message>,

    #[serde(skip_serializing_if = "is_false")]
    pub add_special_tokens: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub add_generation_prompt: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub continue_final_message: bool,
}

impl ChatTokenizeRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            add_special_tokens: false,
            add_generation_prompt: false,
            continue_final_message: false,
        }
    }

    pub fn add_special_tokens(mut self, value: bool) -> Self {
        self.add_special_tokens = value;
        self
    }

    pub fn add_generation_prompt(mut self, value: bool) -> Self {
        self.add_generation_prompt = value;
        self
    }

    pub fn continue_final_message(mut self, value: bool) -> Self {
        self.continue_final_message = value;
        self
    }
}

/// Tokenize a plain prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextTokenizeRequest {
    pub model: String,
    pub prompt: String,

    #[serde(skip_serializing_if = "is_false")]
    pub add_special_tokens: bool,
}

impl TextTokenizeRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            add_special_tokens: false,
        }
    }

    pub fn add_special_tokens(mut self, value: bool) -> Self {
        self.add_special_tokens = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatDetokenizeRequest {
    pub model: String,
    pub tokens: Vec<u32>,
}

impl ChatDetokenizeRequest {
    pub fn new(model: impl Into<String>, tokens: Vec<u32>) -> Self {
        Self {
            model: model.into(),
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_flags_are_omitted() {
        let value = serde_json::to_value(TextTokenizeRequest::new("m", "hello world")).unwrap();
        assert_eq!(value, json!({ "model": "m", "prompt": "hello world" }));
    }

    #[test]
    fn chat_flags_serialize_when_set() {
        let request = ChatTokenizeRequest::new("m", vec![Message::user("hi")])
            .add_generation_prompt(true)
            .continue_final_message(true);
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "m",
                "messages": [{ "role": "user", "content": "hi" }],
                "add_generation_prompt": true,
                "continue_final_message": true
            })
        );
    }

    #[test]
    fn detokenize_keeps_token_order() {
        let value = serde_json::to_value(ChatDetokenizeRequest::new("m", vec![3, 1, 2])).unwrap();
        assert_eq!(value, json!({ "model": "m", "tokens": [3, 1, 2] }));
    }
}
