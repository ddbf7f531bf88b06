use serde::Deserialize;

use crate::core::ResponseMetadata;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenizeResponse {
    pub count: usize,
    #[serde(rename = "max_model_len")]
    pub max_model_length: usize,
    pub tokens: Vec<u32>,

    #[serde(skip)]
    pub metadata: ResponseMetadata,
}

impl TokenizeResponse {
    /// Whether the server reported as many tokens as it returned.
    pub fn is_consistent(&self) -> bool {
        self.tokens.len() == self.count
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetokenizeResponse {
    pub prompt: String,

    #[serde(skip)]
    pub metadata: ResponseMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_response_reads_max_model_len() {
        let response: TokenizeResponse =
            serde_json::from_str(r#"{"count":2,"max_model_len":8192,"tokens":[5,6]}"#).unwrap();
        assert_eq!(response.max_model_length, 8192);
        assert!(response.is_consistent());
        assert!(response.metadata.headers().is_empty());
    }

    #[test]
    fn inconsistent_count_is_detected() {
        let response: TokenizeResponse =
            serde_json::from_str(r#"{"count":3,"max_model_len":10,"tokens":[1]}"#).unwrap();
        assert!(!response.is_consistent());
    }
}
