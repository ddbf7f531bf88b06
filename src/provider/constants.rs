pub mod openai {
    pub const API_BASE: &str = "https://api.openai.com/v1";
    pub const ORGANIZATION_HEADER: &str = "openai-organization";
    pub const DEFAULT_ASSISTANT_VERSION: &str = "v2";
    pub const DEFAULT_EMPTY_MESSAGES_LIMIT: u32 = 300;
}

pub mod azure {
    pub const API_KEY_HEADER: &str = "api-key";
    pub const DEFAULT_API_VERSION: &str = "2023-05-15";
    pub const API_PREFIX: &str = "openai";
    pub const DEPLOYMENTS_PREFIX: &str = "deployments";
}

pub mod endpoints {
    pub const TOKENIZE: &str = "/tokenize";
    pub const DETOKENIZE: &str = "/detokenize";
}
