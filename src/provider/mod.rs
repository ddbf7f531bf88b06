pub(crate) mod constants;
pub mod config;

pub use config::{ClientConfig, ModelMapper};

use std::str::FromStr;

use crate::core::LlmError;

/// Authentication and routing convention expected by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiType {
    #[default]
    OpenAI,
    Azure,
    AzureAD,
    CloudflareAzure,
}

impl ApiType {
    /// Wire name of this API type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiType::OpenAI => "OPEN_AI",
            ApiType::Azure => "AZURE",
            ApiType::AzureAD => "AZURE_AD",
            ApiType::CloudflareAzure => "CLOUDFLARE_AZURE",
        }
    }

    /// Azure-family backends authenticate with the `api-key` header.
    pub fn uses_api_key_header(&self) -> bool {
        !matches!(self, ApiType::OpenAI)
    }

    /// Backends that address models through `/openai/deployments/<name>`.
    pub fn uses_deployment_routing(&self) -> bool {
        matches!(self, ApiType::Azure | ApiType::AzureAD)
    }

    /// Backends that refuse requests without an `api-version` query.
    pub fn requires_api_version(&self) -> bool {
        self.uses_deployment_routing()
    }
}

impl std::fmt::Display for ApiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiType {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN_AI" => Ok(ApiType::OpenAI),
            "AZURE" => Ok(ApiType::Azure),
            "AZURE_AD" => Ok(ApiType::AzureAD),
            "CLOUDFLARE_AZURE" => Ok(ApiType::CloudflareAzure),
            other => Err(LlmError::ProviderConfiguration(format!(
                "Unknown API type '{other}'"
            ))),
        }
    }
}
