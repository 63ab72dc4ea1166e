use async_trait::async_trait;
use thiserror::Error;

/// Identifying attributes of a created repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub name: String,
    pub uri: String,
    pub arn: String,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The provider received the request and refused it.
    #[error("{code}: {message}")]
    Rejected { code: String, message: String },

    /// The request never produced a provider verdict.
    #[error("Registry request failed: {0}")]
    Transport(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn create_repository(&self, name: &str) -> Result<RepositoryInfo, RegistryError>;
}
