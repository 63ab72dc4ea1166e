use super::traits::{RegistryClient, RegistryError, RepositoryInfo};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecr::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
};

pub struct EcrRegistryClient {
    client: Client,
}

impl EcrRegistryClient {
    /// Build a client for `region` using the default AWS credential chain.
    pub async fn new(region: String) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;
        Self {
            client: Client::new(&config),
        }
    }
}

#[async_trait]
impl RegistryClient for EcrRegistryClient {
    async fn create_repository(&self, name: &str) -> Result<RepositoryInfo, RegistryError> {
        let output = match self
            .client
            .create_repository()
            .repository_name(name)
            .send()
            .await
        {
            Ok(output) => output,
            Err(SdkError::ServiceError(service_err)) => {
                let err = service_err.into_err();
                return Err(RegistryError::Rejected {
                    code: err.code().unwrap_or("Unknown").to_string(),
                    message: err.message().unwrap_or_default().to_string(),
                });
            }
            Err(other) => {
                return Err(RegistryError::Transport(
                    DisplayErrorContext(&other).to_string(),
                ));
            }
        };

        let repository = output.repository().ok_or_else(|| {
            RegistryError::Transport("create_repository response had no repository".into())
        })?;

        Ok(RepositoryInfo {
            name: repository.repository_name().unwrap_or(name).to_string(),
            uri: repository.repository_uri().unwrap_or_default().to_string(),
            arn: repository.repository_arn().unwrap_or_default().to_string(),
        })
    }
}
