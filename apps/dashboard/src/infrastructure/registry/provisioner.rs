use super::traits::{RegistryClient, RegistryError, RepositoryInfo};

/// Creates a registry repository in a single attempt.
pub struct RegistryProvisioner<C> {
    client: C,
}

impl<C: RegistryClient> RegistryProvisioner<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Try to create `name`.
    ///
    /// A provider rejection (name taken, access denied) is printed and
    /// yields `Ok(None)`. Only failures that never reached the provider are
    /// returned as errors.
    pub async fn create_repository(
        &self,
        name: &str,
    ) -> Result<Option<RepositoryInfo>, RegistryError> {
        match self.client.create_repository(name).await {
            Ok(repository) => {
                tracing::info!(repository = %name, uri = %repository.uri, "repository created");
                println!("Repository '{}' created successfully!", name);
                Ok(Some(repository))
            }
            Err(err @ RegistryError::Rejected { .. }) => {
                tracing::warn!(repository = %name, error = %err, "registry rejected request");
                println!("An error occurred: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
