//! One-shot container registry provisioning, independent of the dashboard.

pub mod ecr_client;
pub mod provisioner;
pub mod traits;

pub use ecr_client::EcrRegistryClient;
pub use provisioner::RegistryProvisioner;
pub use traits::{RegistryClient, RegistryError, RepositoryInfo};
