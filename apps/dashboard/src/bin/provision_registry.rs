//! Create the container registry repository the dashboard image is pushed to.
//!
//! Usage:
//!     cargo run --bin provision_registry
//!
//! Region and repository name default to `ap-south-1` and
//! `host-metrics-dashboard`; override with `AWS_REGION` and
//! `REGISTRY_REPOSITORY_NAME`. Credentials come from the standard AWS chain.
//! A rejected request (for example, the repository already exists) is
//! reported and the process still exits successfully.

use dashboard::{
    config::RegistryConfig,
    infrastructure::registry::{EcrRegistryClient, RegistryProvisioner},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = RegistryConfig::from_env()?;
    let client = EcrRegistryClient::new(config.region.clone()).await;
    let provisioner = RegistryProvisioner::new(client);

    if let Some(repository) = provisioner
        .create_repository(&config.repository_name)
        .await?
    {
        println!("Repository URI: {}", repository.uri);
        println!("Repository ARN: {}", repository.arn);
    }

    Ok(())
}
