use super::pipeline;
use funcpack_cloud::{AzClient, DeployTarget};
use std::path::Path;

/// Package the working directory and zip-deploy it to the function app.
pub async fn deploy(resource_group: &str, app_name: &str) -> anyhow::Result<()> {
    let target = DeployTarget::new(resource_group, app_name);
    let client = AzClient::new();

    let summary = pipeline::run(Path::new("."), &target, &client).await?;

    println!();
    println!(
        "Deployed {} to {}/{}",
        summary.path.display(),
        target.resource_group,
        target.app_name
    );
    Ok(())
}
