use funcpack_build::{ArchiveSummary, collect_files, create_archive};
use funcpack_cloud::{AzClient, AzExecutor, DeployTarget};
use funcpack_core::{ExcludeList, FuncpackConfig};
use std::path::Path;

/// Manifest → filter → archive. Returns the artifact that was written.
///
/// Fails before touching the previous artifact if the manifest is missing or invalid.
pub(crate) fn package(
    project_dir: &Path,
    config: &FuncpackConfig,
) -> anyhow::Result<ArchiveSummary> {
    let excludes = ExcludeList::load(project_dir, &config.package.manifest)?;
    let matcher = excludes.to_glob_set()?;

    let files = collect_files(project_dir, &matcher, &[config.package.artifact.as_str()])?;
    tracing::debug!(
        included = files.len(),
        patterns = excludes.len(),
        "filtered project directory"
    );

    let destination = project_dir.join(&config.package.artifact);
    let summary = create_archive(&files, &destination, config.package.compression)?;
    Ok(summary)
}

/// Run the full deploy pipeline: config → package → az zip deploy.
pub(crate) async fn run<E: AzExecutor>(
    project_dir: &Path,
    target: &DeployTarget,
    client: &AzClient<E>,
) -> anyhow::Result<ArchiveSummary> {
    let config = FuncpackConfig::load(project_dir)?;

    println!("Packaging {}...", config.package.artifact);
    let summary = package(project_dir, &config)?;
    println!(
        "Packaged {} entries ({} bytes)",
        summary.entries, summary.bytes
    );

    println!(
        "Deploying to {} in {}...",
        target.app_name, target.resource_group
    );
    client
        .deploy_zip(target, &summary.path, &config.deploy)
        .await?;

    Ok(summary)
}
