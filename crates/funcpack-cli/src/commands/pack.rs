use super::pipeline;
use funcpack_core::FuncpackConfig;
use std::path::Path;

pub fn pack() -> anyhow::Result<()> {
    let project_dir = Path::new(".");
    let config = FuncpackConfig::load(project_dir)?;

    let summary = pipeline::package(project_dir, &config)?;

    println!(
        "Created {} ({} entries, {} bytes)",
        summary.path.display(),
        summary.entries,
        summary.bytes
    );
    Ok(())
}
