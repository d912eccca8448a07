use funcpack_cloud::{AzClient, CheckResult};
use funcpack_core::{ExcludeList, FuncpackConfig, config::CONFIG_FILE};
use std::path::Path;

pub async fn doctor() -> anyhow::Result<()> {
    let project_dir = Path::new(".");
    let client = AzClient::new();
    let mut report = client.doctor().await;

    // Config file check
    let config = match FuncpackConfig::load(project_dir) {
        Ok(config) => {
            report.config_file = if project_dir.join(CONFIG_FILE).exists() {
                CheckResult::ok("Found")
            } else {
                CheckResult::ok("Not found, using defaults")
            };
            config
        }
        Err(e) => {
            report.config_file = CheckResult::fail(&format!("{e:#}"));
            FuncpackConfig::default()
        }
    };

    // Manifest check
    let manifest = &config.package.manifest;
    match ExcludeList::load(project_dir, manifest)
        .and_then(|list| list.to_glob_set().map(|_| list.len()))
    {
        Ok(count) => {
            report.manifest = CheckResult::ok(&format!("{manifest} ({count} patterns)"));
        }
        Err(e) => report.manifest = CheckResult::fail(&format!("{e:#}")),
    }

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}
