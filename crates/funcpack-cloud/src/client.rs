use crate::az::AzError;
use crate::executor::{AzExecutor, RealExecutor};
use funcpack_core::DeployConfig;
use serde::Deserialize;
use std::path::Path;

/// The function app a package is deployed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployTarget {
    pub resource_group: String,
    pub app_name: String,
}

impl DeployTarget {
    pub fn new(resource_group: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            resource_group: resource_group.into(),
            app_name: app_name.into(),
        }
    }
}

/// Azure operations client, parameterized over the executor for testability.
pub struct AzClient<E: AzExecutor = RealExecutor> {
    executor: E,
}

impl AzClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for AzClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AzExecutor> AzClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Zip Deploy ──

    /// Upload `artifact` to the function app. Runs exactly one az command and
    /// streams its output; the command's exit code is kept on failure.
    pub async fn deploy_zip(
        &self,
        target: &DeployTarget,
        artifact: &Path,
        config: &DeployConfig,
    ) -> Result<(), DeployError> {
        let artifact_str = artifact
            .to_str()
            .ok_or_else(|| DeployError::InvalidPath(artifact.to_path_buf()))?;

        let timeout = config.timeout.map(|t| t.to_string());

        let mut cmd = vec![
            "functionapp",
            "deployment",
            "source",
            "config-zip",
            "--resource-group",
            &target.resource_group,
            "--name",
            &target.app_name,
            "--src",
            artifact_str,
        ];

        if let Some(slot) = &config.slot {
            cmd.push("--slot");
            cmd.push(slot);
        }
        if config.build_remote {
            cmd.push("--build-remote");
            cmd.push("true");
        }
        if let Some(timeout) = &timeout {
            cmd.push("--timeout");
            cmd.push(timeout);
        }

        let cmd_owned: Vec<String> = cmd.iter().map(|s| (*s).to_owned()).collect();
        tracing::info!(
            resource_group = %target.resource_group,
            app = %target.app_name,
            artifact = artifact_str,
            "starting zip deployment"
        );

        self.executor
            .exec_streaming(&cmd_owned)
            .await
            .map_err(|e| DeployError::Deploy { source: e })
    }

    // ── Doctor ──

    /// Run all diagnostic checks without early return.
    pub async fn doctor(&self) -> DoctorReport {
        let mut report = DoctorReport::default();

        // 1. az CLI
        match self
            .executor
            .exec(&args(["version", "--output", "json"]))
            .await
        {
            Ok(out) => match serde_json::from_str::<AzVersion>(&out) {
                Ok(v) => report.az = CheckResult::ok(&v.azure_cli),
                Err(e) => report.az = CheckResult::fail(&format!("unreadable version: {e}")),
            },
            Err(e) => report.az = CheckResult::fail(&e.to_string()),
        }

        // 2. Logged-in subscription
        match self
            .executor
            .exec(&args(["account", "show", "--output", "json"]))
            .await
        {
            Ok(out) => match serde_json::from_str::<AzAccount>(&out) {
                Ok(a) => {
                    report.account =
                        CheckResult::ok(&format!("{} ({})", a.user.name, a.name));
                }
                Err(e) => report.account = CheckResult::fail(&format!("unreadable account: {e}")),
            },
            Err(e) => {
                tracing::debug!(error = %e, "az account show failed");
                report.account = CheckResult::fail("not logged in — run: az login");
            }
        }

        report
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

#[derive(Deserialize)]
struct AzVersion {
    #[serde(rename = "azure-cli")]
    azure_cli: String,
}

#[derive(Deserialize)]
struct AzAccount {
    name: String,
    user: AzUser,
}

#[derive(Deserialize)]
struct AzUser {
    name: String,
}

// ── Doctor types ──

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub az: CheckResult,
    pub account: CheckResult,
    pub config_file: CheckResult,
    pub manifest: CheckResult,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.az.passed && self.account.passed && self.config_file.passed && self.manifest.passed
    }
}

impl std::fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = [
            ("az CLI", &self.az),
            ("Account", &self.account),
            ("Config", &self.config_file),
            ("Manifest", &self.manifest),
        ];
        for (label, check) in rows {
            writeln!(f, "  [{}] {label:<10} {}", check.icon(), check.detail)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("artifact path is not valid UTF-8: {0}")]
    InvalidPath(std::path::PathBuf),

    #[error("zip deployment failed")]
    Deploy { source: AzError },
}

impl DeployError {
    /// Exit code reported by az, when the deployment command itself failed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Deploy { source } => source.exit_code(),
            Self::InvalidPath(_) => None,
        }
    }
}
