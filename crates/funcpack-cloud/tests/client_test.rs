use funcpack_cloud::az::AzError;
use funcpack_cloud::client::{AzClient, DeployError, DeployTarget};
use funcpack_cloud::executor::AzExecutor;
use funcpack_core::DeployConfig;
use mockall::mock;
use std::path::PathBuf;

mock! {
    Executor {}

    impl AzExecutor for Executor {
        async fn exec(&self, args: &[String]) -> Result<String, AzError>;
        async fn exec_streaming(&self, args: &[String]) -> Result<(), AzError>;
    }
}

fn owned(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

fn target() -> DeployTarget {
    DeployTarget::new("rg-prod", "func-topdesk")
}

// ── Zip Deploy Tests ──

#[tokio::test]
async fn deploy_zip_invokes_config_zip_once() {
    let mut mock = MockExecutor::new();
    let expected = owned(&[
        "functionapp",
        "deployment",
        "source",
        "config-zip",
        "--resource-group",
        "rg-prod",
        "--name",
        "func-topdesk",
        "--src",
        "/work/app.zip",
    ]);

    mock.expect_exec_streaming()
        .withf(move |args| args == expected.as_slice())
        .times(1)
        .returning(|_| Ok(()));
    mock.expect_exec().never();

    let client = AzClient::with_executor(mock);
    client
        .deploy_zip(
            &target(),
            &PathBuf::from("/work/app.zip"),
            &DeployConfig::default(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn deploy_zip_passes_optional_flags() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming()
        .withf(|args| {
            let joined = args.join(" ");
            joined.contains("--slot staging")
                && joined.contains("--build-remote true")
                && joined.contains("--timeout 900")
        })
        .times(1)
        .returning(|_| Ok(()));

    let config = DeployConfig {
        slot: Some("staging".to_owned()),
        build_remote: true,
        timeout: Some(900),
    };

    let client = AzClient::with_executor(mock);
    client
        .deploy_zip(&target(), &PathBuf::from("app.zip"), &config)
        .await
        .unwrap();
}

#[tokio::test]
async fn deploy_zip_omits_unset_flags() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming()
        .withf(|args| {
            !args.contains(&"--slot".to_owned())
                && !args.contains(&"--build-remote".to_owned())
                && !args.contains(&"--timeout".to_owned())
        })
        .times(1)
        .returning(|_| Ok(()));

    let client = AzClient::with_executor(mock);
    client
        .deploy_zip(&target(), &PathBuf::from("app.zip"), &DeployConfig::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn deploy_zip_surfaces_az_exit_code() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming().times(1).returning(|args| {
        Err(AzError::CommandFailed {
            args: args.to_vec(),
            code: Some(3),
            stderr: "ResourceNotFound".to_owned(),
        })
    });

    let client = AzClient::with_executor(mock);
    let err = client
        .deploy_zip(&target(), &PathBuf::from("app.zip"), &DeployConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::Deploy { .. }));
    assert_eq!(err.exit_code(), Some(3));
}

#[tokio::test]
async fn deploy_zip_az_missing_has_no_exit_code() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming().times(1).returning(|_| {
        Err(AzError::NotFound {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    });

    let client = AzClient::with_executor(mock);
    let err = client
        .deploy_zip(&target(), &PathBuf::from("app.zip"), &DeployConfig::default())
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), None);
}

#[cfg(unix)]
#[tokio::test]
async fn deploy_zip_rejects_non_utf8_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut mock = MockExecutor::new();
    mock.expect_exec_streaming().never();

    let path = PathBuf::from(OsStr::from_bytes(b"app-\xff.zip"));
    let client = AzClient::with_executor(mock);
    let result = client
        .deploy_zip(&target(), &path, &DeployConfig::default())
        .await;

    assert!(matches!(result, Err(DeployError::InvalidPath(_))));
}

// ── Doctor Tests ──

#[tokio::test]
async fn doctor_reports_version_and_account() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.first().map(String::as_str) == Some("version"))
        .returning(|_| {
            Ok(r#"{"azure-cli": "2.61.0", "azure-cli-core": "2.61.0", "extensions": {}}"#
                .to_owned())
        });
    mock.expect_exec()
        .withf(|args| args.first().map(String::as_str) == Some("account"))
        .returning(|_| {
            Ok(
                r#"{"id": "0000", "name": "Pay-As-You-Go", "user": {"name": "dev@example.com", "type": "user"}}"#
                    .to_owned(),
            )
        });

    let client = AzClient::with_executor(mock);
    let report = client.doctor().await;

    assert!(report.az.passed);
    assert_eq!(report.az.detail, "2.61.0");
    assert!(report.account.passed);
    assert_eq!(report.account.detail, "dev@example.com (Pay-As-You-Go)");
}

#[tokio::test]
async fn doctor_continues_after_az_failure() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.first().map(String::as_str) == Some("version"))
        .returning(|_| {
            Err(AzError::NotFound {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });
    mock.expect_exec()
        .withf(|args| args.first().map(String::as_str) == Some("account"))
        .times(1)
        .returning(|_| {
            Err(AzError::CommandFailed {
                args: vec![],
                code: Some(1),
                stderr: "Please run 'az login'".to_owned(),
            })
        });

    let client = AzClient::with_executor(mock);
    let report = client.doctor().await;

    assert!(!report.az.passed);
    assert!(!report.account.passed);
    assert!(report.account.detail.contains("az login"));
    assert!(!report.all_passed());
}

#[tokio::test]
async fn doctor_flags_unreadable_version_output() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.first().map(String::as_str) == Some("version"))
        .returning(|_| Ok("not json".to_owned()));
    mock.expect_exec()
        .withf(|args| args.first().map(String::as_str) == Some("account"))
        .returning(|_| Ok(r#"{"name": "sub", "user": {"name": "me"}}"#.to_owned()));

    let client = AzClient::with_executor(mock);
    let report = client.doctor().await;

    assert!(!report.az.passed);
    assert!(report.az.detail.starts_with("unreadable version"));
    assert!(report.account.passed);
}

#[test]
fn command_failed_message_includes_exit_code() {
    let err = AzError::CommandFailed {
        args: vec!["functionapp".to_owned()],
        code: Some(2),
        stderr: "boom".to_owned(),
    };

    let message = err.to_string();
    assert!(message.contains("exit code 2"));
    assert!(message.contains("boom"));
}
