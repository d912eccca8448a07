/// Azure CLI program name. On Windows `az` is a batch wrapper.
pub const AZ_PROGRAM: &str = if cfg!(windows) { "az.cmd" } else { "az" };

#[derive(Debug, thiserror::Error)]
pub enum AzError {
    #[error("az CLI not found — install: https://learn.microsoft.com/cli/azure/install-azure-cli")]
    NotFound { source: std::io::Error },

    #[error("az command failed ({}): {args:?}\n{stderr}", exit_label(*code))]
    CommandFailed {
        args: Vec<String>,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        stderr: String,
    },

    #[error("az output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}

impl AzError {
    /// Exit code of the failed `az` process, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_owned(),
    }
}
