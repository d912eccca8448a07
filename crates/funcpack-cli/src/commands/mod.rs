mod deploy;
mod doctor;
mod pack;
mod pipeline;

use funcpack_cloud::DeployError;
use std::process::ExitCode;

pub use deploy::deploy;
pub use doctor::doctor;
pub use pack::pack;

/// Process exit code for a failed command.
///
/// A failing az deployment passes its own exit code through; anything else is 1.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<DeployError>()
        .and_then(DeployError::exit_code)
        // arch-lint: allow(no-silent-result-drop) reason="codes outside 0..=255 fall back to 1"
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
