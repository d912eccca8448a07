pub mod az;
pub mod client;
pub mod executor;

pub use az::AzError;
pub use client::{AzClient, CheckResult, DeployError, DeployTarget, DoctorReport};
pub use executor::{AzExecutor, RealExecutor};
