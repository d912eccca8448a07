mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "funcpack", about = "Package a directory and zip-deploy it to an Azure Function App")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package the current directory and deploy it
    Deploy {
        /// Resource group containing the function app
        resource_group: String,
        /// Function app name
        app_name: String,
    },
    /// Build the deployment artifact without deploying
    Pack,
    /// Check az CLI, login, and project setup
    Doctor,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deploy {
            resource_group,
            app_name,
        } => commands::deploy(&resource_group, &app_name).await,
        Commands::Pack => commands::pack(),
        Commands::Doctor => commands::doctor().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            commands::exit_code(&e)
        }
    }
}
