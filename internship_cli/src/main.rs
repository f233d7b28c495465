mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use internship_api::{Client, ClientConfig, BASE_URL_ENV};

use crate::output::OutputFormat;

/// Log directive applied on top of `RUST_LOG`; the target is the binary's crate name.
const DEFAULT_LOG_DIRECTIVE: &str = "internship=info";

#[derive(Parser)]
#[command(name = "internship")]
#[command(about = "Review and manage internship applications")]
struct Cli {
    /// Output format: table, json, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the applications API (default http://localhost:8000)
    #[arg(long, env = BASE_URL_ENV, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all applications, newest first
    List,
    /// Show one application with its training plan
    Show(commands::applications::ShowArgs),
    /// Submit a new application
    Create(Box<commands::applications::CreateArgs>),
    /// Show application counters
    Stats,
    /// Generate a training plan for an application
    GeneratePlan(commands::plan::GeneratePlanArgs),
    /// Revise an existing training plan with a free-form instruction
    ModifyPlan(commands::plan::ModifyPlanArgs),
    /// Move an application to a new status
    Status(commands::review::StatusArgs),
    /// Run the verification pipeline for an application
    Verify(commands::review::VerifyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_flag(&cli.output);

    let config = ClientConfig::from_override(cli.base_url.as_deref());
    tracing::debug!("Using API at {}", config.base_url());
    let client = Client::new(config)?;

    match &cli.command {
        Commands::List => commands::applications::list(&client, &format).await?,
        Commands::Show(args) => commands::applications::show(args, &client, &format).await?,
        Commands::Create(args) => {
            commands::applications::create(args.as_ref(), &client, &format).await?
        }
        Commands::Stats => commands::review::stats(&client, &format).await?,
        Commands::GeneratePlan(args) => commands::plan::generate(args, &client, &format).await?,
        Commands::ModifyPlan(args) => commands::plan::modify(args, &client, &format).await?,
        Commands::Status(args) => commands::review::status(args, &client, &format).await?,
        Commands::Verify(args) => commands::review::verify(args, &client, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_directive_targets_this_binary() {
        let target = DEFAULT_LOG_DIRECTIVE.split('=').next().unwrap();
        let crate_name = module_path!().split("::").next().unwrap();
        assert_eq!(target, crate_name);
        assert_eq!(target, env!("CARGO_CRATE_NAME"));
    }

    #[test]
    fn default_log_directive_parses() {
        assert!(DEFAULT_LOG_DIRECTIVE
            .parse::<tracing_subscriber::filter::Directive>()
            .is_ok());
    }
}
