//! Reviewer actions: `stats`, `status`, and `verify`.

use anyhow::Result;
use clap::Args;
use internship_api::types::{ApplicationID, StatusUpdate};
use internship_api::Client;

use super::applications::print_application_detail;
use crate::output::{print_stats, OutputFormat};

#[derive(Args)]
pub struct StatusArgs {
    /// Application ID
    pub id: ApplicationID,

    /// New status: in_review, accepted, rejected, intern
    pub status: StatusUpdate,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Application ID
    pub id: ApplicationID,
}

pub async fn stats(client: &Client, format: &OutputFormat) -> Result<()> {
    let stats = client.get_application_stats().await?;
    print_stats(&stats, format);
    Ok(())
}

pub async fn status(args: &StatusArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let app = client.update_status(args.id, args.status).await?;
    eprintln!("Application {} is now '{}'", app.id, app.status);
    print_application_detail(&app, format);
    Ok(())
}

pub async fn verify(args: &VerifyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    tracing::info!("Running verification for application {}, this can take a while", args.id);
    let app = client.verify_application(args.id).await?;
    match app.trust_score {
        Some(score) => eprintln!("Trust score: {:.2}", score),
        None => eprintln!("No trust score reported"),
    }
    print_application_detail(&app, format);
    Ok(())
}
