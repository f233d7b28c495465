//! The `generate-plan` and `modify-plan` subcommands.

use anyhow::{bail, Result};
use clap::Args;
use internship_api::types::{ApplicationID, PlanOptions};
use internship_api::Client;

use super::applications::print_application_detail;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Application ID
    pub id: ApplicationID,

    /// Plan length in weeks (server picks from the confidence band if omitted)
    #[arg(long)]
    pub weeks: Option<u32>,

    /// Hours per day the candidate can dedicate
    #[arg(long)]
    pub daily_hours: Option<f64>,

    /// Plan for a different role than the one applied for
    #[arg(long)]
    pub target_role: Option<String>,
}

#[derive(Args)]
pub struct ModifyPlanArgs {
    /// Application ID
    pub id: ApplicationID,

    /// Instruction for revising the plan, e.g. "add a week on Docker"
    pub message: String,
}

pub async fn generate(
    args: &GeneratePlanArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let options = plan_options(args)?;
    tracing::info!("Generating training plan for application {}", args.id);
    let app = client.generate_plan(args.id, options.as_ref()).await?;
    print_application_detail(&app, format);
    Ok(())
}

pub async fn modify(args: &ModifyPlanArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.message.trim().is_empty() {
        bail!("message must not be empty");
    }
    let app = client.modify_plan(args.id, &args.message).await?;
    print_application_detail(&app, format);
    Ok(())
}

/// `None` when no flag was given, so the request body is `{}`.
fn plan_options(args: &GeneratePlanArgs) -> Result<Option<PlanOptions>> {
    let mut options = PlanOptions::default();
    if let Some(weeks) = args.weeks {
        if weeks == 0 {
            bail!("--weeks must be at least 1");
        }
        options = options.with_weeks(weeks);
    }
    if let Some(hours) = args.daily_hours {
        if !(hours > 0.0 && hours <= 24.0) {
            bail!("--daily-hours must be between 0 and 24");
        }
        options = options.with_daily_hours(hours);
    }
    if let Some(role) = &args.target_role {
        options = options.with_target_role(role);
    }
    Ok(if options.is_empty() { None } else { Some(options) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GeneratePlanArgs {
        GeneratePlanArgs {
            id: 42,
            weeks: None,
            daily_hours: None,
            target_role: None,
        }
    }

    #[test]
    fn no_flags_means_no_options() {
        assert_eq!(plan_options(&args()).unwrap(), None);
    }

    #[test]
    fn flags_are_carried_over() {
        let mut a = args();
        a.weeks = Some(6);
        a.daily_hours = Some(2.5);
        let options = plan_options(&a).unwrap().unwrap();
        assert_eq!(options.weeks, Some(6));
        assert_eq!(options.daily_hours, Some(2.5));
        assert_eq!(options.target_role, None);
    }

    #[test]
    fn zero_weeks_rejected() {
        let mut a = args();
        a.weeks = Some(0);
        assert!(plan_options(&a).is_err());
    }

    #[test]
    fn out_of_range_hours_rejected() {
        let mut a = args();
        a.daily_hours = Some(30.0);
        assert!(plan_options(&a).is_err());
        a.daily_hours = Some(f64::NAN);
        assert!(plan_options(&a).is_err());
    }
}
