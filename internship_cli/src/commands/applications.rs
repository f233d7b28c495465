//! The `list`, `show`, and `create` subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use internship_api::types::{Application, ApplicationID, NewApplication, ResumeFile};
use internship_api::Client;

use crate::output::{print_applications, print_json, print_plan_weeks, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Application ID
    pub id: ApplicationID,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Candidate's full name
    #[arg(long)]
    pub full_name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// GitHub profile URL (e.g. https://github.com/octocat)
    #[arg(long)]
    pub github_url: String,

    /// Role applied for (e.g. backend, frontend, data, devops)
    #[arg(long)]
    pub role: String,

    /// Personal details as a JSON object
    #[arg(long)]
    pub personal_json: Option<String>,

    /// Education history as a JSON document
    #[arg(long)]
    pub education_json: Option<String>,

    /// Work experience as a JSON document
    #[arg(long)]
    pub experience_json: Option<String>,

    /// Professional profile (tech stack, links) as a JSON document
    #[arg(long)]
    pub professional_json: Option<String>,

    /// Motivation answers as a JSON document
    #[arg(long)]
    pub motivation_json: Option<String>,

    /// Resume file to upload (PDF recommended)
    #[arg(long)]
    pub resume: Option<PathBuf>,
}

pub async fn list(client: &Client, format: &OutputFormat) -> Result<()> {
    let apps = client.get_applications().await?;
    eprintln!("{} applications", apps.len());
    print_applications(&apps, format);
    Ok(())
}

pub async fn show(args: &ShowArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let app = client.get_application_by_id(args.id).await?;
    print_application_detail(&app, format);
    Ok(())
}

pub async fn create(args: &CreateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let payload = build_payload(args)?;
    let resume = match &args.resume {
        Some(path) => Some(
            ResumeFile::from_path(path)
                .with_context(|| format!("could not read resume {}", path.display()))?,
        ),
        None => None,
    };

    tracing::info!("Submitting application for {}", payload.full_name);
    let app = client.create_application(&payload, resume).await?;
    eprintln!("Created application {}", app.id);
    print_application_detail(&app, format);
    Ok(())
}

/// Prints one application, its plan weeks if any, and where its status can go next.
pub fn print_application_detail(app: &Application, format: &OutputFormat) {
    if *format == OutputFormat::Json {
        print_json(app);
        return;
    }
    print_applications(std::slice::from_ref(app), format);

    match app.training_plan() {
        Ok(Some(plan)) => {
            if !plan.summary.is_empty() {
                println!("\n{}", plan.summary);
            }
            print_plan_weeks(&plan.weekly_plan, format);
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Training plan for application {} is unreadable: {}", app.id, e),
    }

    let next: Vec<&str> = app
        .status
        .allowed_transitions()
        .iter()
        .map(|s| s.as_str())
        .collect();
    if next.is_empty() {
        eprintln!("Status '{}' is final", app.status);
    } else {
        eprintln!("Status '{}' can move to: {}", app.status, next.join(", "));
    }
}

/// The server stores these fields verbatim, so catch malformed JSON before upload.
fn build_payload(args: &CreateArgs) -> Result<NewApplication> {
    let mut payload = NewApplication::new(&args.full_name, &args.email, &args.github_url, &args.role);
    payload.personal_json = checked_json("--personal-json", &args.personal_json)?;
    payload.education_json = checked_json("--education-json", &args.education_json)?;
    payload.experience_json = checked_json("--experience-json", &args.experience_json)?;
    payload.professional_json = checked_json("--professional-json", &args.professional_json)?;
    payload.motivation_json = checked_json("--motivation-json", &args.motivation_json)?;
    Ok(payload)
}

fn checked_json(flag: &str, value: &Option<String>) -> Result<Option<String>> {
    match value {
        Some(raw) => {
            serde_json::from_str::<serde_json::Value>(raw)
                .with_context(|| format!("{} is not valid JSON", flag))?;
            Ok(Some(raw.clone()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CreateArgs {
        CreateArgs {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            github_url: "https://github.com/ada".to_string(),
            role: "backend".to_string(),
            personal_json: None,
            education_json: None,
            experience_json: None,
            professional_json: None,
            motivation_json: None,
            resume: None,
        }
    }

    #[test]
    fn payload_keeps_unset_fields_unset() {
        let payload = build_payload(&args()).unwrap();
        assert_eq!(payload.role_applied, "backend");
        assert_eq!(payload.personal_json, None);
        assert_eq!(payload.form_fields().len(), 4);
    }

    #[test]
    fn payload_passes_valid_json_verbatim() {
        let mut a = args();
        a.professional_json = Some(r#"{ "primaryTechStack": ["rust"] }"#.to_string());
        let payload = build_payload(&a).unwrap();
        assert_eq!(
            payload.professional_json.as_deref(),
            Some(r#"{ "primaryTechStack": ["rust"] }"#)
        );
    }

    #[test]
    fn payload_rejects_invalid_json() {
        let mut a = args();
        a.education_json = Some("{degree: BSc".to_string());
        let err = build_payload(&a).unwrap_err();
        assert!(err.to_string().contains("--education-json"));
    }
}
