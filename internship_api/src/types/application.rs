//! Application records returned by the API and the payload used to create one.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ApplicationStatus, TrainingPlan};
use crate::Error;

/// Server-assigned application identifier.
pub type ApplicationID = i64;

/// An application as the server reports it.
///
/// The profile columns are required; everything the scoring and
/// verification pipelines fill in later is optional. Keys this client does
/// not model are kept in `extra`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Application {
    pub id: ApplicationID,
    pub full_name: String,
    pub email: String,
    pub github_url: String,
    pub role_applied: String,
    pub status: ApplicationStatus,

    /// Overall score out of 100.
    #[serde(default)]
    pub master_score: Option<f64>,
    /// Confidence band label, e.g. "Strong" or "Risk".
    #[serde(default)]
    pub confidence_band: Option<String>,
    #[serde(default)]
    pub trust_score: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_datetime",
        serialize_with = "naive_datetime"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub personal_json: Option<String>,
    #[serde(default)]
    pub education_json: Option<String>,
    #[serde(default)]
    pub experience_json: Option<String>,
    #[serde(default)]
    pub professional_json: Option<String>,
    #[serde(default)]
    pub motivation_json: Option<String>,
    #[serde(default)]
    pub github_metrics_json: Option<String>,
    #[serde(default)]
    pub score_breakdown_json: Option<String>,
    #[serde(default)]
    pub learning_gaps_json: Option<String>,
    #[serde(default)]
    pub resume_analysis_json: Option<String>,
    #[serde(default)]
    pub background_report_json: Option<String>,
    #[serde(default)]
    pub verification_report_json: Option<String>,
    #[serde(default)]
    pub training_plan_json: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Application {
    /// Decodes `training_plan_json`. `Ok(None)` when no plan has been generated.
    pub fn training_plan(&self) -> Result<Option<TrainingPlan>, serde_json::Error> {
        match self.training_plan_json.as_deref().map(str::trim) {
            None | Some("") | Some("null") => Ok(None),
            Some(raw) => serde_json::from_str(raw).map(Some),
        }
    }
}

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Accepts RFC 3339 timestamps as well as the naive ISO form the backend
/// emits for timezone-less columns (read as UTC).
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(&raw, NAIVE_FORMAT)
        .map(|naive| Some(naive.and_utc()))
        .map_err(serde::de::Error::custom)
}

/// Writes timestamps back in the backend's timezone-less form.
fn naive_datetime<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.collect_str(&dt.naive_utc().format(NAIVE_FORMAT)),
        None => serializer.serialize_none(),
    }
}

/// Fields submitted when creating an application.
///
/// The `*_json` fields are opaque JSON documents passed through as strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub github_url: String,
    pub role_applied: String,
    pub personal_json: Option<String>,
    pub education_json: Option<String>,
    pub experience_json: Option<String>,
    pub professional_json: Option<String>,
    pub motivation_json: Option<String>,
}

impl NewApplication {
    pub fn new(full_name: &str, email: &str, github_url: &str, role_applied: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
            github_url: github_url.to_string(),
            role_applied: role_applied.to_string(),
            ..Default::default()
        }
    }

    pub fn with_personal_json(mut self, json: &str) -> Self {
        self.personal_json = Some(json.to_string());
        self
    }

    pub fn with_education_json(mut self, json: &str) -> Self {
        self.education_json = Some(json.to_string());
        self
    }

    pub fn with_experience_json(mut self, json: &str) -> Self {
        self.experience_json = Some(json.to_string());
        self
    }

    pub fn with_professional_json(mut self, json: &str) -> Self {
        self.professional_json = Some(json.to_string());
        self
    }

    pub fn with_motivation_json(mut self, json: &str) -> Self {
        self.motivation_json = Some(json.to_string());
        self
    }

    /// Text parts of the multipart body, in submission order. The four
    /// profile fields are always present; each JSON field only when set.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("full_name", self.full_name.clone()),
            ("email", self.email.clone()),
            ("github_url", self.github_url.clone()),
            ("role_applied", self.role_applied.clone()),
        ];
        let optional = [
            ("personal_json", &self.personal_json),
            ("education_json", &self.education_json),
            ("experience_json", &self.experience_json),
            ("professional_json", &self.professional_json),
            ("motivation_json", &self.motivation_json),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
        fields
    }
}

/// A resume attached to a new application.
#[derive(Clone, Debug, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: &str, mime_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        }
    }

    /// Reads a resume from disk. `.pdf` files are sent as `application/pdf`,
    /// anything else as `application/octet-stream`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        let mime_type = if is_pdf {
            "application/pdf"
        } else {
            "application/octet-stream"
        };
        Ok(Self::new(&file_name, mime_type, bytes))
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part, Error> {
        let part = reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)?;
        Ok(part)
    }
}
