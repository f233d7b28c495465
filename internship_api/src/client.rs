//! HTTP client for the internship applications API.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::ClientConfig,
    response::{classify_error_body, truncate_body},
    types::{
        Application, ApplicationID, ApplicationStats, ModifyPlanRequest, NewApplication,
        PlanOptions, ResumeFile, StatusChangeRequest, StatusUpdate,
    },
    Error,
};

const USER_AGENT: &str = concat!("internship_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the applications API.
///
/// Each method issues exactly one request and runs the response through
/// the same handler: non-success statuses become [`Error::Api`] with the
/// server's message, success bodies are decoded into the method's result
/// type. Nothing is retried or cached. The underlying `reqwest::Client` is
/// shared, so one `Client` can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Creates a client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, config })
    }

    /// Creates a client from `INTERNSHIP_API_URL`, or the loopback default.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::new(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let raw = format!("{}{}", self.config.base_url(), path);
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {} ({})", raw, e);
            Error::InvalidUrl(format!("{}: {}", raw, e))
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let url = self.get_url(path)?;
        tracing::debug!("{} {}", method, url);
        Ok(self
            .http
            .request(method, url)
            .header("accept", "application/json"))
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to reach API: {}", e);
            Error::Transport(e)
        })?;
        handle_response(resp).await
    }

    /// Submits a new application, optionally with a resume attached.
    pub async fn create_application(
        &self,
        payload: &NewApplication,
        resume: Option<ResumeFile>,
    ) -> Result<Application, Error> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in payload.form_fields() {
            form = form.text(name, value);
        }
        if let Some(resume) = resume {
            form = form.part("resume_file", resume.into_part()?);
        }
        let request = self.request(Method::POST, "/applications")?.multipart(form);
        self.send(request).await
    }

    /// Lists every application, newest first.
    pub async fn get_applications(&self) -> Result<Vec<Application>, Error> {
        let request = self.request(Method::GET, "/applications")?;
        self.send(request).await
    }

    /// Fetches a single application by its ID.
    pub async fn get_application_by_id(&self, id: ApplicationID) -> Result<Application, Error> {
        let request = self.request(Method::GET, &format!("/applications/{}", id))?;
        self.send(request).await
    }

    /// Fetches the dashboard counters.
    pub async fn get_application_stats(&self) -> Result<ApplicationStats, Error> {
        let request = self.request(Method::GET, "/applications/stats")?;
        self.send(request).await
    }

    /// Generates (or regenerates) the training plan. `None` sends `{}` and
    /// leaves every choice to the server.
    pub async fn generate_plan(
        &self,
        id: ApplicationID,
        options: Option<&PlanOptions>,
    ) -> Result<Application, Error> {
        let default_options = PlanOptions::default();
        let body = options.unwrap_or(&default_options);
        let request = self
            .request(Method::POST, &format!("/applications/{}/generate-plan", id))?
            .json(body);
        self.send(request).await
    }

    /// Asks the server to revise the existing plan according to `message`.
    pub async fn modify_plan(&self, id: ApplicationID, message: &str) -> Result<Application, Error> {
        let request = self
            .request(Method::POST, &format!("/applications/{}/modify-plan", id))?
            .json(&ModifyPlanRequest { message });
        self.send(request).await
    }

    /// Moves the application to a new status. The server rejects
    /// transitions it does not allow, see
    /// [`crate::types::ApplicationStatus::allowed_transitions`].
    pub async fn update_status(
        &self,
        id: ApplicationID,
        status: StatusUpdate,
    ) -> Result<Application, Error> {
        let request = self
            .request(Method::PATCH, &format!("/applications/{}/status", id))?
            .json(&StatusChangeRequest { status });
        self.send(request).await
    }

    /// Runs the server-side verification pipeline for the application.
    pub async fn verify_application(&self, id: ApplicationID) -> Result<Application, Error> {
        let request = self.request(Method::POST, &format!("/applications/{}/verify", id))?;
        self.send(request).await
    }
}

/// Shared response handler for every operation.
async fn handle_response<T>(resp: Response) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::Transport(e)
    })?;

    if !status.is_success() {
        let message = classify_error_body(status.as_u16(), &body);
        tracing::error!(
            "Request failed with status {}: {}",
            status,
            truncate_body(&body)
        );
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        tracing::error!(
            "Failed to parse response: {} | body: {}",
            e,
            truncate_body(&body)
        );
        Error::Decode {
            status: status.as_u16(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let client = Client::with_base_url("http://localhost:8000/").unwrap();
        let url = client.get_url("/applications/42/generate-plan").unwrap();
        insta::assert_snapshot!(url.to_string(), @"http://localhost:8000/applications/42/generate-plan");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let client = Client::with_base_url("https://hr.example.com/api").unwrap();
        let url = client.get_url("/applications/stats").unwrap();
        insta::assert_snapshot!(url.to_string(), @"https://hr.example.com/api/applications/stats");
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let client = Client::with_base_url("not a url").unwrap();
        let err = client.get_url("/applications").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn clients_keep_independent_configs() {
        let a = Client::with_base_url("http://a.test").unwrap();
        let b = Client::with_base_url("http://b.test").unwrap();
        assert_ne!(a.config(), b.config());
    }
}
