//! Application lifecycle labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status a caller may ask the server to move an application to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusUpdate {
    InReview,
    Accepted,
    Rejected,
    Intern,
}

impl StatusUpdate {
    pub const ALL: [StatusUpdate; 4] = [
        StatusUpdate::InReview,
        StatusUpdate::Accepted,
        StatusUpdate::Rejected,
        StatusUpdate::Intern,
    ];

    /// Wire label, e.g. `in_review`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusUpdate::InReview => "in_review",
            StatusUpdate::Accepted => "accepted",
            StatusUpdate::Rejected => "rejected",
            StatusUpdate::Intern => "intern",
        }
    }
}

impl fmt::Display for StatusUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
pub(crate) struct StatusChangeRequest {
    pub status: StatusUpdate,
}

/// Returned when a string is not one of the [`StatusUpdate`] labels.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown status '{0}', expected one of: in_review, accepted, rejected, intern")]
pub struct ParseStatusError(pub String);

impl FromStr for StatusUpdate {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "in_review" => Ok(StatusUpdate::InReview),
            "accepted" => Ok(StatusUpdate::Accepted),
            "rejected" => Ok(StatusUpdate::Rejected),
            "intern" => Ok(StatusUpdate::Intern),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Status carried by an application record.
///
/// Superset of [`StatusUpdate`]: new applications start out `pending`, and
/// labels this client does not know are kept verbatim in `Other`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Pending,
    InReview,
    Accepted,
    Rejected,
    Intern,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::InReview => "in_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Intern => "intern",
            ApplicationStatus::Other(s) => s,
        }
    }

    /// Statuses the server accepts as the next step from this one.
    ///
    /// Advisory only: the server owns the transition rules and the client
    /// never refuses to send an update.
    pub fn allowed_transitions(&self) -> &'static [StatusUpdate] {
        match self {
            ApplicationStatus::Pending => &[
                StatusUpdate::InReview,
                StatusUpdate::Accepted,
                StatusUpdate::Rejected,
            ],
            ApplicationStatus::InReview => &[StatusUpdate::Accepted, StatusUpdate::Rejected],
            ApplicationStatus::Accepted => &[StatusUpdate::Intern],
            ApplicationStatus::Rejected
            | ApplicationStatus::Intern
            | ApplicationStatus::Other(_) => &[],
        }
    }

    pub fn can_transition_to(&self, next: StatusUpdate) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// True once no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl From<String> for ApplicationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => ApplicationStatus::Pending,
            "in_review" => ApplicationStatus::InReview,
            "accepted" => ApplicationStatus::Accepted,
            "rejected" => ApplicationStatus::Rejected,
            "intern" => ApplicationStatus::Intern,
            _ => ApplicationStatus::Other(s),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl From<StatusUpdate> for ApplicationStatus {
    fn from(status: StatusUpdate) -> Self {
        match status {
            StatusUpdate::InReview => ApplicationStatus::InReview,
            StatusUpdate::Accepted => ApplicationStatus::Accepted,
            StatusUpdate::Rejected => ApplicationStatus::Rejected,
            StatusUpdate::Intern => ApplicationStatus::Intern,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_update_serializes_snake_case() {
        let json = serde_json::to_string(&StatusUpdate::InReview).unwrap();
        assert_eq!(json, "\"in_review\"");
    }

    #[test]
    fn status_update_parses_loosely() {
        assert_eq!("In-Review".parse::<StatusUpdate>(), Ok(StatusUpdate::InReview));
        assert_eq!(" intern ".parse::<StatusUpdate>(), Ok(StatusUpdate::Intern));
        assert!("pending".parse::<StatusUpdate>().is_err());
    }

    #[test]
    fn unknown_record_status_is_preserved() {
        let status: ApplicationStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status, ApplicationStatus::Other("on_hold".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"on_hold\"");
    }

    #[test]
    fn transitions_follow_server_table() {
        assert!(ApplicationStatus::Pending.can_transition_to(StatusUpdate::InReview));
        assert!(ApplicationStatus::Pending.can_transition_to(StatusUpdate::Accepted));
        assert!(!ApplicationStatus::Pending.can_transition_to(StatusUpdate::Intern));
        assert!(!ApplicationStatus::InReview.can_transition_to(StatusUpdate::InReview));
        assert!(ApplicationStatus::Accepted.can_transition_to(StatusUpdate::Intern));
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(ApplicationStatus::Intern.is_terminal());
    }
}
