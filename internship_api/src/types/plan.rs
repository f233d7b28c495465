//! Training plan shapes and the options used to request one.

use serde::{Deserialize, Serialize};

/// Optional knobs for `generate-plan`. Unset fields are left out of the
/// request body so the server applies its own defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlanOptions {
    /// Plan length in weeks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<u32>,
    /// Hours per day the candidate can dedicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_hours: Option<f64>,
    /// Role to plan for when it differs from the one applied for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
}

impl PlanOptions {
    pub fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = Some(weeks);
        self
    }

    pub fn with_daily_hours(mut self, daily_hours: f64) -> Self {
        self.daily_hours = Some(daily_hours);
        self
    }

    pub fn with_target_role(mut self, target_role: &str) -> Self {
        self.target_role = Some(target_role.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_none() && self.daily_hours.is_none() && self.target_role.is_none()
    }
}

#[derive(Serialize)]
pub(crate) struct ModifyPlanRequest<'a> {
    pub message: &'a str,
}

/// Decoded `training_plan_json` of an application.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TrainingPlan {
    pub summary: String,
    pub focus_areas: Vec<String>,
    pub weekly_plan: Vec<PlanWeek>,
}

/// One week of a [`TrainingPlan`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PlanWeek {
    pub week: u32,
    pub goal: String,
    pub objectives: Vec<String>,
    pub topics: Vec<String>,
    pub tasks: Vec<String>,
    pub deliverables: Vec<String>,
}
