mod application;
pub use self::application::{Application, ApplicationID, NewApplication, ResumeFile};

mod plan;
pub(crate) use self::plan::ModifyPlanRequest;
pub use self::plan::{PlanOptions, PlanWeek, TrainingPlan};

mod stats;
pub use self::stats::ApplicationStats;

mod status;
pub(crate) use self::status::StatusChangeRequest;
pub use self::status::{ApplicationStatus, ParseStatusError, StatusUpdate};
