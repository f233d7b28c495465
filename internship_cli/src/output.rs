use internship_api::types::{Application, ApplicationStats, PlanWeek};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a plain table.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct ApplicationRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Trust")]
    trust: String,
    #[tabled(rename = "Created")]
    created: String,
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Total")]
    total: u64,
    #[tabled(rename = "Pending Review")]
    pending_review: u64,
    #[tabled(rename = "Accepted")]
    accepted: u64,
    #[tabled(rename = "Rejected")]
    rejected: u64,
    #[tabled(rename = "New This Week")]
    new_this_week: u64,
}

#[derive(Tabled)]
struct PlanWeekRow {
    #[tabled(rename = "Week")]
    week: u32,
    #[tabled(rename = "Goal")]
    goal: String,
    #[tabled(rename = "Topics")]
    topics: String,
    #[tabled(rename = "Deliverables")]
    deliverables: String,
}

// -- Row builders --

fn build_application_rows(apps: &[Application]) -> Vec<ApplicationRow> {
    apps.iter()
        .map(|a| ApplicationRow {
            id: a.id,
            name: a.full_name.clone(),
            role: a.role_applied.clone(),
            status: a.status.to_string(),
            score: format_score(a.master_score),
            band: a.confidence_band.clone().unwrap_or_else(|| "-".to_string()),
            trust: format_score(a.trust_score),
            created: a
                .created_at
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_stats_row(stats: &ApplicationStats) -> StatsRow {
    StatsRow {
        total: stats.total_applications,
        pending_review: stats.pending_review,
        accepted: stats.accepted,
        rejected: stats.rejected,
        new_this_week: stats.new_this_week,
    }
}

fn build_plan_rows(weeks: &[PlanWeek]) -> Vec<PlanWeekRow> {
    weeks
        .iter()
        .map(|w| PlanWeekRow {
            week: w.week,
            goal: w.goal.clone(),
            topics: w.topics.join(", "),
            deliverables: w.deliverables.join(", "),
        })
        .collect()
}

fn render<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

// -- Printers --

pub fn print_applications(apps: &[Application], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&apps),
        _ => println!("{}", render(build_application_rows(apps), format)),
    }
}

pub fn print_stats(stats: &ApplicationStats, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(stats),
        _ => println!("{}", render(vec![build_stats_row(stats)], format)),
    }
}

/// Plan weeks only make sense as a table; JSON callers get the full record instead.
pub fn print_plan_weeks(weeks: &[PlanWeek], format: &OutputFormat) {
    if *format != OutputFormat::Json && !weeks.is_empty() {
        println!("{}", render(build_plan_rows(weeks), format));
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.1}", s),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_applications_fixture() -> Vec<Application> {
        let json_str = include_str!("../../internship_api/tests/fixtures/applications.json");
        serde_json::from_str(json_str).unwrap()
    }

    fn load_application_fixture() -> Application {
        let json_str = include_str!("../../internship_api/tests/fixtures/application.json");
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(78.5)), "78.5");
        assert_eq!(format_score(Some(0.87)), "0.9");
        assert_eq!(format_score(None), "-");
    }

    #[test]
    fn test_output_format_from_flag() {
        assert_eq!(OutputFormat::from_flag("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_flag("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_build_application_rows_mapping() {
        let apps = load_applications_fixture();
        let rows = build_application_rows(&apps);
        assert_eq!(rows.len(), 2);

        let pending = &rows[0];
        assert_eq!(pending.id, 43);
        assert_eq!(pending.name, "Grace Hopper");
        assert_eq!(pending.status, "pending");
        assert_eq!(pending.score, "-");
        assert_eq!(pending.band, "-");
        assert_eq!(pending.created, "2025-03-15");

        let accepted = &rows[1];
        assert_eq!(accepted.status, "accepted");
        assert_eq!(accepted.score, "91.0");
        assert_eq!(accepted.band, "Strong");
        assert_eq!(accepted.created, "2025-03-14");
    }

    #[test]
    fn test_build_application_rows_empty() {
        assert!(build_application_rows(&[]).is_empty());
    }

    #[test]
    fn test_build_stats_row() {
        let stats = ApplicationStats {
            total_applications: 10,
            pending_review: 3,
            accepted: 5,
            rejected: 2,
            new_this_week: 1,
        };
        let row = build_stats_row(&stats);
        assert_eq!(row.total, 10);
        assert_eq!(row.pending_review, 3);
        assert_eq!(row.new_this_week, 1);
    }

    #[test]
    fn test_build_plan_rows() {
        let app = load_application_fixture();
        let plan = app.training_plan().unwrap().unwrap();
        let rows = build_plan_rows(&plan.weekly_plan);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].topics, "HTTP, JSON");
        assert_eq!(rows[0].deliverables, "Repo link");
        assert_eq!(rows[1].deliverables, "");
    }

    #[test]
    fn test_markdown_render_uses_pipes() {
        let apps = load_applications_fixture();
        let out = render(build_application_rows(&apps), &OutputFormat::Markdown);
        assert!(out.starts_with("| ID"));
        assert!(out.contains("Grace Hopper"));
    }
}
