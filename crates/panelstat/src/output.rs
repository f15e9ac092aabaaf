use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Skip,
}

impl CheckStatus {
    fn text(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Warn => "WARN",
            CheckStatus::Skip => "SKIP",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
}

impl CheckResult {
    pub fn new(name: &str, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub checks: Vec<CheckResult>,
    pub overall: &'static str,
}

impl Report {
    pub fn new(checks: Vec<CheckResult>) -> Self {
        let has_fail = checks.iter().any(|c| c.status == CheckStatus::Fail);
        Self {
            checks,
            overall: if has_fail { "fail" } else { "pass" },
        }
    }

    pub fn failed(&self) -> bool {
        self.overall == "fail"
    }
}

pub fn print_report(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CHECK", "STATUS", "DETAIL"]);
            for c in &report.checks {
                table.add_row(vec![
                    c.name.clone(),
                    c.status.text().to_string(),
                    c.detail.clone(),
                ]);
            }
            println!("{table}");
            println!("overall: {}", report.overall);
        }
        OutputFormat::Pretty => {
            for c in &report.checks {
                println!("  [{:>4}] {:<20} {}", c.status.text(), c.name, c.detail);
            }
            println!("\n  Result: {}", report.overall);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_reflects_failures() {
        let ok = Report::new(vec![CheckResult::new("a", CheckStatus::Pass, "ok")]);
        assert_eq!(ok.overall, "pass");
        assert!(!ok.failed());

        let bad = Report::new(vec![
            CheckResult::new("a", CheckStatus::Pass, "ok"),
            CheckResult::new("b", CheckStatus::Fail, "nope"),
        ]);
        assert!(bad.failed());
    }

    #[test]
    fn warnings_do_not_fail_the_report() {
        let report = Report::new(vec![CheckResult::new("a", CheckStatus::Warn, "meh")]);
        assert_eq!(report.overall, "pass");
    }

    #[test]
    fn report_serializes_with_lowercase_status() {
        let report = Report::new(vec![CheckResult::new("dev", CheckStatus::Pass, "found")]);
        let json = serde_json::to_string(&report).expect("report should serialize");
        assert!(json.contains("\"status\":\"pass\""));
        assert!(json.contains("\"overall\":\"pass\""));
    }
}
