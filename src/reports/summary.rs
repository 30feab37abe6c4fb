//! Summary report generator for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::quality::{Grade, ScoreReport, Severity};
use std::fmt::Write as _;

/// Issues listed when the config sets no limit.
const DEFAULT_MAX_ISSUES: usize = 10;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A | Grade::B => "green",
        Grade::C => "yellow",
        Grade::D | Grade::F => "red",
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "dim",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &ScoreReport, config: &ReportConfig) -> Result<String, ReportError> {
        let mut out = String::new();
        let info = &report.spec_info;

        writeln!(out, "{}", self.color(&config.display_title(report), "bold"))?;
        writeln!(out, "{}", self.color(&"─".repeat(48), "dim"))?;
        if let Some(source) = &config.source {
            writeln!(out, "{}  {source}", self.color("Source:", "cyan"))?;
        }
        writeln!(
            out,
            "{}     {} {} ({} paths, {} operations)",
            self.color("API:", "cyan"),
            if info.title.is_empty() { "(untitled)" } else { info.title.as_str() },
            info.version,
            info.path_count,
            info.operation_count
        )?;
        let grade = format!("{} ({})", report.grade.letter(), report.grade.description());
        writeln!(
            out,
            "{}   {:.2} / {:.0}  Grade {}",
            self.color("Score:", "cyan"),
            report.overall_score,
            report.max_score(),
            self.color(&grade, grade_color(report.grade))
        )?;
        let s = &report.summary;
        writeln!(
            out,
            "{}  {} ({} critical, {} high, {} medium, {} low)",
            self.color("Issues:", "cyan"),
            report.total_issues,
            s.critical_issues,
            s.high_issues,
            s.medium_issues,
            s.low_issues
        )?;
        writeln!(out)?;

        writeln!(out, "{}", self.color("Criteria:", "bold"))?;
        for result in &report.results {
            let count = result.issues.len();
            writeln!(
                out,
                "  {:<20} {:>6.1} / {:<5.1} {}",
                result.criterion.name(),
                result.score,
                result.max_score,
                self.color(
                    &format!("{count} issue{}", if count == 1 { "" } else { "s" }),
                    if count == 0 { "green" } else { "dim" }
                )
            )?;
        }

        // Most severe first; sort is stable so evaluation order breaks ties.
        let mut issues = report
            .issues()
            .filter(|i| config.includes(i))
            .collect::<Vec<_>>();
        issues.sort_by(|a, b| b.severity.cmp(&a.severity));
        let limit = config.max_issues.unwrap_or(DEFAULT_MAX_ISSUES);

        if !issues.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", self.color("Top issues:", "bold"))?;
            for issue in issues.iter().take(limit) {
                let tag = format!("[{}]", issue.severity);
                writeln!(
                    out,
                    "  {:<10} {}  {}",
                    self.color(&tag, severity_color(issue.severity)),
                    issue.target(),
                    issue.description
                )?;
            }
            if issues.len() > limit {
                writeln!(
                    out,
                    "  {}",
                    self.color(&format!("... and {} more", issues.len() - limit), "dim")
                )?;
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_plain_summary() {
        let report = sample_report();
        let output = SummaryReporter::new()
            .no_color()
            .generate(&report, &ReportConfig::default().with_source("pets.yaml"))
            .expect("renders");
        assert!(!output.contains("\x1b["));
        assert!(output.contains("Source:  pets.yaml"));
        assert!(output.contains(&format!("Grade {}", report.grade.letter())));
        assert!(output.contains("Paths & Operations"));
        assert!(output.contains("Top issues:"));
    }

    #[test]
    fn test_colored_summary() {
        let output = SummaryReporter::new()
            .generate(&sample_report(), &ReportConfig::default())
            .expect("renders");
        assert!(output.contains("\x1b[1m"));
    }

    #[test]
    fn test_issue_limit_and_filter() {
        let report = sample_report();
        let config = ReportConfig::default().with_max_issues(2);
        let output = SummaryReporter::new().no_color().generate(&report, &config).expect("renders");
        assert!(output.contains(&format!("... and {} more", report.total_issues - 2)));

        let config = ReportConfig::default().with_min_severity(Severity::Critical);
        let output = SummaryReporter::new().no_color().generate(&report, &config).expect("renders");
        assert!(!output.contains("Top issues:"));
    }
}
