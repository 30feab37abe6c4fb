//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table, markdown_code_span};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::quality::{Criterion, Issue, ScoreReport};
use std::fmt::Write as _;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the remediation column in issue tables
    include_remediation: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_remediation: true,
        }
    }

    /// Drop the remediation column
    #[must_use]
    pub const fn without_remediation(mut self) -> Self {
        self.include_remediation = false;
        self
    }

    fn write_issue_table(&self, md: &mut String, issues: &[&Issue]) -> std::fmt::Result {
        if self.include_remediation {
            writeln!(md, "| Severity | Location | Description | Remediation |")?;
            writeln!(md, "|----------|----------|-------------|-------------|")?;
        } else {
            writeln!(md, "| Severity | Location | Description |")?;
            writeln!(md, "|----------|----------|-------------|")?;
        }
        for issue in issues {
            write!(
                md,
                "| {} | `{}` | {} |",
                issue.severity,
                escape_markdown_table(&issue.target()),
                escape_markdown_table(&issue.description)
            )?;
            if self.include_remediation {
                write!(md, " {} |", escape_markdown_table(&issue.remediation))?;
            }
            writeln!(md)?;
        }
        writeln!(md)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, report: &ScoreReport, config: &ReportConfig) -> Result<String, ReportError> {
        let mut md = String::new();
        let info = &report.spec_info;

        writeln!(md, "# {}\n", escape_markdown_inline(&config.display_title(report)))?;
        if let Some(source) = &config.source {
            writeln!(md, "**Source:** {}  ", markdown_code_span(source))?;
        }
        writeln!(
            md,
            "**API:** {} {}  ",
            escape_markdown_inline(&info.title),
            escape_markdown_inline(&info.version)
        )?;
        writeln!(
            md,
            "**Score:** {:.2} / {:.0} (Grade **{}**, {})  ",
            report.overall_score,
            report.max_score(),
            report.grade.letter(),
            report.grade.description()
        )?;
        writeln!(
            md,
            "**Generated:** {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        writeln!(md, "## Summary\n")?;
        writeln!(md, "| Metric | Count |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Paths | {} |", info.path_count)?;
        writeln!(md, "| Operations | {} |", info.operation_count)?;
        writeln!(md, "| Total issues | {} |", report.total_issues)?;
        writeln!(md, "| Critical | {} |", report.summary.critical_issues)?;
        writeln!(md, "| High | {} |", report.summary.high_issues)?;
        writeln!(md, "| Medium | {} |", report.summary.medium_issues)?;
        writeln!(md, "| Low | {} |\n", report.summary.low_issues)?;

        writeln!(md, "## Criteria\n")?;
        writeln!(md, "| Criterion | Score | Max | Issues |")?;
        writeln!(md, "|-----------|-------|-----|--------|")?;
        for result in &report.results {
            writeln!(
                md,
                "| {} | {:.1} | {:.1} | {} |",
                result.criterion.name(),
                result.score,
                result.max_score,
                result.issues.len()
            )?;
        }
        writeln!(md)?;

        let visible = config.visible_issues(report);
        writeln!(md, "## Issues\n")?;
        if visible.is_empty() {
            writeln!(md, "No issues to report.")?;
            return Ok(md);
        }

        for criterion in Criterion::ALL {
            let issues: Vec<&Issue> = visible
                .iter()
                .copied()
                .filter(|i| i.criterion == criterion)
                .collect();
            if issues.is_empty() {
                continue;
            }
            writeln!(md, "### {} ({})\n", criterion.name(), issues.len())?;
            self.write_issue_table(&mut md, &issues)?;
        }

        let hidden = report.total_issues - visible.len();
        if hidden > 0 {
            writeln!(md, "_{hidden} issue(s) not shown._")?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
