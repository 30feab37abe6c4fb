//! HTML report generator.

use super::escape::{escape_html, escape_html_attr};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::quality::{Grade, ScoreReport, Severity};
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Leave out the inline stylesheet
    #[must_use]
    pub const fn without_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --accent-color: #89b4fa;
                --success-color: #a6e3a1;
                --warning-color: #f9e2af;
                --error-color: #f38ba8;
                --border-color: #45475a;
                --card-bg: #313244;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container { max-width: 1200px; margin: 0 auto; }
            h1, h2, h3 { color: var(--accent-color); }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .summary-cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 20px;
                margin-bottom: 30px;
            }

            .card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
            }

            .card-title { font-size: 0.9em; color: #a6adc8; margin-bottom: 10px; }
            .card-value { font-size: 2em; font-weight: bold; }

            .grade-a, .grade-b { color: var(--success-color); }
            .grade-c { color: var(--warning-color); }
            .grade-d, .grade-f { color: var(--error-color); }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 30px;
                background-color: var(--card-bg);
                border-radius: 8px;
                overflow: hidden;
            }

            th, td {
                padding: 12px 15px;
                text-align: left;
                border-bottom: 1px solid var(--border-color);
            }

            th { background-color: #45475a; font-weight: 600; }
            tr:hover { background-color: #3b3d4d; }
            code { font-size: 0.9em; }

            .bar {
                background-color: var(--border-color);
                border-radius: 4px;
                height: 8px;
                width: 160px;
            }

            .bar-fill {
                background-color: var(--accent-color);
                border-radius: 4px;
                height: 8px;
            }

            .badge {
                display: inline-block;
                padding: 2px 8px;
                border-radius: 4px;
                font-size: 0.85em;
                font-weight: 500;
            }

            .badge-critical { background-color: rgba(243, 139, 168, 0.3); color: var(--error-color); }
            .badge-high { background-color: rgba(250, 179, 135, 0.3); color: #fab387; }
            .badge-medium { background-color: rgba(249, 226, 175, 0.3); color: var(--warning-color); }
            .badge-low { background-color: rgba(148, 226, 213, 0.3); color: #94e2d5; }

            .section { margin-bottom: 40px; }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: #a6adc8;
            }
        </style>
        "#
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

const fn grade_class(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "grade-a",
        Grade::B => "grade-b",
        Grade::C => "grade-c",
        Grade::D => "grade-d",
        Grade::F => "grade-f",
    }
}

const fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge-critical",
        Severity::High => "badge-high",
        Severity::Medium => "badge-medium",
        Severity::Low => "badge-low",
    }
}

fn write_card(html: &mut String, title: &str, value: &str, class: &str) -> std::fmt::Result {
    writeln!(html, "    <div class=\"card\">")?;
    writeln!(html, "        <div class=\"card-title\">{title}</div>")?;
    writeln!(html, "        <div class=\"card-value {class}\">{value}</div>")?;
    writeln!(html, "    </div>")
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, report: &ScoreReport, config: &ReportConfig) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = config.display_title(report);
        let info = &report.spec_info;

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(&title))?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        // Header
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{}</h1>", escape_html(&title))?;
        writeln!(
            html,
            "    <p>{} {} &middot; {} paths &middot; {} operations</p>",
            escape_html(&info.title),
            escape_html(&info.version),
            info.path_count,
            info.operation_count
        )?;
        if let Some(source) = &config.source {
            writeln!(
                html,
                "    <p>Source: <code title=\"{}\">{}</code></p>",
                escape_html_attr(source),
                escape_html(source)
            )?;
        }
        writeln!(html, "</div>")?;

        // Summary cards
        writeln!(html, "<div class=\"summary-cards\">")?;
        write_card(
            &mut html,
            "Overall Score",
            &format!("{:.2}", report.overall_score),
            "",
        )?;
        write_card(
            &mut html,
            "Grade",
            report.grade.letter(),
            grade_class(report.grade),
        )?;
        write_card(&mut html, "Total Issues", &report.total_issues.to_string(), "")?;
        write_card(
            &mut html,
            "Critical / High",
            &format!(
                "{} / {}",
                report.summary.critical_issues, report.summary.high_issues
            ),
            "grade-f",
        )?;
        writeln!(html, "</div>")?;

        // Criteria
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>Criteria</h2>")?;
        writeln!(html, "    <table>")?;
        writeln!(html, "        <thead>")?;
        writeln!(
            html,
            "            <tr><th>Criterion</th><th>Score</th><th>Max</th><th></th><th>Issues</th></tr>"
        )?;
        writeln!(html, "        </thead>")?;
        writeln!(html, "        <tbody>")?;
        for result in &report.results {
            writeln!(html, "            <tr>")?;
            writeln!(html, "                <td>{}</td>", escape_html(result.criterion.name()))?;
            writeln!(html, "                <td>{:.1}</td>", result.score)?;
            writeln!(html, "                <td>{:.1}</td>", result.max_score)?;
            writeln!(
                html,
                "                <td><div class=\"bar\"><div class=\"bar-fill\" style=\"width: {:.0}%\"></div></div></td>",
                result.percentage()
            )?;
            writeln!(html, "                <td>{}</td>", result.issues.len())?;
            writeln!(html, "            </tr>")?;
        }
        writeln!(html, "        </tbody>")?;
        writeln!(html, "    </table>")?;
        writeln!(html, "</div>")?;

        // Issues
        let visible = config.visible_issues(report);
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>Issues ({})</h2>", visible.len())?;
        if visible.is_empty() {
            writeln!(html, "    <p>No issues to report.</p>")?;
        } else {
            writeln!(html, "    <table>")?;
            writeln!(html, "        <thead>")?;
            writeln!(
                html,
                "            <tr><th>Severity</th><th>Criterion</th><th>Location</th><th>Description</th><th>Remediation</th></tr>"
            )?;
            writeln!(html, "        </thead>")?;
            writeln!(html, "        <tbody>")?;
            for issue in &visible {
                writeln!(html, "            <tr>")?;
                writeln!(
                    html,
                    "                <td><span class=\"badge {}\">{}</span></td>",
                    severity_class(issue.severity),
                    issue.severity
                )?;
                writeln!(html, "                <td>{}</td>", escape_html(issue.criterion.name()))?;
                writeln!(
                    html,
                    "                <td><code>{}</code></td>",
                    escape_html(&issue.target())
                )?;
                writeln!(html, "                <td>{}</td>", escape_html(&issue.description))?;
                writeln!(html, "                <td>{}</td>", escape_html(&issue.remediation))?;
                writeln!(html, "            </tr>")?;
            }
            writeln!(html, "        </tbody>")?;
            writeln!(html, "    </table>")?;
        }
        writeln!(html, "</div>")?;

        // Footer
        writeln!(html, "<div class=\"footer\">")?;
        writeln!(
            html,
            "    <p>Generated by api-scorer v{} (scoring engine {}) on {}</p>",
            env!("CARGO_PKG_VERSION"),
            escape_html(&report.engine_version),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(html, "</div>")?;

        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}
