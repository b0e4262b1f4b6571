//! Report assembly over a scan result.

use std::fs;
use std::path::Path;

use crate::error::{AuditError, Result};
use crate::report::render;
use crate::scan::types::{DetectedComponent, EnvironmentVariableInfo, ScanIssue, ScanResult};

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
    Html,
}

/// Formats a scan result for display and export.
///
/// Sorting is applied defensively here even though the scanner already
/// sorts — a generator built from hand-assembled data renders in the same
/// canonical order.
pub struct ReportGenerator<'a> {
    pub(crate) components: Vec<&'a DetectedComponent>,
    pub(crate) variables: Vec<&'a EnvironmentVariableInfo>,
    pub(crate) issues: Vec<&'a ScanIssue>,
    pub(crate) report_time: String,
}

impl<'a> ReportGenerator<'a> {
    /// Build a generator over a scan result.
    pub fn new(result: &'a ScanResult) -> Self {
        let mut components: Vec<&DetectedComponent> = result.components.iter().collect();
        components.sort_by(|a, b| {
            (&a.category, &a.name, &a.version).cmp(&(&b.category, &b.name, &b.version))
        });

        let mut variables: Vec<&EnvironmentVariableInfo> =
            result.environment_variables.iter().collect();
        variables.sort_by(|a, b| a.name.cmp(&b.name));

        let mut issues: Vec<&ScanIssue> = result.issues.iter().collect();
        issues.sort_by(|a, b| {
            (a.severity, &a.category, &a.description).cmp(&(b.severity, &b.category, &b.description))
        });

        Self {
            components,
            variables,
            issues,
            report_time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Render the report in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(render::render_text(self)),
            ReportFormat::Markdown => Ok(render::render_markdown(self)),
            ReportFormat::Html => Ok(render::render_html(self)),
            ReportFormat::Json => render::render_json(self),
        }
    }

    /// Render and write the report to a file.
    pub fn export(&self, format: ReportFormat, path: &Path) -> Result<()> {
        let content = self.render(format)?;
        fs::write(path, content).map_err(|e| AuditError::ReportExport {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("report written to {}", path.display());
        Ok(())
    }
}
