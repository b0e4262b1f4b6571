//! Format-specific report renderers.
//!
//! Pure formatting over the generator's sorted views. Long environment
//! values are truncated for human-readable formats only; JSON always
//! carries full values.

use serde_json::json;

use crate::error::Result;
use crate::report::generator::ReportGenerator;
use crate::scan::types::{DetectedComponent, EnvironmentVariableInfo, ScanIssue};

const TITLE: &str = "Developer Environment Audit Report";
const NO_COMPONENTS: &str = "No components detected.";
const NO_VARIABLES: &str = "No environment variables collected or to display.";
const NO_ISSUES: &str = "No issues identified.";

/// Display truncation threshold for environment values.
const MAX_VALUE_DISPLAY: usize = 200;

pub fn render_text(report: &ReportGenerator<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", TITLE));
    out.push_str(&format!("Generated: {}\n", report.report_time));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    out.push_str("Detected Tools & Versions\n");
    out.push_str(&format!("{}\n", "-".repeat(30)));
    if report.components.is_empty() {
        out.push_str(&format!("{}\n", NO_COMPONENTS));
    } else {
        for comp in &report.components {
            out.push_str(&component_text(comp));
            out.push('\n');
        }
    }
    out.push('\n');

    out.push_str("Active Environment Variables\n");
    out.push_str(&format!("{}\n", "-".repeat(30)));
    if report.variables.is_empty() {
        out.push_str(&format!("{}\n", NO_VARIABLES));
    } else {
        for var in &report.variables {
            out.push_str(&env_var_text(var));
        }
    }
    out.push('\n');

    out.push_str("Identified Issues & Warnings\n");
    out.push_str(&format!("{}\n", "-".repeat(30)));
    if report.issues.is_empty() {
        out.push_str(&format!("{}\n", NO_ISSUES));
    } else {
        for issue in &report.issues {
            out.push_str(&format!("- {}\n", issue_line(issue)));
        }
    }

    out
}

pub fn render_markdown(report: &ReportGenerator<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", TITLE));
    out.push_str(&format!("**Generated:** {}\n\n---\n\n", report.report_time));

    out.push_str("## Detected Tools & Versions\n\n");
    if report.components.is_empty() {
        out.push_str(&format!("{}\n\n", NO_COMPONENTS));
    } else {
        for comp in &report.components {
            out.push_str(&component_markdown(comp));
            out.push('\n');
        }
    }
    out.push_str("---\n\n");

    out.push_str("## Active Environment Variables\n\n");
    if report.variables.is_empty() {
        out.push_str(&format!("{}\n", NO_VARIABLES));
    } else {
        for var in &report.variables {
            out.push_str(&env_var_markdown(var));
        }
    }
    out.push_str("\n---\n\n");

    out.push_str("## Identified Issues & Warnings\n\n");
    if report.issues.is_empty() {
        out.push_str(&format!("{}\n", NO_ISSUES));
    } else {
        for issue in &report.issues {
            out.push_str(&format!(
                "- **{} ({}):** {}{}{}\n",
                issue.severity,
                issue.category,
                issue.description,
                issue
                    .component_id
                    .as_deref()
                    .map(|id| format!(" (Component: {})", id))
                    .unwrap_or_default(),
                issue
                    .related_path
                    .as_deref()
                    .map(|p| format!(" (Path: {})", p.display()))
                    .unwrap_or_default(),
            ));
        }
    }

    out
}

pub fn render_json(report: &ReportGenerator<'_>) -> Result<String> {
    let value = json!({
        "report_time": &report.report_time,
        "detected_components": &report.components,
        "environment_variables": &report.variables,
        "issues": &report.issues,
    });
    Ok(serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?)
}

pub fn render_html(report: &ReportGenerator<'_>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang='en'>\n<head>\n");
    out.push_str("  <meta charset='UTF-8'>\n");
    out.push_str(&format!("  <title>{}</title>\n", TITLE));
    out.push_str(
        "  <style>\n\
         \x20   body { font-family: sans-serif; margin: 20px; line-height: 1.6; }\n\
         \x20   h1 { text-align: center; }\n\
         \x20   h2 { border-bottom: 2px solid #eee; padding-bottom: 10px; }\n\
         \x20   code { background-color: #eef; padding: 2px 5px; border-radius: 4px; }\n\
         \x20   .issue { border-left: 5px solid; padding-left: 10px; margin-bottom: 10px; }\n\
         \x20   .issue.Critical { border-color: red; }\n\
         \x20   .issue.Warning { border-color: orange; }\n\
         \x20   .issue.Info { border-color: dodgerblue; }\n\
         \x20 </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", TITLE));
    out.push_str(&format!(
        "<p class='timestamp'>Generated: {}</p>\n",
        escape_html(&report.report_time)
    ));

    out.push_str("<h2>Detected Tools &amp; Versions</h2>\n");
    if report.components.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", NO_COMPONENTS));
    } else {
        for comp in &report.components {
            out.push_str(&component_html(comp));
            out.push_str("<hr/>\n");
        }
    }

    out.push_str("<h2>Active Environment Variables</h2>\n<ul>\n");
    if report.variables.is_empty() {
        out.push_str(&format!("<li>{}</li>\n", NO_VARIABLES));
    } else {
        for var in &report.variables {
            out.push_str(&env_var_html(var));
        }
    }
    out.push_str("</ul>\n");

    out.push_str("<h2>Identified Issues &amp; Warnings</h2>\n");
    if report.issues.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", NO_ISSUES));
    } else {
        for issue in &report.issues {
            out.push_str(&format!(
                "<div class='issue {}'><b>{} ({}):</b> {}</div>\n",
                issue.severity,
                issue.severity,
                escape_html(&issue.category),
                escape_html(&issue_suffix(issue)),
            ));
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn component_text(comp: &DetectedComponent) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Tool: {} ({})", comp.name, comp.version));
    lines.push(format!("  ID: {}", comp.id));
    lines.push(format!("  Category: {}", comp.category));
    lines.push(format!("  Path: {}", comp.path.display()));
    if comp.executable_path != comp.path {
        lines.push(format!("  Executable: {}", comp.executable_path.display()));
    }
    if !comp.details.is_empty() {
        lines.push("  Details:".to_string());
        for (key, value) in &comp.details {
            lines.push(format!("    {}: {}", key, value));
        }
    }
    if let Some(update) = &comp.update_info {
        lines.push(format!(
            "  Update Status: {}",
            update_line(comp, update)
        ));
        lines.push(format!("    Update Command: `{}`", update.update_command));
    }
    if !comp.issues.is_empty() {
        lines.push("  Issues:".to_string());
        for issue in &comp.issues {
            lines.push(format!("    - {} ({})", issue.description, issue.severity));
        }
    }
    lines.join("\n") + "\n"
}

fn component_markdown(comp: &DetectedComponent) -> String {
    let mut lines = Vec::new();
    lines.push(format!("### {} ({})", comp.name, comp.version));
    lines.push(format!("- **ID:** `{}`", comp.id));
    lines.push(format!("- **Category:** {}", comp.category));
    lines.push(format!("- **Path:** `{}`", comp.path.display()));
    if comp.executable_path != comp.path {
        lines.push(format!("- **Executable:** `{}`", comp.executable_path.display()));
    }
    for (key, value) in &comp.details {
        lines.push(format!("  - **{}:** {}", key, value));
    }
    if let Some(update) = &comp.update_info {
        lines.push(format!("- **Update Status:** {}", update_line(comp, update)));
        lines.push(format!("  - Update Command: `{}`", update.update_command));
    }
    for issue in &comp.issues {
        lines.push(format!("  - *{} ({})*", issue.description, issue.severity));
    }
    lines.join("\n") + "\n"
}

fn component_html(comp: &DetectedComponent) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<h3>{} ({})</h3>\n<ul>\n",
        escape_html(&comp.name),
        escape_html(&comp.version)
    ));
    out.push_str(&format!("<li><b>ID:</b> <code>{}</code></li>\n", escape_html(&comp.id)));
    out.push_str(&format!(
        "<li><b>Category:</b> {}</li>\n",
        escape_html(&comp.category)
    ));
    out.push_str(&format!(
        "<li><b>Path:</b> <code>{}</code></li>\n",
        escape_html(&comp.path.to_string_lossy())
    ));
    if comp.executable_path != comp.path {
        out.push_str(&format!(
            "<li><b>Executable:</b> <code>{}</code></li>\n",
            escape_html(&comp.executable_path.to_string_lossy())
        ));
    }
    for (key, value) in &comp.details {
        out.push_str(&format!(
            "<li><em>{}:</em> {}</li>\n",
            escape_html(key),
            escape_html(value)
        ));
    }
    if let Some(update) = &comp.update_info {
        out.push_str(&format!(
            "<li><b>Update Status:</b> {}<br/>&nbsp;&nbsp;<em>Update Command: <code>{}</code></em></li>\n",
            escape_html(&update_line(comp, update)),
            escape_html(&update.update_command)
        ));
    }
    for issue in &comp.issues {
        out.push_str(&format!(
            "<li><em>{} ({})</em></li>\n",
            escape_html(&issue.description),
            issue.severity
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn env_var_text(var: &EnvironmentVariableInfo) -> String {
    let mut out = format!(
        "{} ({}): {}\n",
        var.name,
        var.scope,
        truncate_value(&var.value)
    );
    for issue in &var.issues {
        out.push_str(&format!(
            "  - Issue ({}): {}\n",
            issue.severity, issue.description
        ));
    }
    out
}

fn env_var_markdown(var: &EnvironmentVariableInfo) -> String {
    let mut out = format!(
        "- **`{}`** (`{}`): `{}`\n",
        var.name,
        var.scope,
        truncate_value(&var.value)
    );
    for issue in &var.issues {
        out.push_str(&format!(
            "  - *Issue ({}): {}*\n",
            issue.severity, issue.description
        ));
    }
    out
}

fn env_var_html(var: &EnvironmentVariableInfo) -> String {
    let mut out = format!(
        "<li><code>{}</code> (<i>{}</i>): <code>{}</code>",
        escape_html(&var.name),
        escape_html(&var.scope),
        escape_html(&truncate_value(&var.value))
    );
    if !var.issues.is_empty() {
        out.push_str("\n<ul>\n");
        for issue in &var.issues {
            out.push_str(&format!(
                "<li><em>Issue ({}): {}</em></li>\n",
                issue.severity,
                escape_html(&issue.description)
            ));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</li>\n");
    out
}

fn issue_line(issue: &ScanIssue) -> String {
    format!("{} ({}): {}", issue.severity, issue.category, issue_suffix(issue))
}

fn issue_suffix(issue: &ScanIssue) -> String {
    let mut line = issue.description.clone();
    if let Some(id) = &issue.component_id {
        line.push_str(&format!(" (Component: {})", id));
    }
    if let Some(path) = &issue.related_path {
        line.push_str(&format!(" (Path: {})", path.display()));
    }
    line
}

fn update_line(
    comp: &DetectedComponent,
    update: &crate::scan::types::UpdateInfo,
) -> String {
    let status = if update.is_update_available {
        "Update Available"
    } else {
        "Up-to-date"
    };
    format!(
        "{}: Installed {} -> Latest {} (via {})",
        status, comp.version, update.latest_version, update.package_manager_name
    )
}

fn truncate_value(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_DISPLAY {
        let truncated: String = value.chars().take(MAX_VALUE_DISPLAY).collect();
        format!("{}...", truncated)
    } else {
        value.to_string()
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
