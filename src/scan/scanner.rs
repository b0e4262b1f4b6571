//! Scan orchestration.
//!
//! Sequences the pipeline — identifying tools, collecting environment
//! variables, sweeping the filesystem, cross-referencing package managers —
//! and aggregates everything into one [`ScanResult`]. One scanner instance
//! serves exactly one scan; `run_scan` consumes it.
//!
//! Failure isolation: any single tool's or variable's failure is recorded
//! or skipped, never allowed to abort the rest of the scan.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ScanOptions;
use crate::error::Result;
use crate::pm;
use crate::scan::catalog::{find_by_name, ToolSpec};
use crate::scan::categorizer::categorize;
use crate::scan::env_vars::analyze_environment;
use crate::scan::fs_scan::sweep_for_candidates;
use crate::scan::locator::ExecutableLocator;
use crate::scan::observer::ScanObserver;
use crate::scan::types::{
    DetectedComponent, ScanIssue, ScanResult, ScanSummary, Severity,
};
use crate::scan::version::{extract_version, UNKNOWN_VERSION};

/// Cooperative cancellation flag, checked between stages and between
/// per-tool iterations. Partial results up to the cancellation point
/// remain valid.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Request cancellation of the associated scan.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Orchestrates one environment scan.
pub struct EnvironmentScanner<'a> {
    options: ScanOptions,
    catalog: &'a [ToolSpec],
    observer: &'a dyn ScanObserver,
    locator: ExecutableLocator,
    cancel: CancelToken,
}

impl<'a> EnvironmentScanner<'a> {
    /// Create a scanner over the current process's PATH.
    ///
    /// The catalog is passed in explicitly so tests can substitute their
    /// own tables.
    pub fn new(
        options: ScanOptions,
        catalog: &'a [ToolSpec],
        observer: &'a dyn ScanObserver,
    ) -> Self {
        Self {
            options,
            catalog,
            observer,
            locator: ExecutableLocator::new(),
            cancel: CancelToken::default(),
        }
    }

    /// Replace the search path used for executable resolution.
    pub fn with_search_path(mut self, search_path: Vec<PathBuf>) -> Self {
        self.locator = ExecutableLocator::with_search_path(search_path);
        self
    }

    /// Token for cancelling this scan from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run the full pipeline and return the aggregated result.
    ///
    /// Synchronous from the caller's perspective: stages execute in order
    /// and observer callbacks fire during execution. Raises only when the
    /// scan cannot begin at all.
    pub fn run_scan(mut self) -> Result<ScanResult> {
        let start = Instant::now();
        self.observer.on_status("Starting scan");

        let do_env = self.options.scan_env_vars;
        let do_fs = !self.options.scan_paths.is_empty();
        let do_xref = self.options.cross_reference_tools && self.options.perform_update_checks;
        let total_steps = self.catalog.len()
            + usize::from(do_env)
            + usize::from(do_fs)
            + usize::from(do_xref);
        let mut step = 0;

        let mut components: Vec<DetectedComponent> = Vec::new();
        let mut variables = Vec::new();
        let issues: Vec<ScanIssue> = Vec::new();
        let mut used_ids: HashSet<String> = HashSet::new();
        let mut found_tool_ids: HashSet<&str> = HashSet::new();
        let mut cancelled = false;

        // Stage: identifying tools.
        self.observer.on_status("Identifying installed tools");
        for spec in self.catalog {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            step += 1;
            self.observer
                .on_progress(step, total_steps, &format!("Identifying {}", spec.name));

            if self.options.is_ignored(spec.id) {
                continue;
            }
            if let Some(component) = self.identify_tool(spec, &mut used_ids) {
                if !self.options.is_ignored(&component.id) {
                    found_tool_ids.insert(spec.id);
                    components.push(component);
                }
            }
        }

        // Stage: collecting environment variables.
        if do_env && !cancelled {
            step += 1;
            self.observer
                .on_progress(step, total_steps, "Collecting environment variables");
            variables = analyze_environment();
        }
        cancelled = cancelled || self.cancel.is_cancelled();

        // Stage: scanning filesystem for portable installs.
        if do_fs && !cancelled {
            step += 1;
            self.observer
                .on_progress(step, total_steps, "Scanning filesystem");
            self.sweep_filesystem(&found_tool_ids, &mut used_ids, &mut components);
        }
        cancelled = cancelled || self.cancel.is_cancelled();

        // Stage: cross-referencing package managers.
        if do_xref && !cancelled {
            step += 1;
            self.observer
                .on_progress(step, total_steps, "Cross-referencing package managers");
            cancelled = self.cross_reference(&mut components);
        }

        let issue_count = issues.len()
            + components.iter().map(|c| c.issues.len()).sum::<usize>()
            + variables.iter().map(|v| v.issues.len()).sum::<usize>();
        let summary = ScanSummary {
            components: components.len(),
            variables: variables.len(),
            issues: issue_count,
            cancelled,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        self.observer.on_progress(total_steps, total_steps, "Scan complete");
        self.observer.on_status(&format!(
            "Scan complete. {} components, {} variables, {} issues.",
            summary.components, summary.variables, summary.issues
        ));

        Ok(ScanResult::assemble(components, variables, issues, summary))
    }

    /// Resolve, version, and categorize one catalog entry.
    ///
    /// An entry with no resolvable executable on this OS produces no
    /// component and no issue — absence is not failure.
    fn identify_tool(
        &mut self,
        spec: &ToolSpec,
        used_ids: &mut HashSet<String>,
    ) -> Option<DetectedComponent> {
        let executable = spec
            .candidates()
            .iter()
            .find_map(|&candidate| self.locator.locate(candidate))?;

        tracing::debug!("{} resolved to {}", spec.id, executable.display());
        Some(self.build_component(spec, executable, false, used_ids))
    }

    fn build_component(
        &mut self,
        spec: &ToolSpec,
        executable: PathBuf,
        portable: bool,
        used_ids: &mut HashSet<String>,
    ) -> DetectedComponent {
        let version = extract_version(&executable, spec.version_args, spec.version_pattern)
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());

        let (category, matched_db_name) = categorize(spec.name, &executable, self.catalog);
        let id = unique_component_id(spec.id, &version, used_ids);

        let mut component = DetectedComponent::new(
            &id,
            spec.name,
            category.as_deref().unwrap_or(spec.category),
            &version,
            executable.clone(),
        );
        component.matched_db_name = matched_db_name;
        component
            .details
            .insert("architecture".to_string(), std::env::consts::ARCH.to_string());

        if portable {
            if let Some(parent) = executable.parent() {
                component.path = parent.to_path_buf();
            }
            component
                .details
                .insert("install_kind".to_string(), "portable".to_string());
        }

        if version == UNKNOWN_VERSION {
            component.push_issue(
                ScanIssue::new(
                    &format!("Could not determine version for {}", spec.name),
                    Severity::Warning,
                    "Version",
                )
                .for_component(&id)
                .with_path(executable),
            );
        }

        component
    }

    /// Sweep configured scan paths for catalog tools PATH didn't surface.
    fn sweep_filesystem(
        &mut self,
        found_tool_ids: &HashSet<&str>,
        used_ids: &mut HashSet<String>,
        components: &mut Vec<DetectedComponent>,
    ) {
        let mut wanted: HashMap<&'static str, &ToolSpec> = HashMap::new();
        for spec in self.catalog {
            if found_tool_ids.contains(spec.id) || self.options.is_ignored(spec.id) {
                continue;
            }
            for &candidate in spec.candidates() {
                wanted.entry(candidate).or_insert(spec);
            }
        }
        if wanted.is_empty() {
            return;
        }

        let hits = sweep_for_candidates(
            &self.options.scan_paths,
            &self.options.excluded_paths,
            &wanted,
        );
        for (spec, executable) in hits {
            let component = self.build_component(spec, executable, true, used_ids);
            if !self.options.is_ignored(&component.id) {
                components.push(component);
            }
        }
    }

    /// Merge update information into components. Returns true if the stage
    /// was cancelled mid-way.
    fn cross_reference(&mut self, components: &mut [DetectedComponent]) -> bool {
        let detected = pm::detect_package_managers(&mut self.locator);
        if detected.is_empty() {
            return false;
        }

        let preferred = if self.options.preferred_package_managers.is_empty() {
            pm::default_preferred_managers()
        } else {
            self.options.preferred_package_managers.clone()
        };

        for component in components.iter_mut() {
            if self.cancel.is_cancelled() {
                return true;
            }
            let Some(db_name) = component.matched_db_name.as_deref() else {
                continue;
            };
            let Some(spec) = find_by_name(self.catalog, db_name) else {
                continue;
            };
            if !spec.update_check {
                continue;
            }

            self.observer
                .on_status(&format!("Checking updates for {}", component.name));
            let Some(update) = pm::resolve_update(
                spec.id,
                &component.version,
                &preferred,
                &detected,
                &mut self.locator,
            ) else {
                continue;
            };

            if update.is_update_available {
                component.push_issue(
                    ScanIssue::new(
                        &format!(
                            "Update available for {}: {} -> {} (via {})",
                            component.name,
                            component.version,
                            update.latest_version,
                            update.package_manager_name
                        ),
                        Severity::Warning,
                        "Version",
                    )
                    .for_component(&component.id),
                );
            } else if update.latest_version != component.version {
                component.push_issue(
                    ScanIssue::new(
                        &format!(
                            "{} reports latest version {} (installed {})",
                            update.package_manager_name,
                            update.latest_version,
                            component.version
                        ),
                        Severity::Info,
                        "Version",
                    )
                    .for_component(&component.id),
                );
            }
            component.update_info = Some(update);
        }
        false
    }
}

/// Derive a unique, stable component id from the catalog id and version.
fn unique_component_id(tool_id: &str, version: &str, used_ids: &mut HashSet<String>) -> String {
    let tag = if version == UNKNOWN_VERSION {
        UNKNOWN_VERSION.to_string()
    } else {
        version
            .split('.')
            .take(2)
            .collect::<Vec<_>>()
            .join(".")
    };

    let base = format!("{}_{}", tool_id, tag);
    let mut id = base.clone();
    let mut n = 2;
    while !used_ids.insert(id.clone()) {
        id = format!("{}_{}", base, n);
        n += 1;
    }
    id
}
