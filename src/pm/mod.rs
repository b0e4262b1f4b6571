//! Package-manager integration.
//!
//! Detects which package managers are present, maps tool identifiers to
//! manager-specific package names, parses each manager's query output, and
//! resolves whether an update is available. Strictly read-only: no manager
//! is ever invoked to install or modify anything.

pub mod detect;
pub mod mapping;
pub mod parse;
pub mod resolve;

pub use detect::{
    default_preferred_managers, detect_package_managers, find_manager, ManagerDef, OutputStyle,
    PackageManagerInfo, Platform, MANAGER_DEFS,
};
pub use mapping::pm_package_name;
pub use parse::parse_latest_version;
pub use resolve::resolve_update;
