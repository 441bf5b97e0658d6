//! Package-manager detection and dependency installation

pub mod check;
pub mod installer;

pub use check::{detect_default, probe, probe_all, ManagerInfo};
pub use installer::{install_dependencies, manual_install_command};
