//! Package-manager availability probing

use crate::selection::PackageManager;
use std::process::Command;

/// Probe result for one package manager
#[derive(Debug, Clone)]
pub struct ManagerInfo {
    pub manager: PackageManager,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether a package manager responds to `--version`
pub fn probe(manager: PackageManager) -> ManagerInfo {
    let output = Command::new(manager.binary()).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ManagerInfo {
                manager,
                version: Some(version),
                available: true,
            }
        }
        _ => ManagerInfo {
            manager,
            version: None,
            available: false,
        },
    }
}

/// Probe every supported package manager
pub fn probe_all() -> Vec<ManagerInfo> {
    PackageManager::ALL.iter().copied().map(probe).collect()
}

/// The detected default: the first available manager in preference order,
/// npm when nothing responds (its absence surfaces at install time, which is
/// non-fatal anyway).
pub fn detect_default() -> PackageManager {
    for manager in PackageManager::ALL {
        if probe(manager).available {
            return manager;
        }
    }
    PackageManager::Npm
}
