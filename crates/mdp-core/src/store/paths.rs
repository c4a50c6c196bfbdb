use std::path::{Path, PathBuf};

use crate::error::{MdpError, Result};

/// Project directory name (hidden)
pub const PROJECT_DIR: &str = ".mdp";

/// Project configuration filename
pub const PROJECT_FILE: &str = "project.json";

/// Project record filename
pub const PROJECT_MD: &str = "project.md";

/// Entity subdirectories
pub const ISSUES_DIR: &str = "issues";
pub const MILESTONES_DIR: &str = "milestones";

/// Walk up from `start` looking for a directory containing `.mdp/`; returns the project root
pub fn discover_project(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(MdpError::ProjectNotFound {
                    path: start.to_path_buf(),
                });
            }
        }
    }
}

/// Resolve an explicit project path: either the project root or the `.mdp` directory itself
pub fn resolve_project_root(path: &Path) -> Result<PathBuf> {
    if path.join(PROJECT_DIR).is_dir() {
        return Ok(path.to_path_buf());
    }

    if path.file_name().is_some_and(|name| name == PROJECT_DIR) && path.is_dir() {
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    Err(MdpError::ProjectNotFound {
        path: path.to_path_buf(),
    })
}
