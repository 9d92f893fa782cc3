//! Path resolution utilities for studioflow

use std::path::{Path, PathBuf};

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .studioflow directory.
pub fn get_studioflow_dir(root: &Path) -> PathBuf {
    root.join(".studioflow")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_studioflow_dir(root).join("config.json")
}

/// Resolve a snapshot path given on the command line against the working directory.
pub fn resolve_snapshot_path(root: &Path, snapshot: &Path) -> PathBuf {
    if snapshot.is_absolute() {
        snapshot.to_path_buf()
    } else {
        root.join(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cwd_override() {
        let path = Path::new("/tmp/project");
        assert_eq!(resolve_cwd(Some(path)), PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_config_path() {
        let root = Path::new("/work/studio");
        assert_eq!(
            get_config_path(root),
            PathBuf::from("/work/studio/.studioflow/config.json")
        );
    }

    #[test]
    fn test_resolve_snapshot_path() {
        let root = Path::new("/work/studio");
        assert_eq!(
            resolve_snapshot_path(root, Path::new("snap.json")),
            PathBuf::from("/work/studio/snap.json")
        );
        assert_eq!(
            resolve_snapshot_path(root, Path::new("/abs/snap.json")),
            PathBuf::from("/abs/snap.json")
        );
    }
}
