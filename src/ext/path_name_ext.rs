use std::path::{Path, PathBuf};

/// Best-effort display name for a path: the final component where one
/// exists, otherwise the final component of the canonicalized path,
/// falling back to the raw display string for roots like `/`.
pub trait PathNameExt {
    fn tree_name(&self) -> String;
}

impl PathNameExt for Path {
    fn tree_name(&self) -> String {
        if let Some(name) = self.file_name() {
            return name.to_string_lossy().into_owned();
        }

        match self.canonicalize() {
            Ok(canonical) => canonical
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| canonical.display().to_string()),
            Err(_) => self.display().to_string(),
        }
    }
}

impl PathNameExt for PathBuf {
    fn tree_name(&self) -> String {
        self.as_path().tree_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_the_final_component() {
        assert_eq!(Path::new("src/lib.rs").tree_name(), "lib.rs");
        assert_eq!(Path::new("deeply/nested/dir").tree_name(), "dir");
    }

    #[test]
    fn filesystem_root_falls_back_to_its_display_string() {
        assert_eq!(Path::new("/").tree_name(), "/");
    }

    #[test]
    fn trailing_dot_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let dotted = dir.path().join(".");
        assert_eq!(
            dotted.tree_name(),
            dir.path().file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn bare_dot_resolves_to_the_current_directory_name() {
        let current = std::env::current_dir().unwrap();
        let expected = current.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(Path::new(".").tree_name(), expected);
    }

    #[test]
    fn unresolvable_path_keeps_its_display_string() {
        assert_eq!(
            Path::new("no-such-entry/..").tree_name(),
            "no-such-entry/.."
        );
    }
}
