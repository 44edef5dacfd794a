//! Auto-detection of project defaults for the config wizard.
//!
//! Probes a project directory to suggest sensible defaults for the book title and where pages and
//! assets live, based on common static site conventions.

use std::path::{Path, PathBuf};

/// Detected default values for a project.
#[derive(Debug, Default)]
pub struct DetectedDefaults {
    pub title: Option<String>,
    pub pages_dir: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
}

/// Detect sensible defaults from a project path.
pub fn detect_defaults(project_path: &Path) -> DetectedDefaults {
    DetectedDefaults {
        title: detect_title(project_path),
        pages_dir: detect_dir(project_path, &["pages", "content", "src/pages"]),
        assets_dir: detect_dir(project_path, &["assets", "static", "src/images"]),
    }
}

/// Detect title from directory name.
///
/// Transforms the directory name into a readable title by replacing
/// hyphens and underscores with spaces and applying title case.
fn detect_title(project_path: &Path) -> Option<String> {
    let canonical = project_path.canonicalize().ok()?;
    let dir_name = canonical.file_name()?.to_str()?;
    title_from_name(dir_name)
}

fn title_from_name(name: &str) -> Option<String> {
    // replace separators with spaces and title-case
    let title = name
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// The first candidate (in order) that exists as a directory
fn detect_dir(project_path: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|candidate| project_path.join(candidate).is_dir())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn titles_are_title_cased() {
        assert_eq!(
            title_from_name("collected-essays_vol2"),
            Some("Collected Essays Vol2".to_string())
        );
        assert_eq!(title_from_name("--"), None);
    }

    #[test]
    fn detects_first_existing_directory() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        std::fs::create_dir_all(dir.path().join("content")).expect("can create content");
        std::fs::create_dir_all(dir.path().join("src").join("images")).expect("can create images");

        let defaults = detect_defaults(dir.path());
        assert_eq!(defaults.pages_dir, Some(PathBuf::from("content")));
        assert_eq!(defaults.assets_dir, Some(PathBuf::from("src/images")));
        assert!(defaults.title.is_some());
    }

    #[test]
    fn nothing_detected_in_empty_project() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let defaults = detect_defaults(dir.path());
        assert_eq!(defaults.pages_dir, None);
        assert_eq!(defaults.assets_dir, None);
    }
}
