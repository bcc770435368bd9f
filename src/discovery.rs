//! Input discovery
//!
//! Expands the paths given on the command line into the list of files to
//! lint. Files named explicitly are always linted; directories are walked
//! recursively and filtered by the configured extensions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::Config;

/// Collect files to lint, in argument order and sorted by name within each
/// directory
pub fn collect_files<P: AsRef<Path>>(paths: &[P], config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let metadata =
            fs::metadata(path).with_context(|| format!("Cannot access {}", path.display()))?;

        if metadata.is_file() {
            files.push(path.to_path_buf());
            continue;
        }

        walk_directory(path, config, &mut files)?;
    }

    Ok(files)
}

fn walk_directory(dir: &Path, config: &Config, files: &mut Vec<PathBuf>) -> Result<()> {
    let walker = WalkDir::new(dir)
        .follow_links(config.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if config.matches_extension(entry.path()) {
            files.push(entry.into_path());
        } else {
            log::debug!("Skipping {}", entry.path().display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        fs::write(path, "").expect("write file");
    }

    #[test]
    fn test_walks_and_filters_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        touch(&dir.path().join("b.srt"));
        touch(&dir.path().join("a.SRT"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("season1/ep1.srt"));

        let files = collect_files(&[dir.path()], &Config::default()).expect("collect");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).expect("under root").to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.SRT"),
                PathBuf::from("b.srt"),
                PathBuf::from("season1/ep1.srt"),
            ]
        );
    }

    #[test]
    fn test_explicit_file_ignores_extension_filter() {
        let dir = tempfile::tempdir().expect("temp dir");
        let notes = dir.path().join("notes.txt");
        touch(&notes);

        let files = collect_files(&[&notes], &Config::default()).expect("collect");
        assert_eq!(files, vec![notes]);
    }

    #[test]
    fn test_empty_extension_list_takes_everything() {
        let dir = tempfile::tempdir().expect("temp dir");
        touch(&dir.path().join("one.srt"));
        touch(&dir.path().join("two.txt"));

        let config = Config {
            extensions: Vec::new(),
            ..Config::default()
        };
        let files = collect_files(&[dir.path()], &config).expect("collect");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.srt");

        let err = collect_files(&[&missing], &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("missing.srt"));
    }
}
