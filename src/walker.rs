//! Directory traversal and the per-file pipeline.
//!
//! Walks the tree with an explicit worklist, runs extract → render → write
//! for every candidate component file, and records an `Outcome` per step.
//! A failure anywhere is logged (or, for writes, just recorded) and the walk
//! continues; nothing short of a poisoned worklist stops the run.

use crate::config::TsConfig;
use crate::extract::DocExtractor;
use crate::render;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognized as component sources.
const COMPONENT_EXTENSIONS: &[&str] = &["jsx", "tsx"];

/// What happened to one file or directory during the run.
///
/// Failures are kept as values so callers and tests can observe them; the
/// run itself continues regardless.
#[derive(Debug)]
#[allow(dead_code)]
pub enum Outcome {
    /// README written for a documented component.
    Written { readme: PathBuf },
    /// Candidate file rendered to nothing; no README written.
    NothingToDocument { file: PathBuf },
    /// The docgen command failed or produced undecodable output.
    ExtractFailed { file: PathBuf, error: String },
    /// README could not be written.
    WriteFailed { readme: PathBuf, error: String },
    /// A directory could not be listed or an entry could not be stated.
    WalkFailed { path: PathBuf, error: String },
}

/// Process every component file under `root`, depth-first.
///
/// Traversal order is whatever the platform's directory listing returns;
/// nothing here depends on it.
pub fn process_tree(
    root: &Path,
    config: &TsConfig,
    extractor: &dyn DocExtractor,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let mut worklist = vec![root.to_path_buf()];

    while let Some(dir) = worklist.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("error: cannot read {}: {}", dir.display(), e);
                outcomes.push(Outcome::WalkFailed {
                    path: dir,
                    error: e.to_string(),
                });
                continue;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    eprintln!("error: cannot read entry in {}: {}", dir.display(), e);
                    outcomes.push(Outcome::WalkFailed {
                        path: dir.clone(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };
            // Follows symlinks; a broken or self-referencing link lands in
            // the failure arm instead of aborting the walk.
            let metadata = match fs::metadata(&path) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("error: cannot stat {}: {}", path.display(), e);
                    outcomes.push(Outcome::WalkFailed {
                        path,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            if metadata.is_dir() {
                worklist.push(path);
            } else if metadata.is_file() && is_component_file(&path) {
                outcomes.push(process_file(&path, config, extractor));
            }
        }
    }

    outcomes
}

fn is_component_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => COMPONENT_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Extract, render, and write the README for one component file.
fn process_file(file: &Path, config: &TsConfig, extractor: &dyn DocExtractor) -> Outcome {
    let docs = match extractor.extract(config, file) {
        Ok(docs) => docs,
        Err(e) => {
            eprintln!("error: extraction failed for {}: {:#}", file.display(), e);
            return Outcome::ExtractFailed {
                file: file.to_path_buf(),
                error: format!("{:#}", e),
            };
        }
    };

    let content = render::render(&docs);
    if content.is_empty() {
        return Outcome::NothingToDocument {
            file: file.to_path_buf(),
        };
    }

    // The README goes next to the source file, not into the traversal root.
    let dir = file.parent().unwrap_or_else(|| Path::new("."));
    let readme = dir.join("README.md");
    match write_readme(&readme, &content) {
        Ok(()) => {
            println!("generated {}", readme.display());
            Outcome::Written { readme }
        }
        // Write failures are recorded but intentionally not logged.
        Err(e) => Outcome::WriteFailed {
            readme,
            error: format!("{:#}", e),
        },
    }
}

/// Overwrite `README.md` unconditionally. No merge, no backup.
fn write_readme(readme: &Path, content: &str) -> Result<()> {
    fs::write(readme, content).with_context(|| format!("failed to write {}", readme.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::stub::StubExtractor;
    use crate::model::ComponentDoc;
    use tempfile::TempDir;

    fn test_config() -> TsConfig {
        // tempdirs have no tsconfig.json ancestor, so this is the default
        TsConfig::resolve(Path::new("/nonexistent-tsxdoc-root")).unwrap()
    }

    fn documented(name: &str) -> Vec<ComponentDoc> {
        vec![ComponentDoc {
            display_name: name.to_string(),
            description: format!("The {} component.", name),
            ..Default::default()
        }]
    }

    #[test]
    fn writes_readme_next_to_source() {
        let root = TempDir::new().unwrap();
        let sub = root.path().join("button");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("Button.tsx"), "export default {}").unwrap();

        let extractor = StubExtractor(|_| Ok(documented("Button")));
        let outcomes = process_tree(root.path(), &test_config(), &extractor);

        assert!(matches!(outcomes.as_slice(), [Outcome::Written { .. }]));
        let readme = fs::read_to_string(sub.join("README.md")).unwrap();
        assert!(readme.starts_with("# Button\n"));
        assert!(!root.path().join("README.md").exists());
    }

    #[test]
    fn undocumented_file_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("Plain.jsx"), "export default {}").unwrap();

        let extractor = StubExtractor(|_| {
            Ok(vec![ComponentDoc {
                display_name: "Plain".to_string(),
                ..Default::default()
            }])
        });
        let outcomes = process_tree(root.path(), &test_config(), &extractor);

        assert!(matches!(outcomes.as_slice(), [Outcome::NothingToDocument { .. }]));
        assert!(!root.path().join("README.md").exists());
    }

    #[test]
    fn empty_extraction_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("Empty.tsx"), "").unwrap();

        let extractor = StubExtractor(|_| Ok(vec![]));
        let outcomes = process_tree(root.path(), &test_config(), &extractor);
        assert!(matches!(outcomes.as_slice(), [Outcome::NothingToDocument { .. }]));
    }

    #[test]
    fn non_component_files_are_ignored() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("index.ts"), "").unwrap();
        fs::write(root.path().join("styles.css"), "").unwrap();
        fs::write(root.path().join("notes.txt"), "").unwrap();

        let extractor = StubExtractor(|_| panic!("extractor must not run"));
        let outcomes = process_tree(root.path(), &test_config(), &extractor);
        assert!(outcomes.is_empty());
    }

    #[test]
    fn extraction_failure_does_not_stop_run() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("Bad.tsx"), "").unwrap();
        fs::write(root.path().join("Good.tsx"), "").unwrap();

        let extractor = StubExtractor(|file: &Path| {
            if file.ends_with("Bad.tsx") {
                anyhow::bail!("docgen exploded");
            }
            Ok(documented("Good"))
        });
        let outcomes = process_tree(root.path(), &test_config(), &extractor);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .any(|o| matches!(o, Outcome::ExtractFailed { error, .. } if error.contains("docgen exploded"))));
        assert!(outcomes.iter().any(|o| matches!(o, Outcome::Written { .. })));
        assert!(root.path().join("README.md").exists());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_entry_does_not_stop_siblings() {
        let root = TempDir::new().unwrap();
        // A self-referencing symlink: stat fails with ELOOP even as root.
        std::os::unix::fs::symlink(root.path().join("loop"), root.path().join("loop")).unwrap();
        fs::write(root.path().join("Sibling.tsx"), "").unwrap();

        let extractor = StubExtractor(|_| Ok(documented("Sibling")));
        let outcomes = process_tree(root.path(), &test_config(), &extractor);

        assert!(outcomes
            .iter()
            .any(|o| matches!(o, Outcome::WalkFailed { .. })));
        assert!(outcomes.iter().any(|o| matches!(o, Outcome::Written { .. })));
        assert!(root.path().join("README.md").exists());
    }

    #[test]
    fn existing_readme_is_overwritten() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("Button.tsx"), "").unwrap();
        fs::write(root.path().join("README.md"), "stale hand-written docs").unwrap();

        let extractor = StubExtractor(|_| Ok(documented("Button")));
        process_tree(root.path(), &test_config(), &extractor);

        let readme = fs::read_to_string(root.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# Button\n"));
        assert!(!readme.contains("stale"));
    }

    #[test]
    fn missing_root_reports_walk_failure() {
        let extractor = StubExtractor(|_| Ok(vec![]));
        let outcomes = process_tree(
            Path::new("/nonexistent-tsxdoc-root"),
            &test_config(),
            &extractor,
        );
        assert!(matches!(outcomes.as_slice(), [Outcome::WalkFailed { .. }]));
    }

    #[test]
    fn files_in_target_directory_itself_are_processed() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("Top.tsx"), "").unwrap();
        let nested = root.path().join("deep/nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Deep.jsx"), "").unwrap();

        let extractor = StubExtractor(|file: &Path| {
            let name = file.file_stem().unwrap().to_str().unwrap();
            Ok(documented(name))
        });
        let outcomes = process_tree(root.path(), &test_config(), &extractor);

        let written = outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Written { .. }))
            .count();
        assert_eq!(written, 2);
        assert!(root.path().join("README.md").exists());
        assert!(nested.join("README.md").exists());
    }
}
