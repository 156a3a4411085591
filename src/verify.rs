use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::render::quality::{SNIPPET_HEADER, TIPS_HEADER};
use crate::render::skill::QUALITY_MARKER;
use crate::writer::SKILL_FILE;

/// Named checks every generated SKILL.md must pass.
const CHECKS: &[(&str, fn(&str) -> bool)] = &[
    ("YAML Metadata", has_front_matter),
    ("Rork Snippet Header", has_snippet_header),
    ("Elite Tips Header", has_tips_header),
    ("Modern Description", has_quality_marker),
];

fn has_front_matter(content: &str) -> bool {
    content.starts_with("---")
}

fn has_snippet_header(content: &str) -> bool {
    content.contains(SNIPPET_HEADER)
}

fn has_tips_header(content: &str) -> bool {
    content.contains(TIPS_HEADER)
}

fn has_quality_marker(content: &str) -> bool {
    content.contains(QUALITY_MARKER)
}

#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Default)]
pub struct Report {
    pub checked: usize,
    pub failures: Vec<Failure>,
    /// Directory entries walkdir could not read.
    pub unreadable: usize,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Print a summary, listing at most `max_listed` failures.
    pub fn print(&self, max_listed: usize) {
        if self.unreadable > 0 {
            println!("Warning: {} entries could not be read.", self.unreadable);
        }
        if self.passed() {
            println!("Verification PASSED: {} skills checked.", self.checked);
            return;
        }

        println!("Verification FAILED with {} errors:", self.failures.len());
        for f in self.failures.iter().take(max_listed) {
            println!("  - {}: Missing {}", f.path.display(), f.missing.join(", "));
        }
        if self.failures.len() > max_listed {
            println!("  ... and {} more.", self.failures.len() - max_listed);
        }
    }
}

/// Names of the checks `content` fails.
pub fn missing_checks(content: &str) -> Vec<&'static str> {
    CHECKS
        .iter()
        .filter(|(_, check)| !check(content))
        .map(|(name, _)| *name)
        .collect()
}

/// Check every SKILL.md under each of `roots` (relative to `output_dir`).
/// Roots that don't exist are skipped.
pub fn verify_tree(output_dir: &Path, roots: &[PathBuf]) -> Result<Report> {
    let mut report = Report::default();

    for root in roots {
        let root = output_dir.join(root);
        if !root.exists() {
            debug!("Skipping missing root {:?}", root);
            continue;
        }

        for entry in WalkDir::new(&root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {:?}: {}", root, e);
                    report.unreadable += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() || entry.file_name() != SKILL_FILE {
                continue;
            }
            let path = entry.into_path();
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;

            report.checked += 1;
            let missing = missing_checks(&content);
            if !missing.is_empty() {
                report.failures.push(Failure { path, missing });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_skill;

    const GOOD: &str = "---\nname: X\ndescription: Rork-Max Quality skill for X.\n---\n\n## 🚀 Rork-Max Quality Snippet\n\n## 💎 Elite Implementation Tips\n";

    #[test]
    fn complete_skill_passes() {
        assert!(missing_checks(GOOD).is_empty());
    }

    #[test]
    fn reports_each_missing_check() {
        assert_eq!(
            missing_checks("# Plain page"),
            vec!["YAML Metadata", "Rork Snippet Header", "Elite Tips Header", "Modern Description"]
        );
        assert_eq!(
            missing_checks("---\nname: X\n---\n## 🚀 Rork-Max Quality Snippet"),
            vec!["Elite Tips Header"]
        );
    }

    #[test]
    fn walks_roots() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), Path::new("animations"), GOOD).unwrap();
        write_skill(tmp.path(), Path::new("platform_skills/ios/menus"), "---\nname: IOS Menus\n---\n").unwrap();
        // Not a SKILL.md, ignored
        std::fs::write(tmp.path().join("animations/notes.md"), "nothing").unwrap();
        // Outside the roots, ignored
        write_skill(tmp.path(), Path::new("elsewhere"), "bad").unwrap();

        let roots = vec![
            PathBuf::from("animations"),
            PathBuf::from("platform_skills"),
            PathBuf::from("missing_root"),
        ];
        let report = verify_tree(tmp.path(), &roots).unwrap();
        assert_eq!(report.checked, 2);
        assert!(!report.passed());
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("platform_skills/ios/menus/SKILL.md"));
        assert_eq!(
            report.failures[0].missing,
            vec!["Rork Snippet Header", "Elite Tips Header", "Modern Description"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_dir_is_counted() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), Path::new("animations"), GOOD).unwrap();
        let locked = tmp.path().join("animations/locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        // root ignores permission bits
        let readable = std::fs::read_dir(&locked).is_ok();

        let report = verify_tree(tmp.path(), &[PathBuf::from("animations")]).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(report.checked, 1);
        assert!(report.passed());
        assert_eq!(report.unreadable, usize::from(!readable));
    }

    #[test]
    fn generated_swiftui_skill_passes() {
        let tmp = tempfile::tempdir().unwrap();
        let md = std::fs::read_to_string("tests/fixtures/view_styles.md").unwrap();
        let library = crate::library::Library::load(None).unwrap();
        let jobs = crate::catalog::swiftui_jobs("https://example.com");
        let job = jobs.iter().find(|j| j.dir.ends_with("view_styles")).unwrap();
        let content = crate::render::render_skill(job, Some(&md), &library, 8);
        write_skill(tmp.path(), &job.dir, &content).unwrap();

        let report = verify_tree(tmp.path(), &crate::catalog::verification_roots()).unwrap();
        assert_eq!(report.checked, 1);
        assert!(report.passed());
    }
}
