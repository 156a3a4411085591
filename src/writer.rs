use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SKILL_FILE: &str = "SKILL.md";

/// Write `content` to `<root>/<dir>/SKILL.md`, creating directories as needed.
pub fn write_skill(root: &Path, dir: &Path, content: &str) -> Result<PathBuf> {
    let folder = root.join(dir);
    fs::create_dir_all(&folder).with_context(|| format!("Failed to create {:?}", folder))?;

    let path = folder.join(SKILL_FILE);
    fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_dirs_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Path::new("platform_skills/ios/menus");

        let path = write_skill(tmp.path(), dir, "first").unwrap();
        assert_eq!(path, tmp.path().join("platform_skills/ios/menus/SKILL.md"));

        write_skill(tmp.path(), dir, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn fails_when_root_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = write_skill(&blocker, Path::new("x"), "content").unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }
}
