use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

const DEFAULT_LIBRARY_JSON: &str = include_str!("../data/library.json");

/// Per-topic snippets and tips plus per-group guidance, injected into the
/// SwiftUI skill template.
#[derive(Debug, Clone, Deserialize)]
pub struct Library {
    pub default_snippet: String,
    pub default_tips: Vec<String>,
    #[serde(default)]
    pub snippets: HashMap<String, SnippetEntry>,
    #[serde(default)]
    pub guidance: HashMap<String, Guidance>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnippetEntry {
    pub snippet: Option<String>,
    pub tips: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Guidance {
    pub when_to_use: Option<Vec<String>>,
    pub best_practices: Option<Vec<String>>,
    pub pitfalls: Option<Vec<String>>,
}

/// Snippet and tips resolved for one topic, defaults already applied.
#[derive(Debug, Clone, Copy)]
pub struct Quality<'a> {
    pub snippet: &'a str,
    pub tips: &'a [String],
}

impl Library {
    /// Load the library from `path`, or the built-in one when no path is set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read library {:?}", p))?;
                debug!("Loaded snippet library from {:?}", p);
                Self::from_json(&raw).with_context(|| format!("Invalid library {:?}", p))
            }
            None => Self::from_json(DEFAULT_LIBRARY_JSON).context("Invalid built-in library"),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Snippet and tips for a topic key. Snippet and tips fall back to the
    /// defaults independently of each other.
    pub fn quality_for(&self, key: &str) -> Quality<'_> {
        let entry = self.snippets.get(key);
        Quality {
            snippet: entry
                .and_then(|e| e.snippet.as_deref())
                .unwrap_or(&self.default_snippet),
            tips: entry
                .and_then(|e| e.tips.as_deref())
                .unwrap_or(&self.default_tips),
        }
    }

    pub fn guidance_for(&self, group: &str) -> Option<&Guidance> {
        self.guidance.get(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TopicGroup, SWIFTUI_TOPICS};

    #[test]
    fn builtin_library_parses() {
        let lib = Library::load(None).unwrap();
        assert_eq!(lib.default_tips.len(), 3);
        assert!(lib.default_snippet.starts_with("```swift"));
        assert!(lib.snippets.contains_key("Animations"));
    }

    #[test]
    fn every_topic_group_has_guidance() {
        let lib = Library::load(None).unwrap();
        for group in TopicGroup::ALL {
            let g = lib.guidance_for(group.as_str());
            assert!(g.is_some(), "missing guidance for {}", group.as_str());
        }
        // Snippet keys are SwiftUI endpoints
        for key in lib.snippets.keys() {
            assert!(SWIFTUI_TOPICS.iter().any(|t| t.endpoint == key), "unknown key {}", key);
        }
    }

    #[test]
    fn known_topic_uses_own_snippet() {
        let lib = Library::load(None).unwrap();
        let q = lib.quality_for("Animations");
        assert!(q.snippet.contains("withAnimation"));
        assert_ne!(q.tips, lib.default_tips.as_slice());
    }

    #[test]
    fn unknown_topic_falls_back() {
        let lib = Library::load(None).unwrap();
        let q = lib.quality_for("Clipboard");
        assert_eq!(q.snippet, lib.default_snippet);
        assert_eq!(q.tips, lib.default_tips.as_slice());
    }

    #[test]
    fn partial_entry_falls_back_per_field() {
        let lib = Library::from_json(
            r#"{
                "default_snippet": "DEFAULT",
                "default_tips": ["d"],
                "snippets": { "Lists": { "tips": ["own tip"] } }
            }"#,
        )
        .unwrap();
        let q = lib.quality_for("Lists");
        assert_eq!(q.snippet, "DEFAULT");
        assert_eq!(q.tips, ["own tip".to_string()]);
        assert!(lib.guidance_for("Views").is_none());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"default_snippet": "S", "default_tips": [], "guidance": {"Views": {"pitfalls": ["p"]}}}"#,
        )
        .unwrap();
        let lib = Library::load(Some(file.path())).unwrap();
        let g = lib.guidance_for("Views").unwrap();
        assert_eq!(g.pitfalls.as_deref(), Some(&["p".to_string()][..]));
        assert!(g.when_to_use.is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Library::load(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read library"));
    }
}
