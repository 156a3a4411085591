use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `[Name](target)` or ``[`Name`](target)`` at the start of a line.
static API_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[`?([^`\]]+)`?\]\([^)]+\)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub title: String,
    pub overview: String,
    pub topics: Vec<TopicCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCategory {
    pub category: String,
    pub apis: Vec<ApiEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiEntry {
    pub name: String,
    pub description: String,
}

/// Which part of the page the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Pre,
    Overview,
    Topics,
    Other,
}

/// What a single line means, given the current state.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Footer,
    Title(&'a str),
    OverviewHeading,
    TopicsHeading,
    OtherHeading,
    Category(&'a str),
    ApiRef(&'a str),
    DocRef,
    Text(&'a str),
    Blank,
    Skip,
}

/// Output of a single scan: overview lines are still raw, unnormalized markup.
#[derive(Debug, Default)]
pub struct Scanned {
    pub title: String,
    pub overview_lines: Vec<String>,
    pub topics: Vec<TopicCategory>,
}

struct Scanner {
    state: ScanState,
    title: Option<String>,
    overview_lines: Vec<String>,
    topics: Vec<TopicCategory>,
    pending: Option<String>,
}

/// Single forward pass over a DocC markdown page.
pub fn scan(markdown: &str) -> Scanned {
    let mut scanner = Scanner {
        state: ScanState::Pre,
        title: None,
        overview_lines: Vec::new(),
        topics: Vec::new(),
        pending: None,
    };

    for raw in markdown.lines() {
        let line = classify(raw, scanner.state, scanner.title.is_some());
        if line == Line::Footer {
            break;
        }
        scanner.apply(line);
    }

    scanner.flush_pending("");

    Scanned {
        title: scanner.title.unwrap_or_default(),
        overview_lines: scanner.overview_lines,
        topics: scanner.topics,
    }
}

fn classify(raw: &str, state: ScanState, has_title: bool) -> Line<'_> {
    let line = raw.trim();

    // ── Footer / legal block ends everything ──
    if raw.contains("Copyright") || (state == ScanState::Topics && line.starts_with("---")) {
        return Line::Footer;
    }

    if !has_title {
        if let Some(title) = raw.strip_prefix("# ") {
            return Line::Title(title.trim());
        }
    }

    if line == "## Overview" {
        return Line::OverviewHeading;
    }
    if line == "## Topics" {
        return Line::TopicsHeading;
    }

    match state {
        ScanState::Overview => {
            if line.is_empty() {
                Line::Blank
            } else if line.starts_with("##") {
                Line::OtherHeading
            } else if line.starts_with("![") || line.starts_with("<doc:") {
                Line::Skip
            } else {
                Line::Text(line)
            }
        }
        ScanState::Topics => {
            if let Some(heading) = raw.strip_prefix("### ") {
                Line::Category(heading.trim())
            } else if let Some(caps) = API_REF_RE.captures(line) {
                Line::ApiRef(caps.get(1).map_or("", |m| m.as_str()))
            } else if line.starts_with("<doc:") {
                Line::DocRef
            } else if line.is_empty() {
                Line::Blank
            } else if line.starts_with('[') {
                Line::Skip
            } else {
                Line::Text(line)
            }
        }
        ScanState::Pre | ScanState::Other => Line::Skip,
    }
}

impl Scanner {
    fn apply(&mut self, line: Line<'_>) {
        match line {
            Line::Footer | Line::Blank | Line::Skip => {}
            Line::Title(title) => {
                self.title = Some(title.to_string());
                self.state = ScanState::Overview;
            }
            Line::OverviewHeading => self.state = ScanState::Overview,
            Line::TopicsHeading => self.state = ScanState::Topics,
            Line::OtherHeading => self.state = ScanState::Other,
            Line::Category(name) => {
                // A name with no description yet is dropped, not carried over.
                self.pending = None;
                self.topics.push(TopicCategory {
                    category: name.to_string(),
                    apis: Vec::new(),
                });
            }
            Line::ApiRef(name) => {
                if self.topics.is_empty() {
                    return;
                }
                self.flush_pending("");
                self.pending = Some(name.replace('`', ""));
            }
            Line::DocRef => self.flush_pending(""),
            Line::Text(text) => match self.state {
                ScanState::Overview => self.overview_lines.push(text.to_string()),
                ScanState::Topics => self.flush_pending(text),
                ScanState::Pre | ScanState::Other => {}
            },
        }
    }

    /// Pair the buffered API name with `description` and append it to the
    /// open category. No-op when nothing is pending.
    fn flush_pending(&mut self, description: &str) {
        let Some(name) = self.pending.take() else {
            return;
        };
        if let Some(category) = self.topics.last_mut() {
            category.apis.push(ApiEntry {
                name,
                description: description.to_string(),
            });
        }
    }
}

// ── Tests ──
