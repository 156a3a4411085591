use crate::parser::TopicCategory;

pub const DEFAULT_MAX_PER_CATEGORY: usize = 8;

/// Render the parsed topic categories as a `## Key APIs` block with one
/// table per non-empty category. Returns an empty string when no category
/// has entries.
///
/// Only the first `max_per_category` entries of each category are shown.
pub fn format_api_reference(topics: &[TopicCategory], max_per_category: usize) -> String {
    let sections: Vec<String> = topics
        .iter()
        .filter(|t| !t.apis.is_empty())
        .map(|t| render_category(t, max_per_category))
        .collect();

    if sections.is_empty() {
        return String::new();
    }

    format!("## Key APIs\n\n{}", sections.join("\n\n"))
}

fn render_category(topic: &TopicCategory, max: usize) -> String {
    let mut lines = vec![
        format!("### {}", topic.category),
        String::new(),
        "| API | Purpose |".to_string(),
        "|-----|---------|".to_string(),
    ];

    for api in topic.apis.iter().take(max) {
        let purpose = if api.description.is_empty() {
            "—".to_string()
        } else {
            escape_cell(&api.description)
        };
        lines.push(format!("| `{}` | {} |", escape_cell(&api.name), purpose));
    }

    lines.join("\n")
}

/// Pipes would split the row into extra columns.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ApiEntry;

    fn category(name: &str, apis: &[(&str, &str)]) -> TopicCategory {
        TopicCategory {
            category: name.to_string(),
            apis: apis
                .iter()
                .map(|(n, d)| ApiEntry { name: n.to_string(), description: d.to_string() })
                .collect(),
        }
    }

    fn data_rows(out: &str) -> usize {
        out.lines().filter(|l| l.starts_with("| `")).count()
    }

    #[test]
    fn renders_table() {
        let topics = vec![category("Basics", &[("Foo", "Does foo things."), ("Bar", "")])];
        let out = format_api_reference(&topics, DEFAULT_MAX_PER_CATEGORY);
        assert_eq!(
            out,
            "## Key APIs\n\n### Basics\n\n| API | Purpose |\n|-----|---------|\n| `Foo` | Does foo things. |\n| `Bar` | — |"
        );
    }

    #[test]
    fn caps_rows_per_category() {
        let apis: Vec<(String, String)> =
            (0..12).map(|i| (format!("api{}", i), format!("desc {}", i))).collect();
        let refs: Vec<(&str, &str)> = apis.iter().map(|(n, d)| (n.as_str(), d.as_str())).collect();
        let out = format_api_reference(&[category("Many", &refs)], 8);
        assert_eq!(data_rows(&out), 8);
        assert!(out.contains("`api7`"));
        assert!(!out.contains("`api8`"));
        assert!(!out.contains("more"));
    }

    #[test]
    fn empty_categories_skipped() {
        let topics = vec![category("Empty", &[]), category("Full", &[("A", "a")])];
        let out = format_api_reference(&topics, 8);
        assert!(!out.contains("### Empty"));
        assert!(out.contains("### Full"));
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(format_api_reference(&[], 8), "");
        assert_eq!(format_api_reference(&[category("Empty", &[])], 8), "");
    }

    #[test]
    fn categories_separated_by_blank_line() {
        let topics = vec![category("One", &[("A", "a")]), category("Two", &[("B", "b")])];
        let out = format_api_reference(&topics, 8);
        assert!(out.contains("| `A` | a |\n\n### Two\n"));
        assert_eq!(out.matches("## Key APIs").count(), 1);
    }

    #[test]
    fn idempotent() {
        let md = std::fs::read_to_string("tests/fixtures/view_styles.md").unwrap();
        let doc = crate::parser::parse(&md);
        let first = format_api_reference(&doc.topics, 8);
        let second = format_api_reference(&doc.topics, 8);
        assert_eq!(first, second);
        assert_eq!(data_rows(&first), 2 + 8 + 2);
        assert!(!first.contains("Deprecated symbols"));
    }

    #[test]
    fn pipes_escaped() {
        let out = format_api_reference(&[category("Ops", &[("||(_:_:)", "Logical OR.")])], 8);
        assert!(out.contains("| `\\|\\|(_:_:)` | Logical OR. |"));
    }
}
