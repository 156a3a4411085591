pub mod normalize;
pub mod scanner;

pub use scanner::{ApiEntry, ParsedDoc, TopicCategory};

/// Two-pass pipeline: markdown → scanned sections → normalized overview.
pub fn parse(markdown: &str) -> ParsedDoc {
    let scanned = scanner::scan(markdown);
    // One overview line per paragraph; keep them as separate paragraphs
    let overview = normalize::normalize_inline(&scanned.overview_lines.join("\n\n"));

    ParsedDoc {
        title: scanned.title,
        overview,
        topics: scanned.topics,
    }
}
