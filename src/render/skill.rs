//! SKILL.md templates for every catalog.
//!
//! SwiftUI pages are parsed and rebuilt around the snippet library; the other
//! documentation catalogs keep the cleaned page body verbatim under a front
//! matter header.

use crate::catalog::{SkillJob, Template, TopicGroup};
use crate::fetch::cleanup_markdown;
use crate::library::Library;
use crate::parser;

use super::guidance::format_guidance_section;
use super::quality::format_quality_section;
use super::reference::format_api_reference;

/// Appears in the description of every SwiftUI skill.
pub const QUALITY_MARKER: &str = "Rork-Max Quality";

/// Render the SKILL.md for `job`. `markdown` is the fetched page, if the
/// template needs one; a missing page renders like an empty one.
pub fn render_skill(
    job: &SkillJob,
    markdown: Option<&str>,
    library: &Library,
    max_apis: usize,
) -> String {
    let markdown = markdown.unwrap_or("");
    match job.template {
        Template::SwiftUi { endpoint, group } => {
            swiftui_skill(endpoint, group, markdown, library, max_apis)
        }
        Template::Swift { framework, endpoint } => {
            let title = doc_title(markdown).unwrap_or_else(|| title_case(&endpoint.replace('-', " ")));
            let description = format!("Apple {} Documentation for {}.", framework, title);
            reference_skill(&title, &description, markdown)
        }
        Template::Platform {
            framework,
            endpoint,
            platform,
        } => {
            let name = doc_title(markdown).unwrap_or_else(|| title_case(&endpoint.replace('-', " ")));
            let title = format!("{} {}", platform.to_uppercase(), name);
            let description = format!(
                "Apple {} Documentation for {} on {}.",
                framework, title, platform
            );
            reference_skill(&title, &description, markdown)
        }
        Template::Intelligence { name } => {
            let title = match doc_title(markdown) {
                Some(t) => format!("Apple Intelligence: {}", t),
                None => format!("Apple Intelligence {}", title_case(&name.replace('_', " "))),
            };
            let description = format!(
                "Specialized skill for {} based on official Apple Developer Documentation.",
                title
            );
            reference_skill(&title, &description, markdown)
        }
        Template::Frontend { id, description } => frontend_skill(id, description),
    }
}

fn swiftui_skill(
    endpoint: &str,
    group: TopicGroup,
    markdown: &str,
    library: &Library,
    max_apis: usize,
) -> String {
    let doc = parser::parse(markdown);
    let title = if doc.title.is_empty() {
        title_case(&endpoint.replace('-', " "))
    } else {
        doc.title.clone()
    };

    let guidance = library.guidance_for(group.as_str());
    let when_to_use = format_guidance_section(
        "When to Use",
        guidance.and_then(|g| g.when_to_use.as_deref()),
    );
    let best_practices = format_guidance_section(
        "Best Practices",
        guidance.and_then(|g| g.best_practices.as_deref()),
    );
    let pitfalls = format_guidance_section(
        "Common Pitfalls",
        guidance.and_then(|g| g.pitfalls.as_deref()),
    );

    assemble(&[
        front_matter(
            &title,
            &format!(
                "{} skill for {}. Actionable patterns and best practices for SwiftUI development.",
                QUALITY_MARKER, title
            ),
        ),
        format!("# {}", title),
        doc.overview,
        format_quality_section(library.quality_for(endpoint)),
        when_to_use,
        best_practices,
        pitfalls,
        format_api_reference(&doc.topics, max_apis),
    ])
}

fn reference_skill(title: &str, description: &str, markdown: &str) -> String {
    assemble(&[front_matter(title, description), cleanup_markdown(markdown)])
}

fn frontend_skill(id: &str, description: &str) -> String {
    let title = title_case(&id.replace('_', " "));
    assemble(&[
        front_matter(&title, description),
        format!("# {}", title),
        description.to_string(),
        "## Core Principles\n\n\
         1. **Aesthetics First**: The user must be wowed. Do not settle for basic styling.\n\
         2. **Modern Implementation**: Rely on modern APIs (Custom Properties, Grid, Flexbox, modern units).\n\
         3. **Consistency**: Ensure patterns are applied uniformly across the entire project."
            .to_string(),
        "## Implementation Guide\n\n\
         - Start by defining design tokens (variables) before hardcoding values.\n\
         - Build from the component level up, ensuring this skill is isolated to relevant UI elements.\n\
         - Test variations across different themes (light/dark) if applicable."
            .to_string(),
        "*Note: This is an automatically generated elite frontend skill blueprint based on absolute best practices.*"
            .to_string(),
    ])
}

fn front_matter(name: &str, description: &str) -> String {
    format!("---\nname: {}\ndescription: {}\n---", name, description)
}

/// Join the non-empty blocks with one blank line between them.
fn assemble(blocks: &[String]) -> String {
    let mut out = blocks
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}

fn doc_title(markdown: &str) -> Option<String> {
    let title = parser::scanner::scan(&cleanup_markdown(markdown)).title;
    (!title.is_empty()).then_some(title)
}

/// Capitalize the first letter of every word and lowercase the rest, where
/// any non-letter starts a new word ("3d transforms" → "3D Transforms").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}
