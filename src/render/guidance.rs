/// Render `items` as a bulleted `## <header>` section.
///
/// `None` and empty lists render as an empty string so the section can be
/// dropped from the document.
pub fn format_guidance_section(header: &str, items: Option<&[String]>) -> String {
    let Some(items) = items.filter(|i| !i.is_empty()) else {
        return String::new();
    };

    let bullets: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
    format!("## {}\n\n{}", header, bullets.join("\n"))
}
