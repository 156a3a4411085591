use crate::library::Quality;

pub const SNIPPET_HEADER: &str = "## 🚀 Rork-Max Quality Snippet";
pub const TIPS_HEADER: &str = "## 💎 Elite Implementation Tips";

/// Snippet block followed by the tips list. Both headers are always present,
/// even with no tips, since the verifier looks for them.
pub fn format_quality_section(quality: Quality<'_>) -> String {
    let mut out = format!("{}\n\n{}\n\n{}", SNIPPET_HEADER, quality.snippet.trim(), TIPS_HEADER);
    if !quality.tips.is_empty() {
        let tips: Vec<String> = quality.tips.iter().map(|t| format!("- {}", t)).collect();
        out.push_str("\n\n");
        out.push_str(&tips.join("\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_then_tips() {
        let tips = vec!["One".to_string(), "Two".to_string()];
        let out = format_quality_section(Quality {
            snippet: "\n```swift\nText(\"Hi\")\n```\n",
            tips: &tips,
        });
        assert_eq!(
            out,
            "## 🚀 Rork-Max Quality Snippet\n\n```swift\nText(\"Hi\")\n```\n\n## 💎 Elite Implementation Tips\n\n- One\n- Two"
        );
    }

    #[test]
    fn headers_kept_without_tips() {
        let out = format_quality_section(Quality { snippet: "code", tips: &[] });
        assert!(out.contains(SNIPPET_HEADER));
        assert!(out.ends_with(TIPS_HEADER));
    }
}
