use std::sync::LazyLock;

use regex::Regex;

// Rewrite passes, applied in order. Later passes rely on earlier ones having
// already collapsed the double-backtick and image forms.
static DOC_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``doc://[^`]*/([\w()/:\-]+)``\)?").unwrap());
static DOC_LEFTOVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``doc://[^`]*``\)?").unwrap());
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap());
static CODE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[`([^`\]]+)`\]\((?:[^()]|\([^()]*\))*\)").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\((?:[^()]|\([^()]*\))*\)").unwrap());
static ANGLE_DOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<doc:(?://)?(?:[^>]*/)?([^/>]+)>").unwrap());
static ANGLE_DOC_LEFTOVER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<doc:[^>]*>").unwrap());
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static BLANKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Turn DocC overview markup into plain prose, keeping referenced symbol
/// names as inline code.
pub fn normalize_inline(text: &str) -> String {
    let text = DOC_SYMBOL_RE.replace_all(text, "`${1}`");
    let text = DOC_LEFTOVER_RE.replace_all(&text, "");
    let text = IMAGE_RE.replace_all(&text, "");
    let text = CODE_LINK_RE.replace_all(&text, "`${1}`");
    let text = LINK_RE.replace_all(&text, "${1}");
    let text = ANGLE_DOC_RE.replace_all(&text, "${1}");
    let text = ANGLE_DOC_LEFTOVER_RE.replace_all(&text, "");
    let text = SPACES_RE.replace_all(&text, " ");
    let text = BLANKS_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}
