//! Merging template text into free-text cells.
//!
//! Every fusion is keyed on the marker's keywords: text that already mentions
//! the marker is left alone, which makes repeated runs a no-op.

/// Separator used for summary-style cells.
pub const CN_SEMICOLON: &str = "；";

/// True when `text` contains any of `keywords`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    !text.is_empty() && keywords.iter().any(|keyword| text.contains(keyword))
}

/// Collapse punctuation left behind by joins (`。；` and `；；` become `；`).
///
/// Runs to a fixpoint so longer runs such as `；；；` collapse fully.
pub fn cleanup(text: &str) -> String {
    let mut value = text.to_string();
    while value.contains("。；") || value.contains("；；") {
        value = value.replace("。；", CN_SEMICOLON).replace("；；", CN_SEMICOLON);
    }
    value
}

/// Join two fragments with `；`, or return whichever side is non-empty.
pub fn join_semicolon(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (false, true) => head.to_string(),
        (false, false) => cleanup(&format!("{head}{CN_SEMICOLON}{tail}")),
    }
}

fn prefix_with(text: &str, prefix: &str, keywords: &[&str], separator: &str) -> String {
    if contains_any(text, keywords) {
        return text.to_string();
    }
    if text.is_empty() {
        return prefix.to_string();
    }
    cleanup(&format!("{prefix}{separator}{text}"))
}

/// Lead the summary (`总结1`) with the marker prompt.
pub fn prefix_summary(text: &str, prefix: &str, keywords: &[&str]) -> String {
    prefix_with(text, prefix, keywords, CN_SEMICOLON)
}

/// Lead the short summary (`总结2`) with the marker label.
pub fn prefix_short(text: &str, prefix: &str, keywords: &[&str]) -> String {
    prefix_with(text, prefix, keywords, CN_SEMICOLON)
}

/// Lead the interpretation (`解读`) with the marker interpretation.
pub fn prefix_interpretation(text: &str, prefix: &str, keywords: &[&str]) -> String {
    prefix_with(text, prefix, keywords, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: &[&str] = &["SRBC", "镰刀"];

    #[test]
    fn empty_text_takes_template_verbatim() {
        assert_eq!(prefix_summary("", "SRBC↑提示", KEYWORDS), "SRBC↑提示");
        assert_eq!(prefix_interpretation("", "SRBC升高", KEYWORDS), "SRBC升高");
    }

    #[test]
    fn existing_text_is_kept_after_template() {
        assert_eq!(
            prefix_short("HGB偏低", "SRBC↑提示风险", KEYWORDS),
            "SRBC↑提示风险；HGB偏低"
        );
        assert_eq!(
            prefix_interpretation("HGB偏低", "SRBC升高。", KEYWORDS),
            "SRBC升高。 HGB偏低"
        );
    }

    #[test]
    fn keyword_hit_leaves_text_untouched() {
        assert_eq!(prefix_summary("已见镰刀细胞", "SRBC↑", KEYWORDS), "已见镰刀细胞");
    }

    #[test]
    fn join_collapses_trailing_full_stop() {
        assert_eq!(
            prefix_summary("；HGB偏低", "SRBC↑提示风险。", KEYWORDS),
            "SRBC↑提示风险；HGB偏低"
        );
    }

    #[test]
    fn cleanup_collapses_runs() {
        assert_eq!(cleanup("a。；b"), "a；b");
        assert_eq!(cleanup("a；；b"), "a；b");
        assert_eq!(cleanup("a；；；；；b"), "a；b");
        assert_eq!(cleanup("a。。；b"), "a；b");
    }

    #[test]
    fn join_semicolon_handles_empty_sides() {
        assert_eq!(join_semicolon("", "b"), "b");
        assert_eq!(join_semicolon("a", ""), "a");
        assert_eq!(join_semicolon("a。", "b"), "a；b");
    }
}
