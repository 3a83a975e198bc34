//! Sheet-wide English phrasing passes.
//!
//! Both passes rewrite string cells only, apply their patterns in order to
//! the evolving text, and leave a cell untouched when nothing matched.

use std::sync::LazyLock;

use hemaflag_model::{CellValue, Sheet};
use regex::Regex;

const ALY_ADJECTIVES: &str =
    r"(?:abnormal|atypical|unclassified|immature|degenerated|reactive|early)";
const ALY_TARGET: &str = r"(?:granulocytes?|white\s+blood\s+cells?|wbc(?:s)?|monocytes?|nucleated\s+cells?|cells?|components?)";
const ALY_CANONICAL_SUFFIX: &str = "${1} (atypical lymphocytes)";
const ALY_CANONICAL_PREFIX: &str = "atypical lymphocytes (${1})";

type Rules = Vec<(Regex, &'static str)>;

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("Invalid cleanup regex")
}

/// Known mistranslations, then spaced-out "e.g." variants.
static ENGLISH_FIXES: LazyLock<Rules> = LazyLock::new(|| {
    vec![
        (
            compile(r"\bHematology System abnormalities\b"),
            "hematological abnormalities",
        ),
        (compile(r"\banti[- ]?metabolic\b"), "antimetabolite"),
        (
            compile(r"\batypical granulocytes\s*\(ALY#\)"),
            "atypical lymphocytes (ALY#)",
        ),
        (
            compile(r"\bimmature granulocytes\s*\(ALY#\)"),
            "atypical lymphocytes (ALY#)",
        ),
        (
            compile(r"\bgranulocytes\s*\(ALY#\)"),
            "atypical lymphocytes (ALY#)",
        ),
        (compile(r"\be\s*\.\s*g\s*\.\s*,"), "e.g.,"),
        (compile(r"\be\s*\.\s*g\s*\.\b"), "e.g."),
    ]
});

/// Adjective/target descriptions paired with the ALY token, in both orders.
static ALY_FIXES: LazyLock<Rules> = LazyLock::new(|| {
    let adj = ALY_ADJECTIVES;
    let target = ALY_TARGET;
    vec![
        (
            compile(&format!(
                r"\b(ALY#?)\s*\(\s*{adj}(?:\s+{adj})*\s+{target}\s*\)"
            )),
            ALY_CANONICAL_SUFFIX,
        ),
        (
            compile(&format!(r"\b(ALY#?)\s*\(\s*{target}\s*\)")),
            ALY_CANONICAL_SUFFIX,
        ),
        (
            compile(&format!(
                r"\b{adj}(?:\s+{adj})*\s+{target}\s*\(\s*(ALY#?)\s*\)"
            )),
            ALY_CANONICAL_PREFIX,
        ),
        (
            compile(&format!(r"\b{target}\s*\(\s*(ALY#?)\s*\)")),
            ALY_CANONICAL_PREFIX,
        ),
    ]
});

fn apply_rules(text: &str, rules: &Rules) -> String {
    let mut value = text.to_string();
    for (pattern, replacement) in rules {
        value = pattern.replace_all(&value, *replacement).into_owned();
    }
    value
}

pub fn cleanup_english(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    apply_rules(text, &ENGLISH_FIXES)
}

pub fn fix_aly_descriptions(text: &str) -> String {
    if !text.to_uppercase().contains("ALY") {
        return text.to_string();
    }
    apply_rules(text, &ALY_FIXES)
}

/// Apply [`cleanup_english`] to every string cell; returns cells rewritten.
pub fn cleanup_english_sheet(sheet: &mut Sheet) -> usize {
    rewrite_text_cells(sheet, cleanup_english)
}

/// Apply [`fix_aly_descriptions`] to every string cell; returns cells rewritten.
pub fn fix_aly_sheet(sheet: &mut Sheet) -> usize {
    rewrite_text_cells(sheet, fix_aly_descriptions)
}

fn rewrite_text_cells(sheet: &mut Sheet, rewrite: impl Fn(&str) -> String) -> usize {
    let mut rewritten = 0;
    for (row, column) in sheet.text_cells() {
        let Some(text) = sheet.cell(row, column).as_text() else {
            continue;
        };
        let cleaned = rewrite(text);
        if cleaned != text && sheet.set(row, column, CellValue::Text(cleaned)) {
            rewritten += 1;
        }
    }
    rewritten
}
