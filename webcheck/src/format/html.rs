//! Structural checks for HTML documents.
//!
//! All checks are lexical: `<header` satisfies the `<head` check and
//! `data-id="x"` counts as an id attribute.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Defect;

/// Path marker for partial documents that skip every check.
pub const COMPONENT_MARKER: &str = "componentes";

/// Ids allowed to appear more than once in a document.
pub const REPEATABLE_IDS: &[&str] = &["toast-container", "footer-container"];

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid HTML check regex: {err}"),
    }
}

static DOCTYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<!DOCTYPE\s+html>"));

/// Required opening tags and the defect emitted when each is absent, in check order.
static REQUIRED_TAGS: LazyLock<[(Regex, &'static str); 3]> = LazyLock::new(|| {
    [
        (compile(r"(?i)<html"), "Falta etiqueta <html>"),
        (compile(r"(?i)<head"), "Falta etiqueta <head>"),
        (compile(r"(?i)<body"), "Falta etiqueta <body>"),
    ]
});

static ID_ATTRIBUTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)id\s*=\s*["']([^"']+)["']"#));

/// Whether `relative_path` names a component fragment rather than a full document.
#[must_use]
pub fn is_component_fragment(relative_path: &str) -> bool {
    relative_path.contains(COMPONENT_MARKER)
}

/// Validate an HTML file.
///
/// Component fragments always pass. Full documents are checked for the
/// doctype, the `<html>`, `<head>` and `<body>` tags, then for duplicate
/// ids. Every check runs; defects come back in that order.
#[must_use]
pub fn validate_html(content: &str, relative_path: &str) -> Vec<Defect> {
    if is_component_fragment(relative_path) {
        return Vec::new();
    }

    let mut defects = Vec::new();

    if !DOCTYPE_PATTERN.is_match(content) {
        defects.push(Defect::unlocated("Falta declaraci\u{f3}n <!DOCTYPE html>"));
    }

    for (pattern, message) in &*REQUIRED_TAGS {
        if !pattern.is_match(content) {
            defects.push(Defect::unlocated(*message));
        }
    }

    defects.extend(duplicate_ids(content));
    defects
}

/// One defect per repeated occurrence of an id, ignoring `REPEATABLE_IDS`.
fn duplicate_ids(content: &str) -> Vec<Defect> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut defects = Vec::new();

    for caps in ID_ATTRIBUTE_PATTERN.captures_iter(content) {
        let Some(id) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if REPEATABLE_IDS.contains(&id) {
            continue;
        }
        if !seen.insert(id) {
            defects.push(Defect::unlocated(format!("ID duplicado: \"{id}\"")));
        }
    }

    defects
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str =
        "<!DOCTYPE html><html><head><title>t</title></head><body></body></html>";

    fn messages(defects: &[Defect]) -> Vec<&str> {
        defects.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn test_complete_document_passes() {
        assert!(validate_html(COMPLETE, "public/index.html").is_empty());
    }

    #[test]
    fn test_missing_everything_reports_in_order() {
        let defects = validate_html("<p>hola</p>", "public/index.html");
        assert_eq!(
            messages(&defects),
            vec![
                "Falta declaraci\u{f3}n <!DOCTYPE html>",
                "Falta etiqueta <html>",
                "Falta etiqueta <head>",
                "Falta etiqueta <body>",
            ]
        );
        assert!(defects.iter().all(|d| d.line == 0));
    }

    #[test]
    fn test_checks_are_case_insensitive() {
        let content = "<!doctype HTML>\n<HTML><Head></Head><BODY></BODY></HTML>";
        assert!(validate_html(content, "public/index.html").is_empty());
    }

    #[test]
    fn test_doctype_allows_extra_whitespace() {
        let content = "<!DOCTYPE   html><html><head></head><body></body></html>";
        assert!(validate_html(content, "public/index.html").is_empty());
    }

    #[test]
    fn test_header_tag_satisfies_head_check() {
        let content = "<!DOCTYPE html><html><header></header><body></body></html>";
        assert!(validate_html(content, "public/index.html").is_empty());
    }

    #[test]
    fn test_component_fragment_skips_all_checks() {
        let defects = validate_html(
            "<div id=\"a\"></div><div id=\"a\"></div>",
            "public/componentes/navbar.html",
        );
        assert!(defects.is_empty());
    }

    #[test]
    fn test_component_marker_anywhere_in_path() {
        assert!(is_component_fragment("public/mis-componentes-viejos/x.html"));
        assert!(!is_component_fragment("public/components/x.html"));
    }

    #[test]
    fn test_triple_id_reports_two_duplicates() {
        let content = format!(
            "{COMPLETE}<div id=\"x\"></div><span id='x'></span><p ID = \"x\"></p>"
        );
        let defects = validate_html(&content, "public/index.html");
        assert_eq!(
            messages(&defects),
            vec!["ID duplicado: \"x\"", "ID duplicado: \"x\""]
        );
    }

    #[test]
    fn test_repeatable_ids_are_ignored() {
        let content = format!(
            "{COMPLETE}<div id=\"toast-container\"></div><div id=\"toast-container\"></div>\
             <footer id=\"footer-container\"></footer><footer id=\"footer-container\"></footer>"
        );
        assert!(validate_html(&content, "public/index.html").is_empty());
    }

    #[test]
    fn test_distinct_ids_pass() {
        let content = format!("{COMPLETE}<div id=\"a\"></div><div id=\"b\"></div>");
        assert!(validate_html(&content, "public/index.html").is_empty());
    }

    #[test]
    fn test_data_id_attributes_count_as_ids() {
        let content = format!("{COMPLETE}<li data-id=\"7\"></li><li data-id=\"7\"></li>");
        let defects = validate_html(&content, "public/index.html");
        assert_eq!(messages(&defects), vec!["ID duplicado: \"7\""]);
    }

    #[test]
    fn test_duplicates_follow_structure_defects() {
        let content = "<div id=\"a\"></div><div id=\"a\"></div>";
        let defects = validate_html(content, "public/index.html");
        assert_eq!(defects.len(), 5);
        assert_eq!(defects[4].message, "ID duplicado: \"a\"");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let content = "<html><div id=\"a\"></div><div id=\"a\"></div></html>";
        let first = validate_html(content, "public/index.html");
        let second = validate_html(content, "public/index.html");
        assert_eq!(first, second);
    }
}
