use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use signal_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Database & services"), "Database &amp; services");
/// assert_eq!(escape_xml("<100ms"), "&lt;100ms");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use signal_deck::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Resolve a single entity or character reference by name, as reported by
/// the XML reader without the surrounding `&` and `;`.
///
/// ```
/// use signal_deck::common::xml::escape::resolve_entity;
/// assert_eq!(resolve_entity("amp"), Some("&".to_string()));
/// assert_eq!(resolve_entity("#x2705"), Some("✅".to_string()));
/// assert_eq!(resolve_entity("#36"), Some("$".to_string()));
/// assert_eq!(resolve_entity("nbsp"), None);
/// ```
pub fn resolve_entity(name: &str) -> Option<String> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let unescaped = unescape_xml(&format!("&{};", name));
    if unescaped.starts_with('&') && unescaped.len() > 1 {
        None
    } else {
        Some(unescaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_then_unescape_is_identity_for_deck_text() {
        let text = "Cost: $$$$ & <100ms \"quoted\" it's ✅";
        assert_eq!(unescape_xml(&escape_xml(text)), text);
    }

    #[test]
    fn test_resolve_entity_predefined() {
        assert_eq!(resolve_entity("lt").as_deref(), Some("<"));
        assert_eq!(resolve_entity("quot").as_deref(), Some("\""));
        assert_eq!(resolve_entity("apos").as_deref(), Some("'"));
    }
}
