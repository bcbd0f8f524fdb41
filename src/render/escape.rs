//! HTML escaping for text that originates outside the page.

/// Replaces the five HTML-significant characters with entity references.
///
/// Applied to every externally sourced field before it is placed in markup.
///
/// # Example
///
/// ```
/// use showcase::render::escape_html;
///
/// assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
/// ```
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for character in input.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::escape_html;

    #[rstest]
    #[case::reserved_characters("<b>&\"'", "&lt;b&gt;&amp;&quot;&#39;")]
    #[case::script_tag("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;")]
    #[case::existing_entity("&amp;", "&amp;amp;")]
    #[case::plain_text("ferris the crab", "ferris the crab")]
    #[case::non_ascii("café ☕", "café ☕")]
    #[case::empty("", "")]
    fn escapes_reserved_characters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[rstest]
    fn escaped_output_contains_no_markup_delimiters() {
        let escaped = escape_html("<img src=x onerror='alert(\"x\")'>");

        assert!(!escaped.contains('<'), "no raw `<`: {escaped}");
        assert!(!escaped.contains('>'), "no raw `>`: {escaped}");
        assert!(!escaped.contains('"'), "no raw quote: {escaped}");
        assert!(!escaped.contains('\''), "no raw apostrophe: {escaped}");
    }
}
