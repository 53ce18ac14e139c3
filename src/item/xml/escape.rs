/// Escapes the five XML special characters.
///
/// Replacement order is fixed and starts with `&`, so entities produced by the
/// later replacements are never escaped twice.
///
/// # Examples
///
/// ```
/// use entity_listing::item::xml::escape;
///
/// assert_eq!(escape(r#"Tom & "Jerry" <it's>"#), "Tom &amp; &quot;Jerry&quot; &lt;it&#039;s&gt;");
/// ```
pub fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Inverse of [`escape`]: applies the five replacements in reverse order.
///
/// `unescape(&escape(s)) == s` for every string `s`.
pub fn unescape(escaped: &str) -> String {
    escaped
        .replace("&#039;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}
