use ammonia;

/// Clean HTML content using the ammonia library.
///
/// Comment text comes from anonymous visitors and is rendered back to every
/// reader of the blog, so it is sanitized before storage: safe tags (like
/// <b>, <p>) survive while dangerous tags (like <script>, <iframe>) and
/// malicious attributes (like onclick) are stripped.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
