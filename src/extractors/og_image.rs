use scraper::{Html, Selector};

/// Extract the Open Graph image URL from HTML content, reading the
/// `content` attribute of the first `<meta property="og:image">` tag.
pub fn extract_og_image(html_content: &str) -> Option<String> {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse(r#"meta[property="og:image"]"#).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_string())
}
