use colored::Colorize;
use reqwest::Client;
use url::Url;

use crate::document::adapter::DocumentAdapter;
use crate::scraping::fetch_og_image::fetch_og_image;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateStats {
    pub candidates: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Walk every marker-class element of the page, follow its anchor link,
/// and rewrite its image to the linked page's og:image.
///
/// Candidates are processed strictly one at a time; each fetch completes
/// before the next begins, and one candidate's failure never affects the
/// others. A candidate without both an anchor and an image descendant is
/// skipped without a log line.
pub async fn update_page<D: DocumentAdapter>(
    client: &Client,
    document: &mut D,
    base_url: &Url,
    marker_class: &str,
) -> UpdateStats {
    let mut stats = UpdateStats::default();

    for candidate in document.find_all(&format!(".{}", marker_class)) {
        stats.candidates += 1;

        let link = document.find_first(candidate, "a");
        let img = document.find_first(candidate, "img");

        let (link, img) = match (link, img) {
            (Some(link), Some(img)) => (link, img),
            _ => {
                stats.skipped += 1;
                continue;
            }
        };

        // Browser link.href semantics: a missing or empty href resolves
        // back to the page's own URL.
        let href = document.get_attribute(link, "href").unwrap_or_default();
        let target = match base_url.join(&href) {
            Ok(target) => target,
            Err(e) => {
                println!(
                    "{}",
                    format!("Cannot resolve link {:?}: {}", href, e).yellow()
                );
                stats.skipped += 1;
                continue;
            }
        };

        match fetch_og_image(client, &target).await {
            // An empty content attribute still counts as a present value
            // and gets assigned as-is.
            Some(og_image_url) => {
                document.set_attribute(img, "src", &og_image_url);
                stats.updated += 1;
            }
            None => {
                println!(
                    "{}",
                    format!("No OG image found (or request failed) for: {}", target).yellow()
                );
                stats.skipped += 1;
            }
        }
    }

    stats
}
