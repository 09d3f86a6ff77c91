use colored::Colorize;
use reqwest::Client;
use url::Url;

use crate::extractors::og_image::extract_og_image;

/// Fetch the HTML of a remote page and pull out its `og:image` URL.
///
/// Never fails to the caller: any network or body-read problem is logged
/// and collapsed into `None`, the same as a page with no og:image tag.
pub async fn fetch_og_image(client: &Client, url: &Url) -> Option<String> {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{}", format!("Error fetching {}: {}", url, e).red());
            return None;
        }
    };

    if !response.status().is_success() {
        eprintln!(
            "{}",
            format!("Failed to fetch {}: {}", url, response.status()).red()
        );
        return None;
    }

    let html_content = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            eprintln!("{}", format!("Error reading body of {}: {}", url, e).red());
            return None;
        }
    };

    extract_og_image(&html_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn extracts_og_image_from_fetched_page() {
        let server = MockServer::start().await;
        let body = r#"<html><head>
            <meta property="og:image" content="https://example.com/pic.jpg">
        </head><body></body></html>"#;

        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = Client::new();
        let url = Url::parse(&format!("{}/article", server.uri())).unwrap();

        assert_eq!(
            fetch_og_image(&client, &url).await,
            Some("https://example.com/pic.jpg".to_string())
        );
    }

    #[tokio::test]
    async fn non_success_status_returns_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new();
        let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();

        assert_eq!(fetch_og_image(&client, &url).await, None);
    }

    #[tokio::test]
    async fn connection_failure_returns_none() {
        let server = MockServer::start().await;
        let url = Url::parse(&format!("{}/gone", server.uri())).unwrap();
        drop(server);

        let client = Client::new();
        assert_eq!(fetch_og_image(&client, &url).await, None);
    }

    #[tokio::test]
    async fn page_without_og_image_returns_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/plain"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
            .mount(&server)
            .await;

        let client = Client::new();
        let url = Url::parse(&format!("{}/plain", server.uri())).unwrap();

        assert_eq!(fetch_og_image(&client, &url).await, None);
    }
}
