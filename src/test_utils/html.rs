use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The first element matching the CSS `selector`.
#[track_caller]
pub(crate) fn must_select<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
    let parsed = Selector::parse(selector).expect("Invalid CSS selector");

    html.select(&parsed)
        .next()
        .unwrap_or_else(|| panic!("No element matches {selector:?} in {}", html.html()))
}

/// The trimmed text of every element matching the CSS `selector`, in document order.
#[track_caller]
pub(crate) fn select_texts(html: &Html, selector: &str) -> Vec<String> {
    let parsed = Selector::parse(selector).expect("Invalid CSS selector");

    html.select(&parsed)
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .collect()
}

/// All the text in the document, without markup.
pub(crate) fn page_text(html: &Html) -> String {
    html.root_element().text().collect()
}
