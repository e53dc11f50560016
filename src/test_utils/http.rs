use axum::{
    body::Body,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};

#[track_caller]
fn header_value<'a>(response: &'a Response<Body>, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("response has no {name} header"))
        .to_str()
        .unwrap_or_else(|error| panic!("{name} header is not visible ASCII: {error}"))
}

/// Assert that `response` is a full HTML page rendered successfully.
#[track_caller]
pub(crate) fn assert_html_page(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = header_value(response, CONTENT_TYPE.as_str());
    assert!(
        content_type.starts_with("text/html"),
        "want an HTML response, got content type {content_type:?}"
    );
}

/// Assert that `response` tells htmx to load `endpoint` after a form post.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header_value(response, "hx-redirect"), endpoint);
}
