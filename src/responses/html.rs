use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use http::header::{CACHE_CONTROL, CONTENT_TYPE};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup)
}

/// Rendered documents are never cached so a deploy is visible on next load.
pub fn html_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header(CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())
        .header(CACHE_CONTROL, "no-cache")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
