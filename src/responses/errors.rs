pub use crate::errors::ResultResp;
use crate::errors::ServerError;
use crate::templates::{components::error_page, pages::not_found_page};
use astra::{Body, Response, ResponseBuilder};
use http::header::{ALLOW, CACHE_CONTROL, CONTENT_TYPE};

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();

    let markup = match &err {
        ServerError::NotFound => not_found_page(),
        ServerError::BadRequest(msg) => error_page(status, msg),
        ServerError::MethodNotAllowed(_) => error_page(status, "Method Not Allowed"),
        ServerError::Io(e) => {
            tracing::error!("I/O failure while handling request: {e}");
            error_page(status, "Internal Server Error")
        }
        ServerError::InternalError => error_page(status, "Internal Server Error"),
    };

    let mut builder = ResponseBuilder::new()
        .status(status)
        .header(CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())
        .header(CACHE_CONTROL, "no-cache");

    if let ServerError::MethodNotAllowed(allow) = err {
        builder = builder.header(ALLOW, allow);
    }

    builder
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
