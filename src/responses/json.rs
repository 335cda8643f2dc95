use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use http::header::{CACHE_CONTROL, CONTENT_TYPE};
use serde::Serialize;

pub fn json_response<T: Serialize>(status: u16, payload: &T) -> ResultResp {
    let body = serde_json::to_vec(payload).map_err(|e| {
        tracing::error!("failed to serialise JSON response: {e}");
        ServerError::InternalError
    })?;

    ResponseBuilder::new()
        .status(status)
        .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .header(CACHE_CONTROL, "no-store")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
