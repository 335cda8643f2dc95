pub mod errors;
pub mod headers;
pub mod html;
pub mod json;

pub use errors::{error_to_response, ResultResp};
pub use headers::apply_security_headers;
pub use html::{html_response, html_with_status};
pub use json::json_response;
