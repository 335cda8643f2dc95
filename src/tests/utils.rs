use crate::config::SiteConfig;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Config with no submission delay and an empty build directory.
pub fn test_config() -> SiteConfig {
    SiteConfig {
        static_dir: std::env::temp_dir().join("realstate_site_no_dist"),
        contact_delay: Duration::ZERO,
        ..SiteConfig::default()
    }
}

pub fn config_with_dist(dir: &Path) -> SiteConfig {
    SiteConfig {
        static_dir: dir.to_path_buf(),
        ..test_config()
    }
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri)
}

pub fn post_form(uri: &str, form: &str, htmx: bool) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
