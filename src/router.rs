use crate::config::SiteConfig;
use crate::contact::{self, ContactForm, FieldErrors};
use crate::domain::{catalog, ListingFilter};
use crate::errors::ServerError;
use crate::responses::{
    apply_security_headers, error_to_response, html_response, html_with_status, json_response,
    ResultResp,
};
use crate::static_files;
use crate::templates::{components, pages, pages::LegalDoc};
use astra::{Body, Request, Response};
use chrono::{SecondsFormat, Utc};
use http::header::{HeaderValue, IF_NONE_MATCH, VARY};
use http::{HeaderMap, Method};
use maud::Markup;
use serde::Serialize;
use std::io::Read;
use url::form_urlencoded;

/// Upper bound on an accepted form body.
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

const PAGE_METHODS: &str = "GET, HEAD";
const FORM_METHODS: &str = "GET, HEAD, POST";

#[derive(Debug, Serialize)]
pub struct Health<'a> {
    pub status: &'static str,
    pub service: &'a str,
    pub timestamp: String,
    pub version: &'a str,
}

#[derive(Debug, Serialize)]
struct ApiError {
    error: &'static str,
}

/// Full request pipeline: routing, error pages, security headers and
/// body stripping for `HEAD`.
pub fn respond(req: Request, config: &SiteConfig) -> Response {
    let is_head = req.method() == Method::HEAD;

    let mut resp = handle(req, config).unwrap_or_else(error_to_response);
    apply_security_headers(&mut resp);

    if is_head {
        *resp.body_mut() = Body::empty();
    }
    resp
}

pub fn handle(req: Request, config: &SiteConfig) -> ResultResp {
    let (parts, body) = req.into_parts();

    // HEAD is answered like GET; `respond` drops the body afterwards.
    let method = if parts.method == Method::HEAD {
        Method::GET
    } else {
        parts.method.clone()
    };
    let path = parts.uri.path();
    let query = parts.uri.query().unwrap_or("");
    let htmx = wants_fragment(&parts.headers);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["health"] => get_only(&method, || health(config)),
        ["api", ..] => api_not_found(),

        [] => page(&method, pages::home_page),
        ["propiedades"] => get_only(&method, || listings(query, htmx)),
        ["propiedades", id] => get_only(&method, || listing_detail(id)),
        ["nosotros"] | ["sobre-nosotros"] => page(&method, pages::about_page),
        ["contacto"] => match method {
            Method::GET => contact_page(query),
            Method::POST => contact_submit(body, htmx, config),
            _ => Err(ServerError::MethodNotAllowed(FORM_METHODS)),
        },
        ["aviso-legal"] => page(&method, || pages::legal_page(LegalDoc::Notice)),
        ["privacidad"] => page(&method, || pages::legal_page(LegalDoc::Privacy)),
        ["cookies"] => page(&method, || pages::legal_page(LegalDoc::Cookies)),

        _ if method == Method::GET => {
            let if_none_match = parts
                .headers
                .get(IF_NONE_MATCH)
                .and_then(|v| v.to_str().ok());
            fallback(path, if_none_match, config)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// htmx asks for a fragment, except when restoring history after a cache
/// miss; that request needs the whole page.
fn wants_fragment(headers: &HeaderMap) -> bool {
    header_is_true(headers, "hx-request") && !header_is_true(headers, "hx-history-restore-request")
}

fn header_is_true(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"true"))
}

fn get_only(method: &Method, handler: impl FnOnce() -> ResultResp) -> ResultResp {
    if *method == Method::GET {
        handler()
    } else {
        Err(ServerError::MethodNotAllowed(PAGE_METHODS))
    }
}

fn page(method: &Method, render: impl FnOnce() -> Markup) -> ResultResp {
    get_only(method, || html_response(render()))
}

fn health(config: &SiteConfig) -> ResultResp {
    json_response(
        200,
        &Health {
            status: "ok",
            service: config.service_name,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: config.version,
        },
    )
}

fn api_not_found() -> ResultResp {
    json_response(
        404,
        &ApiError {
            error: "API endpoint not found",
        },
    )
}

fn listings(query: &str, htmx: bool) -> ResultResp {
    let filter =
        ListingFilter::from_query(query).map_err(|e| ServerError::BadRequest(e.to_string()))?;
    let results = catalog::filter(&filter);

    tracing::debug!(
        query = %filter.to_query(),
        matches = results.len(),
        "listings filtered"
    );

    let mut resp = if htmx {
        html_response(pages::listing_results(&filter, &results))?
    } else {
        html_response(pages::listings_page(&filter, &results))?
    };
    // Same URL, two bodies; caches must key on the htmx header.
    resp.headers_mut()
        .insert(VARY, HeaderValue::from_static("HX-Request"));
    Ok(resp)
}

fn listing_detail(raw_id: &str) -> ResultResp {
    let listing = raw_id
        .parse::<u32>()
        .ok()
        .and_then(catalog::find)
        .ok_or(ServerError::NotFound)?;

    html_response(pages::listing_detail_page(listing))
}

fn contact_page(query: &str) -> ResultResp {
    let form = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "propiedad")
        .and_then(|(_, id)| id.parse::<u32>().ok())
        .and_then(catalog::find)
        .map(|listing| ContactForm::for_property(listing.title))
        .unwrap_or_default();

    html_response(pages::contact_page(&form, &FieldErrors::default()))
}

fn contact_submit(body: Body, htmx: bool, config: &SiteConfig) -> ResultResp {
    let raw = read_form(body)?;
    let form = ContactForm::from_urlencoded(&raw);

    match form.validate() {
        Ok(request) => {
            let receipt = contact::submit(&request, config.contact_delay);
            if htmx {
                html_response(components::contact_success(&receipt))
            } else {
                html_response(pages::contact_sent_page(&receipt))
            }
        }
        Err(errors) => {
            tracing::debug!(
                invalid_fields = errors.len(),
                first = errors.first().map_or("-", |f| f.key()),
                "contact form rejected"
            );
            // htmx only swaps 2xx responses, so the fragment goes out as 200.
            if htmx {
                html_response(components::contact_form(&form, &errors))
            } else {
                html_with_status(422, pages::contact_page(&form, &errors))
            }
        }
    }
}

fn read_form(mut body: Body) -> Result<Vec<u8>, ServerError> {
    let mut raw = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }
    Ok(raw)
}

/// Build output first, then the SPA shell, then the not-found page.
fn fallback(path: &str, if_none_match: Option<&str>, config: &SiteConfig) -> ResultResp {
    if let Some(resp) = static_files::serve(config, path, if_none_match)? {
        return Ok(resp);
    }

    if config.spa_fallback {
        if let Some(resp) = static_files::serve_index(config)? {
            return Ok(resp);
        }
    }

    Err(ServerError::NotFound)
}
