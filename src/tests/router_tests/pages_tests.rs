use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, request, test_config};
use http::header::{ALLOW, CACHE_CONTROL, CONTENT_TYPE};
use http::Method;

#[test]
fn every_page_route_renders() {
    let config = test_config();

    for path in [
        "/",
        "/propiedades",
        "/propiedades/3",
        "/nosotros",
        "/sobre-nosotros",
        "/contacto",
        "/aviso-legal",
        "/privacidad",
        "/cookies",
    ] {
        let resp = respond(get(path), &config);
        assert_eq!(resp.status(), 200, "{path}");
        assert_eq!(resp.headers()[CACHE_CONTROL], "no-cache", "{path}");
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html; charset=utf-8");

        let body = body_string(resp);
        assert!(body.starts_with("<!DOCTYPE html>"), "{path}");
        assert!(body.contains(r#"<html lang="es">"#));
    }
}

#[test]
fn unmatched_route_renders_not_found_view() {
    let config = test_config();

    let err = handle(get("/no-existe"), &config).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = respond(get("/no-existe"), &config);
    assert_eq!(resp.status(), 404);
    let body = body_string(resp);
    assert!(body.contains("Página no encontrada"));
    for link in ["/", "/propiedades", "/nosotros", "/contacto"] {
        assert!(body.contains(&format!(r#"href="{link}""#)), "missing {link}");
    }
}

#[test]
fn unknown_or_malformed_listing_id_is_not_found() {
    let config = test_config();
    assert_eq!(respond(get("/propiedades/99"), &config).status(), 404);
    assert_eq!(respond(get("/propiedades/abc"), &config).status(), 404);
    assert_eq!(respond(get("/propiedades/1/extra"), &config).status(), 404);
}

#[test]
fn navigation_marks_current_section() {
    let body = body_string(respond(get("/propiedades/2"), &test_config()));
    assert!(body.contains(r#"<a href="/propiedades" aria-current="page" class="active">"#));
    assert!(body.contains("Residencial Las Encinas"));
}

#[test]
fn wrong_method_on_page_is_405_with_allow() {
    let config = test_config();

    let resp = respond(request(Method::DELETE, "/nosotros"), &config);
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.headers()[ALLOW], "GET, HEAD");

    let resp = respond(request(Method::PUT, "/contacto"), &config);
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.headers()[ALLOW], "GET, HEAD, POST");
}

#[test]
fn head_is_get_without_body() {
    let resp = respond(request(Method::HEAD, "/"), &test_config());
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
    assert_eq!(body_string(resp), "");
}

#[test]
fn security_headers_on_success_and_error() {
    let config = test_config();

    for path in ["/", "/no-existe", "/health", "/api/x"] {
        let resp = respond(get(path), &config);
        let h = resp.headers();
        assert_eq!(h["x-content-type-options"], "nosniff", "{path}");
        assert_eq!(h["x-frame-options"], "DENY", "{path}");
        assert_eq!(h["x-xss-protection"], "1; mode=block", "{path}");
        assert_eq!(h["referrer-policy"], "strict-origin-when-cross-origin", "{path}");
    }
}
