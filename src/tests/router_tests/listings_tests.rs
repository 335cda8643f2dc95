use crate::router::respond;
use crate::tests::utils::{body_string, get, test_config};
use astra::{Body, Request};
use http::header::VARY;

fn listed_ids(body: &str) -> Vec<u32> {
    body.match_indices(r#"data-listing-id=""#)
        .filter_map(|(i, m)| {
            let rest = &body[i + m.len()..];
            rest.split('"').next()?.parse().ok()
        })
        .collect()
}

fn htmx_get(uri: &str) -> Request {
    http::Request::builder()
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

#[test]
fn unfiltered_page_lists_whole_catalog() {
    let body = body_string(respond(get("/propiedades"), &test_config()));
    assert_eq!(listed_ids(&body), vec![1, 2, 3, 4, 5, 6]);
    assert!(body.contains("6 promociones encontradas"));
    assert!(!body.contains("Limpiar"));
}

#[test]
fn status_filter_in_query() {
    let body = body_string(respond(get("/propiedades?status=in-construction"), &test_config()));
    assert_eq!(listed_ids(&body), vec![2, 6]);
    assert!(body.contains("Limpiar"));
}

#[test]
fn bedrooms_filter_is_a_minimum() {
    let body = body_string(respond(get("/propiedades?bedrooms=4"), &test_config()));
    assert_eq!(listed_ids(&body), vec![1, 5]);
}

#[test]
fn filters_combine_with_and() {
    let body = body_string(respond(
        get("/propiedades?status=available&features=pool"),
        &test_config(),
    ));
    assert_eq!(listed_ids(&body), vec![1]);
}

#[test]
fn empty_result_shows_empty_state() {
    let resp = respond(get("/propiedades?minPrice=900000"), &test_config());
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(listed_ids(&body).is_empty());
    assert!(body.contains("No hay promociones que coincidan"));
}

#[test]
fn clearing_filters_restores_full_set() {
    let config = test_config();

    let filtered = body_string(respond(get("/propiedades?status=sold-out"), &config));
    assert_eq!(listed_ids(&filtered), vec![5]);
    // The clear link points at the bare listings path.
    assert!(filtered.contains(r#"<a href="/propiedades" class="btn btn-ghost">Limpiar</a>"#));
    assert_eq!(filtered.matches("Limpiar").count(), 1);

    let cleared = body_string(respond(get("/propiedades"), &config));
    assert_eq!(listed_ids(&cleared).len(), 6);
}

#[test]
fn bad_filter_value_is_400() {
    let config = test_config();
    let resp = respond(get("/propiedades?status=rented"), &config);
    assert_eq!(resp.status(), 400);

    let resp = respond(get("/propiedades?bedrooms=many"), &config);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("bedrooms"));
}

#[test]
fn htmx_request_gets_results_fragment() {
    let resp = respond(htmx_get("/propiedades?type=penthouse"), &test_config());
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<html"));
    assert!(body.starts_with(r#"<section id="listing-results""#));
    assert_eq!(listed_ids(&body), vec![4]);
}

#[test]
fn htmx_fragment_carries_clear_link() {
    let resp = respond(htmx_get("/propiedades?status=sold-out"), &test_config());
    let body = body_string(resp);

    assert!(body.starts_with(r#"<section id="listing-results""#));
    assert!(body.contains(r#"<a href="/propiedades" class="btn btn-ghost">Limpiar</a>"#));

    let cleared = body_string(respond(htmx_get("/propiedades"), &test_config()));
    assert!(!cleared.contains("Limpiar"));
}

#[test]
fn history_restore_gets_full_page() {
    let req = http::Request::builder()
        .uri("/propiedades?status=sold-out")
        .header("HX-Request", "true")
        .header("HX-History-Restore-Request", "true")
        .body(Body::empty())
        .unwrap();
    let resp = respond(req, &test_config());
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<html"));
    assert!(body.contains(r#"<form class="filters card""#));
    assert_eq!(listed_ids(&body), vec![5]);
}

#[test]
fn both_listing_variants_vary_on_htmx_header() {
    let config = test_config();

    let full = respond(get("/propiedades?type=penthouse"), &config);
    assert_eq!(full.headers()[VARY], "HX-Request");

    let fragment = respond(htmx_get("/propiedades?type=penthouse"), &config);
    assert_eq!(fragment.headers()[VARY], "HX-Request");
}
