use crate::config::{Environment, SiteConfig};
use crate::domain::catalog;
use crate::router::respond;
use crate::tests::utils::{body_string, config_with_dist, get, request};
use http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use http::Method;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn dist() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/index-9c1e.js"), "console.log(1)").unwrap();
    fs::write(dir.path().join("robots.txt"), "User-agent: *").unwrap();
    fs::write(dir.path().join("index.html"), "<div id=\"root\"></div>").unwrap();
    dir
}

fn production(dir: &TempDir) -> SiteConfig {
    SiteConfig {
        environment: Environment::Production,
        ..config_with_dist(dir.path())
    }
}

#[test]
fn hashed_assets_are_immutable() {
    let dir = dist();
    let resp = respond(get("/assets/index-9c1e.js"), &config_with_dist(dir.path()));

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()[CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );
    assert!(resp.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .contains("javascript"));
    assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
    assert_eq!(body_string(resp), "console.log(1)");
}

#[test]
fn other_files_cache_by_environment() {
    let dir = dist();

    let resp = respond(get("/robots.txt"), &production(&dir));
    assert_eq!(resp.headers()[CACHE_CONTROL], "public, max-age=3600");

    let resp = respond(get("/robots.txt"), &config_with_dist(dir.path()));
    assert_eq!(resp.headers()[CACHE_CONTROL], "public, max-age=0");
}

#[test]
fn matching_etag_yields_304() {
    let dir = dist();
    let config = config_with_dist(dir.path());

    let first = respond(get("/robots.txt"), &config);
    let etag = first.headers()[ETAG].clone();

    let req = http::Request::builder()
        .uri("/robots.txt")
        .header(IF_NONE_MATCH, etag)
        .body(astra::Body::empty())
        .unwrap();
    let resp = respond(req, &config);
    assert_eq!(resp.status(), 304);
    assert_eq!(body_string(resp), "");
}

#[test]
fn traversal_never_reaches_the_filesystem() {
    let dir = dist();
    let config = config_with_dist(dir.path());

    for path in ["/../Cargo.toml", "/assets/%2e%2e/%2e%2e/Cargo.toml", "/a%5c..%5cCargo.toml"] {
        assert_eq!(respond(get(path), &config).status(), 404, "{path}");
    }
}

#[test]
fn path_below_a_file_is_not_found() {
    let dir = dist();
    let config = config_with_dist(dir.path());

    for path in ["/robots.txt/extra", "/assets/index-9c1e.js/x"] {
        let resp = respond(get(path), &config);
        assert_eq!(resp.status(), 404, "{path}");
        assert!(body_string(resp).contains("Página no encontrada"));
    }

    let long = format!("/{}", "x".repeat(4096));
    assert_eq!(respond(get(&long), &config).status(), 404);
}

#[test]
fn spa_fallback_serves_index_when_enabled() {
    let dir = dist();
    let config = SiteConfig {
        spa_fallback: true,
        ..config_with_dist(dir.path())
    };

    let resp = respond(get("/ruta/del/cliente"), &config);
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()[CACHE_CONTROL], "no-cache");
    assert_eq!(body_string(resp), "<div id=\"root\"></div>");

    // Rendered routes still win over the shell.
    let body = body_string(respond(get("/nosotros"), &config));
    assert!(body.contains("Nuestra historia"));
}

#[test]
fn without_fallback_unknown_paths_are_404() {
    let dir = dist();
    let resp = respond(get("/ruta/del/cliente"), &config_with_dist(dir.path()));
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Página no encontrada"));
}

#[test]
fn static_files_only_answer_get_and_head() {
    let dir = dist();
    let config = config_with_dist(dir.path());

    let resp = respond(request(Method::HEAD, "/robots.txt"), &config);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "");

    assert_eq!(respond(request(Method::POST, "/robots.txt"), &config).status(), 404);
}

#[test]
fn every_catalog_image_ships_in_dist() {
    let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join("dist");
    let config = config_with_dist(&shipped);

    for listing in catalog::all() {
        for image in listing.images {
            let resp = respond(get(image), &config);
            assert_eq!(resp.status(), 200, "{image}");
            assert_eq!(resp.headers()[CONTENT_TYPE], "image/svg+xml", "{image}");
        }
    }
}
