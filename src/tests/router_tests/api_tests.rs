use crate::router::respond;
use crate::tests::utils::{body_string, get, request, test_config};
use http::header::CONTENT_TYPE;
use http::Method;
use serde_json::Value;

#[test]
fn health_reports_fixed_shape() {
    let config = test_config();
    let resp = respond(get("/health"), &config);

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], config.service_name);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));

    let ts = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "{ts}");

    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
}

#[test]
fn unknown_api_paths_answer_json_404() {
    let config = test_config();

    for (method, path) in [
        (Method::GET, "/api"),
        (Method::GET, "/api/listings"),
        (Method::POST, "/api/contact"),
    ] {
        let resp = respond(request(method, path), &config);
        assert_eq!(resp.status(), 404, "{path}");
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_string(resp), r#"{"error":"API endpoint not found"}"#);
    }
}

#[test]
fn health_rejects_post() {
    let resp = respond(request(Method::POST, "/health"), &test_config());
    assert_eq!(resp.status(), 405);
}
