use crate::router::{respond, MAX_FORM_BYTES};
use crate::tests::utils::{body_string, get, post_form, test_config};

const VALID: &str = "name=Ana+Garc%C3%ADa&email=ana%40example.com&phone=%2B34+600+123+456\
    &subject=visit&property=&message=Quiero+visitar+la+promoci%C3%B3n&accept_privacy=on";

#[test]
fn contact_page_starts_empty() {
    let body = body_string(respond(get("/contacto"), &test_config()));
    assert!(body.contains(r#"id="contact-form-area""#));
    assert!(!body.contains("form-alert"));
    assert!(body.contains(r#"<option value="" selected>"#));
}

#[test]
fn property_query_preselects_development() {
    let body = body_string(respond(get("/contacto?propiedad=2"), &test_config()));
    assert!(body.contains(r#"value="Residencial Las Encinas""#));
    assert!(body.contains(r#"<option value="information" selected>"#));

    // Unknown ids leave the form blank.
    let body = body_string(respond(get("/contacto?propiedad=42"), &test_config()));
    assert!(!body.contains("Residencial"));
}

#[test]
fn empty_submission_is_rejected_with_inline_errors() {
    let resp = respond(post_form("/contacto", "", false), &test_config());
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("<html"));
    assert!(body.contains("Este campo es obligatorio"));
    assert!(body.contains("Debes aceptar la política de privacidad"));
    assert!(body.contains(r##"href="#field-name""##));
}

#[test]
fn malformed_fields_are_flagged_and_input_kept() {
    let form = VALID.replace("ana%40example.com", "ana.example.com");
    let body = body_string(respond(post_form("/contacto", &form, false), &test_config()));

    assert!(body.contains("Por favor, introduce un email válido"));
    assert!(body.contains(r#"value="ana.example.com""#));
    assert!(body.contains(r#"value="Ana García""#));
    assert!(!body.contains("Referencia"));
}

#[test]
fn htmx_rejection_returns_fragment_with_200() {
    let resp = respond(post_form("/contacto", "name=A", true), &test_config());
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<html"));
    assert!(body.starts_with(r#"<div id="contact-form-area">"#));
    assert!(body.contains("field-error"));
}

#[test]
fn valid_submission_shows_reference() {
    let resp = respond(post_form("/contacto", VALID, false), &test_config());
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<html"));
    assert!(body.contains("¡Mensaje enviado!"));
    assert!(body.contains("REF-"));
}

#[test]
fn valid_htmx_submission_swaps_success_fragment() {
    let body = body_string(respond(post_form("/contacto", VALID, true), &test_config()));
    assert!(body.starts_with(r#"<div id="contact-form-area" class="contact-success""#));
    assert!(!body.contains("<html"));
}

#[test]
fn oversized_body_is_bad_request() {
    let huge = format!("message={}", "a".repeat(MAX_FORM_BYTES as usize + 1));
    let resp = respond(post_form("/contacto", &huge, false), &test_config());
    assert_eq!(resp.status(), 400);
}
