// src/tests/router_tests/endpoint_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with_files};
use http::Method;
use serde_json::{json, Value};

const USED_CARS: &str = r#"[{"Title":"Toyota Corolla","Price":"PKR 45 lacs","Location":"Lahore"}]"#;

#[test]
fn category_endpoints_serve_stored_json() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, state) = state_with_files(&[
        ("used_cars.json", USED_CARS),
        ("new_cars.json", "[]"),
        ("bikes.json", r#"[{"Title":"CD 70"}]"#),
    ]);

    let resp = handle(request(Method::GET, "/used-cars"), &state)?;
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(content_type, "application/json");

    let body: Value = serde_json::from_str(&body_string(resp))?;
    assert_eq!(
        body,
        json!([{ "Title": "Toyota Corolla", "Price": "PKR 45 lacs", "Location": "Lahore" }])
    );

    let bikes = body_string(handle(request(Method::GET, "/bikes"), &state)?);
    assert_eq!(bikes, r#"[{"Title":"CD 70"}]"#);

    let new_cars = body_string(handle(request(Method::GET, "/new-cars"), &state)?);
    assert_eq!(new_cars, "[]");

    Ok(())
}

#[test]
fn missing_data_file_is_not_found() {
    let (_dir, state) = state_with_files(&[]);

    let result = handle(request(Method::GET, "/new-cars"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn unknown_path_is_not_found() {
    let (_dir, state) = state_with_files(&[]);

    let result = handle(request(Method::GET, "/trucks"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn writes_to_listing_endpoints_are_rejected() {
    let (_dir, state) = state_with_files(&[("bikes.json", "[]")]);

    let result = handle(request(Method::POST, "/bikes"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn health_check_answers_ok() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, state) = state_with_files(&[]);

    let resp = handle(request(Method::GET, "/health"), &state)?;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
    Ok(())
}

#[test]
fn errors_become_html_pages_with_status() {
    let resp = crate::templates::html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let resp = crate::templates::html_error_response(ServerError::BadRequest("<nope>".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("&lt;nope&gt;"));
}
