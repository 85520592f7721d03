// src/tests/router_tests/page_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with_files};
use http::Method;

#[test]
fn home_page_renders_each_category_into_its_container() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, state) = state_with_files(&[
        (
            "used_cars.json",
            r#"[{"Title":"Corolla"},{"Title":"Mehran"}]"#,
        ),
        (
            "new_cars.json",
            r#"[{"title":"Sedan","price":"$10,000","location":"City A","rating":4.5,"Reviews Count":12}]"#,
        ),
        ("bikes.json", "[]"),
    ]);

    let resp = handle(request(Method::GET, "/"), &state)?;
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    let used_at = body.find(r#"id="usedCarsContainer""#).expect("used cars container");
    let new_at = body.find(r#"id="newCarsContainer""#).expect("new cars container");
    let bikes_at = body.find(r#"id="bikesContainer""#).expect("bikes container");
    assert!(used_at < new_at && new_at < bikes_at);

    // Cards land in their own container, in array order.
    let used_section = &body[used_at..new_at];
    let corolla = used_section.find("Corolla").expect("Corolla card");
    let mehran = used_section.find("Mehran").expect("Mehran card");
    assert!(corolla < mehran);
    assert_eq!(used_section.matches(r#"class="card""#).count(), 2);

    let new_section = &body[new_at..bikes_at];
    assert!(new_section.contains(r#"<div class="card-header">Sedan</div>"#));
    assert!(new_section.contains("<strong>Rating:</strong> 4.5"));
    assert!(new_section.contains("<strong>Reviews:</strong> 12"));

    assert_eq!(body[bikes_at..].matches(r#"class="card""#).count(), 0);
    Ok(())
}

#[test]
fn broken_category_leaves_only_its_container_empty() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, state) = state_with_files(&[
        ("used_cars.json", "this is not json"),
        ("new_cars.json", r#"[{"Title":"Civic"}]"#),
    ]);

    let resp = handle(request(Method::GET, "/"), &state)?;
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains(r#"<div class="row" id="usedCarsContainer"></div>"#));
    assert!(body.contains(r#"<div class="row" id="bikesContainer"></div>"#));
    assert!(body.contains("Civic"));
    assert!(!body.to_lowercase().contains("error"));
    Ok(())
}
