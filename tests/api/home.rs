//! tests/api/home.rs

use crate::helpers::setup;

#[tokio::test]
async fn landing_page_serves_the_signup_form() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.get("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form class="waitlist-form" action="/waitlist/form" method="post">"#));
    assert!(html.contains("Be First in Line"));
}

#[tokio::test]
async fn landing_page_has_no_toast_without_a_submission() {
    // Arrange
    let test = setup().await;

    // Act
    let html = test.get_home_html().await;

    // Assert
    assert!(!html.contains(r#"role="alert""#));
    assert!(!html.contains("Thank You!"));
}
