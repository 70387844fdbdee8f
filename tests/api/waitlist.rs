//! tests/api/waitlist.rs

use crate::helpers::{setup, setup_with_primary};
use wiremock::{
    matchers::{any, header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn join_returns_a_200_and_asks_for_the_modal() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post_waitlist("email=user%40example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "success": true,
            "message": "Thank you for joining our waitlist!",
            "showModal": true,
        })
    );
}

#[tokio::test]
async fn join_without_credentials_stores_the_email_in_the_fallback() {
    // Arrange
    let test = setup().await;

    // Act
    test.post_waitlist("email=user%40example.com").await;

    // Assert
    assert_eq!(test.fallback_emails().await, vec!["user@example.com"]);
}

#[tokio::test]
async fn joining_twice_keeps_a_single_copy() {
    // Arrange
    let test = setup().await;

    // Act
    let first = test.post_waitlist("email=user%40example.com").await;
    let second = test.post_waitlist("email=user%40example.com").await;

    // Assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
    assert_eq!(test.fallback_emails().await, vec!["user@example.com"]);
}

#[tokio::test]
async fn join_returns_a_400_when_email_is_invalid() {
    // Arrange
    let test = setup().await;
    let test_cases = vec![
        ("email=not-an-email", "a plain word"),
        ("email=", "an empty email"),
        ("", "a missing email"),
        ("email=ursuladomain.com", "no at sign"),
        ("email=%40domain.com", "no local part"),
        ("email=a%40b", "a single-label domain"),
        ("email=user%40localhost", "localhost"),
        ("email=user%40example", "a domain without a suffix"),
    ];

    for (body, error_message) in test_cases {
        // Act
        let response = test.post_waitlist(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "message": "Please enter a valid email address",
            })
        );
    }

    assert!(test.fallback_emails().await.is_empty());
}

#[tokio::test]
async fn invalid_email_never_reaches_the_primary_store() {
    // Arrange
    let test = setup_with_primary().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&test.primary_server)
        .await;

    // Act
    let response = test.post_waitlist("email=not-an-email").await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn join_with_a_working_primary_store_skips_the_fallback() {
    // Arrange
    let test = setup_with_primary().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/waitlist"))
        .and(header("apikey", "service-role-key"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&test.primary_server)
        .await;

    // Act
    let response = test.post_waitlist("email=user%40example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert!(test.fallback_emails().await.is_empty());
}

#[tokio::test]
async fn join_falls_back_when_the_primary_store_fails() {
    // Arrange
    let test = setup_with_primary().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test.primary_server)
        .await;

    // Act
    let response = test.post_waitlist("email=user%40example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(test.fallback_emails().await, vec!["user@example.com"]);
}

#[tokio::test]
async fn form_submission_redirects_home_with_an_error_toast() {
    // Arrange
    let test = setup().await;

    // Act - Part 1 - Submit an invalid email
    let response = test.post_waitlist_form("email=not-an-email").await;
    crate::helpers::assert_is_redirect_to(&response, "/");

    // Act - Part 2 - Follow the redirect
    let html = test.get_home_html().await;
    assert!(html.contains("toast-error"));
    assert!(html.contains("Please enter a valid email address"));
    assert!(!html.contains("Thank You!"));

    // Act - Part 3 - Reload the page
    let html = test.get_home_html().await;
    assert!(!html.contains("Please enter a valid email address"));
}

#[tokio::test]
async fn form_submission_redirects_home_with_the_success_modal() {
    // Arrange
    let test = setup().await;

    // Act - Part 1 - Submit a valid email
    let response = test.post_waitlist_form("email=user%40example.com").await;
    crate::helpers::assert_is_redirect_to(&response, "/");

    // Act - Part 2 - Follow the redirect
    let html = test.get_home_html().await;
    assert!(html.contains("toast-success"));
    assert!(html.contains("Thank you for joining our waitlist!"));
    assert!(html.contains("Thank You!"));

    // Act - Part 3 - Reload the page
    let html = test.get_home_html().await;
    assert!(!html.contains("Thank You!"));
    assert_eq!(test.fallback_emails().await, vec!["user@example.com"]);
}
