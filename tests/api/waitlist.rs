use crate::helper::spawn_app;

#[tokio::test]
async fn join_returns_200_and_persists_the_signup() {
    let app = spawn_app().await;

    let body = r#"{"name": "Ada", "email": "ada@example.com", "interests": "tech"}"#;
    let response = app.post_waitlist(body).await;

    assert_eq!(200, response.status().as_u16());

    let payload = response
        .json::<serde_json::Value>()
        .await
        .expect("The body should be valid JSON.");
    assert_eq!(
        "Thanks for joining! We'll be in touch soon.",
        payload["message"]
    );

    let saved = sqlx::query_as::<_, (String, String, Option<String>)>(
        "SELECT name, email, interests FROM waitlist",
    )
    .fetch_one(&app.db_pool)
    .await
    .expect("The saved signup should exist.");

    assert_eq!(saved.0, "Ada");
    assert_eq!(saved.1, "ada@example.com");
    assert_eq!(saved.2.as_deref(), Some("tech"));
}

#[tokio::test]
async fn join_accepts_a_signup_without_interests() {
    let app = spawn_app().await;

    let body = r#"{"name": "Ada", "email": "ada@example.com"}"#;
    let response = app.post_waitlist(body).await;

    assert_eq!(200, response.status().as_u16());

    let saved = sqlx::query_as::<_, (Option<String>,)>("SELECT interests FROM waitlist")
        .fetch_one(&app.db_pool)
        .await
        .expect("The saved signup should exist.");

    assert_eq!(saved.0, None);
}

#[tokio::test]
async fn join_accepts_a_quoted_local_part_email() {
    let app = spawn_app().await;

    let body = r#"{"name": "Ada", "email": "\"ada lovelace\"@example.com"}"#;
    let response = app.post_waitlist(body).await;

    assert_eq!(200, response.status().as_u16());

    let saved = sqlx::query_as::<_, (String,)>("SELECT email FROM waitlist")
        .fetch_one(&app.db_pool)
        .await
        .expect("The saved signup should exist.");

    assert_eq!(saved.0, r#""ada lovelace"@example.com"#);
}

#[tokio::test]
async fn join_returns_a_422_when_data_is_missing() {
    let app = spawn_app().await;
    let test_cases = [
        (r#"{"name": "Ada"}"#, "missing the email"),
        (r#"{"email": "ada@example.com"}"#, "missing the name"),
        ("{}", "missing both name and email"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_waitlist(invalid_body).await;

        assert_eq!(
            422,
            response.status().as_u16(),
            "The API did not fail with 422 when the payload was {}",
            error_message
        )
    }
}

#[tokio::test]
async fn join_returns_a_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;
    let test_cases = vec![
        (r#"{"name": "", "email": "ada@example.com"}"#, "empty name"),
        (r#"{"name": "Ada", "email": ""}"#, "empty email"),
        (r#"{"name": "Ada", "email": "not-an-email"}"#, "invalid email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_waitlist(body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
    }

    // No row may be written for a rejected signup.
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist")
        .fetch_one(&app.db_pool)
        .await
        .expect("The count query should succeed.");
    assert_eq!(0, count);
}

#[tokio::test]
async fn join_reports_the_email_field_for_a_malformed_email() {
    let app = spawn_app().await;

    let body = r#"{"name": "Ada", "email": "not-an-email"}"#;
    let response = app.post_waitlist(body).await;

    assert_eq!(400, response.status().as_u16());

    let payload = response
        .json::<serde_json::Value>()
        .await
        .expect("The body should be valid JSON.");
    assert_eq!("Please enter a valid email address", payload["message"]);
    assert_eq!("email", payload["details"][0]["field"]);
}

#[tokio::test]
async fn join_returns_a_409_when_the_email_is_already_on_the_waitlist() {
    let app = spawn_app().await;

    let body = r#"{"name": "Ada", "email": "ada@example.com", "interests": "tech"}"#;
    let first = app.post_waitlist(body).await;
    assert_eq!(200, first.status().as_u16());

    let second = app.post_waitlist(body).await;
    assert_eq!(409, second.status().as_u16());

    let payload = second
        .json::<serde_json::Value>()
        .await
        .expect("The body should be valid JSON.");
    assert_eq!("This email is already on our waitlist.", payload["message"]);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist")
        .fetch_one(&app.db_pool)
        .await
        .expect("The count query should succeed.");
    assert_eq!(1, count);
}

#[tokio::test]
async fn join_returns_a_500_when_the_database_fails_unexpectedly() {
    let app = spawn_app().await;

    // Sabotage the table so the insert fails with a non-duplicate error.
    sqlx::query("ALTER TABLE waitlist DROP COLUMN interests;")
        .execute(&app.db_pool)
        .await
        .expect("The table should be alterable.");

    let body = r#"{"name": "Ada", "email": "ada@example.com", "interests": "tech"}"#;
    let response = app.post_waitlist(body).await;

    assert_eq!(500, response.status().as_u16());

    let payload = response
        .json::<serde_json::Value>()
        .await
        .expect("The body should be valid JSON.");
    assert_eq!(
        "Something went wrong. Please try again.",
        payload["message"]
    );
}
