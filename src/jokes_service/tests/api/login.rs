use reqwest::StatusCode;

use crate::helpers::{TestApp, location, random_username};

#[tokio::test]
async fn should_return_200_for_login_page() {
    let app = TestApp::new().await;

    let response = app.get("/login?redirectTo=/jokes/new").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"name="redirectTo" value="/jokes/new""#));
}

#[tokio::test]
async fn should_register_and_start_a_session() {
    let app = TestApp::new().await;
    let username = random_username();

    let response = app.post_login("register", &username, "twixrox").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/jokes");
    let cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("No session cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("jokes_session="));
    assert!(cookie.contains("HttpOnly"));

    let body = app.get("/jokes").await.text().await.unwrap();
    assert!(body.contains(&format!("Hi {username}")));
}

#[tokio::test]
async fn should_login_with_correct_credentials() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_login("register", &username, "twixrox").await;

    let browser = TestApp::client();
    let response = app
        .post_login_with(&browser, "login", &username, "twixrox")
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let body = app.get_with(&browser, "/jokes").await.text().await.unwrap();
    assert!(body.contains(&format!("Hi {username}")));
}

#[tokio::test]
async fn should_return_400_for_wrong_password_or_unknown_user() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_login("register", &username, "twixrox").await;

    let browser = TestApp::client();
    let cases = [(username.as_str(), "wrong-password"), ("nobody-here", "twixrox")];

    for (username, password) in cases {
        let response = app
            .post_login_with(&browser, "login", username, password)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
        let body = response.text().await.unwrap();
        assert!(body.contains("Username/Password combination is incorrect"));
    }
}

#[tokio::test]
async fn should_return_400_if_username_is_taken() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_login("register", &username, "twixrox").await;

    let response = app
        .post_login_with(&TestApp::client(), "register", &username, "another-one")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains(&format!("User with username {username} already exists")));
}

#[tokio::test]
async fn should_return_400_with_field_errors() {
    let app = TestApp::new().await;

    let response = app.post_login("register", "ko", "123").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("Usernames must be at least 3 characters long"));
    assert!(body.contains("Passwords must be at least 6 characters long"));
    assert!(body.contains(r#"value="ko""#));
}

#[tokio::test]
async fn should_return_400_if_form_is_incomplete() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/login", &[("loginType", "login"), ("username", "kody")])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("Form not submitted correctly."));
}

#[tokio::test]
async fn should_return_400_for_unknown_login_type() {
    let app = TestApp::new().await;

    let response = app.post_login("sudo", &random_username(), "twixrox").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("Login type invalid"));
}

#[tokio::test]
async fn should_only_follow_local_redirects() {
    let app = TestApp::new().await;
    let cases = [
        ("/jokes/new", "/jokes/new"),
        ("https://evil.example", "/jokes"),
        ("//evil.example", "/jokes"),
        ("/\\evil.example", "/jokes"),
        ("/jokes\nX: y", "/jokes"),
    ];

    for (redirect_to, expected) in cases {
        let response = app
            .post_form_with(
                &TestApp::client(),
                "/login",
                &[
                    ("loginType", "register"),
                    ("username", random_username().as_str()),
                    ("password", "twixrox"),
                    ("redirectTo", redirect_to),
                ],
            )
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), expected);
    }
}
