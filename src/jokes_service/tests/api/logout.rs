use reqwest::StatusCode;

use crate::helpers::{TestApp, location, random_username};

#[tokio::test]
async fn should_end_session_and_redirect_to_login() {
    let app = TestApp::new().await;
    app.post_login("register", &random_username(), "twixrox").await;
    assert_eq!(app.get("/jokes/new").await.status(), StatusCode::OK);

    let response = app
        .http_client
        .post(app.url("/logout"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(app.get("/jokes/new").await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_redirect_home_on_get() {
    let app = TestApp::new().await;

    let response = app.get("/logout").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn should_treat_tampered_cookie_as_anonymous() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(app.url("/jokes/new"))
        .header(reqwest::header::COOKIE, "jokes_session=not.a.token")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
