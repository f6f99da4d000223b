use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_200_for_home_page() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"href="/jokes""#));
}

#[tokio::test]
async fn should_render_root_404_for_unknown_paths() {
    let app = TestApp::new().await;

    let response = app.get("/no/such/page").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(body.contains("404 Not Found"));
}

#[tokio::test]
async fn should_serve_assets() {
    let app = TestApp::new().await;

    let response = app.get("/assets/global.css").await;

    assert_eq!(response.status(), StatusCode::OK);
}
