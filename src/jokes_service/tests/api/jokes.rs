use reqwest::StatusCode;

use crate::helpers::{TestApp, location, random_username};

const CONTENT: &str = "I never wanted to believe that my Dad was stealing from his job as a \
    road worker. But when I got home, all the signs were there.";

async fn logged_in_app() -> TestApp {
    let app = TestApp::new().await;
    let response = app.post_login("register", &random_username(), "twixrox").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    app
}

#[tokio::test]
async fn should_return_404_when_there_are_no_jokes() {
    let app = TestApp::new().await;

    let response = app.get("/jokes").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(body.contains("There are no jokes to display."));
    assert!(body.contains(r#"href="/login""#));
}

#[tokio::test]
async fn should_return_401_for_new_joke_when_anonymous() {
    let app = TestApp::new().await;

    let response = app.get("/jokes/new").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.unwrap();
    assert!(body.contains("You must be logged in to create a joke."));
    assert!(body.contains("redirectTo="));

    let response = app.post_new_joke("Road worker", CONTENT).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.joke_count().await, 0);
}

#[tokio::test]
async fn should_return_200_for_new_joke_form_when_logged_in() {
    let app = logged_in_app().await;

    let response = app.get("/jokes/new").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Add your own hilarious joke"));
}

#[tokio::test]
async fn should_return_400_with_field_errors_for_short_joke() {
    let app = logged_in_app().await;

    let response = app.post_new_joke("ab", "short").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("name is too short"));
    assert!(body.contains("That joke is too short"));
    assert!(body.contains(r#"value="ab""#));
    assert_eq!(app.joke_count().await, 0);
}

#[tokio::test]
async fn should_return_400_if_joke_form_is_incomplete() {
    let app = logged_in_app().await;

    let response = app.post_form("/jokes/new", &[("name", "Road worker")]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("Form not submitted correctly."));
}

#[tokio::test]
async fn should_create_and_show_joke() {
    let app = logged_in_app().await;

    let response = app.post_new_joke("Road worker", CONTENT).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let joke_url = location(&response).to_owned();
    assert!(joke_url.starts_with("/jokes/"));
    assert_eq!(app.joke_count().await, 1);

    let response = app.get(&joke_url).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("your hilarious joke:"));
    assert!(body.contains("Road worker Permalink"));
    assert!(body.contains(r#"name="_method" value="delete""#));

    let body = app.get("/jokes").await.text().await.unwrap();
    assert!(body.contains(&format!(r#"href="{joke_url}""#)));
}

#[tokio::test]
async fn should_not_offer_delete_to_other_users() {
    let app = logged_in_app().await;
    let response = app.post_new_joke("Road worker", CONTENT).await;
    let joke_url = location(&response).to_owned();

    let body = app
        .get_with(&TestApp::client(), &joke_url)
        .await
        .text()
        .await
        .unwrap();

    assert!(body.contains("Road worker Permalink"));
    assert!(!body.contains(r#"value="delete""#));
}

#[tokio::test]
async fn should_return_random_joke() {
    let app = logged_in_app().await;
    app.post_new_joke("Road worker", CONTENT).await;

    let response = app.get("/jokes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("a random joke:"));
    assert!(body.contains("stealing from his job as a road worker"));
}

#[tokio::test]
async fn should_return_404_for_unknown_joke() {
    let app = TestApp::new().await;
    let id = uuid::Uuid::new_v4();

    let response = app.get(&format!("/jokes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(body.contains(&format!("Huh? What the heck is {id}?")));
    assert!(body.contains("<title>No joke</title>"));

    let response = app.get("/jokes/not-a-joke").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_delete_own_joke() {
    let app = logged_in_app().await;
    let response = app.post_new_joke("Road worker", CONTENT).await;
    let joke_url = location(&response).to_owned();

    let response = app.post_form(&joke_url, &[("_method", "delete")]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/jokes");
    assert_eq!(app.joke_count().await, 0);
    assert_eq!(app.get(&joke_url).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_401_when_deleting_someone_elses_joke() {
    let app = logged_in_app().await;
    let response = app.post_new_joke("Road worker", CONTENT).await;
    let joke_url = location(&response).to_owned();
    let id = joke_url.trim_start_matches("/jokes/").to_owned();

    let intruder = TestApp::client();
    app.post_login_with(&intruder, "register", &random_username(), "twixrox")
        .await;
    let response = app
        .post_form_with(&intruder, &joke_url, &[("_method", "delete")])
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.unwrap();
    assert!(body.contains(&format!("Sorry, but {id} is not your joke.")));
    assert_eq!(app.joke_count().await, 1);
}

#[tokio::test]
async fn should_return_401_when_deleting_anonymously() {
    let app = logged_in_app().await;
    let response = app.post_new_joke("Road worker", CONTENT).await;
    let joke_url = location(&response).to_owned();

    let response = app
        .post_form_with(&TestApp::client(), &joke_url, &[("_method", "delete")])
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.joke_count().await, 1);
}

#[tokio::test]
async fn should_check_method_before_anything_else() {
    let app = TestApp::new().await;
    let id = uuid::Uuid::new_v4();

    let response = app
        .post_form(&format!("/jokes/{id}"), &[("_method", "patch")])
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("trying to do is not allowed."));

    let response = app
        .post_form(&format!("/jokes/{id}"), &[("_method", "delete")])
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_400_when_method_override_is_missing() {
    let app = logged_in_app().await;
    let response = app.post_new_joke("Road worker", CONTENT).await;
    let joke_url = location(&response).to_owned();

    let response = app.post_form(&joke_url, &[("name", "Road worker")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .http_client
        .post(app.url(&joke_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("trying to do is not allowed."));
    assert_eq!(app.joke_count().await, 1);
}
