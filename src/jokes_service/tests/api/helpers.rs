use jokes_adapters::{
    config::test,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapJokeStore, HashMapUserStore},
    session::{SessionConfig, SessionManager},
};
use jokes_core::JokeStore;
use jokes_service::JokesService;
use reqwest::redirect::Policy;
use secrecy::Secret;

pub const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub joke_store: HashMapJokeStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = HashMapUserStore::new();
        let joke_store = HashMapJokeStore::new();
        let sessions = SessionManager::new(SessionConfig {
            cookie_name: "jokes_session".to_string(),
            secret: Secret::from("test-secret".to_string()),
            ttl_in_seconds: 600,
            secure: false,
        });

        let service = JokesService::new(
            user_store,
            joke_store.clone(),
            Argon2PasswordHasher::new(),
            sessions,
            ASSETS_DIR,
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            http_client: Self::client(),
            joke_store,
        }
    }

    /// A client with its own cookie jar, i.e. another browser.
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.get_with(&self.http_client, path).await
    }

    pub async fn get_with(&self, client: &reqwest::Client, path: &str) -> reqwest::Response {
        client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form<F>(&self, path: &str, form: &F) -> reqwest::Response
    where
        F: serde::Serialize + ?Sized,
    {
        self.post_form_with(&self.http_client, path, form).await
    }

    pub async fn post_form_with<F>(
        &self,
        client: &reqwest::Client,
        path: &str,
        form: &F,
    ) -> reqwest::Response
    where
        F: serde::Serialize + ?Sized,
    {
        client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(
        &self,
        login_type: &str,
        username: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post_login_with(&self.http_client, login_type, username, password)
            .await
    }

    pub async fn post_login_with(
        &self,
        client: &reqwest::Client,
        login_type: &str,
        username: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post_form_with(
            client,
            "/login",
            &[
                ("loginType", login_type),
                ("username", username),
                ("password", password),
                ("redirectTo", ""),
            ],
        )
        .await
    }

    pub async fn post_new_joke(&self, name: &str, content: &str) -> reqwest::Response {
        self.post_form("/jokes/new", &[("name", name), ("content", content)])
            .await
    }

    pub async fn joke_count(&self) -> usize {
        self.joke_store.count().await.unwrap()
    }
}

pub fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("No Location header")
        .to_str()
        .unwrap()
}

pub fn random_username() -> String {
    use fake::{Fake, faker::internet::en::Username};
    let name: String = Username()
        .fake::<String>()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    format!("{name}-{}", uuid::Uuid::new_v4().simple())
}
