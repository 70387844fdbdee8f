//! tests/api/helpers.rs

use once_cell::sync::Lazy;
use waitlist::configuration::get_configuration;
use waitlist::startup::build;
use waitlist::store::supabase::{CredentialSource, SupabaseCredentials};
use waitlist::telemetry::{get_subscriber, init_subscriber};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test| bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to set up tracing");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to set up tracing");
    };
});

pub struct TestApp {
    pub address: String,
    pub primary_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", self.address, path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_waitlist(&self, body: &str) -> reqwest::Response {
        self.post("/waitlist", body.into()).await
    }

    pub async fn post_waitlist_form(&self, body: &str) -> reqwest::Response {
        self.post("/waitlist/form", body.into()).await
    }

    pub async fn fallback_emails(&self) -> Vec<String> {
        self.get("/waitlist")
            .await
            .json()
            .await
            .expect("Failed to parse the fallback waitlist")
    }

    pub async fn get_home_html(&self) -> String {
        self.get("/").await.text().await.expect("Failed to read the landing page")
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

/// An app with no primary store credentials: every signup lands in the
/// fallback store.
pub async fn setup() -> TestApp {
    spawn_app(false).await
}

/// An app whose primary store is the mock server in `TestApp::primary_server`.
pub async fn setup_with_primary() -> TestApp {
    spawn_app(true).await
}

async fn spawn_app(with_primary: bool) -> TestApp {
    Lazy::force(&TRACING);

    let primary_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.credentials = if with_primary {
        CredentialSource::Fixed(SupabaseCredentials::new(
            primary_server.uri(),
            "service-role-key",
        ))
    } else {
        CredentialSource::disabled()
    };

    // Launch the server
    let app = build(config).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address,
        primary_server,
        api_client,
    }
}
