//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{health_check, home, join_waitlist, join_waitlist_form, list_waitlist};
use crate::waitlist::Waitlist;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let waitlist = Waitlist::from_settings(&config);
    build_with(config, waitlist)
}

/// Like [`build`], with a caller-supplied [`Waitlist`] instead of one made
/// from the settings.
pub fn build_with(config: Settings, waitlist: Waitlist) -> Result<Application, std::io::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(address)?;
    let port = tcp_listener.local_addr()?.port();

    let server = run(tcp_listener, waitlist, config.application.hmac_secret)?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    waitlist: Waitlist,
    hmac_secret: Secret<String>,
) -> Result<Server, std::io::Error> {
    let waitlist = web::Data::new(waitlist);

    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/waitlist", web::post().to(join_waitlist))
            .route("/waitlist", web::get().to(list_waitlist))
            .route("/waitlist/form", web::post().to(join_waitlist_form))

            // serving HTML files
            .route("/", web::get().to(home))

            .app_data(waitlist.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
