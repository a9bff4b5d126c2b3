use std::net::TcpListener;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tera::Tera;
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings};
use crate::routes::{health_check, home, join_waitlist};
use crate::waitlist_store::{PgWaitlistStore, WaitlistStore};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&config.database);
        let store = PgWaitlistStore::new(connection_pool);
        let templates = load_templates(&config.app.templates_dir)?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, store, templates)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run<S>(listener: TcpListener, store: S, templates: Tera) -> Result<Server, anyhow::Error>
where
    S: WaitlistStore + Send + Sync + 'static,
{
    let store = web::Data::new(store);
    let templates = web::Data::new(templates);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/waitlist", web::post().to(join_waitlist::<S>))
            .route("/", web::get().to(home))
            .app_data(store.clone())
            .app_data(templates.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_pool(db_config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(db_config.with_db())
}

pub fn load_templates(templates_dir: &str) -> Result<Tera, anyhow::Error> {
    let glob = format!("{}/**/*", templates_dir.trim_end_matches('/'));
    Tera::new(&glob).with_context(|| format!("Failed to load templates from {templates_dir}."))
}
