use std::{sync::Arc, time::Duration};

use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_server::{
    app_state::AppState,
    auth::{SessionMiddleware, SessionStore},
    config::Config,
    handlers,
};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

fn spawn_session_sweeper(sessions: Arc<SessionStore>) {
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired();
            if purged > 0 {
                log::debug!("purged {} expired sessions", purged);
            }
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone()).await.map_err(|e| {
        log::error!("couldn't initialise data directory {:?}: {}", config.data_dir, e);
        std::io::Error::other(e.to_string())
    })?;

    spawn_session_sweeper(Arc::clone(&state.sessions));

    log::info!(
        "Server running at {} (data: {:?}, pages: {:?}, session idle timeout: {} min)",
        config.public_url(),
        config.data_dir,
        config.public_dir,
        config.session_ttl_minutes
    );

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SessionMiddleware)
            .wrap(Logger::default())
            .configure(|cfg| handlers::configure(cfg, &config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
