use actix_web::{web, App, HttpServer, middleware};
use anyhow::Context;

use vitals::api;
use vitals::config::Config;
use vitals::core::{HealthReporter, ProcessDiagnostics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Uptime is measured from here
    let probe = ProcessDiagnostics::new();
    let config = Config::from_env();

    log::info!("🩺 Starting Vitals health service");
    log::info!("📍 Listening on {}:{}", config.host, config.port);
    log::info!(
        "🏷️  Environment: {} | Version: {}",
        config.environment.as_deref().unwrap_or("(unset)"),
        config.version
    );

    let bind_addr = (config.host.clone(), config.port);
    let reporter = web::Data::new(HealthReporter::new(config, probe));

    HttpServer::new(move || {
        App::new()
            .app_data(reporter.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("failed to bind {}:{}", bind_addr.0, bind_addr.1))?
    .run()
    .await
    .context("health server terminated with an error")?;

    Ok(())
}
