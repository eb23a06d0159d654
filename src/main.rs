use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use cams_backend::{
    config::Config,
    handlers,
    middlewares::create_cors,
    services::{AttendanceService, MemberService, ReportService},
    store::{MemoryStore, seed_demo_data},
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration");

    // The store is constructed here and injected; a hosted backend would be
    // wired in the same way.
    let store = Arc::new(MemoryStore::new());
    if config.seed.demo_data {
        seed_demo_data(&store, &config.seed);
    }

    let member_service = MemberService::new(store.clone());
    let attendance_service = AttendanceService::new(store.clone());
    let report_service = ReportService::new(store.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(member_service.clone()))
            .app_data(web::Data::new(attendance_service.clone()))
            .app_data(web::Data::new(report_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::member_config)
                    .configure(handlers::service_config)
                    .configure(handlers::attendance_config)
                    .configure(handlers::report_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
