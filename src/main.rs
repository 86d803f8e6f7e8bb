pub mod health;
pub mod modules;
pub mod shared;

pub use modules::candidate;
pub use modules::cv;
pub use modules::media;
pub use modules::realtime;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::candidate::adapter::outgoing::CandidateRepositoryPostgres;
use crate::candidate::application::ports::incoming::CandidateEngine;
use crate::candidate::application::services::CandidateService;
use crate::cv::adapter::outgoing::{CvRepositoryPostgres, OwnerDirectoryPostgres};
use crate::cv::application::ports::incoming::CvEngine;
use crate::cv::application::services::CvService;
use crate::media::adapter::outgoing::GcsAssetStore;
use crate::realtime::BroadcastNotifier;
use crate::shared::api::custom_json_config;

#[derive(Clone)]
pub struct AppState {
    pub cv_engine: Arc<dyn CvEngine>,
    pub candidate_engine: Arc<dyn CandidateEngine>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let photo_bucket =
        env::var("GCS_PHOTO_BUCKET").expect("GCS_PHOTO_BUCKET is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Notifier with a logging subscriber as the default sink; any other
    // transport can attach through subscribe().
    let notifier = BroadcastNotifier::new(128);
    let mut event_log = notifier.subscribe();
    tokio::spawn(async move {
        loop {
            match event_log.recv().await {
                Ok(event) => {
                    info!(event = event.name(), cv = %event.record().id, "cv event");
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event log fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Engines
    let cv_service = CvService::new(
        CvRepositoryPostgres::new(Arc::clone(&db_arc)),
        GcsAssetStore::new(photo_bucket.clone(), "cv-photos"),
        OwnerDirectoryPostgres::new(Arc::clone(&db_arc)),
        notifier,
    );

    let candidate_service = CandidateService::new(
        CandidateRepositoryPostgres::new(Arc::clone(&db_arc)),
        GcsAssetStore::new(photo_bucket, "candidate-files"),
    );

    let state = AppState {
        cv_engine: Arc::new(cv_service),
        candidate_engine: Arc::new(candidate_service),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // CV. The /api/cvs/me routes must come before the /api/cvs/{id}
    // routes so "me" never matches as an id.
    cfg.service(crate::cv::adapter::incoming::web::routes::get_my_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_my_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cvs_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::create_single_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_single_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_single_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::hard_delete_single_cv_handler);
    // Candidates
    cfg.service(crate::candidate::adapter::incoming::web::routes::get_candidates_handler);
    cfg.service(crate::candidate::adapter::incoming::web::routes::create_candidate_handler);
    cfg.service(crate::candidate::adapter::incoming::web::routes::get_single_candidate_handler);
    cfg.service(crate::candidate::adapter::incoming::web::routes::update_candidate_handler);
    cfg.service(crate::candidate::adapter::incoming::web::routes::delete_candidate_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
