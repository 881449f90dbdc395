use std::net::SocketAddr;

use sea_orm::Database;
use tracing::info;

use staffdesk_hr::config::HrConfig;
use staffdesk_hr::infra::email::SmtpMailer;
use staffdesk_hr::infra::memstore::InMemoryRequestRepository;
use staffdesk_hr::router::build_router;
use staffdesk_hr::state::AppState;

#[tokio::main]
async fn main() {
    staffdesk_core::tracing::init_tracing();

    let config = HrConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = SmtpMailer::new(
        &config.smtp_host,
        config.smtp_port,
        &config.smtp_username,
        &config.smtp_password,
        &config.email_from,
    )
    .expect("failed to build smtp mailer");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        mailer,
        requests: InMemoryRequestRepository::new(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.hr_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("hr service listening on {addr}");
    // ConnectInfo feeds the per-token source-ip tracking.
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server error");
}
