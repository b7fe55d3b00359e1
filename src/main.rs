use benchmarker::banner;
use benchmarker::configuration::get_configuration;
use benchmarker::startup::run;
use benchmarker::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("benchmarker".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    banner::print_banner();
    banner::print_startup_info(
        &settings.app_host,
        settings.app_port,
        settings.frontend_dir.as_deref(),
    );

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));

    run(listener, settings).await?.await
}
