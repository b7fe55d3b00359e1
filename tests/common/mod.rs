use actix_web::web;
use benchmarker::configuration::Settings;
use benchmarker::connectors::{EmailNotifier, MockEmailNotifier};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub notifier: Arc<MockEmailNotifier>,
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.app_port = port;

    let notifier = Arc::new(MockEmailNotifier::recording());
    let shared: Arc<dyn EmailNotifier> = notifier.clone();

    let server =
        benchmarker::startup::run_with_notifier(listener, configuration, web::Data::new(shared))
            .await
            .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp { address, notifier }
}

#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_app_with_configuration(Settings::default()).await
}

#[allow(dead_code)]
pub fn submission() -> serde_json::Value {
    serde_json::json!({
        "category": "Productivity",
        "region": "US",
        "planType": "monthly",
        "price": 9.99,
        "conversionRate": 12,
        "ltv": 20,
        "refundRate": 6,
        "hasTrial": true,
        "email": "founder@example.com"
    })
}
