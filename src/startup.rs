use crate::configuration::Settings;
use crate::connectors::{self, EmailNotifier};
use crate::middleware::{RateLimit, RateLimiter};
use crate::models::ReferenceTable;
use crate::routes;
use crate::services::{BenchmarkError, BenchmarkEvaluator};
use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, Server, ServiceRequest, ServiceResponse};
use actix_web::{error, middleware, web, App, HttpServer};
use serde_json::json;
use std::net::TcpListener;
use std::path::Path;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let notifier = connectors::init_email_service(&settings.connectors);
    run_with_notifier(listener, settings, notifier).await
}

/// Same as [`run`] with an explicit email notifier.
pub async fn run_with_notifier(
    listener: TcpListener,
    settings: Settings,
    notifier: web::Data<Arc<dyn EmailNotifier>>,
) -> Result<Server, std::io::Error> {
    let table = ReferenceTable::builtin()
        .map(Arc::new)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, format!("{:#}", err)))?;
    tracing::info!("Benchmark reference table loaded");

    let evaluator = web::Data::new(BenchmarkEvaluator::new(table.clone()));
    let table = web::Data::from(table);

    let limiter = Arc::new(RateLimiter::new(
        settings.rate_limit.window(),
        settings.rate_limit.max_requests,
    ));

    let frontend_dir = settings
        .frontend_dir
        .clone()
        .filter(|dir| Path::new(dir).join("index.html").is_file());
    match (&settings.frontend_dir, &frontend_dir) {
        (Some(dir), None) => tracing::warn!("Frontend bundle not found at {}, serving API only", dir),
        (_, Some(dir)) => tracing::info!("Serving frontend from {}", dir),
        _ => {}
    }

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let details = match &err {
            error::JsonPayloadError::Deserialize(err) => json!({
                "kind": "deserialize",
                "line": err.line(),
                "column": err.column(),
                "msg": err.to_string(),
            }),
            _ => json!({"kind": "other", "msg": err.to_string()}),
        };
        BenchmarkError::validation(details).into()
    });

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .app_data(json_config.clone())
            .app_data(evaluator.clone())
            .app_data(table.clone())
            .app_data(notifier.clone())
            .service(routes::health_check)
            .service(
                web::scope("/api")
                    .wrap(RateLimit::new(limiter.clone()))
                    .service(routes::benchmark::evaluate_handler)
                    .service(routes::benchmark::lookup_handler)
                    .service(routes::benchmark::options_handler),
            );

        match &frontend_dir {
            Some(dir) => app.service(spa_files(dir)),
            None => app,
        }
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Static bundle with every unmatched path answered by `index.html`.
fn spa_files(dir: &str) -> Files {
    let index = Path::new(dir).join("index.html");

    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}
