use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;
use tweetrec::{load_model, DEFAULT_K};

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Store connection parameters are external configuration, consumed
    // opaquely by the loader.
    let conn_str = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "host=localhost port=5432 dbname=hello_rocket".to_string());

    // Build once before serving. A failed build still serves: every
    // query then answers with a model-unavailable error.
    let model = web::Data::new(load_model(&conn_str, DEFAULT_K).await);

    tracing::info!("listening on 127.0.0.1:8001");
    HttpServer::new(move || {
        App::new()
            .app_data(model.clone())
            .wrap(Cors::permissive())
            .configure(tweetrec::server::config)
    })
    .bind("127.0.0.1:8001")?
    .run()
    .await
}
