//! REST API for tweetrec.
//!
//! Provides the HTTP surface over a model built once at startup. The
//! built [`ModelState`] is injected as shared app data; handlers only
//! read it, so concurrent requests need no coordination.
//!
//! ## Endpoints
//!
//! - `POST /predict` - Recommend the posts nearest to a user feature vector
//! - `GET /` - Liveness probe
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpServer};
//! use tweetrec::{KnnIndex, ModelState};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let index = KnnIndex::fit(vec![1], vec![vec![1.0, 0.0, 0.5]], 3).unwrap();
//!     let state = web::Data::new(ModelState::Ready(index));
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(state.clone())
//!             .configure(tweetrec::server::config)
//!     })
//!     .bind("127.0.0.1:8001")?
//!     .run()
//!     .await
//! }
//! ```

use actix_web::{web, HttpResponse, Responder};
use serde::{Serialize, Deserialize};
use crate::{ModelState, FEATURE_DIM};

// --- Request structs ---

/// User feature vector. Missing or non-numeric fields are rejected by the
/// JSON extractor with a client error before the core ever sees them.
#[derive(Deserialize)]
struct PredictRequest {
    liked_posts_count: f64,
    average_comment_count: f64,
    engagement_rate: f64,
}

// --- Response structs ---

#[derive(Serialize)]
struct PredictResponse {
    message: String,
    data: Vec<i64>,
}

// --- Handlers ---

async fn predict_handler(
    model: web::Data<ModelState>,
    body: web::Json<PredictRequest>,
) -> impl Responder {
    let features: [f64; FEATURE_DIM] = [
        body.liked_posts_count,
        body.average_comment_count,
        body.engagement_rate,
    ];

    match model.query(&features) {
        Ok(ids) => HttpResponse::Ok().json(PredictResponse {
            message: "Recommended tweets".to_string(),
            data: ids,
        }),
        Err(e) => {
            tracing::error!("error during prediction: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": "An error occurred during prediction"}))
        }
    }
}

async fn index_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "tweetrec API is working!",
        "data": [1, 2, 3, 4]
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/predict").route(web::post().to(predict_handler)))
       .service(web::resource("/").route(web::get().to(index_handler)));
}
