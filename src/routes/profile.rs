use actix_web::{web, HttpResponse, Responder};

use crate::core::synthesize;
use crate::models::{GenerateMissionRequest, Profile};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile/analyze", web::post().to(analyze_profile))
        .route("/ai/generate-mission", web::post().to(generate_mission));
}

/// Score a citizen profile and suggest domains
///
/// POST /api/profile/analyze
///
/// Request body:
/// ```json
/// {
///   "name": "string", "city": "string", "age": 0, "job": "string",
///   "skills": ["string"], "values": ["string"], "availability": ["string"]
/// }
/// ```
async fn analyze_profile(state: web::Data<AppState>, req: web::Json<Profile>) -> impl Responder {
    let analysis = state.scorer.score(&req);

    tracing::debug!(
        "Analyzed profile: score={}, domains={:?}",
        analysis.score,
        analysis.recommended_domains
    );

    HttpResponse::Ok().json(analysis)
}

/// Draft a mission from a free-text description
///
/// POST /api/ai/generate-mission
async fn generate_mission(req: web::Json<GenerateMissionRequest>) -> impl Responder {
    let draft = synthesize(&req.text);

    tracing::debug!("Generated {:?} mission draft", draft.category);

    HttpResponse::Ok().json(draft)
}
