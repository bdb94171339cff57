use actix_web::{http::header, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::present_listings;
use crate::error::ApiError;
use crate::models::{CreateMissionRequest, CreateMissionResponse, NewMission};
use crate::routes::AppState;
use crate::services::bearer_token;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/missions", web::get().to(list_missions))
        .route("/missions/create", web::post().to(create_mission));
}

/// Active missions annotated with a compatibility score
///
/// GET /api/missions
async fn list_missions(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let listings = state.store.list_active_missions().await?;
    let total = listings.len();

    let mut rng = rand::thread_rng();
    let cards = present_listings(state.presenter.as_ref(), listings, &mut rng);

    tracing::debug!("Returning {} active missions", total);

    Ok(HttpResponse::Ok().json(cards))
}

/// Publish a mission for the caller's association
///
/// POST /api/missions/create
/// Authorization: Bearer <token>
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "emoji": "string",
///   "impact": "string",
///   "commitment": "string",
///   "tags": [{"label": "string", "category": "string"}],
///   "location": "string",
///   "urgent": false
/// }
/// ```
async fn create_mission(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let auth_header = http_req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(auth_header)?;
    let user_id = state.tokens.verify(token)?;

    // Body is parsed only once the caller is authenticated
    let req: CreateMissionRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Validation(format!("Invalid JSON: {}", e)))?;
    req.validate()?;

    let association_id = state.store.association_for_user(user_id).await?;

    let mission = NewMission {
        title: req.title,
        emoji: req.emoji,
        impact: req.impact,
        commitment: req.commitment,
        location: req.location,
        urgent: req.urgent,
        skills_required: Vec::new(),
        tags: req.tags,
    };

    let mission_id = state.store.create_mission(association_id, mission).await?;

    tracing::info!(
        "User {} published mission {} for association {}",
        user_id,
        mission_id,
        association_id
    );

    Ok(HttpResponse::Ok().json(CreateMissionResponse {
        success: true,
        mission_id,
    }))
}
