use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, NewUser, Profile, RegisterRequest, User, UserSummary};
use crate::routes::AppState;
use crate::services::{hash_password, verify_password};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login));
}

/// Create an account and open a session
///
/// POST /api/auth/register
///
/// Request body:
/// ```json
/// {
///   "email": "string",
///   "password": "string",
///   "userType": "citizen|association",
///   "name": "string", "city": "string", "age": 0, "job": "string"
/// }
/// ```
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    let new_user = NewUser {
        email: req.email,
        password_hash: hash_password(&req.password),
        user_type: req.user_type,
        profile: Profile {
            name: req.name,
            city: req.city,
            age: req.age,
            job: req.job,
            ..Profile::default()
        },
        profile_score: 0,
    };

    let user = state.store.create_user(new_user).await?;

    tracing::info!("Registered {} account {}", user.user_type.as_str(), user.id);

    session_response(&state, &user)
}

/// Exchange credentials for a session token
///
/// POST /api/auth/login
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user = state.store.find_user_by_email(&req.email).await?;

    match user {
        Some(user) if verify_password(&req.password, &user.password_hash) => {
            tracing::debug!("Login succeeded for user {}", user.id);
            session_response(&state, &user)
        }
        _ => {
            tracing::info!("Login rejected for {}", req.email);
            Err(ApiError::Unauthorized("Invalid credentials".to_string()))
        }
    }
}

fn session_response(state: &AppState, user: &User) -> Result<HttpResponse, ApiError> {
    let token = state.tokens.issue(user.id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserSummary {
            id: user.id,
            email: user.email.clone(),
            user_type: user.user_type.as_str().to_string(),
        },
    }))
}
