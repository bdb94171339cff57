// Route exports
pub mod auth;
pub mod dashboard;
pub mod missions;
pub mod profile;

use std::sync::Arc;

use actix_web::web;

use crate::core::{MatchPresenter, ProfileScorer};
use crate::services::{Store, TokenService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenService>,
    pub scorer: ProfileScorer,
    pub presenter: Arc<dyn MatchPresenter>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(dashboard::configure)
            .configure(auth::configure)
            .configure(profile::configure)
            .configure(missions::configure),
    );
}
