use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Tag, UserType};

/// Request to create an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Free-text mission description to turn into a draft
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateMissionRequest {
    #[serde(default)]
    pub text: String,
}

/// Request to publish a mission for the caller's association
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMissionRequest {
    #[validate(length(max = 200))]
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default = "default_commitment")]
    pub commitment: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub urgent: bool,
}

fn default_title() -> String {
    "Nouvelle mission".to_string()
}

fn default_emoji() -> String {
    "🤝".to_string()
}

fn default_commitment() -> String {
    "Flexible".to_string()
}
