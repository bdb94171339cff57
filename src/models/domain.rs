use serde::{Deserialize, Serialize};

/// Citizen profile as submitted for analysis
///
/// Every field is optional on the wire and defaults to an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub city: String,
    pub age: u32,
    pub job: String,
    pub skills: Vec<String>,
    pub values: Vec<String>,
    pub availability: Vec<String>,
}

/// Result of analysing a citizen profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub score: u8,
    #[serde(rename = "recommendedDomains")]
    pub recommended_domains: Vec<String>,
    #[serde(rename = "softSkills")]
    pub soft_skills: Vec<String>,
    pub advice: String,
}

/// Label attached to a mission (skill, value, time slot...)
///
/// Accepts the compact `{t, c}` form used by older clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(alias = "t")]
    pub label: String,
    #[serde(alias = "c")]
    pub category: String,
}

impl Tag {
    pub fn new(label: &str, category: &str) -> Self {
        Self {
            label: label.to_string(),
            category: category.to_string(),
        }
    }
}

/// Coarse intent a free-text mission request is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionCategory {
    Design,
    Communication,
    Development,
    Education,
    General,
}

/// Canned audience figures shown next to a generated draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationMetrics {
    pub profiles: String,
    #[serde(rename = "attractionRate")]
    pub attraction_rate: String,
    #[serde(rename = "matchCount")]
    pub match_count: String,
}

/// Structured mission draft produced from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDraft {
    pub category: MissionCategory,
    pub title: String,
    pub emoji: String,
    #[serde(rename = "impactStatement")]
    pub impact_statement: String,
    pub tags: Vec<Tag>,
    pub commitment: String,
    #[serde(rename = "presentationMetrics")]
    pub presentation_metrics: PresentationMetrics,
}

/// Compatibility annotation for one mission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "missionId")]
    pub mission_id: i64,
    pub score: u8,
    pub reasons: Vec<String>,
    #[serde(rename = "skillMatch")]
    pub skill_match: u8,
    #[serde(rename = "valueMatch")]
    pub value_match: u8,
    #[serde(rename = "availabilityMatch")]
    pub availability_match: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Citizen,
    Association,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Citizen => "citizen",
            UserType::Association => "association",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "citizen" => Some(UserType::Citizen),
            "association" => Some(UserType::Association),
            _ => None,
        }
    }
}

/// Stored account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    pub name: String,
    pub city: String,
    pub age: u32,
    pub job: String,
    pub skills: Vec<String>,
    pub values: Vec<String>,
    pub availability: Vec<String>,
    #[serde(rename = "profileScore")]
    pub profile_score: u8,
}

/// Account to insert
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub user_type: UserType,
    pub profile: Profile,
    pub profile_score: u8,
}

/// Mission to insert
#[derive(Debug, Clone)]
pub struct NewMission {
    pub title: String,
    pub emoji: String,
    pub impact: String,
    pub commitment: String,
    pub location: Option<String>,
    pub urgent: bool,
    pub skills_required: Vec<Tag>,
    pub tags: Vec<Tag>,
}

/// Active mission joined with its association, as read from storage
#[derive(Debug, Clone, PartialEq)]
pub struct MissionListing {
    pub id: i64,
    pub org_name: Option<String>,
    pub title: Option<String>,
    pub emoji: Option<String>,
    pub impact: Option<String>,
    /// `None` when the mission never had tags stored
    pub tags: Option<Vec<Tag>>,
    pub location: Option<String>,
    pub commitment: Option<String>,
    pub urgent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionMeta {
    #[serde(rename = "loc")]
    pub location: String,
    #[serde(rename = "eng")]
    pub commitment: String,
    pub urgent: bool,
}

/// Mission listing annotated for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionCard {
    pub id: i64,
    pub org: String,
    pub title: Option<String>,
    pub emoji: String,
    pub score: u8,
    pub impact: Option<String>,
    pub tags: Vec<Tag>,
    pub reasons: Vec<String>,
    pub meta: MissionMeta,
}

/// Candidate card shown on an association's dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateCard {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub job: String,
    pub emoji: String,
    pub score: u8,
    pub mission: String,
    pub skills: Vec<String>,
    pub values: Vec<String>,
    #[serde(rename = "sm")]
    pub skill_match: u8,
    #[serde(rename = "vm")]
    pub value_match: u8,
    #[serde(rename = "am")]
    pub availability_match: u8,
    pub why: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active_missions: u32,
    pub total_candidates: u32,
    pub new_candidates: u32,
    pub match_rate: u8,
    pub people_impacted: u32,
}

/// Weights of the profile score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileWeights {
    pub base: u32,
    pub skill: u32,
    pub value: u32,
    pub availability: u32,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            base: 60,
            skill: 5,
            value: 3,
            availability: 2,
        }
    }
}
