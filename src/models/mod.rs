// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Analysis, CandidateCard, DashboardStats, MatchResult, MissionCard, MissionCategory, MissionDraft,
    MissionListing, MissionMeta, NewMission, NewUser, PresentationMetrics, Profile, ProfileWeights, Tag,
    User, UserType,
};
pub use requests::{CreateMissionRequest, GenerateMissionRequest, LoginRequest, RegisterRequest};
pub use responses::{AuthResponse, CreateMissionResponse, ErrorResponse, HealthResponse, UserSummary};
