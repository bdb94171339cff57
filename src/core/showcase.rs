//! Canned dashboard content for association accounts.

use crate::models::{CandidateCard, DashboardStats};

/// Sample candidates shown on the association dashboard
pub fn sample_candidates() -> Vec<CandidateCard> {
    vec![
        candidate(
            ("Amira Benali", 24, "Tunis", "Designer UX", "🙋"),
            96,
            "Campagne comm.",
            &["Design UX", "Social Media"],
            &["🌱 Environnement"],
            (95, 98, 90),
            "Compétences alignées à 100%, valeur \"Environnement\" partagée.",
        ),
        candidate(
            ("Karim Ouhabi", 28, "Casablanca", "Chef de projet", "👨"),
            88,
            "Atelier écoles",
            &["Gestion projet", "Formation"],
            &["📚 Éducation"],
            (82, 94, 88),
            "Expérience formation détectée, disponible week-ends.",
        ),
        candidate(
            ("Sara Mansouri", 22, "Tunis", "Étudiante communication", "👩"),
            91,
            "Design contenus",
            &["Communication", "Créativité"],
            &["🎨 Culture"],
            (89, 96, 93),
            "Profil créatif fort, compétences visuelles.",
        ),
    ]
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        active_missions: 7,
        total_candidates: 24,
        new_candidates: 4,
        match_rate: 89,
        people_impacted: 1240,
    }
}

fn candidate(
    (name, age, city, job, emoji): (&str, u32, &str, &str, &str),
    score: u8,
    mission: &str,
    skills: &[&str],
    values: &[&str],
    (skill_match, value_match, availability_match): (u8, u8, u8),
    why: &str,
) -> CandidateCard {
    CandidateCard {
        name: name.to_string(),
        age,
        city: city.to_string(),
        job: job.to_string(),
        emoji: emoji.to_string(),
        score,
        mission: mission.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        values: values.iter().map(|v| v.to_string()).collect(),
        skill_match,
        value_match,
        availability_match,
        why: why.to_string(),
        status: "new".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_candidates() {
        let candidates = sample_candidates();
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.status == "new" && c.score <= 100));
        assert_eq!(candidates[1].name, "Karim Ouhabi");
    }

    #[test]
    fn test_dashboard_stats_serialize_snake_case() {
        let json = serde_json::to_value(dashboard_stats()).unwrap();
        assert_eq!(json["people_impacted"], 1240);
        assert_eq!(json["match_rate"], 89);
    }
}
