use std::collections::HashSet;

use crate::models::{Analysis, Profile, ProfileWeights};

/// Advice returned with every analysis
pub const PROFILE_ADVICE: &str =
    "Complète ton profil avec tes disponibilités pour des matchs encore plus précis !";

pub const MAX_RECOMMENDED_DOMAINS: usize = 3;
pub const MAX_SOFT_SKILLS: usize = 3;

/// Cause domains, tested in order against each declared value.
/// The first row with a matching fragment wins for that value.
const DOMAIN_KEYWORDS: &[(&[&str], &str)] = &[
    (&["environ"], "🌱 Environnement"),
    (&["éduc", "educ"], "📚 Éducation"),
    (&["santé"], "⚕️ Santé"),
    (&["justice"], "⚖️ Justice sociale"),
    (&["culture"], "🎨 Culture"),
    (&["numéri"], "💻 Numérique"),
];

const FALLBACK_DOMAINS: [&str; 3] = ["🌱 Environnement", "📚 Éducation", "💻 Numérique"];

/// Heuristic citizen profile analysis
///
/// Scoring formula:
/// score = min(100,
///     base                              # 60
///     + distinct_skills * skill         # 5 per skill
///     + distinct_values * value         # 3 per value
///     + distinct_slots * availability   # 2 per availability slot
/// )
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileScorer {
    weights: ProfileWeights,
}

impl ProfileScorer {
    pub fn new(weights: ProfileWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ProfileWeights {
        self.weights
    }

    /// Analyse a profile. Never fails; absent fields count as empty.
    pub fn score(&self, profile: &Profile) -> Analysis {
        let skills = distinct_count(&profile.skills);
        let values = distinct_count(&profile.values);
        let slots = distinct_count(&profile.availability);

        let score = calculate_profile_score(skills, values, slots, &self.weights);

        let mut recommended_domains = infer_domains(&profile.values);
        if recommended_domains.is_empty() {
            // Zero skills yields an empty list here
            recommended_domains = FALLBACK_DOMAINS
                .iter()
                .take(MAX_RECOMMENDED_DOMAINS.min(skills))
                .map(|d| d.to_string())
                .collect();
        }

        Analysis {
            score,
            recommended_domains,
            soft_skills: infer_soft_skills(skills, values, slots),
            advice: PROFILE_ADVICE.to_string(),
        }
    }
}

/// Weighted sum of the distinct counts, clamped to 100
pub fn calculate_profile_score(
    skills: usize,
    values: usize,
    slots: usize,
    weights: &ProfileWeights,
) -> u8 {
    let total = (weights.base as u64)
        .saturating_add(skills as u64 * weights.skill as u64)
        .saturating_add(values as u64 * weights.value as u64)
        .saturating_add(slots as u64 * weights.availability as u64);

    total.min(100) as u8
}

/// Map declared values to cause domains, first-seen order, at most three
pub fn infer_domains(values: &[String]) -> Vec<String> {
    let mut domains: Vec<String> = Vec::new();

    for value in values {
        let lower = value.to_lowercase();
        let hit = DOMAIN_KEYWORDS
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|f| lower.contains(f)));

        if let Some((_, domain)) = hit {
            if !domains.iter().any(|d| d == domain) {
                domains.push(domain.to_string());
            }
        }
    }

    domains.truncate(MAX_RECOMMENDED_DOMAINS);
    domains
}

/// Soft skills guessed from how much of the profile was filled in
pub fn infer_soft_skills(skills: usize, values: usize, slots: usize) -> Vec<String> {
    let mut soft_skills = Vec::new();

    if skills > 2 {
        soft_skills.push("Communication".to_string());
        soft_skills.push("Créativité".to_string());
    }
    if values > 1 {
        soft_skills.push("Empathie".to_string());
    }
    if slots > 2 {
        soft_skills.push("Organisation".to_string());
    }

    soft_skills.truncate(MAX_SOFT_SKILLS);
    soft_skills
}

#[inline]
fn distinct_count(items: &[String]) -> usize {
    items.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_profile(skills: &[&str], values: &[&str], availability: &[&str]) -> Profile {
        Profile {
            skills: strings(skills),
            values: strings(values),
            availability: strings(availability),
            ..Profile::default()
        }
    }

    #[test]
    fn test_empty_profile_gets_base_score() {
        let analysis = ProfileScorer::default().score(&Profile::default());

        assert_eq!(analysis.score, 60);
        assert!(analysis.recommended_domains.is_empty());
        assert!(analysis.soft_skills.is_empty());
        assert_eq!(analysis.advice, PROFILE_ADVICE);
    }

    #[test]
    fn test_score_formula() {
        let profile = create_test_profile(
            &["Design UX/UI", "Communication", "Social Media"],
            &["🌱 Environnement", "📚 Éducation"],
            &["Lundi soir", "Mercredi soir", "Télétravail OK"],
        );

        // 60 + 3*5 + 2*3 + 3*2
        assert_eq!(ProfileScorer::default().score(&profile).score, 87);
    }

    #[test]
    fn test_score_clamps_to_100() {
        let skills: Vec<String> = (0..20).map(|i| format!("skill {}", i)).collect();
        let profile = Profile {
            skills,
            ..Profile::default()
        };

        assert_eq!(ProfileScorer::default().score(&profile).score, 100);
    }

    #[test]
    fn test_duplicates_count_once() {
        let profile = create_test_profile(&["Python", "Python"], &[], &[]);
        assert_eq!(ProfileScorer::default().score(&profile).score, 65);
    }

    #[test]
    fn test_domains_first_seen_order_deduplicated() {
        let domains = infer_domains(&strings(&[
            "Numérique responsable",
            "Environnement",
            "environnement local",
            "Santé publique",
            "Culture",
        ]));

        assert_eq!(domains, vec!["💻 Numérique", "🌱 Environnement", "⚕️ Santé"]);
    }

    #[test]
    fn test_domain_first_table_row_wins_per_value() {
        // Mentions both environment and culture; environment is tested first
        let domains = infer_domains(&strings(&["culture et environnement"]));
        assert_eq!(domains, vec!["🌱 Environnement"]);
    }

    #[test]
    fn test_education_matches_with_and_without_accent() {
        assert_eq!(infer_domains(&strings(&["ÉDUCATION"])), vec!["📚 Éducation"]);
        assert_eq!(infer_domains(&strings(&["education"])), vec!["📚 Éducation"]);
    }

    #[test]
    fn test_fallback_domains_follow_skill_count() {
        let profile = create_test_profile(&["Python", "SQL"], &["unmatched"], &[]);
        let analysis = ProfileScorer::default().score(&profile);
        assert_eq!(analysis.recommended_domains, vec!["🌱 Environnement", "📚 Éducation"]);
    }

    #[test]
    fn test_no_skills_and_unmatched_values_gives_no_domains() {
        let profile = create_test_profile(&[], &["unmatched-term"], &[]);
        assert!(ProfileScorer::default().score(&profile).recommended_domains.is_empty());
    }

    #[test]
    fn test_soft_skills_truncated_to_three() {
        assert_eq!(
            infer_soft_skills(3, 2, 3),
            vec!["Communication", "Créativité", "Empathie"]
        );
        assert_eq!(infer_soft_skills(0, 2, 3), vec!["Empathie", "Organisation"]);
        assert!(infer_soft_skills(2, 1, 2).is_empty());
    }

    #[test]
    fn test_custom_weights() {
        let weights = ProfileWeights {
            base: 10,
            skill: 1,
            value: 1,
            availability: 1,
        };
        let profile = create_test_profile(&["a"], &["b"], &["c"]);
        assert_eq!(ProfileScorer::new(weights).score(&profile).score, 13);
    }
}
