// Unit tests for the ImpactMatch heuristic core

use impact_match::core::presenter::{PLACEHOLDER_REASONS, PLACEHOLDER_SCORE_RANGE};
use impact_match::core::{classify, present_listings, synthesize, MatchPresenter, PlaceholderPresenter, ProfileScorer};
use impact_match::models::{MissionCategory, MissionListing, Profile};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_test_profile(skills: usize, values: usize, slots: usize) -> Profile {
    Profile {
        skills: (0..skills).map(|i| format!("skill {}", i)).collect(),
        values: (0..values).map(|i| format!("value {}", i)).collect(),
        availability: (0..slots).map(|i| format!("slot {}", i)).collect(),
        ..Profile::default()
    }
}

fn create_listing(id: i64) -> MissionListing {
    MissionListing {
        id,
        org_name: Some("Greenpeace Maroc".to_string()),
        title: Some("Mentor informatique pour ados".to_string()),
        emoji: Some("💻".to_string()),
        impact: None,
        tags: None,
        location: None,
        commitment: None,
        urgent: false,
    }
}

#[test]
fn test_profile_score_bounds() {
    let scorer = ProfileScorer::default();

    for skills in 0..10 {
        for values in 0..6 {
            for slots in 0..6 {
                let score = scorer.score(&create_test_profile(skills, values, slots)).score;
                assert!((60..=100).contains(&score), "score {} out of range", score);
            }
        }
    }
}

#[test]
fn test_profile_score_monotonic() {
    let scorer = ProfileScorer::default();

    for n in 0..12 {
        let base = scorer.score(&create_test_profile(n, n, n)).score;
        assert!(scorer.score(&create_test_profile(n + 1, n, n)).score >= base);
        assert!(scorer.score(&create_test_profile(n, n + 1, n)).score >= base);
        assert!(scorer.score(&create_test_profile(n, n, n + 1)).score >= base);
    }
}

#[test]
fn test_recommended_domains_capped_and_unique() {
    let profile = Profile {
        values: strings(&[
            "Santé",
            "Justice",
            "santé mentale",
            "Culture",
            "Numérique",
            "Environnement",
        ]),
        ..Profile::default()
    };

    let domains = ProfileScorer::default().score(&profile).recommended_domains;
    assert_eq!(domains, vec!["⚕️ Santé", "⚖️ Justice sociale", "🎨 Culture"]);
}

#[test]
fn test_unmatched_values_without_skills_yield_no_domains() {
    let profile = Profile {
        skills: vec![],
        values: strings(&["unmatched-term"]),
        ..Profile::default()
    };

    let analysis = ProfileScorer::default().score(&profile);
    assert!(analysis.recommended_domains.is_empty());
    assert_eq!(analysis.score, 63);
}

#[test]
fn test_seed_citizen_analysis() {
    let profile = Profile {
        skills: strings(&["Design UX/UI", "Communication", "Social Media"]),
        values: strings(&["🌱 Environnement", "📚 Éducation"]),
        availability: strings(&["Lundi soir", "Mercredi soir", "Télétravail OK"]),
        ..Profile::default()
    };

    let analysis = ProfileScorer::default().score(&profile);
    assert_eq!(analysis.score, 87);
    assert_eq!(analysis.recommended_domains, vec!["🌱 Environnement", "📚 Éducation"]);
    assert_eq!(analysis.soft_skills, vec!["Communication", "Créativité", "Empathie"]);
}

#[test]
fn test_synthesize_design() {
    let draft = synthesize("I love design and visuals");
    assert_eq!(draft.category, MissionCategory::Design);
    assert_eq!(draft.title, "Designer créatif pour campagne impactante");
}

#[test]
fn test_synthesize_empty_is_fallback() {
    let draft = synthesize("");
    assert_eq!(draft.category, MissionCategory::General);
    assert_eq!(draft.commitment, "Flexible - selon disponibilités");
}

#[test]
fn test_keyword_tie_break() {
    assert_eq!(classify("design python code"), MissionCategory::Design);
    assert_eq!(classify("content for a code club"), MissionCategory::Communication);
    assert_eq!(classify("atelier code"), MissionCategory::Development);
    assert_eq!(classify("un atelier de cuisine"), MissionCategory::Education);
}

#[test]
fn test_synthesize_development() {
    let draft = synthesize("On cherche quelqu'un en informatique");
    assert_eq!(draft.title, "Mentor en programmation pour jeunes");
    assert_eq!(draft.presentation_metrics.match_count, "6 matchs");
}

#[test]
fn test_presenter_contract() {
    let mut rng = StdRng::seed_from_u64(2024);
    let listing = create_listing(5);

    let mut seen_two = false;
    let mut seen_three = false;

    for _ in 0..200 {
        let result = PlaceholderPresenter.present(&listing, &mut rng);
        assert!(PLACEHOLDER_SCORE_RANGE.contains(&result.score));
        match result.reasons.len() {
            2 => seen_two = true,
            3 => seen_three = true,
            n => panic!("unexpected reason count {}", n),
        }
        for (reason, expected) in result.reasons.iter().zip(PLACEHOLDER_REASONS.iter()) {
            assert_eq!(reason, expected);
        }
    }

    assert!(seen_two && seen_three);
}

#[test]
fn test_present_listings_is_deterministic_with_seed() {
    let listings: Vec<MissionListing> = (1..=5).map(create_listing).collect();

    let a = present_listings(&PlaceholderPresenter, listings.clone(), &mut StdRng::seed_from_u64(9));
    let b = present_listings(&PlaceholderPresenter, listings, &mut StdRng::seed_from_u64(9));

    assert_eq!(a, b);
    assert_eq!(a.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert!(a.iter().all(|c| c.meta.location == "À distance" && c.meta.commitment == "Flexible"));
}
