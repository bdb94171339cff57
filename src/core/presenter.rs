use std::ops::RangeInclusive;

use rand::{Rng, RngCore};

use crate::models::{MatchResult, MissionCard, MissionListing, MissionMeta, Tag};

/// Bounds of the placeholder compatibility score
pub const PLACEHOLDER_SCORE_RANGE: RangeInclusive<u8> = 75..=98;

/// Reason pool; the placeholder returns a 2 or 3 item prefix of it
pub const PLACEHOLDER_REASONS: [&str; 3] = [
    "Match IA détecté",
    "Profil compatible",
    "Disponibilités alignées",
];

/// Assigns a compatibility annotation to a mission listing
///
/// The random source is passed in so callers pick between a thread RNG
/// and a seeded one.
pub trait MatchPresenter: Send + Sync {
    fn present(&self, listing: &MissionListing, rng: &mut dyn RngCore) -> MatchResult;
}

/// Stand-in presenter with no matching algorithm behind it
///
/// Draws the score uniformly from 75..=98, then a reason count from {2, 3}.
/// Sub-scores mirror the overall score.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPresenter;

impl MatchPresenter for PlaceholderPresenter {
    fn present(&self, listing: &MissionListing, rng: &mut dyn RngCore) -> MatchResult {
        let score = rng.gen_range(PLACEHOLDER_SCORE_RANGE);
        let reason_count = rng.gen_range(2..=PLACEHOLDER_REASONS.len());

        MatchResult {
            mission_id: listing.id,
            score,
            reasons: PLACEHOLDER_REASONS[..reason_count]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            skill_match: score,
            value_match: score,
            availability_match: score,
        }
    }
}

/// Annotate listings in order and fill display defaults
pub fn present_listings(
    presenter: &dyn MatchPresenter,
    listings: Vec<MissionListing>,
    rng: &mut dyn RngCore,
) -> Vec<MissionCard> {
    listings
        .into_iter()
        .map(|listing| {
            let result = presenter.present(&listing, rng);
            build_card(listing, result)
        })
        .collect()
}

fn build_card(listing: MissionListing, result: MatchResult) -> MissionCard {
    MissionCard {
        id: listing.id,
        org: non_empty_or(listing.org_name, "Association"),
        title: listing.title,
        emoji: non_empty_or(listing.emoji, "🤝"),
        score: result.score,
        impact: listing.impact,
        tags: listing.tags.unwrap_or_else(default_tags),
        reasons: result.reasons,
        meta: MissionMeta {
            location: non_empty_or(listing.location, "À distance"),
            commitment: non_empty_or(listing.commitment, "Flexible"),
            urgent: listing.urgent,
        },
    }
}

/// Tags shown for missions stored without any
pub fn default_tags() -> Vec<Tag> {
    vec![
        Tag::new("Compétence", "s"),
        Tag::new("Bénévolat", "v"),
        Tag::new("Flexible", "t"),
    ]
}

#[inline]
fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_listing(id: i64) -> MissionListing {
        MissionListing {
            id,
            org_name: None,
            title: Some("Designer de contenus".to_string()),
            emoji: None,
            impact: Some("Créer des visuels".to_string()),
            tags: None,
            location: Some(String::new()),
            commitment: Some("5h/mois".to_string()),
            urgent: true,
        }
    }

    #[test]
    fn test_placeholder_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let listing = create_listing(1);

        for _ in 0..500 {
            let result = PlaceholderPresenter.present(&listing, &mut rng);
            assert!(PLACEHOLDER_SCORE_RANGE.contains(&result.score));
            assert!(result.reasons.len() == 2 || result.reasons.len() == 3);
            assert_eq!(result.reasons[..], PLACEHOLDER_REASONS[..result.reasons.len()]);
            assert_eq!(result.mission_id, 1);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let listing = create_listing(3);
        let a = PlaceholderPresenter.present(&listing, &mut StdRng::seed_from_u64(42));
        let b = PlaceholderPresenter.present(&listing, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_card_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let cards = present_listings(&PlaceholderPresenter, vec![create_listing(9)], &mut rng);

        let card = &cards[0];
        assert_eq!(card.id, 9);
        assert_eq!(card.org, "Association");
        assert_eq!(card.emoji, "🤝");
        assert_eq!(card.tags, default_tags());
        assert_eq!(card.meta.location, "À distance");
        assert_eq!(card.meta.commitment, "5h/mois");
        assert!(card.meta.urgent);
    }

    #[test]
    fn test_empty_org_name_gets_default() {
        let mut listing = create_listing(4);
        listing.org_name = Some(String::new());
        listing.emoji = Some(String::new());

        let mut rng = StdRng::seed_from_u64(1);
        let cards = present_listings(&PlaceholderPresenter, vec![listing], &mut rng);
        assert_eq!(cards[0].org, "Association");
        assert_eq!(cards[0].emoji, "🤝");
    }

    #[test]
    fn test_stored_empty_tags_stay_empty() {
        let mut listing = create_listing(2);
        listing.tags = Some(vec![]);

        let mut rng = StdRng::seed_from_u64(1);
        let cards = present_listings(&PlaceholderPresenter, vec![listing], &mut rng);
        assert!(cards[0].tags.is_empty());
    }
}
