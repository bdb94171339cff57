use crate::models::{MissionCategory, MissionDraft, PresentationMetrics, Tag};

/// Keyword sets in priority order. The first set with a hit wins.
const CATEGORY_KEYWORDS: &[(MissionCategory, &[&str])] = &[
    (MissionCategory::Design, &["design", "graphiste", "visuel", "créatif"]),
    (
        MissionCategory::Communication,
        &["communica", "réseaux", "social", "media", "content"],
    ),
    (
        MissionCategory::Development,
        &["code", "dev", "programmation", "informatique"],
    ),
    (
        MissionCategory::Education,
        &["atelier", "formation", "enseigner", "éduc"],
    ),
];

/// Classify free text into a mission category
///
/// Lower-cases the input and tests each keyword set by substring, in
/// priority order. Falls back to `General`.
pub fn classify(text: &str) -> MissionCategory {
    let lower = text.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(MissionCategory::General)
}

/// Turn a free-text request into the pre-baked draft of its category
pub fn synthesize(text: &str) -> MissionDraft {
    draft_for(classify(text))
}

/// Fixed draft for a category
pub fn draft_for(category: MissionCategory) -> MissionDraft {
    match category {
        MissionCategory::Design => build_draft(
            category,
            "Designer créatif pour campagne impactante",
            "🎨",
            "Créer des visuels qui sensibiliseront 5000 personnes à notre cause",
            &[("Design", "mts"), ("Créativité", "mtso"), ("5h/semaine", "mtl")],
            "Moyen - 5h/semaine en télétravail",
            ("32 profils", "87%", "8 matchs"),
        ),
        MissionCategory::Communication => build_draft(
            category,
            "Community manager pour ONG",
            "📱",
            "Animer les réseaux sociaux pour toucher 10K personnes",
            &[("Social Media", "mts"), ("Rédaction", "mtso"), ("3h/semaine", "mtl")],
            "Léger - 3h/semaine",
            ("45 profils", "92%", "12 matchs"),
        ),
        MissionCategory::Development => build_draft(
            category,
            "Mentor en programmation pour jeunes",
            "💻",
            "Former 20 jeunes aux bases du développement web",
            &[("Dev Web", "mts"), ("Pédagogie", "mtso"), ("4h/semaine", "mtl")],
            "Moyen - 4h/semaine",
            ("28 profils", "84%", "6 matchs"),
        ),
        MissionCategory::Education => build_draft(
            category,
            "Formateur·rice pour ateliers éducatifs",
            "📚",
            "Animer des ateliers pour 30 enfants de quartiers défavorisés",
            &[("Formation", "mts"), ("Pédagogie", "mtso"), ("Week-end", "mtl")],
            "Occasionnel - 2 samedis/mois",
            ("38 profils", "89%", "10 matchs"),
        ),
        MissionCategory::General => build_draft(
            category,
            "Mission de bénévolat",
            "🤝",
            "Contribuer à une cause importante selon vos compétences",
            &[("Polyvalence", "mtso"), ("Flexible", "mtl")],
            "Flexible - selon disponibilités",
            ("28 profils", "75%", "5 matchs"),
        ),
    }
}

fn build_draft(
    category: MissionCategory,
    title: &str,
    emoji: &str,
    impact: &str,
    tags: &[(&str, &str)],
    commitment: &str,
    (profiles, attraction_rate, match_count): (&str, &str, &str),
) -> MissionDraft {
    MissionDraft {
        category,
        title: title.to_string(),
        emoji: emoji.to_string(),
        impact_statement: impact.to_string(),
        tags: tags.iter().map(|(label, code)| Tag::new(label, code)).collect(),
        commitment: commitment.to_string(),
        presentation_metrics: PresentationMetrics {
            profiles: profiles.to_string(),
            attraction_rate: attraction_rate.to_string(),
            match_count: match_count.to_string(),
        },
    }
}
