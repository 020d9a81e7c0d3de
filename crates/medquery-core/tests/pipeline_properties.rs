//! Property tests for the query pipeline.

use medquery_core::models::{score_confidence, ResponseType};
use medquery_core::{KnowledgeBase, MedicalAssistant};
use proptest::prelude::*;

fn medicine_ids() -> Vec<String> {
    KnowledgeBase::builtin()
        .medicines()
        .iter()
        .map(|m| m.id.clone())
        .collect()
}

fn all_aliases() -> Vec<String> {
    KnowledgeBase::builtin()
        .medicines()
        .iter()
        .flat_map(|m| m.aliases.iter().cloned())
        .collect()
}

/// Emergency phrases that normalization leaves untouched.
fn stable_emergency_keywords() -> Vec<String> {
    let assistant = MedicalAssistant::default();
    let normalizer = assistant.normalizer();
    let keywords: Vec<String> = assistant
        .knowledge_base()
        .emergency_keywords()
        .iter()
        .filter(|k| normalizer.normalize(k) == k.as_str())
        .cloned()
        .collect();
    keywords
}

fn words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,10}", 0..6)
}

proptest! {
    /// Confidence stays within [0, 1] for analysis and response alike
    #[test]
    fn confidence_is_bounded(text in ".{0,120}") {
        let assistant = MedicalAssistant::default();
        let (analysis, response) = assistant.respond(&text);

        prop_assert!((0.0..=1.0).contains(&analysis.confidence()));
        prop_assert!((0.0..=1.0).contains(&response.confidence));
    }

    /// Analysis confidence is exactly the additive score of what was found
    #[test]
    fn confidence_matches_score(text in ".{0,120}") {
        let analysis = MedicalAssistant::default().analyze(&text);

        let expected = score_confidence(
            analysis.medicine().is_some(),
            !analysis.symptoms().is_empty(),
            analysis.query_type(),
        );
        prop_assert!((analysis.confidence() - expected).abs() < 1e-9);
    }

    /// Normalized text is single-spaced with no padding, and stable under repetition
    #[test]
    fn normalization_is_total_and_idempotent(text in ".{0,120}") {
        let assistant = MedicalAssistant::default();
        let normalizer = assistant.normalizer();

        let once = normalizer.normalize(&text);
        prop_assert_eq!(once.trim(), once.as_str());
        prop_assert!(!once.contains("  "));

        let twice = normalizer.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// A canonical id survives normalization wherever it appears
    #[test]
    fn canonical_ids_are_fixed_points(
        before in words(),
        id in prop::sample::select(medicine_ids()),
        after in words(),
    ) {
        let assistant = MedicalAssistant::default();
        let text = format!("{} {} {}", before.join(" "), id, after.join(" "));

        let normalized = assistant.normalizer().normalize(&text);
        prop_assert!(
            normalized.split(' ').any(|token| token == id),
            "{:?} lost {} after normalizing to {:?}",
            text, id, normalized
        );
    }

    /// Any alias on its own normalizes to some medicine id
    #[test]
    fn aliases_normalize_to_ids(alias in prop::sample::select(all_aliases())) {
        let assistant = MedicalAssistant::default();
        let analysis = assistant.analyze(&alias);

        prop_assert!(analysis.medicine().is_some(), "alias {} not recognized", alias);
    }

    /// An emergency phrase always wins over a named medicine
    #[test]
    fn emergency_preempts_medicine(
        before in words(),
        keyword in prop::sample::select(stable_emergency_keywords()),
        alias in prop::sample::select(all_aliases()),
    ) {
        let assistant = MedicalAssistant::default();
        let text = format!("{} {} with {}", before.join(" "), keyword, alias);

        let (analysis, response) = assistant.respond(&text);
        prop_assert!(analysis.is_emergency());
        prop_assert_eq!(response.response_type, ResponseType::Emergency);
        prop_assert!((response.confidence - 1.0).abs() < 1e-9);
    }

    /// Only error responses may omit the standard disclaimer
    #[test]
    fn responses_carry_disclaimer(text in ".{0,120}") {
        let response = MedicalAssistant::default().process_query(&text);

        prop_assert_ne!(response.response_type, ResponseType::Error);
        prop_assert!(response
            .disclaimer
            .contains("not a substitute for professional medical advice"));
    }
}
