//! Query text normalizer.
//!
//! Handles:
//! - Filler word removal (um, uh, like, ...)
//! - Fuzzy medicine name correction (tylenol→paracetamol, ibuprofin→ibuprofen)

use strsim::normalized_levenshtein;

use crate::config::NormalizerConfig;
use crate::knowledge::KnowledgeBase;

/// Normalizer for raw query text.
pub struct Normalizer<'a> {
    kb: &'a KnowledgeBase,
    config: &'a NormalizerConfig,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer over a knowledge base.
    pub fn new(kb: &'a KnowledgeBase, config: &'a NormalizerConfig) -> Self {
        Self { kb, config }
    }

    /// Lower-case, drop fillers and correct medicine names token by token.
    pub fn normalize(&self, raw_text: &str) -> String {
        let lower = raw_text.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        self.strip_fillers(&tokens)
            .into_iter()
            .map(|token| match self.best_medicine_match(token) {
                Some(id) => id,
                None => token,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Find the medicine whose alias is most similar to a single token.
    ///
    /// Returns the canonical id, not the alias. The best ratio must strictly
    /// exceed the threshold; on ties the first alias in knowledge base order wins.
    pub fn best_medicine_match(&self, token: &str) -> Option<&'a str> {
        let token_lower = token.to_lowercase();
        let mut best_ratio = self.config.similarity_threshold;
        let mut best_match = None;

        for medicine in self.kb.medicines() {
            for alias in &medicine.aliases {
                let ratio = similarity(&token_lower, &alias.to_lowercase());
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best_match = Some(medicine.id.as_str());
                }
            }
        }

        best_match
    }

    /// Drop filler tokens.
    ///
    /// Only whole-token fillers are removed unless multi-word stripping is
    /// enabled, in which case phrases like "you know" go too.
    fn strip_fillers<'t>(&self, tokens: &[&'t str]) -> Vec<&'t str> {
        let phrases: Vec<Vec<&str>> = if self.config.strip_multi_word_fillers {
            self.config
                .filler_words
                .iter()
                .map(|f| f.split_whitespace().collect::<Vec<_>>())
                .filter(|words| words.len() > 1)
                .collect()
        } else {
            Vec::new()
        };

        let mut kept = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if let Some(phrase) = phrases
                .iter()
                .find(|p| tokens[i..].starts_with(p.as_slice()))
            {
                i += phrase.len();
                continue;
            }

            if !self.is_filler(tokens[i]) {
                kept.push(tokens[i]);
            }
            i += 1;
        }

        kept
    }

    fn is_filler(&self, token: &str) -> bool {
        self.config.filler_words.iter().any(|f| f == token)
    }
}

/// Normalized string similarity (0.0 - 1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MedicineRecord;

    fn normalize(text: &str) -> String {
        let kb = KnowledgeBase::builtin();
        let config = NormalizerConfig::default();
        Normalizer::new(&kb, &config).normalize(text)
    }

    #[test]
    fn test_removes_single_token_fillers() {
        assert_eq!(normalize("um what is like paracetamol"), "what is paracetamol");
        assert_eq!(normalize("Well actually uh so"), "");
    }

    #[test]
    fn test_multi_word_filler_kept_by_default() {
        // "you know" never equals a single token, so it survives plain filtering
        assert_eq!(normalize("what is aspirin you know"), "what is aspirin you know");
    }

    #[test]
    fn test_multi_word_filler_stripped_when_enabled() {
        let kb = KnowledgeBase::builtin();
        let config = NormalizerConfig {
            strip_multi_word_fillers: true,
            ..NormalizerConfig::default()
        };
        let normalizer = Normalizer::new(&kb, &config);

        assert_eq!(normalizer.normalize("what is aspirin you know"), "what is aspirin");
        assert_eq!(normalizer.normalize("you know what you need"), "what you need");
    }

    #[test]
    fn test_punctuated_filler_is_kept() {
        assert_eq!(normalize("um, hello"), "um, hello");
    }

    #[test]
    fn test_brand_names_become_ids() {
        assert_eq!(normalize("Tell me about Tylenol"), "tell me about paracetamol");
        assert_eq!(normalize("advil"), "ibuprofen");
        assert_eq!(normalize("ZYRTEC"), "cetirizine");
        assert_eq!(normalize("glucophage"), "metformin");
    }

    #[test]
    fn test_misspellings_corrected() {
        assert_eq!(normalize("paracetmol"), "paracetamol");
        assert_eq!(normalize("ibuprofin"), "ibuprofen");
        assert_eq!(normalize("omeprazol"), "omeprazole");
        assert_eq!(normalize("dosage for ibuprofen?"), "dosage for ibuprofen");
    }

    #[test]
    fn test_unknown_tokens_unchanged() {
        assert_eq!(
            normalize("what is xyz123medicine used for"),
            "what is xyz123medicine used for"
        );
    }

    #[test]
    fn test_near_alias_words_are_rewritten() {
        // "reaction" is within edit distance 2 of the alias "reactine"
        assert_eq!(normalize("adverse reaction"), "adverse cetirizine");
    }

    #[test]
    fn test_whitespace_and_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
        assert_eq!(normalize("  what   is\tthis  "), "what is this");
    }

    #[test]
    fn test_canonical_ids_are_fixed_points() {
        let kb = KnowledgeBase::builtin();
        for id in kb.medicine_ids() {
            assert_eq!(normalize(id), id, "{} should normalize to itself", id);
            assert_eq!(normalize(&normalize(id)), id);
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let medicine = MedicineRecord::new("abcde".into(), "Test".into());
        let kb = KnowledgeBase::new(vec![medicine], Vec::new(), Vec::new()).unwrap();
        let config = NormalizerConfig::default();
        let normalizer = Normalizer::new(&kb, &config);

        // Two edits out of five characters is exactly 0.6
        assert_eq!(normalizer.best_medicine_match("abcxy"), None);
        // One edit is 0.8
        assert_eq!(normalizer.best_medicine_match("abcdx"), Some("abcde"));
    }

    #[test]
    fn test_ties_go_to_first_medicine() {
        let mut alpha = MedicineRecord::new("alpha".into(), "Test".into());
        alpha.aliases.push("abcde".into());
        let mut beta = MedicineRecord::new("beta".into(), "Test".into());
        beta.aliases.push("abcdf".into());

        let kb = KnowledgeBase::new(vec![alpha, beta], Vec::new(), Vec::new()).unwrap();
        let config = NormalizerConfig::default();
        let normalizer = Normalizer::new(&kb, &config);

        assert_eq!(normalizer.best_medicine_match("abcdx"), Some("alpha"));
        assert_eq!(normalizer.best_medicine_match("abcdf"), Some("beta"));
    }

    #[test]
    fn test_similarity() {
        assert!(similarity("paracetamol", "paracetamol") > 0.99);
        assert!(similarity("tylenol", "tylenl") > 0.8);
        assert!(similarity("aspirin", "metformin") < 0.5);
        assert_eq!(similarity("", ""), 1.0);
    }
}
