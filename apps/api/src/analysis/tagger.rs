//! Part-of-speech tagging: pluggable, trait-based tagger over normalized job text.
//!
//! `AppState` holds an `Arc<dyn PosTagger>` built once at startup. The production
//! backend is a `TaggerPool` of rust-bert models (feature `bert`); tests plug in
//! their own.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaggerError {
    /// The model could not be loaded. Only raised at startup.
    #[error("part-of-speech model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("tagger worker stopped before answering")]
    #[cfg_attr(not(feature = "bert"), allow(dead_code))]
    WorkerGone,
}

/// Coarse grammatical categories. Only nouns and proper nouns matter downstream;
/// everything the model emits maps onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// Maps a Penn Treebank tag (`NN`, `NNP`, `VBZ`, ...) or a Universal
    /// Dependencies tag (`NOUN`, `PROPN`, ...) onto a category.
    #[cfg_attr(not(feature = "bert"), allow(dead_code))]
    pub fn from_label(label: &str) -> Self {
        match label {
            "NN" | "NNS" | "NOUN" => Self::Noun,
            "NNP" | "NNPS" | "PROPN" => Self::ProperNoun,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "MD" | "VERB" | "AUX" => Self::Verb,
            "JJ" | "JJR" | "JJS" | "ADJ" => Self::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" | "ADV" => Self::Adverb,
            "PRP" | "PRP$" | "WP" | "WP$" | "PRON" => Self::Pronoun,
            "DT" | "PDT" | "WDT" | "DET" => Self::Determiner,
            "IN" | "ADP" => Self::Adposition,
            "CC" | "CCONJ" | "SCONJ" => Self::Conjunction,
            "CD" | "NUM" => Self::Numeral,
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "#" | "$" | "PUNCT" | "SYM" => {
                Self::Punctuation
            }
            _ => Self::Other,
        }
    }

    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl Token {
    #[cfg_attr(not(feature = "bert"), allow(dead_code))]
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Tags normalized English text. Implementations must be cheap to call
/// concurrently; any expensive model state is loaded before construction.
#[async_trait]
pub trait PosTagger: Send + Sync {
    async fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError>;
}

/// Nouns and proper nouns in input order, surface text untouched.
pub fn select_skill_candidates(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.pos.is_nominal())
        .map(|token| token.text.clone())
        .collect()
}

/// Loads the configured tagger. Blocks until every worker has its model.
#[cfg(feature = "bert")]
pub fn load_tagger(workers: usize) -> Result<Arc<dyn PosTagger>, TaggerError> {
    Ok(Arc::new(super::bert::load(workers)?))
}

#[cfg(not(feature = "bert"))]
pub fn load_tagger(_workers: usize) -> Result<Arc<dyn PosTagger>, TaggerError> {
    Err(TaggerError::ModelUnavailable(
        "no part-of-speech model compiled in; rebuild with `--features bert`".to_string(),
    ))
}


#[cfg(test)]
mod tests {
    use super::testing::LexiconTagger;
    use super::*;

    #[test]
    fn test_penn_labels_map_to_nominal_categories() {
        assert_eq!(PartOfSpeech::from_label("NN"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_label("NNS"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_label("NNP"), PartOfSpeech::ProperNoun);
        assert_eq!(PartOfSpeech::from_label("NNPS"), PartOfSpeech::ProperNoun);
        assert_eq!(PartOfSpeech::from_label("VBN"), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::from_label("."), PartOfSpeech::Punctuation);
    }

    #[test]
    fn test_universal_labels_map_to_nominal_categories() {
        assert_eq!(PartOfSpeech::from_label("NOUN"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_label("PROPN"), PartOfSpeech::ProperNoun);
        assert_eq!(PartOfSpeech::from_label("ADJ"), PartOfSpeech::Adjective);
    }

    #[test]
    fn test_unknown_label_is_other_and_not_nominal() {
        let pos = PartOfSpeech::from_label("XYZ");
        assert_eq!(pos, PartOfSpeech::Other);
        assert!(!pos.is_nominal());
    }

    #[test]
    fn test_select_skill_candidates_keeps_surface_text_and_order() {
        let tokens = vec![
            Token::new("Senior", PartOfSpeech::ProperNoun),
            Token::new("is", PartOfSpeech::Verb),
            Token::new("C++", PartOfSpeech::Noun),
            Token::new("needed", PartOfSpeech::Verb),
            Token::new("kubernetes,", PartOfSpeech::Noun),
            Token::new("Senior", PartOfSpeech::ProperNoun),
        ];

        let candidates = select_skill_candidates(&tokens);
        // Duplicates survive here; the shaper deduplicates.
        assert_eq!(candidates, vec!["Senior", "C++", "kubernetes,", "Senior"]);
    }

    #[tokio::test]
    async fn test_lexicon_tagger_splits_trailing_punctuation() {
        let tagger = LexiconTagger::new(&[("Engineer", PartOfSpeech::Noun)]);
        let tokens = tagger.tag("Engineer needed.").await.unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new("Engineer", PartOfSpeech::Noun),
                Token::new("needed", PartOfSpeech::Other),
                Token::new(".", PartOfSpeech::Punctuation),
            ]
        );
    }

    #[cfg(not(feature = "bert"))]
    #[test]
    fn test_load_tagger_without_model_is_unavailable() {
        assert!(matches!(
            load_tagger(1),
            Err(TaggerError::ModelUnavailable(_))
        ));
    }
}
