//! rust-bert backed tagger: one `POSModel` per pool worker.

use rust_bert::pipelines::pos_tagging::{POSConfig, POSModel};

use super::pool::{TaggerPool, TaggingModel};
use super::tagger::{PartOfSpeech, TaggerError, Token};

/// Inputs are tagged in slices of at most this many words to stay well inside
/// the model's sequence length.
const CHUNK_WORDS: usize = 256;

/// Loads rust-bert's default English POS model on each of `workers` threads.
/// Blocks until every copy is loaded.
pub fn load(workers: usize) -> Result<TaggerPool, TaggerError> {
    TaggerPool::spawn(workers, || {
        POSModel::new(POSConfig::default()).map_err(|e| e.to_string())
    })
}

impl TaggingModel for POSModel {
    fn tag(&self, text: &str) -> Vec<Token> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let chunks: Vec<String> = words.chunks(CHUNK_WORDS).map(|c| c.join(" ")).collect();

        self.predict(&chunks)
            .into_iter()
            .flatten()
            .map(|tag| Token::new(tag.word, PartOfSpeech::from_label(&tag.label)))
            .collect()
    }
}
