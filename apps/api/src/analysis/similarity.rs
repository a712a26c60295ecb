//! Similarity Scorer: contextual overlap between a resume and a role description.
//!
//! The two texts form a fresh two-document corpus on every call; nothing is
//! cached between calls.

use tracing::debug;

use crate::analysis::round2;
use crate::analysis::tfidf::{cosine_similarity, SimilarityError, Vocabulary};
use crate::analysis::tokenizer::tokenize;

/// Raw cosine similarity in `[0, 1]` between the TF-IDF vectors of both texts.
pub fn contextual_similarity(resume_text: &str, description: &str) -> Result<f64, SimilarityError> {
    let documents = [tokenize(resume_text), tokenize(description)];
    let vocabulary = Vocabulary::build(&documents)?;

    let resume_vector = vocabulary.tfidf_vector(&documents[0]);
    let description_vector = vocabulary.tfidf_vector(&documents[1]);

    Ok(cosine_similarity(&resume_vector, &description_vector))
}

/// Similarity scaled to `[0, 100]` and rounded to two decimals.
/// Inputs with no usable tokens score 0 rather than failing.
pub fn similarity_score(resume_text: &str, description: &str) -> f64 {
    match contextual_similarity(resume_text, description) {
        Ok(similarity) => round2(similarity * 100.0),
        Err(e) => {
            debug!("Similarity fell back to 0: {e}");
            0.0
        }
    }
}
