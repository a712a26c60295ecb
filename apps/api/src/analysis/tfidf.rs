//! TF-IDF weighting and vector-angle similarity over a small in-memory corpus.
//!
//! Stages, each usable on its own:
//! 1. `Vocabulary::build`: sorted shared term list + document frequencies
//! 2. `Vocabulary::tfidf_vector`: raw counts × smoothed idf, L2-normalised
//! 3. `cosine_similarity`: dot product over the product of norms

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    /// No document contributed a single token.
    #[error("Empty vocabulary; documents contain no usable tokens")]
    EmptyVocabulary,
}

/// Terms seen anywhere in the corpus, with how many documents contain each.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Sorted, unique.
    terms: Vec<String>,
    /// Parallel to `terms`.
    document_frequency: Vec<usize>,
    document_count: usize,
}

impl Vocabulary {
    /// Builds the vocabulary for a corpus of already-tokenized documents.
    pub fn build(documents: &[Vec<String>]) -> Result<Self, SimilarityError> {
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in documents {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        if df.is_empty() {
            return Err(SimilarityError::EmptyVocabulary);
        }

        let (terms, document_frequency) = df
            .into_iter()
            .map(|(term, count)| (term.to_string(), count))
            .unzip();

        Ok(Self {
            terms,
            document_frequency,
            document_count: documents.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .ok()
    }

    /// Smoothed inverse document frequency: `ln((1 + N) / (1 + df)) + 1`.
    /// Never below 1, so every term seen in the corpus keeps a positive weight.
    pub fn idf(&self, index: usize) -> f64 {
        let n = self.document_count as f64;
        let df = self.document_frequency[index] as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    }

    /// Raw term counts scaled by idf, then L2-normalised.
    /// Tokens outside the vocabulary are ignored; a document with no known
    /// tokens maps to the zero vector.
    pub fn tfidf_vector(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.len()];
        for token in tokens {
            if let Some(index) = self.index_of(token) {
                vector[index] += 1.0;
            }
        }
        for (index, weight) in vector.iter_mut().enumerate() {
            *weight *= self.idf(index);
        }
        l2_normalize(&mut vector);
        vector
    }
}

pub fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scales `vector` to unit length in place. The zero vector is left unchanged.
pub fn l2_normalize(vector: &mut [f64]) {
    let norm = l2_norm(vector);
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine of the angle between `a` and `b`, clamped to `[0, 1]`.
/// Returns 0 if either vector is zero. Both slices must share one vocabulary.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors from different vocabularies");

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
