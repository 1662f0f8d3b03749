//! Similarity computation for embeddings.

use crate::error::{EmbeddingError, Result};

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(EmbeddingError::InvalidArgument(format!(
            "length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Compute the cosine similarity between two embeddings.
///
/// Returns a value between -1.0 and 1.0, where:
/// - 1.0 means identical direction
/// - 0.0 means orthogonal vectors
/// - -1.0 means opposite vectors
///
/// If either vector has zero magnitude the similarity is 0.0. Vectors of
/// different length are rejected, never truncated or padded.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    let dot = dot_product(a, b)?;
    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (magnitude_a * magnitude_b))
}

/// Compute the dot product between two embeddings.
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Euclidean norm of an embedding.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
