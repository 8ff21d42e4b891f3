//! Generated-document finalization.
//!
//! The writing step's output contract (frontmatter header, no code fences,
//! `publishedAt` equal to the request-time timestamp) is a natural-language
//! instruction to the model. This module enforces it deterministically
//! before anything is returned to the caller: a model that wraps the
//! document in a fence gets unwrapped, one that drifts on `publishedAt`
//! gets corrected, and anything else malformed is rejected as a
//! collaborator failure.

mod frontmatter;

use crate::types::{AppError, Result};

/// A finalized document: frontmatter block followed directly by body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument(String);

impl GeneratedDocument {
    /// Validate and sanitize raw writing-step output.
    ///
    /// `published_at` is the `current_date_iso` derived at request arrival;
    /// the frontmatter's `publishedAt` value is rewritten to it so the
    /// timestamp invariant holds regardless of what the model produced.
    pub fn finalize(raw: &str, published_at: &str) -> Result<Self> {
        let unfenced = frontmatter::strip_enclosing_fence(raw);

        if frontmatter::contains_fence(&unfenced) {
            return Err(AppError::Llm(
                "generated document contains code-fence markers".to_string(),
            ));
        }

        let document = frontmatter::rewrite_published_at(&unfenced, published_at)?;
        Ok(Self(document))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMESTAMP: &str = "2026-08-07T09:41:03.512Z";

    fn sample_document() -> String {
        "---\n\
         title: 'Qubits Ahead'\n\
         status: 'published'\n\
         author:\n  name: 'Jane Doe'\n  picture: 'https://x/jane.jpg'\n\
         slug: 'qubits-ahead'\n\
         description: 'The year in quantum'\n\
         coverImage: 'https://x/cover.jpg'\n\
         category: 'Quantum Computing'\n\
         publishedAt: '1999-01-01T00:00:00.000Z'\n\
         ---\n\
         The quantum landscape moved fast this year."
            .to_string()
    }

    #[test]
    fn test_finalize_rewrites_published_at() {
        let document = GeneratedDocument::finalize(&sample_document(), TIMESTAMP).unwrap();

        assert!(document.as_str().starts_with("---\n"));
        assert!(document
            .as_str()
            .contains(&format!("publishedAt: '{}'", TIMESTAMP)));
        assert!(!document.as_str().contains("1999-01-01"));
        // Body survives untouched after the closing delimiter
        assert!(document
            .as_str()
            .ends_with("The quantum landscape moved fast this year."));
    }

    #[test]
    fn test_finalize_unwraps_an_enclosing_fence() {
        let wrapped = format!("```markdown\n{}\n```", sample_document());
        let document = GeneratedDocument::finalize(&wrapped, TIMESTAMP).unwrap();

        assert!(document.as_str().starts_with("---\n"));
        assert!(!document.as_str().contains("```"));
    }

    #[test]
    fn test_finalize_rejects_interior_fences() {
        let fenced_body = sample_document() + "\n```rust\nfn main() {}\n```";
        let err = GeneratedDocument::finalize(&fenced_body, TIMESTAMP).unwrap_err();

        match err {
            AppError::Llm(msg) => assert!(msg.contains("code-fence")),
            other => panic!("expected Llm error, got {:?}", other),
        }
    }

    #[test]
    fn test_finalize_rejects_missing_frontmatter() {
        let err = GeneratedDocument::finalize("Just a paragraph of text.", TIMESTAMP).unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[test]
    fn test_finalize_rejects_unclosed_frontmatter() {
        let unclosed = "---\ntitle: 'Open'\npublishedAt: 'x'\nno closing delimiter";
        assert!(GeneratedDocument::finalize(unclosed, TIMESTAMP).is_err());
    }

    #[test]
    fn test_finalize_rejects_missing_published_at() {
        let without = "---\ntitle: 'No Date'\n---\nBody.";
        let err = GeneratedDocument::finalize(without, TIMESTAMP).unwrap_err();

        match err {
            AppError::Llm(msg) => assert!(msg.contains("publishedAt")),
            other => panic!("expected Llm error, got {:?}", other),
        }
    }

    #[test]
    fn test_finalize_trims_surrounding_whitespace() {
        let padded = format!("\n\n{}\n\n", sample_document());
        let document = GeneratedDocument::finalize(&padded, TIMESTAMP).unwrap();
        assert!(document.as_str().starts_with("---\n"));
    }
}
