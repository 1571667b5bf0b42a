//! Proposal value object
//!
//! A proposal is the textual input to a validation run: a short name and a
//! free-form concept description.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A proposal submitted for panel evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    name: String,
    concept: String,
}

impl Proposal {
    /// Create a proposal, rejecting empty name or concept.
    pub fn new(name: impl Into<String>, concept: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let concept = concept.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidProposal("name is empty".to_string()));
        }
        if concept.trim().is_empty() {
            return Err(DomainError::InvalidProposal("concept is empty".to_string()));
        }

        Ok(Self { name, concept })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn concept(&self) -> &str {
        &self.concept
    }
}

impl std::fmt::Display for Proposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_proposal() {
        let p = Proposal::new("TiffinGo", "Home-cooked meal delivery for commuters").unwrap();
        assert_eq!(p.name(), "TiffinGo");
        assert!(p.concept().contains("delivery"));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Proposal::new("  ", "some concept").is_err());
    }

    #[test]
    fn test_empty_concept_rejected() {
        assert!(Proposal::new("Name", "").is_err());
    }
}
