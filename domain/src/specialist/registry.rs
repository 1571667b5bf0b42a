//! Specialist registry
//!
//! Immutable, process-wide catalog of evaluation specialists, built once at
//! startup and shared read-only across all concurrent invocations. The
//! sub-parameter-name → specialist index is built exactly once here; lookups
//! never re-scan the catalog.

use super::catalog::{CATALOG, slug};
use super::entities::Specialist;
use super::validation::ConfigIssue;
use crate::core::error::DomainError;
use crate::planner;
use std::collections::HashMap;

/// The immutable specialist catalog with prebuilt lookup indexes.
#[derive(Debug)]
pub struct SpecialistRegistry {
    specialists: Vec<Specialist>,
    by_id: HashMap<String, usize>,
    by_sub_parameter: HashMap<String, Vec<usize>>,
}

impl SpecialistRegistry {
    /// Build the registry from the built-in evaluation framework.
    ///
    /// Fails fast on fatal configuration errors (empty catalog, duplicate
    /// ids, dependency cycles). Non-fatal issues — dangling dependency
    /// names, duplicated dependency declarations — are returned alongside
    /// the registry for the caller to log.
    pub fn from_catalog() -> Result<(Self, Vec<ConfigIssue>), DomainError> {
        let specialists = CATALOG
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Specialist::new(
                    format!("s{:03}_{}", i + 1, slug(entry.sub_parameter)),
                    entry.cluster,
                    entry.parameter,
                    entry.sub_parameter,
                    entry.weight,
                    entry.dependencies.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();

        Self::from_specialists(specialists)
    }

    /// Build a registry from an explicit specialist list.
    ///
    /// Used by tests and by callers that supply a reduced panel.
    pub fn from_specialists(
        specialists: Vec<Specialist>,
    ) -> Result<(Self, Vec<ConfigIssue>), DomainError> {
        if specialists.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut by_id = HashMap::with_capacity(specialists.len());
        let mut by_sub_parameter: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, s) in specialists.iter().enumerate() {
            if by_id.insert(s.id().to_string(), i).is_some() {
                return Err(DomainError::DuplicateSpecialist(s.id().to_string()));
            }
            by_sub_parameter
                .entry(s.sub_parameter().to_string())
                .or_default()
                .push(i);
        }

        let mut issues = Vec::new();
        for s in &specialists {
            let mut seen = Vec::new();
            for dep in s.dependencies() {
                if !by_sub_parameter.contains_key(dep) {
                    issues.push(ConfigIssue::dangling(s.id(), dep));
                }
                if seen.contains(&dep) {
                    issues.push(ConfigIssue::duplicate_dependency(s.id(), dep));
                }
                seen.push(dep);
            }
        }

        // Cycle detection shares the planner's leveling; a catalog that
        // cannot be leveled cannot be executed.
        planner::level_indices(&specialists, &by_sub_parameter)?;

        Ok((
            Self {
                specialists,
                by_id,
                by_sub_parameter,
            },
            issues,
        ))
    }

    /// All specialists, in declaration order.
    pub fn all(&self) -> &[Specialist] {
        &self.specialists
    }

    pub fn len(&self) -> usize {
        self.specialists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialists.is_empty()
    }

    /// Look up a specialist by id.
    pub fn get(&self, id: &str) -> Option<&Specialist> {
        self.by_id.get(id).map(|&i| &self.specialists[i])
    }

    /// All specialists whose sub-parameter matches the given dependency name.
    ///
    /// Sub-parameter names are not unique across parameters, so this is a
    /// many-to-one mapping; resolution uses the prebuilt index.
    pub fn by_dependency_name(&self, name: &str) -> Vec<&Specialist> {
        self.by_sub_parameter
            .get(name)
            .map(|indices| indices.iter().map(|&i| &self.specialists[i]).collect())
            .unwrap_or_default()
    }

    /// Unique cluster names, in declaration order.
    pub fn clusters(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for s in &self.specialists {
            if !out.contains(&s.cluster()) {
                out.push(s.cluster());
            }
        }
        out
    }

    pub(crate) fn sub_parameter_index(&self) -> &HashMap<String, Vec<usize>> {
        &self.by_sub_parameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialist::validation::ConfigIssueCode;

    fn specialist(id: &str, sub: &str, deps: &[&str]) -> Specialist {
        Specialist::new(
            id,
            "Core Idea",
            "Novelty & Uniqueness",
            sub,
            20.0,
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    #[test]
    fn test_full_catalog_builds() {
        let (registry, _issues) = SpecialistRegistry::from_catalog().unwrap();
        assert_eq!(registry.len(), 109);
        assert_eq!(registry.clusters().len(), 7);
    }

    #[test]
    fn test_full_catalog_reports_known_dangling_deps() {
        let (_registry, issues) = SpecialistRegistry::from_catalog().unwrap();
        let dangling: Vec<_> = issues
            .iter()
            .filter(|i| i.code == ConfigIssueCode::DanglingDependency)
            .collect();
        // "Technical Feasibility", "Operational Viability", and "Financial
        // Viability" are parameter names, not sub-parameters.
        assert_eq!(dangling.len(), 3);
        assert!(dangling.iter().any(|i| i.message.contains("Technical Feasibility")));
        assert!(dangling.iter().any(|i| i.message.contains("Operational Viability")));
        assert!(dangling.iter().any(|i| i.message.contains("Financial Viability")));
    }

    #[test]
    fn test_by_dependency_name_uses_index() {
        let (registry, _) = SpecialistRegistry::from_catalog().unwrap();

        let matches = registry.by_dependency_name("Operational Scalability");
        assert_eq!(matches.len(), 2); // appears under two parameters

        let matches = registry.by_dependency_name("Originality");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].cluster(), "Core Idea");

        assert!(registry.by_dependency_name("No Such Thing").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let (registry, _) = SpecialistRegistry::from_catalog().unwrap();
        let first = &registry.all()[0];
        assert_eq!(registry.get(first.id()).unwrap().sub_parameter(), "Originality");
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = SpecialistRegistry::from_specialists(vec![]).unwrap_err();
        assert!(matches!(err, DomainError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let specs = vec![
            specialist("dup", "A", &[]),
            specialist("dup", "B", &[]),
        ];
        let err = SpecialistRegistry::from_specialists(specs).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateSpecialist(_)));
    }

    #[test]
    fn test_cycle_rejected_at_startup() {
        let specs = vec![
            specialist("a", "A", &["B"]),
            specialist("b", "B", &["A"]),
        ];
        let err = SpecialistRegistry::from_specialists(specs).unwrap_err();
        assert!(matches!(err, DomainError::DependencyCycle(_)));
    }

    #[test]
    fn test_dangling_dependency_is_warning_not_error() {
        let specs = vec![specialist("a", "A", &["Nowhere"])];
        let (registry, issues) = SpecialistRegistry::from_specialists(specs).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::DanglingDependency);
    }
}
