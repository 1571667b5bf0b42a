//! Dependency planner
//!
//! Converts the registry's dependency declarations into an ordered sequence
//! of execution waves: wave 0 holds every specialist with no satisfiable
//! dependency; wave k holds specialists whose dependencies all resolve to
//! waves 0..k. The leveling is as deep as the longest dependency chain —
//! a specialist is never planned alongside or before anything it depends on.
//!
//! Dangling dependency names (nothing in the catalog carries that
//! sub-parameter) are treated as absent for planning; the registry reports
//! them as configuration warnings. Cycles are fatal and already rejected at
//! registry construction, which shares [`level_indices`].

use crate::core::error::DomainError;
use crate::specialist::{Specialist, SpecialistRegistry};
use std::collections::HashMap;

/// One wave of concurrently dispatchable specialists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wave {
    specialist_ids: Vec<String>,
}

impl Wave {
    pub fn specialist_ids(&self) -> &[String] {
        &self.specialist_ids
    }

    pub fn len(&self) -> usize {
        self.specialist_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialist_ids.is_empty()
    }
}

/// The full leveled execution plan for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    waves: Vec<Wave>,
}

impl ExecutionPlan {
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    pub fn total_specialists(&self) -> usize {
        self.waves.iter().map(Wave::len).sum()
    }
}

/// Plan the execution waves for every specialist in the registry.
pub fn plan_waves(registry: &SpecialistRegistry) -> Result<ExecutionPlan, DomainError> {
    let leveled = level_indices(registry.all(), registry.sub_parameter_index())?;

    let waves = leveled
        .into_iter()
        .map(|indices| Wave {
            specialist_ids: indices
                .into_iter()
                .map(|i| registry.all()[i].id().to_string())
                .collect(),
        })
        .collect();

    Ok(ExecutionPlan { waves })
}

/// Multi-level topological leveling over specialist indices.
///
/// Within a wave, specialists keep registry declaration order so the plan is
/// deterministic. Returns `DependencyCycle` when no progress can be made.
pub(crate) fn level_indices(
    specialists: &[Specialist],
    by_sub_parameter: &HashMap<String, Vec<usize>>,
) -> Result<Vec<Vec<usize>>, DomainError> {
    let n = specialists.len();

    // Resolve dependency names to indices once, skipping dangling names and
    // self-references (a specialist cannot wait on its own sub-parameter).
    let resolved: Vec<Vec<usize>> = specialists
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let mut deps = Vec::new();
            for name in s.dependencies() {
                if let Some(indices) = by_sub_parameter.get(name) {
                    for &j in indices {
                        if j != i && !deps.contains(&j) {
                            deps.push(j);
                        }
                    }
                }
            }
            deps
        })
        .collect();

    let mut level: Vec<Option<usize>> = vec![None; n];
    let mut assigned = 0;

    while assigned < n {
        let mut progressed = false;
        for i in 0..n {
            if level[i].is_some() {
                continue;
            }
            if resolved[i].iter().all(|&j| level[j].is_some()) {
                let depth = resolved[i]
                    .iter()
                    .map(|&j| level[j].unwrap() + 1)
                    .max()
                    .unwrap_or(0);
                level[i] = Some(depth);
                assigned += 1;
                progressed = true;
            }
        }
        if !progressed {
            let stuck: Vec<&str> = (0..n)
                .filter(|&i| level[i].is_none())
                .map(|i| specialists[i].sub_parameter())
                .collect();
            return Err(DomainError::DependencyCycle(stuck.join(", ")));
        }
    }

    let depth = level.iter().map(|l| l.unwrap()).max().unwrap_or(0);
    let mut waves = vec![Vec::new(); depth + 1];
    for (i, l) in level.iter().enumerate() {
        waves[l.unwrap()].push(i);
    }
    Ok(waves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specialist(id: &str, sub: &str, deps: &[&str]) -> Specialist {
        Specialist::new(
            id,
            "Test Cluster",
            "Test Parameter",
            sub,
            20.0,
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    fn registry(specs: Vec<Specialist>) -> SpecialistRegistry {
        SpecialistRegistry::from_specialists(specs).unwrap().0
    }

    #[test]
    fn test_chain_produces_three_distinct_waves() {
        let reg = registry(vec![
            specialist("a", "A", &[]),
            specialist("b", "B", &["A"]),
            specialist("c", "C", &["B"]),
        ]);
        let plan = plan_waves(&reg).unwrap();

        assert_eq!(plan.wave_count(), 3);
        assert_eq!(plan.waves()[0].specialist_ids(), ["a".to_string()]);
        assert_eq!(plan.waves()[1].specialist_ids(), ["b".to_string()]);
        assert_eq!(plan.waves()[2].specialist_ids(), ["c".to_string()]);
    }

    #[test]
    fn test_diamond_levels_by_longest_path() {
        // D depends on B and C; B and C both depend on A.
        let reg = registry(vec![
            specialist("a", "A", &[]),
            specialist("b", "B", &["A"]),
            specialist("c", "C", &["A"]),
            specialist("d", "D", &["B", "C"]),
        ]);
        let plan = plan_waves(&reg).unwrap();

        assert_eq!(plan.wave_count(), 3);
        assert_eq!(plan.waves()[1].len(), 2);
        assert_eq!(plan.waves()[2].specialist_ids(), ["d".to_string()]);
    }

    #[test]
    fn test_dangling_dependency_planned_as_independent() {
        let reg = registry(vec![
            specialist("a", "A", &["No Such Sub-Parameter"]),
            specialist("b", "B", &["A"]),
        ]);
        let plan = plan_waves(&reg).unwrap();

        assert_eq!(plan.wave_count(), 2);
        assert_eq!(plan.waves()[0].specialist_ids(), ["a".to_string()]);
    }

    #[test]
    fn test_duplicate_sub_parameter_names_all_block_dependents() {
        // Two specialists share the name "X"; Y must wait for both.
        let reg = registry(vec![
            specialist("x1", "X", &[]),
            specialist("x2", "X", &["W"]),
            specialist("w", "W", &[]),
            specialist("y", "Y", &["X"]),
        ]);
        let plan = plan_waves(&reg).unwrap();

        // x1, w -> wave 0; x2 -> wave 1; y -> wave 2 (waits for x2 too).
        assert_eq!(plan.wave_count(), 3);
        assert_eq!(plan.waves()[2].specialist_ids(), ["y".to_string()]);
    }

    #[test]
    fn test_full_catalog_plan_is_deep_and_complete() {
        let (reg, _) = SpecialistRegistry::from_catalog().unwrap();
        let plan = plan_waves(&reg).unwrap();

        assert_eq!(plan.total_specialists(), 109);
        // Longest chain: Intuitive Design -> User Engagement -> Network
        // Effects -> Product Stickiness -> Retention Potential -> Customer
        // Lifetime Value.
        assert_eq!(plan.wave_count(), 6);

        // No specialist appears twice.
        let mut seen = std::collections::HashSet::new();
        for wave in plan.waves() {
            for id in wave.specialist_ids() {
                assert!(seen.insert(id.clone()), "{id} planned twice");
            }
        }
    }

    #[test]
    fn test_dependent_never_shares_wave_with_dependency() {
        let (reg, _) = SpecialistRegistry::from_catalog().unwrap();
        let plan = plan_waves(&reg).unwrap();

        let mut wave_of = std::collections::HashMap::new();
        for (w, wave) in plan.waves().iter().enumerate() {
            for id in wave.specialist_ids() {
                wave_of.insert(id.clone(), w);
            }
        }

        for s in reg.all() {
            for dep in s.dependencies() {
                for provider in reg.by_dependency_name(dep) {
                    if provider.id() == s.id() {
                        continue;
                    }
                    assert!(
                        wave_of[provider.id()] < wave_of[s.id()],
                        "{} planned at or before its dependency {}",
                        s.id(),
                        provider.id()
                    );
                }
            }
        }
    }
}
