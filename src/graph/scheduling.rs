//! Ordering algorithms: topological sort and stage order validation

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use crate::error::GraphError;

use super::stage::Stage;

/// Stage ids paired with their `requires` lists, in definition order.
pub type Dependencies<'a> = [(&'a str, &'a [String])];

/// Get a topologically sorted list of stage ids.
///
/// Ties are broken by definition order, so the same definitions always yield
/// the same order. Requirements naming ids outside the graph are ignored.
pub fn topological_sort(deps: &Dependencies<'_>) -> Result<Vec<String>, GraphError> {
    let known: HashSet<&str> = deps.iter().map(|&(id, _)| id).collect();
    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();

    for &(id, requires) in deps {
        in_degree.entry(id).or_insert(0);
        for dep in requires.iter().filter(|d| known.contains(d.as_str())) {
            *in_degree.entry(id).or_insert(0) += 1;
            dependents.entry(dep.as_str()).or_default().push(id);
        }
    }

    // Start with stages that require nothing
    let mut queue: VecDeque<&str> = deps
        .iter()
        .map(|&(id, _)| id)
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let mut result = Vec::with_capacity(deps.len());

    while let Some(id) = queue.pop_front() {
        result.push(id.to_string());

        if let Some(children) = dependents.get(id) {
            for &child in children {
                if let Some(degree) = in_degree.get_mut(child) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(child);
                    }
                }
            }
        }
    }

    if result.len() != deps.len() {
        let remaining = deps
            .iter()
            .map(|&(id, _)| id.to_string())
            .filter(|id| !result.contains(id))
            .collect();
        return Err(GraphError::Cycle(remaining));
    }

    Ok(result)
}

/// Check that every stage comes after all of its requirements.
///
/// `stages` must already be arranged in stage order, with `index` mapping each
/// id to its position.
pub fn check_order<S>(stages: &[Stage<S>], index: &HashMap<String, usize>) -> Result<(), GraphError> {
    for (pos, stage) in stages.iter().enumerate() {
        for requirement in stage.required() {
            match index.get(requirement) {
                Some(&req_pos) if req_pos >= pos => {
                    return Err(GraphError::RequirementOutOfOrder {
                        stage: stage.id().to_string(),
                        requirement: requirement.clone(),
                    });
                }
                Some(_) => {}
                None => warn!(
                    stage = stage.id(),
                    requirement = requirement.as_str(),
                    "stage requires an unknown stage and can never be unlocked"
                ),
            }
        }

        for suggestion in stage.suggested() {
            match index.get(suggestion) {
                Some(&sug_pos) if sug_pos >= pos => debug!(
                    stage = stage.id(),
                    suggestion = suggestion.as_str(),
                    "suggested stage is ordered later and will never count as done"
                ),
                Some(_) => {}
                None => warn!(
                    stage = stage.id(),
                    suggestion = suggestion.as_str(),
                    "stage suggests an unknown stage"
                ),
            }
        }
    }

    Ok(())
}
