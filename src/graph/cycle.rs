//! Cycle detection over `requires` edges

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;

use super::scheduling::Dependencies;

/// Detect circular `requires` chains using DFS.
///
/// Stages are visited in definition order so the reported path is stable.
/// Edges to ids outside the graph are ignored.
pub fn detect_cycles(deps: &Dependencies<'_>) -> Result<(), GraphError> {
    let lookup: HashMap<&str, &[String]> = deps.iter().copied().collect();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut rec_stack: HashSet<&str> = HashSet::new();
    let mut path: Vec<&str> = Vec::new();

    for &(id, _) in deps {
        if !visited.contains(id) {
            if let Some(cycle) =
                dfs_detect_cycle(&lookup, id, &mut visited, &mut rec_stack, &mut path)
            {
                return Err(GraphError::Cycle(cycle));
            }
        }
    }

    Ok(())
}

fn dfs_detect_cycle<'a>(
    lookup: &HashMap<&'a str, &'a [String]>,
    id: &'a str,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(id);
    rec_stack.insert(id);
    path.push(id);

    if let Some(requires) = lookup.get(id) {
        for dep in requires.iter() {
            let Some((&dep, _)) = lookup.get_key_value(dep.as_str()) else {
                continue;
            };
            if !visited.contains(dep) {
                if let Some(cycle) = dfs_detect_cycle(lookup, dep, visited, rec_stack, path) {
                    return Some(cycle);
                }
            } else if rec_stack.contains(dep) {
                let start = path.iter().position(|p| *p == dep).unwrap_or(0);
                let mut cycle: Vec<String> = path[start..].iter().map(|p| p.to_string()).collect();
                cycle.push(dep.to_string());
                return Some(cycle);
            }
        }
    }

    path.pop();
    rec_stack.remove(id);
    None
}
