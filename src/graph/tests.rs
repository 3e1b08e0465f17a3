//! Tests for the stage graph

use super::*;

fn make_stage(id: &str, requires: Vec<&str>, suggests: Vec<&str>) -> Stage<()> {
    Stage::new(id, |_: &()| false)
        .requires(requires)
        .suggests(suggests)
}

#[test]
fn test_build_with_explicit_order() {
    let stages = vec![
        make_stage("b", vec!["a"], vec![]),
        make_stage("a", vec![], vec![]),
        make_stage("c", vec!["b"], vec!["a"]),
    ];

    let graph = StageGraph::new(stages, ["a", "b", "c"]).unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.order().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(graph.position("c"), Some(2));
    assert_eq!(graph.stage("c").unwrap().suggested(), ["a".to_string()]);
}

#[test]
fn test_empty_graph_is_valid() {
    let graph = StageGraph::<()>::new(Vec::new(), Vec::<String>::new()).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_order_with_unknown_stage() {
    let stages = vec![make_stage("a", vec![], vec![])];

    let err = StageGraph::new(stages, ["a", "ghost"]).unwrap_err();
    assert_eq!(err, GraphError::UnknownStageInOrder("ghost".to_string()));
}

#[test]
fn test_order_missing_a_stage() {
    let stages = vec![
        make_stage("a", vec![], vec![]),
        make_stage("b", vec![], vec![]),
        make_stage("c", vec![], vec![]),
    ];

    let err = StageGraph::new(stages, ["a"]).unwrap_err();
    assert_eq!(err, GraphError::MissingFromOrder("b".to_string()));
}

#[test]
fn test_order_lists_stage_twice() {
    let stages = vec![make_stage("a", vec![], vec![])];

    let err = StageGraph::new(stages, ["a", "a"]).unwrap_err();
    assert_eq!(err, GraphError::DuplicateInOrder("a".to_string()));
}

#[test]
fn test_duplicate_definitions() {
    let stages = vec![
        make_stage("a", vec![], vec![]),
        make_stage("a", vec![], vec![]),
    ];

    let err = StageGraph::new(stages, ["a"]).unwrap_err();
    assert_eq!(err, GraphError::DuplicateStage("a".to_string()));
}

#[test]
fn test_invalid_stage_id() {
    let stages = vec![make_stage("bad id", vec![], vec![])];

    let err = StageGraph::new(stages, ["bad id"]).unwrap_err();
    assert!(matches!(err, GraphError::InvalidStageId { ref id, .. } if id == "bad id"));
}

#[test]
fn test_stage_ordered_before_requirement() {
    let stages = vec![
        make_stage("a", vec![], vec![]),
        make_stage("b", vec!["a"], vec![]),
    ];

    let err = StageGraph::new(stages, ["b", "a"]).unwrap_err();
    assert_eq!(
        err,
        GraphError::RequirementOutOfOrder {
            stage: "b".to_string(),
            requirement: "a".to_string(),
        }
    );
}

#[test]
fn test_self_requirement_rejected() {
    let stages = vec![make_stage("a", vec!["a"], vec![])];

    let err = StageGraph::new(stages, ["a"]).unwrap_err();
    assert!(matches!(err, GraphError::RequirementOutOfOrder { .. }));
}

#[test]
fn test_suggestion_ordered_later_is_allowed() {
    let stages = vec![
        make_stage("a", vec![], vec!["b"]),
        make_stage("b", vec![], vec![]),
    ];

    assert!(StageGraph::new(stages, ["a", "b"]).is_ok());
}

#[test]
fn test_unknown_dependencies_are_tolerated() {
    let stages = vec![make_stage("a", vec!["ghost"], vec!["phantom"])];

    let graph = StageGraph::new(stages, ["a"]).unwrap();
    assert!(!graph.contains("ghost"));
}

#[test]
fn test_from_stages_derives_topological_order() {
    let stages = vec![
        make_stage("c", vec!["a", "b"], vec![]),
        make_stage("a", vec![], vec![]),
        make_stage("b", vec!["a"], vec![]),
    ];

    let graph = StageGraph::from_stages(stages).unwrap();
    let order: Vec<&str> = graph.order().collect();

    let pos_a = order.iter().position(|x| *x == "a").unwrap();
    let pos_b = order.iter().position(|x| *x == "b").unwrap();
    let pos_c = order.iter().position(|x| *x == "c").unwrap();

    assert!(pos_a < pos_b);
    assert!(pos_a < pos_c);
    assert!(pos_b < pos_c);
}

#[test]
fn test_from_stages_detects_cycle() {
    let stages = vec![
        make_stage("a", vec!["c"], vec![]),
        make_stage("b", vec!["a"], vec![]),
        make_stage("c", vec!["b"], vec![]),
    ];

    let err = StageGraph::from_stages(stages).unwrap_err();
    assert!(matches!(err, GraphError::Cycle(_)));
    assert!(err.to_string().contains("circular"));
}

#[test]
fn test_suggests_do_not_create_cycles() {
    let stages = vec![
        make_stage("a", vec![], vec!["b"]),
        make_stage("b", vec!["a"], vec![]),
    ];

    let graph = StageGraph::from_stages(stages).unwrap();
    assert_eq!(graph.order().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_dependents() {
    // Diamond pattern: a -> b, a -> c, b -> d, c -> d
    let stages = vec![
        make_stage("a", vec![], vec![]),
        make_stage("b", vec!["a"], vec![]),
        make_stage("c", vec!["a"], vec![]),
        make_stage("d", vec!["b", "c"], vec![]),
    ];

    let graph = StageGraph::from_stages(stages).unwrap();

    assert_eq!(graph.dependents("a"), vec!["b", "c"]);
    assert_eq!(graph.dependents("b"), vec!["d"]);
    assert!(graph.dependents("d").is_empty());
}

#[test]
fn test_from_stages_places_suggestions_first() {
    let stages = vec![
        make_stage("brief", vec![], vec!["calibrate"]),
        make_stage("calibrate", vec![], vec![]),
    ];

    let graph = StageGraph::from_stages(stages).unwrap();
    assert_eq!(
        graph.order().collect::<Vec<_>>(),
        vec!["calibrate", "brief"]
    );
}
