//! Terminal rendering of stage graphs and evaluation results

use colored::{ColoredString, Colorize};

use crate::evaluator::EvaluationResult;
use crate::graph::{Stage, StageGraph};
use crate::models::Status;

/// Status indicator with color for display
pub fn status_indicator(status: Status) -> ColoredString {
    match status {
        Status::Success => "✓".green().bold(),
        Status::Skipped => "⊘".white().dimmed(),
        Status::Next => "▶".cyan().bold(),
        Status::Waiting => "…".yellow().bold(),
        Status::Error => "✗".red().bold(),
        Status::Off => "○".white().dimmed(),
    }
}

/// Status name with the same color as its indicator
pub fn status_label(status: Status) -> ColoredString {
    let name = status.as_str();
    match status {
        Status::Success => name.green(),
        Status::Skipped => name.white().dimmed(),
        Status::Next => name.cyan().bold(),
        Status::Waiting => name.yellow(),
        Status::Error => name.red().bold(),
        Status::Off => name.white().dimmed(),
    }
}

fn stage_title<S>(stage: &Stage<S>) -> &str {
    stage.description().unwrap_or(stage.id())
}

/// Format dependencies of one kind with their status indicators
fn format_dependencies(label: &str, ids: &[String], result: Option<&EvaluationResult>) -> String {
    if ids.is_empty() {
        return String::new();
    }

    let dep_strs: Vec<String> = ids
        .iter()
        .map(|id| match result.map(|r| r.get(id)) {
            Some(Some(status)) => format!("{}{id}", status_indicator(status)),
            Some(None) => format!("?{id}"),
            None => id.clone(),
        })
        .collect();

    format!("      {label}: {}\n", dep_strs.join(", "))
}

/// One line per stage with its indicator, status and title
pub fn status_table<S>(graph: &StageGraph<S>, result: &EvaluationResult) -> String {
    let id_width = graph.order().map(str::len).max().unwrap_or(0);
    let mut output = String::new();

    for stage in graph.stages() {
        let status = result.get(stage.id()).unwrap_or_default();
        output.push_str(&format!(
            "{} {:<id_width$}  {:<7}  {}\n",
            status_indicator(status),
            stage.id(),
            status_label(status),
            stage_title(stage),
        ));
    }

    let next = result.next_stages();
    output.push('\n');
    if result.is_complete() {
        output.push_str(&format!("{}\n", "All stages done".green().bold()));
    } else if next.is_empty() {
        output.push_str("No stage is ready for action\n");
    } else {
        output.push_str(&format!("Next: {}\n", next.join(", ").cyan().bold()));
    }

    output
}

/// Stage order with `requires` and `suggests` edges
pub fn graph_listing<S>(graph: &StageGraph<S>, result: Option<&EvaluationResult>) -> String {
    if graph.is_empty() {
        return "(no stages defined)\n".to_string();
    }

    let mut output = String::new();

    for (pos, stage) in graph.stages().enumerate() {
        let indicator = result
            .and_then(|r| r.get(stage.id()))
            .map(|status| format!("{} ", status_indicator(status)))
            .unwrap_or_default();
        output.push_str(&format!(
            "{:>2}. {indicator}{} ({})\n",
            pos + 1,
            stage_title(stage).bold(),
            stage.id()
        ));
        output.push_str(&format_dependencies("requires", stage.required(), result));
        output.push_str(&format_dependencies("suggests", stage.suggested(), result));
    }

    output
}
