use super::types::{is_truthy, FlowDocument, State};
use std::collections::HashSet;

/// One reported structural defect, already rendered for display.
pub type Issue = String;

/// Runs every check pass over an immutable flow document and returns the
/// collected issues; an empty list means the flow is structurally valid.
///
/// Passes are independent and read-only, so their results never interact;
/// only the concatenation order below is significant, and it is fixed so
/// that reports are reproducible. The validator itself never fails: missing
/// or oddly shaped fields are treated as empty, not as errors.
pub fn validate_flow(document: &FlowDocument) -> Vec<Issue> {
    let known_states = state_names(document);

    let mut issues = Vec::new();
    check_initial_state(document, &known_states, &mut issues);
    check_transition_targets(document, &known_states, &mut issues);
    check_split_inputs(document, &mut issues);
    check_regex_conditions(document, &mut issues);

    tracing::debug!(
        states = document.states().len(),
        issues = issues.len(),
        "flow validation finished"
    );
    issues
}

/// Set of all state names in the document. Duplicate names collapse here,
/// which silently permits duplicates; name lookups behave as if the last
/// occurrence wins.
fn state_names(document: &FlowDocument) -> HashSet<&str> {
    document.states().iter().map(State::name).collect()
}

/// Pass A: the declared initial state must exist. An absent or null
/// `initial_state` reads as the empty name, which only a nameless state can
/// satisfy. Reachability of other states is out of scope.
fn check_initial_state(
    document: &FlowDocument,
    known_states: &HashSet<&str>,
    issues: &mut Vec<Issue>,
) {
    let initial_state = document.initial_state.as_deref().unwrap_or_default();
    if !known_states.contains(initial_state) {
        issues.push(format!(
            "initial_state '{initial_state}' not found in states"
        ));
    }
}

/// Pass B: every transition target must name a known state. Transitions
/// without a `next` are terminal and skipped.
fn check_transition_targets(
    document: &FlowDocument,
    known_states: &HashSet<&str>,
    issues: &mut Vec<Issue>,
) {
    for state in document.states() {
        for transition in state.transitions() {
            let Some(next) = transition.next.as_deref().filter(|next| !next.is_empty()) else {
                continue;
            };
            if !known_states.contains(next) {
                issues.push(format!(
                    "transition from '{}' points to missing state '{next}'",
                    state.name()
                ));
            }
        }
    }
}

/// Pass C: split-based-on states must carry a non-empty `properties.input`.
/// States of any other type are never checked, whatever their properties.
fn check_split_inputs(document: &FlowDocument, issues: &mut Vec<Issue>) {
    for state in document.states() {
        if !state.is_split() {
            continue;
        }
        let has_input = state.property("input").map(is_truthy).unwrap_or(false);
        if !has_input {
            issues.push(format!(
                "split state '{}' missing properties.input",
                state.name()
            ));
        }
    }
}

/// Pass D: `matches_regex` conditions under split-based-on states must carry
/// a compilable pattern. Conditions on states of other types are not checked,
/// matching the deployed checker's scope.
fn check_regex_conditions(document: &FlowDocument, issues: &mut Vec<Issue>) {
    for state in document.states() {
        if !state.is_split() {
            continue;
        }
        for transition in state.transitions() {
            for condition in transition.conditions() {
                if !condition.is_matches_regex() {
                    continue;
                }
                // A missing value compiles as the empty pattern.
                let pattern = condition.value.as_deref().unwrap_or_default();
                if let Err(err) = regex::Regex::new(pattern) {
                    issues.push(format!(
                        "regex invalid in state '{}' condition '{}': {}",
                        state.name(),
                        condition.friendly_name(),
                        flatten_regex_error(&err)
                    ));
                }
            }
        }
    }
}

// regex errors render over several lines; the report format is one line per
// issue, so collapse the whitespace.
fn flatten_regex_error(err: &regex::Error) -> String {
    err.to_string().split_whitespace().collect::<Vec<_>>().join(" ")
}
