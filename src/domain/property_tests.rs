//! Property-based tests for domain logic
//!
//! These tests use proptest to verify invariants across many random inputs.

#[cfg(test)]
mod tests {
    use crate::domain::accessibility::{evaluate_step, is_step_accessible, AccessDecision};
    use crate::domain::aggregator::{get_project_steps_status, get_step_status, step_info};
    use crate::domain::normalizer::{normalize_module, normalize_project};
    use crate::domain::transitions::{
        can_transition_for, can_transition_to, get_available_transitions, get_next_status,
        get_next_status_for,
    };
    use crate::schemas::{Action, ModuleKind, ModuleStatus, NormalizedModule, ProjectSnapshot};
    use proptest::prelude::*;
    use serde_json::{json, Value};

    // ===== STRATEGY HELPERS =====

    fn any_status() -> impl Strategy<Value = ModuleStatus> {
        prop::sample::select(ModuleStatus::ALL.to_vec())
    }

    fn any_action() -> impl Strategy<Value = Action> {
        prop::sample::select(Action::ALL.to_vec())
    }

    fn any_kind() -> impl Strategy<Value = ModuleKind> {
        prop::sample::select(ModuleKind::ALL.to_vec())
    }

    fn any_module() -> impl Strategy<Value = NormalizedModule> {
        prop_oneof![
            Just(NormalizedModule::ABSENT),
            any_status().prop_map(NormalizedModule::present),
            Just(NormalizedModule {
                exists: true,
                status: None,
            }),
        ]
    }

    fn any_modules() -> impl Strategy<Value = [NormalizedModule; 4]> {
        (any_module(), any_module(), any_module(), any_module()).prop_map(|(a, b, c, d)| [a, b, c, d])
    }

    fn any_record() -> impl Strategy<Value = Value> {
        prop_oneof![
            any_status().prop_map(|s| json!({ "status": s.as_str() })),
            "[a-z_]{0,12}".prop_map(|s| json!({ "status": s })),
            Just(json!({ "id": 1 })),
        ]
    }

    /// Any shape the persistence layer might send for one slot
    fn any_raw_module() -> impl Strategy<Value = Option<Value>> {
        prop_oneof![
            Just(None),
            Just(Some(Value::Null)),
            Just(Some(json!(17))),
            any_record().prop_map(Some),
            prop::collection::vec(any_record(), 0..3).prop_map(|records| Some(Value::Array(records))),
        ]
    }

    fn any_snapshot() -> impl Strategy<Value = ProjectSnapshot> {
        (any_raw_module(), any_raw_module(), any_raw_module(), any_raw_module()).prop_map(
            |(proposal, moodboard, selection, gallery)| ProjectSnapshot {
                proposal,
                moodboard,
                selection,
                gallery,
                ..Default::default()
            },
        )
    }

    // ===== TRANSITION TABLE =====

    proptest! {
        /// Property: every defined next status is an adjacency edge
        #[test]
        fn test_next_status_is_an_edge(status in any_status(), action in any_action()) {
            let next = get_next_status(status, action);
            prop_assert!(next == status || can_transition_to(status, next));
        }

        /// Property: the kind-aware table stays inside the adjacency table
        #[test]
        fn test_kind_next_status_is_an_edge(
            kind in any_kind(),
            status in any_status(),
            action in any_action()
        ) {
            let next = get_next_status_for(kind, status, action);
            prop_assert!(next == status || can_transition_to(status, next));
            prop_assert!(next == status || can_transition_for(kind, status, next));
        }

        /// Property: kind-aware edges are a subset of the adjacency table
        #[test]
        fn test_kind_edges_within_table(kind in any_kind(), from in any_status(), to in any_status()) {
            prop_assert!(!can_transition_for(kind, from, to) || can_transition_to(from, to));
        }

        /// Property: a paying kind is never offered completed while awaiting the client
        #[test]
        fn test_offered_options_never_skip_payment(kind in any_kind()) {
            let skips = get_available_transitions(ModuleStatus::AwaitingClient, kind)
                .iter()
                .any(|option| option.value == ModuleStatus::Completed);
            prop_assert_eq!(skips, !kind.collects_payment());
        }

        /// Property: nothing leaves completed
        #[test]
        fn test_completed_has_no_exit(to in any_status(), action in any_action()) {
            prop_assert!(!can_transition_to(ModuleStatus::Completed, to));
            prop_assert_eq!(get_next_status(ModuleStatus::Completed, action), ModuleStatus::Completed);
        }
    }

    // ===== EVALUATOR =====

    proptest! {
        /// Property: a completed gallery exposes exactly the completed steps
        #[test]
        fn test_terminal_freeze(mut modules in any_modules(), step in any_kind()) {
            modules[ModuleKind::Gallery.index()] = NormalizedModule::present(ModuleStatus::Completed);
            prop_assert_eq!(
                is_step_accessible(step, &modules),
                modules[step.index()].is_completed()
            );
        }

        /// Property: outside the terminal freeze an existing module is always accessible
        #[test]
        fn test_existing_is_accessible(modules in any_modules(), step in any_kind()) {
            prop_assume!(!modules[ModuleKind::Gallery.index()].is_completed());
            prop_assume!(modules[step.index()].exists);
            prop_assert_eq!(evaluate_step(step, &modules), AccessDecision::Existing);
        }

        /// Property: a reported blocker is always an open module on the right side
        #[test]
        fn test_blockers_are_open_modules(modules in any_modules(), step in any_kind()) {
            match evaluate_step(step, &modules) {
                AccessDecision::BlockedByEarlier { blocker } => {
                    prop_assert!(blocker < step);
                    prop_assert!(modules[blocker.index()].is_open());
                }
                AccessDecision::BlockedByLater { blocker } => {
                    prop_assert!(blocker > step);
                    prop_assert!(modules[blocker.index()].is_open());
                }
                _ => {}
            }
        }

        /// Property: descriptors are internally consistent
        #[test]
        fn test_step_info_consistency(modules in any_modules(), step in any_kind()) {
            let info = step_info(step, &modules);
            prop_assert_eq!(info.can_view, info.is_accessible());
            prop_assert!(!info.can_edit || (info.module_exists && info.can_view));
            prop_assert_eq!(info.module_exists, modules[step.index()].exists);
        }
    }

    // ===== NORMALIZER AND AGGREGATOR =====

    proptest! {
        /// Property: with no module present, steps 1-3 are open and not editable
        #[test]
        fn test_bootstrap(
            proposal in prop_oneof![Just(None), Just(Some(Value::Null)), Just(Some(json!([])))],
            gallery in prop_oneof![Just(None), Just(Some(json!("draft")))]
        ) {
            let project = ProjectSnapshot { proposal, gallery, ..Default::default() };
            for info in get_project_steps_status(&project).values() {
                prop_assert!(info.is_accessible());
                prop_assert!(!info.can_edit);
                prop_assert!(!info.module_exists);
            }
        }

        /// Property: only the first record of a list matters
        #[test]
        fn test_first_record_wins(
            first in any_status(),
            rest in prop::collection::vec(any_status(), 0..4)
        ) {
            let records: Vec<Value> = std::iter::once(first)
                .chain(rest)
                .map(|s| json!({ "status": s.as_str() }))
                .collect();
            prop_assert_eq!(
                normalize_module(Some(&Value::Array(records))),
                NormalizedModule::present(first)
            );
        }

        /// Property: recomputing from the same snapshot gives the same answer
        #[test]
        fn test_get_step_status_is_deterministic(project in any_snapshot(), step in any_kind()) {
            prop_assert_eq!(get_step_status(step, &project), get_step_status(step, &project));
        }

        /// Property: aggregated descriptors match the evaluator on the normalized modules
        #[test]
        fn test_aggregator_matches_evaluator(project in any_snapshot(), step in any_kind()) {
            let modules = normalize_project(&project);
            prop_assert_eq!(
                get_step_status(step, &project).is_accessible(),
                is_step_accessible(step, &modules)
            );
        }
    }
}
