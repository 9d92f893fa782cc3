//! Module normalizer
//!
//! Collapses the shapes the persistence layer may hand over for a module
//! slot (nothing, one record, a list of records) into a single
//! [`NormalizedModule`]. Never fails: anything unrecognized is treated as
//! an absent module.

use serde_json::Value;

use crate::schemas::{ModuleKind, ModuleStatus, NormalizedModule, ProjectSnapshot};

/// Normalize one raw module slot.
///
/// - `None`, `null` or an empty list: absent
/// - an object: present, with its `status` field if that is a known string
/// - a non-empty list: the first element, by the object rule
/// - anything else: absent
pub fn normalize_module(raw: Option<&Value>) -> NormalizedModule {
    match raw {
        Some(Value::Object(record)) => NormalizedModule {
            exists: true,
            status: record.get("status").and_then(parse_status),
        },
        Some(Value::Array(records)) => match records.first() {
            Some(first) if first.is_object() => normalize_module(Some(first)),
            _ => NormalizedModule::ABSENT,
        },
        _ => NormalizedModule::ABSENT,
    }
}

fn parse_status(value: &Value) -> Option<ModuleStatus> {
    value.as_str().and_then(|s| s.parse().ok())
}

/// Normalize all four slots of a snapshot, in pipeline order.
pub fn normalize_project(project: &ProjectSnapshot) -> [NormalizedModule; 4] {
    ModuleKind::ALL.map(|kind| normalize_module(project.module(kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_shapes() {
        assert_eq!(normalize_module(None), NormalizedModule::ABSENT);
        assert_eq!(normalize_module(Some(&Value::Null)), NormalizedModule::ABSENT);
        assert_eq!(normalize_module(Some(&json!([]))), NormalizedModule::ABSENT);
    }

    #[test]
    fn test_single_record() {
        let module = normalize_module(Some(&json!({"status": "draft"})));
        assert_eq!(module, NormalizedModule::present(ModuleStatus::Draft));
    }

    #[test]
    fn test_first_list_element_wins() {
        let raw = json!([{"status": "completed"}, {"status": "draft"}]);
        let module = normalize_module(Some(&raw));
        assert_eq!(module, NormalizedModule::present(ModuleStatus::Completed));
    }

    #[test]
    fn test_wrong_types_are_absent() {
        assert_eq!(normalize_module(Some(&json!("draft"))), NormalizedModule::ABSENT);
        assert_eq!(normalize_module(Some(&json!(42))), NormalizedModule::ABSENT);
        assert_eq!(normalize_module(Some(&json!(true))), NormalizedModule::ABSENT);
        assert_eq!(normalize_module(Some(&json!(["draft"]))), NormalizedModule::ABSENT);
        assert_eq!(normalize_module(Some(&json!([null]))), NormalizedModule::ABSENT);
    }

    #[test]
    fn test_record_without_usable_status() {
        let expected = NormalizedModule {
            exists: true,
            status: None,
        };
        assert_eq!(normalize_module(Some(&json!({"id": 7}))), expected);
        assert_eq!(normalize_module(Some(&json!({"status": 3}))), expected);
        assert_eq!(normalize_module(Some(&json!({"status": "archived"}))), expected);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let raw = json!({"id": "m-1", "status": "awaiting_client", "title": "Spring shoot"});
        assert_eq!(
            normalize_module(Some(&raw)),
            NormalizedModule::present(ModuleStatus::AwaitingClient)
        );
    }

    #[test]
    fn test_normalize_project_order() {
        let project = ProjectSnapshot::default()
            .with_module(ModuleKind::Proposal, Some(json!({"status": "completed"})))
            .with_module(ModuleKind::Selection, Some(json!([{"status": "draft"}])));

        let modules = normalize_project(&project);
        assert_eq!(modules[0], NormalizedModule::present(ModuleStatus::Completed));
        assert_eq!(modules[1], NormalizedModule::ABSENT);
        assert_eq!(modules[2], NormalizedModule::present(ModuleStatus::Draft));
        assert_eq!(modules[3], NormalizedModule::ABSENT);
    }
}
