use super::*;

use crate::condition::{conditions_from_json, conditions_to_json};

fn long_fixture() -> Vec<Condition> {
    vec![
        Condition::new("Apple", "granny smith"),
        Condition::new("Banana", "cavendish"),
        Condition::new("Banana", "cavendish"),
        Condition::new("Banana", "cavendish"),
        Condition::new("Colors", "Red"),
        Condition::new("Numbers", "99"),
        Condition::new("Colors", "Black"),
        Condition::new("Numbers", "8"),
    ]
}

#[test]
fn push_default_appends_empty_condition_at_end() {
    let mut list = ConditionList::from_conditions(long_fixture());
    list.push_default("Orange");

    let conditions = list.snapshot();
    assert_eq!(conditions.len(), 9);
    assert_eq!(conditions[8], Condition::new("Orange", ""));
}

#[test]
fn removing_first_middle_and_last_preserves_order() {
    let fixture = long_fixture();
    for index in [0, fixture.len() / 2, fixture.len() - 1] {
        let mut list = ConditionList::from_conditions(fixture.clone());
        let id = list.ids()[index];
        assert!(list.remove(id));

        let mut expected = fixture.clone();
        expected.remove(index);
        assert_eq!(list.snapshot(), expected);
    }
}

#[test]
fn removing_unknown_id_is_a_no_op() {
    let mut list = ConditionList::from_conditions(long_fixture());
    let id = list.ids()[0];
    assert!(list.remove(id));
    assert!(!list.remove(id));
    assert_eq!(list.len(), 7);
}

#[test]
fn remove_can_empty_the_list() {
    let mut list = ConditionList::new();
    let id = list.push_default("Apple");
    assert!(list.remove(id));
    assert!(list.is_empty());
}

#[test]
fn set_type_and_value_edit_in_place() {
    let mut list = ConditionList::from_conditions(long_fixture());
    let id = list.ids()[1];
    assert!(list.set_type(id, "Potato"));
    assert!(list.set_value(id, "russet"));

    let edited = list.get(id).expect("edited condition");
    assert_eq!(edited, &Condition::new("Potato", "russet"));
    assert_eq!(list.snapshot()[0], Condition::new("Apple", "granny smith"));
}

#[test]
fn set_type_accepts_strings_outside_any_catalog() {
    let mut list = ConditionList::from_conditions(long_fixture());
    let id = list.ids()[0];
    assert!(list.set_type(id, "NotARealType"));
    assert_eq!(list.get(id).expect("condition").kind, "NotARealType");
}

#[test]
fn edits_against_removed_id_are_no_ops() {
    let mut list = ConditionList::from_conditions(long_fixture());
    let id = list.ids()[0];
    list.remove(id);
    assert!(!list.set_type(id, "Potato"));
    assert!(!list.set_value(id, "russet"));
    assert_eq!(list.len(), 7);
}

#[test]
fn snapshot_is_isolated_from_later_edits() {
    let mut list = ConditionList::from_conditions(long_fixture());
    let snapshot = list.snapshot();

    let id = list.ids()[0];
    list.set_value(id, "mutated");
    list.remove(list.ids()[1]);

    assert_eq!(snapshot, long_fixture());
}

#[test]
fn mutating_a_snapshot_never_touches_the_list() {
    let list = ConditionList::from_conditions(long_fixture());
    let mut snapshot = list.snapshot();
    snapshot[0].value = "mutated".to_string();
    snapshot.pop();

    assert_eq!(list.snapshot(), long_fixture());
}

#[test]
fn is_only_reflects_length_under_two() {
    let mut list = ConditionList::new();
    assert!(list.is_only());
    list.push_default("Apple");
    assert!(list.is_only());
    list.push_default("Apple");
    assert!(!list.is_only());
}

#[test]
fn is_last_marks_only_the_final_entry() {
    let list = ConditionList::from_conditions(long_fixture());
    let ids = list.ids();
    for (index, id) in ids.iter().enumerate() {
        assert_eq!(list.is_last(*id), index == ids.len() - 1);
    }
}

#[test]
fn ids_survive_removal_of_earlier_entries() {
    let mut list = ConditionList::from_conditions(long_fixture());
    let ids = list.ids();
    list.remove(ids[0]);
    assert!(list.is_last(ids[7]));
    assert!(list.set_value(ids[4], "Crimson"));
}

#[test]
fn parses_condition_list_json() {
    let text = r#"[{"type":"Apple", "value":"granny smith"},{"type":"Banana", "value":"cavendish"}]"#;
    let conditions = conditions_from_json(text).expect("parse");
    assert_eq!(
        conditions,
        vec![
            Condition::new("Apple", "granny smith"),
            Condition::new("Banana", "cavendish"),
        ]
    );
}

#[test]
fn rejects_malformed_condition_list_json() {
    let err = conditions_from_json("not json").expect_err("must fail");
    assert!(matches!(err, ConfigError::InvalidConditionList(_)));
}

#[test]
fn serializes_conditions_with_type_field_name() {
    let text = conditions_to_json(&[Condition::new("Apple", "granny smith")]).expect("serialize");
    assert_eq!(text, r#"[{"type":"Apple","value":"granny smith"}]"#);
}
