//! Display strings keyed by message id, with named substitutions where the
//! message needs them. A real host would route these through its
//! localization layer.

pub fn add_rule_button() -> &'static str {
    "Add enrollment rule"
}

pub fn add_rule_header() -> &'static str {
    "Add enrollment rule"
}

pub fn select_conditions() -> &'static str {
    "Select the conditions a user must meet to be enrolled."
}

pub fn add_another_condition() -> &'static str {
    "Add another condition"
}

pub fn condition_is() -> &'static str {
    "is"
}

pub fn and_separator() -> &'static str {
    "and"
}

pub fn value_placeholder() -> &'static str {
    "Enter a condition value"
}

pub fn remove_condition(condition_type: &str) -> String {
    format!("Remove condition: {condition_type}")
}

pub fn done_button() -> &'static str {
    "Done"
}

pub fn cancel_button() -> &'static str {
    "Cancel"
}
