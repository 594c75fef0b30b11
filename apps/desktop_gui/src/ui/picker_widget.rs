//! Condition-row rendering shared by the inline picker and the dialog.
//!
//! The view renders straight from the picker's model each frame; the only
//! view-owned state is the per-field value draft, which is committed to the
//! model when the field loses focus, never per keystroke.

use std::collections::HashMap;

use eframe::egui;
use picker_core::ConditionPicker;
use shared::{Condition, ConditionId};

use super::strings;

/// Per-condition value drafts, keyed by condition id. Stale entries (ids no
/// longer in the list) are pruned on every pass.
#[derive(Default)]
pub struct ValueDrafts {
    values: HashMap<ConditionId, String>,
}

enum RowAction {
    CommitType(ConditionId, String),
    CommitValue(ConditionId, String),
    Remove(ConditionId),
}

pub fn show(ui: &mut egui::Ui, picker: &mut ConditionPicker, drafts: &mut ValueDrafts) {
    let rows: Vec<(ConditionId, Condition)> = picker
        .conditions()
        .map(|(id, condition)| (id, condition.clone()))
        .collect();
    let types = picker.condition_types().to_vec();
    let show_delete = picker.delete_affordance_visible();

    drafts
        .values
        .retain(|id, _| rows.iter().any(|(row_id, _)| row_id == id));

    let mut actions = Vec::new();
    for (id, condition) in &rows {
        ui.horizontal(|ui| {
            let mut selected = condition.kind.clone();
            egui::ComboBox::from_id_salt(("condition_type", id.0))
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for condition_type in &types {
                        ui.selectable_value(
                            &mut selected,
                            condition_type.clone(),
                            condition_type,
                        );
                    }
                });
            if selected != condition.kind {
                actions.push(RowAction::CommitType(*id, selected));
            }

            ui.label(strings::condition_is());

            let draft = drafts
                .values
                .entry(*id)
                .or_insert_with(|| condition.value.clone());
            let response = ui.add(
                egui::TextEdit::singleline(draft)
                    .id_salt(("condition_value", id.0))
                    .hint_text(strings::value_placeholder()),
            );
            if response.lost_focus() {
                actions.push(RowAction::CommitValue(*id, draft.clone()));
            }

            if show_delete {
                let label = strings::remove_condition(&condition.kind);
                if ui.small_button("✕").on_hover_text(label).clicked() {
                    actions.push(RowAction::Remove(*id));
                }
            }
        });

        // No trailing "and" after the last condition.
        if !picker.is_last(*id) {
            ui.label(strings::and_separator());
            ui.separator();
        }
    }

    if ui.button(strings::add_another_condition()).clicked() {
        picker.add_condition();
    }

    for action in actions {
        match action {
            RowAction::CommitType(id, condition_type) => {
                picker.commit_type(id, &condition_type);
            }
            RowAction::CommitValue(id, value) => {
                picker.commit_value(id, &value);
            }
            RowAction::Remove(id) => {
                drafts.values.remove(&id);
                picker.remove_condition(id);
            }
        }
    }
}
