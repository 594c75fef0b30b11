use crossbeam_channel::Sender;
use shared::{Condition, ConditionId, ConditionList};
use tracing::debug;

use crate::config::PickerConfig;
use crate::events::PickerEvent;

/// Controller for one live, editable condition list.
///
/// All user intents arrive as method calls; mutations are reported through
/// [`PickerEvent::ListChanged`] carrying a snapshot of the whole list. None
/// of the operations can fail: stale or unknown ids are silent no-ops so a
/// lagging view can never crash the model.
///
/// Field edits are committed at blur boundaries: the view keeps its own
/// draft while a field has focus and calls [`commit_type`]/[`commit_value`]
/// once focus leaves, not on every keystroke.
///
/// [`commit_type`]: ConditionPicker::commit_type
/// [`commit_value`]: ConditionPicker::commit_value
pub struct ConditionPicker {
    config: PickerConfig,
    list: ConditionList,
    events: Sender<PickerEvent>,
}

impl ConditionPicker {
    /// An empty initial list is seeded with exactly one
    /// `{default_type, ""}` condition so an editable view is never empty;
    /// the seed announces itself like a user add.
    pub fn new(
        config: PickerConfig,
        initial: Vec<Condition>,
        events: Sender<PickerEvent>,
    ) -> Self {
        let mut picker = Self {
            config,
            list: ConditionList::from_conditions(initial),
            events,
        };
        if picker.list.is_empty() {
            picker.seed();
            picker.emit_list_changed();
        }
        picker
    }

    /// Append a new default condition at the end of the list.
    pub fn add_condition(&mut self) -> ConditionId {
        let id = self.list.push_default(self.config.default_type());
        debug!(?id, "condition added");
        self.emit(PickerEvent::AddConditionPressed);
        self.emit_list_changed();
        id
    }

    /// Remove a condition. If the removal empties the list, one default
    /// condition is re-seeded immediately; the empty state is never
    /// observable from the outside.
    pub fn remove_condition(&mut self, id: ConditionId) {
        if !self.list.remove(id) {
            return;
        }
        debug!(?id, remaining = self.list.len(), "condition removed");
        if self.list.is_empty() {
            self.seed();
        }
        self.emit_list_changed();
    }

    /// Blur-boundary commit of a type dropdown edit. The new type is not
    /// validated against the catalog.
    pub fn commit_type(&mut self, id: ConditionId, new_type: &str) {
        if self.list.set_type(id, new_type) {
            debug!(?id, new_type, "condition type committed");
            self.emit_list_changed();
        }
    }

    /// Blur-boundary commit of a value edit.
    pub fn commit_value(&mut self, id: ConditionId, new_value: &str) {
        if self.list.set_value(id, new_value) {
            debug!(?id, "condition value committed");
            self.emit_list_changed();
        }
    }

    /// Replace the live list wholesale (fresh ids), re-seeding one default
    /// condition if the replacement is empty. Used when a dialog Cancel
    /// pushes a restored save point back into an already-rendered picker.
    pub fn reload(&mut self, conditions: Vec<Condition>) {
        self.list = ConditionList::from_conditions(conditions);
        debug!(len = self.list.len(), "list reloaded");
        if self.list.is_empty() {
            self.seed();
        }
        self.emit_list_changed();
    }

    /// Deep copy of the live list.
    pub fn snapshot(&self) -> Vec<Condition> {
        self.list.snapshot()
    }

    pub fn conditions(&self) -> impl Iterator<Item = (ConditionId, &Condition)> {
        self.list.iter()
    }

    pub fn ids(&self) -> Vec<ConditionId> {
        self.list.ids()
    }

    pub fn get(&self, id: ConditionId) -> Option<&Condition> {
        self.list.get(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_last(&self, id: ConditionId) -> bool {
        self.list.is_last(id)
    }

    /// Delete buttons are only shown when there are at least two
    /// conditions.
    pub fn delete_affordance_visible(&self) -> bool {
        !self.list.is_only()
    }

    pub fn condition_types(&self) -> &[String] {
        self.config.condition_types()
    }

    pub fn default_type(&self) -> &str {
        self.config.default_type()
    }

    fn seed(&mut self) {
        let id = self.list.push_default(self.config.default_type());
        debug!(?id, "seeded default condition");
        self.emit(PickerEvent::AddConditionPressed);
    }

    fn emit(&self, event: PickerEvent) {
        // A picker without a listener is fine; drop the event.
        let _ = self.events.send(event);
    }

    fn emit_list_changed(&self) {
        self.emit(PickerEvent::ListChanged {
            condition_list: self.list.snapshot(),
        });
    }
}

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod tests;
