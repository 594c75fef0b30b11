use crossbeam_channel::Sender;
use shared::Condition;
use tracing::debug;

use crate::config::PickerConfig;
use crate::events::PickerEvent;
use crate::picker::ConditionPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Dialog closed; the live list reflects the last committed save point.
    Idle,
    /// Dialog open; the live list is mutable through the inner picker.
    Editing,
}

/// Save-point/rollback session over a [`ConditionPicker`].
///
/// The save point is a deep copy owned exclusively by the dialog: it is
/// created when the dialog is constructed, overwritten only by Done, and
/// read back only by Cancel/dismiss. Live list and save point never share
/// storage, so neither can observe the other's in-place mutations.
///
/// [`PickerEvent::ConditionsChanged`] fires if and only if a session ends
/// via [`done_pressed`]; Cancel and dismiss emit [`PickerEvent::DialogClosed`]
/// alone, which makes repeated cancels idempotent and keeps uncommitted
/// edits out of later sessions.
///
/// One parameterized implementation backs every embedding; the historical
/// condition-picker/rule-picker split was copy-paste duplication and is not
/// carried forward.
///
/// [`done_pressed`]: PickerDialog::done_pressed
pub struct PickerDialog {
    picker: ConditionPicker,
    saved: Vec<Condition>,
    state: DialogState,
    events: Sender<PickerEvent>,
}

impl PickerDialog {
    pub fn new(
        config: PickerConfig,
        initial: Vec<Condition>,
        events: Sender<PickerEvent>,
    ) -> Self {
        let picker = ConditionPicker::new(config, initial, events.clone());
        // First presentation: the save point starts as a copy of whatever
        // the picker holds (including an auto-seeded default condition).
        let saved = picker.snapshot();
        Self {
            picker,
            saved,
            state: DialogState::Idle,
            events,
        }
    }

    /// Begin an edit session. The live list already holds the save point's
    /// copy (or the seeded default); nothing is mutated.
    pub fn open(&mut self) {
        if self.state == DialogState::Editing {
            debug!("open ignored; dialog already editing");
            return;
        }
        self.state = DialogState::Editing;
        debug!("dialog opened");
        self.emit(PickerEvent::DialogOpened);
    }

    /// Commit the session: the save point becomes a copy of the live list,
    /// then `ConditionsChanged` and `DialogClosed` fire with that list.
    pub fn done_pressed(&mut self) {
        if self.state != DialogState::Editing {
            debug!("done ignored; dialog not editing");
            return;
        }
        self.saved = self.picker.snapshot();
        self.state = DialogState::Idle;
        debug!(committed = self.saved.len(), "dialog done; conditions committed");
        self.emit(PickerEvent::ConditionsChanged {
            condition_list: self.saved.clone(),
        });
        self.emit(PickerEvent::DialogClosed {
            condition_list: self.picker.snapshot(),
        });
    }

    /// Revert the session: the live list is restored from the save point.
    /// No `ConditionsChanged` fires.
    pub fn cancel_pressed(&mut self) {
        if self.state != DialogState::Editing {
            debug!("cancel ignored; dialog not editing");
            return;
        }
        self.picker.reload(self.saved.clone());
        self.state = DialogState::Idle;
        debug!("dialog cancelled; conditions reverted");
        self.emit(PickerEvent::DialogClosed {
            condition_list: self.picker.snapshot(),
        });
    }

    /// Closing by any affordance other than Done (close button, outside
    /// click) reverts exactly like Cancel.
    pub fn dismissed(&mut self) {
        self.cancel_pressed();
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Editing
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn picker(&self) -> &ConditionPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut ConditionPicker {
        &mut self.picker
    }

    /// The last committed list.
    pub fn saved_conditions(&self) -> &[Condition] {
        &self.saved
    }

    fn emit(&self, event: PickerEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/dialog_tests.rs"]
mod tests;
