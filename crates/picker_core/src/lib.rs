//! Headless condition-list editing controllers.
//!
//! [`ConditionPicker`] drives one live, mutable condition list against a
//! fixed catalog of condition types. [`PickerDialog`] layers a
//! save-point/rollback session on top of it: Done commits, Cancel or dismiss
//! reverts. Both report to the embedding UI through [`PickerEvent`]s sent
//! over a crossbeam channel; the view renders from the model, never the
//! other way around.

pub mod config;
pub mod dialog;
pub mod events;
pub mod picker;

pub use config::PickerConfig;
pub use dialog::{DialogState, PickerDialog};
pub use events::PickerEvent;
pub use picker::ConditionPicker;
