//! Outbound events from the picker controllers to the embedding UI.

use shared::Condition;

/// Every payload is an independent deep copy of the live list; receivers
/// can hold or mutate it without observing later edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A condition was appended (user add or auto-seed). No payload; the
    /// host dialog uses this to recompute its layout.
    AddConditionPressed,
    /// The live list changed in any way (add, remove, field edit, reload).
    ListChanged { condition_list: Vec<Condition> },
    /// A dialog edit session began.
    DialogOpened,
    /// The user pressed Done; carries the newly committed list. Never fires
    /// on Cancel or dismiss.
    ConditionsChanged { condition_list: Vec<Condition> },
    /// The dialog closed by any path, carrying the final
    /// (post-commit-or-revert) list.
    DialogClosed { condition_list: Vec<Condition> },
}
