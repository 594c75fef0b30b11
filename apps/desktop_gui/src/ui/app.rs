//! Demo application: an "add rule" button opening the picker dialog, plus
//! an inline picker, both reporting through the shared event channel.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use picker_core::{ConditionPicker, PickerConfig, PickerDialog, PickerEvent};
use shared::Condition;

use super::picker_widget::{self, ValueDrafts};
use super::strings;

enum DialogAction {
    None,
    Done,
    Cancel,
}

pub struct RulePickerApp {
    dialog: PickerDialog,
    inline_picker: ConditionPicker,
    event_rx: Receiver<PickerEvent>,
    committed: Vec<Condition>,
    last_closed: Option<Vec<Condition>>,
    dialog_drafts: ValueDrafts,
    inline_drafts: ValueDrafts,
    status: String,
}

impl RulePickerApp {
    pub fn new(
        config: PickerConfig,
        initial: Vec<Condition>,
        event_tx: Sender<PickerEvent>,
        event_rx: Receiver<PickerEvent>,
    ) -> Self {
        let dialog = PickerDialog::new(config.clone(), initial, event_tx.clone());
        let inline_picker = ConditionPicker::new(config, Vec::new(), event_tx);
        let committed = dialog.saved_conditions().to_vec();
        Self {
            dialog,
            inline_picker,
            event_rx,
            committed,
            last_closed: None,
            dialog_drafts: ValueDrafts::default(),
            inline_drafts: ValueDrafts::default(),
            status: "Ready".to_string(),
        }
    }

    fn process_picker_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                // The egui window re-measures itself every frame, so the
                // relayout request needs no further handling here.
                PickerEvent::AddConditionPressed => {
                    self.status = "Condition added".to_string();
                }
                PickerEvent::ListChanged { condition_list } => {
                    self.status = format!("Editing {} condition(s)", condition_list.len());
                }
                PickerEvent::DialogOpened => {
                    self.status = "Editing rule".to_string();
                }
                PickerEvent::ConditionsChanged { condition_list } => {
                    self.committed = condition_list;
                    self.status = "Rule saved".to_string();
                }
                PickerEvent::DialogClosed { condition_list } => {
                    self.last_closed = Some(condition_list);
                }
            }
        }
    }

    fn show_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Enrollment rule");
            ui.label(&self.status);
            ui.separator();

            if ui.button(strings::add_rule_button()).clicked() {
                self.dialog.open();
            }

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Committed rule").strong());
            ui.label(rule_summary_text(&self.committed));
            if let Some(last_closed) = &self.last_closed {
                ui.small(format!(
                    "Last dialog close returned {} condition(s)",
                    last_closed.len()
                ));
            }

            ui.add_space(8.0);
            ui.collapsing("Inline picker", |ui| {
                picker_widget::show(ui, &mut self.inline_picker, &mut self.inline_drafts);
            });
        });
    }

    fn show_dialog_window(&mut self, ctx: &egui::Context) {
        if !self.dialog.is_open() {
            return;
        }

        let mut window_open = true;
        let mut action = DialogAction::None;
        egui::Window::new(strings::add_rule_header())
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(strings::select_conditions());
                ui.separator();

                picker_widget::show(ui, self.dialog.picker_mut(), &mut self.dialog_drafts);

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(strings::done_button()).clicked() {
                        action = DialogAction::Done;
                    }
                    if ui.button(strings::cancel_button()).clicked() {
                        action = DialogAction::Cancel;
                    }
                });
            });

        match action {
            DialogAction::Done => self.dialog.done_pressed(),
            DialogAction::Cancel => self.dialog.cancel_pressed(),
            DialogAction::None => {
                // The window's close affordance reverts, same as Cancel.
                if !window_open {
                    self.dialog.dismissed();
                }
            }
        }
    }
}

impl eframe::App for RulePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_picker_events();
        self.show_main_panel(ctx);
        self.show_dialog_window(ctx);
    }
}

fn rule_summary_text(conditions: &[Condition]) -> String {
    let mut summary = String::new();
    for (index, condition) in conditions.iter().enumerate() {
        if index > 0 {
            summary.push_str(" and ");
        }
        summary.push_str(&condition.kind);
        summary.push_str(" is \"");
        summary.push_str(&condition.value);
        summary.push('"');
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::rule_summary_text;
    use shared::Condition;

    #[test]
    fn summarizes_an_anded_rule_in_order() {
        let summary = rule_summary_text(&[
            Condition::new("Apple", "granny smith"),
            Condition::new("Numbers", "99"),
        ]);
        assert_eq!(summary, r#"Apple is "granny smith" and Numbers is "99""#);
    }

    #[test]
    fn single_condition_has_no_and_separator() {
        let summary = rule_summary_text(&[Condition::new("Colors", "Red")]);
        assert_eq!(summary, r#"Colors is "Red""#);
    }
}
