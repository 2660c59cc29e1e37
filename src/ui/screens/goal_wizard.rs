//! Goal wizard dialog.
//!
//! Renders the current wizard stage and turns clicks and edits into
//! [`WizardEvent`]s. All goal state lives in the [`GoalWizard`]; this screen
//! only keeps the raw target text so partially typed numbers survive a frame.

use std::collections::HashMap;

use egui::{Color32, RichText, Ui, Vec2};

use crate::goals::{
    ChallengeType, GoalWizard, ParamField, WizardEvent, WizardOutcome, WizardStage,
};

const ERROR_COLOR: Color32 = Color32::from_rgb(234, 67, 53);
const SELECTED_COLOR: Color32 = Color32::from_rgb(66, 133, 244);

/// Goal wizard dialog state.
#[derive(Debug, Default)]
pub struct GoalWizardScreen {
    /// Raw target text per selected challenge.
    target_text: HashMap<ChallengeType, String>,
    /// Messages from the last blocked Next or Confirm.
    errors: Vec<String>,
    /// Message from the last rejected target input.
    input_error: Option<String>,
}

impl GoalWizardScreen {
    /// Create a new wizard screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the wizard window. Returns at most one event per frame.
    pub fn show(&mut self, ctx: &egui::Context, wizard: &GoalWizard) -> Option<WizardEvent> {
        if !wizard.is_open() {
            return None;
        }

        self.sync_targets(wizard);

        let stage = wizard.stage();
        let mut event = None;

        egui::Window::new("New Goal")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_size(Vec2::new(480.0, 200.0));

                ui.horizontal(|ui| {
                    ui.label(RichText::new(stage.title()).strong().size(28.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        if ui.button("×").clicked() {
                            event = Some(WizardEvent::Close);
                        }
                    });
                });
                ui.label(RichText::new(stage.description()).weak());
                ui.label(
                    RichText::new(format!(
                        "Step {} of {}",
                        stage.index() + 1,
                        WizardStage::all().len()
                    ))
                    .small()
                    .weak(),
                );
                ui.add_space(10.0);

                let stage_event = match stage {
                    WizardStage::CollectingParams => self.show_params(ui, wizard),
                    WizardStage::SelectingChallenges => self.show_challenges(ui, wizard),
                    WizardStage::Confirming => self.show_review(ui, wizard),
                };
                if event.is_none() {
                    event = stage_event;
                }

                for message in &self.errors {
                    ui.label(RichText::new(message).color(ERROR_COLOR));
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if !stage.is_first() && ui.button("Back").clicked() {
                        event = Some(WizardEvent::Back);
                    }
                    if stage.is_last() {
                        if ui.button("Confirm").clicked() {
                            event = Some(WizardEvent::Confirm);
                        }
                    } else if ui.button("Next").clicked() {
                        event = Some(WizardEvent::Next);
                    }
                });
            });

        // Close on Escape
        if event.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            event = Some(WizardEvent::Close);
        }

        event
    }

    /// Update messages after the wizard handled an event.
    pub fn handle_outcome(&mut self, outcome: &WizardOutcome) {
        match outcome {
            WizardOutcome::Blocked(errors) => {
                self.errors = errors.iter().map(|e| e.to_string()).collect();
            }
            WizardOutcome::InputRejected(e) => {
                self.input_error = Some(e.to_string());
            }
            WizardOutcome::Updated => {
                self.errors.clear();
                self.input_error = None;
            }
            WizardOutcome::Committed(_) | WizardOutcome::Closed => {
                self.errors.clear();
                self.input_error = None;
                self.target_text.clear();
            }
            WizardOutcome::Ignored => {}
        }
    }

    /// Drop buffers for deselected challenges and seed new ones from the draft.
    fn sync_targets(&mut self, wizard: &GoalWizard) {
        let challenges = &wizard.draft().challenges;
        self.target_text.retain(|c, _| challenges.is_selected(*c));
        for challenge in challenges.selected() {
            self.target_text.entry(challenge).or_insert_with(|| {
                challenges
                    .target(challenge)
                    .map(|t| t.to_string())
                    .unwrap_or_default()
            });
        }
    }

    fn show_params(&mut self, ui: &mut Ui, wizard: &GoalWizard) -> Option<WizardEvent> {
        let mut event = None;

        for &field in ParamField::all() {
            let mut value = wizard.draft().params.get(field).to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(field.placeholder())
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                event = Some(WizardEvent::EditParam { field, value });
            }
            ui.add_space(4.0);
        }

        event
    }

    fn show_challenges(&mut self, ui: &mut Ui, wizard: &GoalWizard) -> Option<WizardEvent> {
        let mut event = None;
        let challenges = &wizard.draft().challenges;

        ui.horizontal(|ui| {
            for &challenge in ChallengeType::all() {
                let selected = challenges.is_selected(challenge);
                let text = if selected {
                    RichText::new(challenge.display_name())
                        .strong()
                        .color(SELECTED_COLOR)
                } else {
                    RichText::new(challenge.display_name())
                };
                if ui
                    .add_sized([96.0, 64.0], egui::Button::new(text).selected(selected))
                    .clicked()
                {
                    event = Some(WizardEvent::ToggleChallenge(challenge));
                }
            }
        });

        ui.add_space(10.0);

        egui::Grid::new("challenge_targets")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                for challenge in challenges.selected() {
                    ui.label(challenge.label());
                    let text = self.target_text.entry(challenge).or_default();
                    let response = ui.add(
                        egui::TextEdit::singleline(text)
                            .hint_text("Enter number...")
                            .desired_width(120.0),
                    );
                    if response.changed() {
                        event = Some(WizardEvent::SetTarget {
                            challenge,
                            raw: text.clone(),
                        });
                    }
                    ui.end_row();
                }
            });

        if let Some(message) = &self.input_error {
            ui.label(RichText::new(message).color(ERROR_COLOR).small());
        }

        event
    }

    fn show_review(&mut self, ui: &mut Ui, wizard: &GoalWizard) -> Option<WizardEvent> {
        let draft = wizard.draft();

        egui::Grid::new("goal_review")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                for &field in ParamField::all() {
                    ui.label(RichText::new(field.placeholder()).weak());
                    let value = draft.params.get(field);
                    if value.trim().is_empty() {
                        ui.label(RichText::new("-").weak());
                    } else {
                        ui.label(value);
                    }
                    ui.end_row();
                }

                for challenge in draft.challenges.selected() {
                    ui.label(RichText::new(challenge.display_name()).weak());
                    match draft.challenges.target(challenge) {
                        Some(target) => ui.label(format!("{} {}", target, challenge.unit())),
                        None => ui.label(RichText::new("No target").color(ERROR_COLOR)),
                    };
                    ui.end_row();
                }
            });

        None
    }
}
