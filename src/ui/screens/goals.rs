//! Goals screen.
//!
//! Shows pending and completed goals side by side and lets the user mark a
//! pending goal done.

use egui::{Color32, RichText, ScrollArea, Ui};
use uuid::Uuid;

use crate::goals::{GoalRecord, GoalStatus, GoalStore};

/// Goals screen actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalsAction {
    /// Open the goal wizard.
    NewGoal,
    /// Mark a pending goal as done.
    Complete(Uuid),
    /// Delete a goal.
    Remove(Uuid),
}

/// Goals screen.
#[derive(Debug, Default)]
pub struct GoalsScreen;

impl GoalsScreen {
    /// Render both goal lists.
    pub fn show(ui: &mut Ui, store: &GoalStore, show_completed: bool) -> Option<GoalsAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("Goals");
            if ui.button("New Goal").clicked() {
                action = Some(GoalsAction::NewGoal);
            }
        });
        ui.add_space(10.0);

        let columns = if show_completed { 2 } else { 1 };
        ui.columns(columns, |cols| {
            cols[0].label(RichText::new(format!("Pending Goals ({})", store.pending().len())).strong());
            Self::show_list(&mut cols[0], "pending_goals", store.pending(), &mut action);

            if show_completed {
                cols[1].label(
                    RichText::new(format!("Completed Goals ({})", store.completed().len())).strong(),
                );
                Self::show_list(&mut cols[1], "completed_goals", store.completed(), &mut action);
            }
        });

        action
    }

    fn show_list(
        ui: &mut Ui,
        id: &str,
        goals: &[GoalRecord],
        action: &mut Option<GoalsAction>,
    ) {
        if goals.is_empty() {
            ui.label(RichText::new("Nothing here yet").italics().weak());
            return;
        }

        ScrollArea::vertical().id_salt(id).show(ui, |ui| {
            for goal in goals {
                Self::show_goal_card(ui, goal, action);
            }
        });
    }

    fn show_goal_card(ui: &mut Ui, goal: &GoalRecord, action: &mut Option<GoalsAction>) {
        let bg_color = match goal.status() {
            GoalStatus::Pending => Color32::from_rgb(40, 50, 60),
            GoalStatus::Completed => Color32::from_rgb(30, 50, 30),
        };

        egui::Frame::new()
            .fill(bg_color)
            .inner_margin(12.0)
            .outer_margin(2.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(RichText::new(goal.title()).strong().size(16.0));
                for selection in goal.selections() {
                    ui.label(selection.summary());
                }

                let date = match goal.completed_at() {
                    Some(done) => format!("Completed: {}", done.format("%Y-%m-%d")),
                    None => format!("Created: {}", goal.created_at().format("%Y-%m-%d")),
                };
                ui.label(RichText::new(date).small().weak());

                ui.horizontal(|ui| {
                    if goal.status() == GoalStatus::Pending && ui.button("Complete").clicked() {
                        *action = Some(GoalsAction::Complete(goal.id()));
                    }
                    if ui.button("Remove").clicked() {
                        *action = Some(GoalsAction::Remove(goal.id()));
                    }
                });
            });
    }
}
