//! Main application state and egui integration.
//!
//! Owns the goal store and the goal wizard, and routes events from the
//! screens to them.

use eframe::egui;

use goalcraft::goals::{GoalStore, GoalWizard};
use goalcraft::storage::config::AppConfig;
use goalcraft::ui::screens::{GoalWizardScreen, GoalsAction, GoalsScreen};

/// Main application state.
pub struct GoalcraftApp {
    /// Application configuration
    config: AppConfig,
    /// Committed goals
    store: GoalStore,
    /// Goal creation wizard
    wizard: GoalWizard,
    /// Wizard dialog state
    wizard_screen: GoalWizardScreen,
}

impl GoalcraftApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        Self {
            wizard: GoalWizard::new(config.wizard),
            config,
            store: GoalStore::new(),
            wizard_screen: GoalWizardScreen::new(),
        }
    }

    /// Apply an action from the goals list.
    fn handle_goals_action(&mut self, action: GoalsAction) {
        match action {
            GoalsAction::NewGoal => {
                if !self.wizard.open() {
                    tracing::debug!("Goal wizard already open");
                }
            }
            GoalsAction::Complete(id) => {
                if let Err(e) = self.store.complete(id) {
                    tracing::warn!("Failed to complete goal: {}", e);
                }
            }
            GoalsAction::Remove(id) => match self.store.remove(id) {
                Ok(goal) => tracing::info!("Removed goal {} ({})", id, goal.title()),
                Err(e) => tracing::warn!("Failed to remove goal: {}", e),
            },
        }
    }
}

impl eframe::App for GoalcraftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Goalcraft");
                ui.separator();
                ui.label(format!(
                    "{} pending, {} completed",
                    self.store.pending().len(),
                    self.store.completed().len()
                ));
            });
        });

        let mut goals_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            goals_action = GoalsScreen::show(ui, &self.store, self.config.ui.show_completed);
        });

        if let Some(action) = goals_action {
            self.handle_goals_action(action);
        }

        if let Some(event) = self.wizard_screen.show(ctx, &self.wizard) {
            let outcome = self.wizard.dispatch(event, &mut self.store);
            self.wizard_screen.handle_outcome(&outcome);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(format!("{} goals", self.store.len()));
            });
        });
    }
}
