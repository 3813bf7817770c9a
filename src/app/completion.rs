use super::*;

impl AcademyApp {
    /// Completion modal close: the dashboard records a passing rate and the
    /// learner returns to the catalog either way.
    pub fn close_completion(&mut self) {
        let Some(outcome) = self.completion.take() else {
            return;
        };
        if let Some(dashboard) = self.dashboard.as_mut() {
            dashboard.complete_course(outcome.success_rate);
        }
        self.game = None;
        self.state = AppState::Dashboard;
    }

    pub fn show_completion(&mut self, ctx: &egui::Context) {
        let Some(outcome) = self.completion else {
            return;
        };
        let title = self
            .dashboard
            .as_ref()
            .and_then(|d| d.current())
            .map(|seq| seq.title().to_string())
            .unwrap_or_default();

        let mut close = false;
        egui::Window::new(outcome.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("%{}", outcome.success_rate));
                    ui.label(egui::RichText::new(outcome.grade()).strong());
                    if outcome.excellent {
                        ui.label("🏅");
                    }
                    ui.add_space(6.0);
                    ui.label(&title);
                    ui.add_space(6.0);
                    ui.label(outcome.message());
                    ui.label(outcome.description());
                });
                ui.add_space(10.0);
                ui.label(egui::RichText::new(outcome.next_steps_title()).strong());
                for step in outcome.next_steps() {
                    ui.label(format!("• {step}"));
                }
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button(outcome.close_label()).clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.close_completion();
        }
    }
}
