mod helpers;
pub mod layout;
pub mod views;

use crate::app::AcademyApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for AcademyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_login();
        if self.is_login_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        // Dispatch per state
        match self.state {
            AppState::Landing => views::landing::ui_landing(self, ctx),
            AppState::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            AppState::Course => views::course::ui_course(self, ctx),
        }

        if self.login.open {
            views::login::ui_login_window(self, ctx);
        }
        if self.completion.is_some() {
            self.show_completion(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
