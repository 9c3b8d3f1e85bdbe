pub mod layout;
pub mod views;

use crate::TriviaApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{notice_window, top_panel};

impl App for TriviaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Primero se reconcilia lo que haya resuelto el repositorio.
        self.poll_repository();

        top_panel(self, ctx);
        views::sidebar::ui_sidebar(self, ctx);
        views::questions::ui_questions(self, ctx);

        if self.pending_delete.is_some() {
            self.confirm_delete(ctx);
        }
        notice_window(self, ctx);

        // Mientras haya una petición en vuelo hay que seguir sondeando.
        if self.is_fetch_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
