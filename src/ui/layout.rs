use crate::TriviaApp;
use egui::{Context, RichText};

pub fn top_panel(app: &mut TriviaApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui
                .add(
                    egui::Label::new(RichText::new("Udacitrivia").heading().strong())
                        .sense(egui::Sense::click()),
                )
                .clicked()
            {
                app.load_page(1);
            }

            if app.is_fetch_pending() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spinner();
                });
            }
        });
    });
}

/// Aviso no-fatal bloqueante. No toca el estado: solo se cierra.
pub fn notice_window(app: &mut TriviaApp, ctx: &Context) {
    let message = match &app.notice {
        Some(message) => message.clone(),
        None => return,
    };

    egui::Window::new("Something went wrong")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(message);
            if ui.button("OK").clicked() {
                app.dismiss_notice();
            }
        });
}
