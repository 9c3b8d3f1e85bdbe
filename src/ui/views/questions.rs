use crate::TriviaApp;
use egui::{Context, RichText, ScrollArea};

/// Panel central: cabecera con banner, lista de cartas y paginación.
pub fn ui_questions(app: &mut TriviaApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let banner = app.active_filter_banner();
        let heading = match banner.text() {
            Some(suffix) => format!("Questions{suffix}"),
            None => "Questions".to_string(),
        };
        ui.heading(heading);
        ui.add_space(8.0);

        // Las cartas se dibujan sobre una copia de la página actual; el
        // estado canónico solo lo muta el controlador al reconciliar.
        let questions = app.view.questions.clone();
        let mut delete_intent = None;

        ScrollArea::vertical().show(ui, |ui| {
            for question in &questions {
                let category_name = app
                    .view
                    .category_name(question.category)
                    .map(str::to_string);
                let card = app.cards.entry(question.id).or_default();
                if card.show(ui, question, category_name.as_deref()) {
                    delete_intent = Some(question.id);
                }
                ui.add_space(6.0);
            }

            if questions.is_empty() {
                ui.label(RichText::new("No questions to show.").weak());
            }

            ui.add_space(12.0);
            pagination_row(app, ui);
        });

        if let Some(id) = delete_intent {
            app.request_delete(id);
        }
    });
}

fn pagination_row(app: &mut TriviaApp, ui: &mut egui::Ui) {
    let pages: Vec<_> = app.page_numbers().collect();
    if pages.is_empty() {
        return;
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for page in pages {
            let label = page.number.to_string();
            if ui.selectable_label(page.current, label).clicked() {
                clicked = Some(page.number);
            }
        }
    });

    if let Some(number) = clicked {
        app.load_page(number);
    }
}
