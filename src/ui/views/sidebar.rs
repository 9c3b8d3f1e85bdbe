use crate::TriviaApp;
use crate::model::FilterMode;
use egui::{Context, RichText, ScrollArea};

/// Lateral izquierdo: cabecera "Categories" (click = volver al listado),
/// alta de categoría, lista de categorías y búsqueda.
pub fn ui_sidebar(app: &mut TriviaApp, ctx: &Context) {
    egui::SidePanel::left("categories_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            if ui
                .add(egui::Label::new(RichText::new("Categories").heading()).sense(egui::Sense::click()))
                .clicked()
            {
                app.load_page(1);
            }
            ui.add_space(8.0);

            if let Some(name) = app.category_form.show(ui) {
                app.submit_new_category(&name);
            }
            ui.add_space(8.0);
            ui.separator();

            let active_category = match &app.view.filter {
                FilterMode::ByCategory { id, .. } => Some(*id),
                _ => None,
            };

            // Clonado para no pelear con el borrow mientras se despacha.
            let categories: Vec<_> = app
                .view
                .categories
                .iter()
                .map(|(id, name)| (*id, name.clone()))
                .collect();

            ScrollArea::vertical().show(ui, |ui| {
                for (id, name) in categories {
                    let selected = active_category == Some(id);
                    if ui
                        .selectable_label(selected, format!("📂 {name}"))
                        .clicked()
                    {
                        app.select_category(id);
                    }
                }
            });

            ui.separator();
            ui.add_space(8.0);
            if let Some(term) = app.search_form.show(ui) {
                app.submit_search(&term);
            }
        });
}
