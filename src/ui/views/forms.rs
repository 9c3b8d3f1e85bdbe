use egui::{Key, TextEdit, Ui};

/// Formulario de búsqueda. Mantiene su propio texto y lo emite una vez
/// por envío; a propósito NO se limpia, para que el usuario vea qué buscó.
#[derive(Default)]
pub struct SearchForm {
    query: String,
}

impl SearchForm {
    pub fn show(&mut self, ui: &mut Ui) -> Option<String> {
        let mut submitted = None;
        ui.horizontal(|ui| {
            let input = ui.add(
                TextEdit::singleline(&mut self.query)
                    .hint_text("Search questions...")
                    .desired_width(140.0),
            );
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let clicked = ui.button("🔍").clicked();

            if (entered || clicked) && !self.query.trim().is_empty() {
                submitted = Some(self.query.trim().to_string());
            }
        });
        submitted
    }
}

/// Alta de categoría. Igual que el de búsqueda, pero este sí limpia su
/// input tras un envío válido.
#[derive(Default)]
pub struct CategoryForm {
    name: String,
}

impl CategoryForm {
    pub fn show(&mut self, ui: &mut Ui) -> Option<String> {
        let mut submitted = None;
        ui.horizontal(|ui| {
            let input = ui.add(
                TextEdit::singleline(&mut self.name)
                    .hint_text("New category")
                    .desired_width(140.0),
            );
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let clicked = ui.button("➕").clicked();

            if (entered || clicked) && !self.name.trim().is_empty() {
                submitted = Some(self.name.trim().to_string());
                self.name.clear();
            }
        });
        submitted
    }
}
