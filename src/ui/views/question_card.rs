use crate::model::Question;
use egui::{RichText, Ui};

/// Carta de una pregunta: texto, categoría, dificultad, toggle de
/// respuesta y botón de borrado. No habla con la red; el borrado solo se
/// emite hacia arriba como intención.
#[derive(Default)]
pub struct QuestionCard {
    visible_answer: bool,
}

impl QuestionCard {
    /// Dibuja la carta. Devuelve true si el usuario pidió borrarla.
    pub fn show(&mut self, ui: &mut Ui, question: &Question, category_name: Option<&str>) -> bool {
        let mut delete_requested = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&question.question).strong());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                // Sin nombre resoluble se cae al icono genérico, como el
                // default.svg del original.
                match category_name {
                    Some(name) => ui.label(format!("📂 {name}")),
                    None => ui.label("📂"),
                };
                ui.label(format!("Difficulty: {}", question.difficulty));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑").on_hover_text("Delete question").clicked() {
                        delete_requested = true;
                    }
                });
            });

            let toggle_label = if self.visible_answer {
                "Hide Answer"
            } else {
                "Show Answer"
            };
            if ui.button(toggle_label).clicked() {
                self.visible_answer = !self.visible_answer;
            }
            if self.visible_answer {
                ui.label(format!("Answer: {}", question.answer));
            }
        });

        delete_requested
    }
}
