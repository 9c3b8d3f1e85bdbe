use super::*;
use crate::model::FilterMode;

impl TriviaApp {
    /// Vuelve al listado sin filtrar y pide la página `page`. El cambio de
    /// estado se aplica al resolverse la petición; si falla, la lista
    /// mostrada no se toca.
    pub fn load_page(&mut self, page: usize) {
        if page == 0 {
            return; // las páginas son 1-based
        }
        self.dispatch(FetchIntent::Page { page });
    }

    /// Filtra por una categoría del mapping actual. El nombre se captura
    /// aquí mismo para el banner; un id desconocido es un no-op.
    pub fn select_category(&mut self, id: CategoryId) {
        let name = match self.view.category_name(id) {
            Some(name) => name.to_string(),
            None => return,
        };
        self.dispatch(FetchIntent::Category { id, name });
    }

    /// Busca por texto libre. El formulario ya valida, pero se re-comprueba
    /// aquí: un término vacío nunca llega al repositorio.
    pub fn submit_search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.dispatch(FetchIntent::Search {
            term: term.to_string(),
        });
    }

    /// El borrado pasa siempre por la confirmación sí/no.
    pub fn request_delete(&mut self, id: QuestionId) {
        self.pending_delete = Some(id);
    }

    pub fn confirm_delete(&mut self, ctx: &egui::Context) {
        let id = match self.pending_delete {
            Some(id) => id,
            None => return,
        };
        egui::Window::new("Delete question")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("are you sure you want to delete the question?");
                ui.horizontal(|ui| {
                    if ui.button("Yes, delete").clicked() {
                        self.pending_delete = None;
                        self.dispatch(FetchIntent::Delete { id });
                    }
                    if ui.button("No").clicked() {
                        self.pending_delete = None;
                    }
                });
            });
    }

    /// Da de alta una categoría. Al resolverse con éxito la vista vuelve a
    /// la página 1 sin filtrar, para que la categoría nueva aparezca en el
    /// lateral.
    pub fn submit_new_category(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.dispatch(FetchIntent::NewCategory {
            name: name.to_string(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// El refresco que corresponde al filtro activo, para después de un
    /// borrado. En modo búsqueda se relanza el mismo término: el modo
    /// activo nunca se pierde en silencio.
    pub(crate) fn refresh_intent(&self) -> FetchIntent {
        match &self.view.filter {
            FilterMode::AllPaginated => FetchIntent::Page {
                page: self.view.page,
            },
            FilterMode::ByCategory { id, name } => FetchIntent::Category {
                id: *id,
                name: name.clone(),
            },
            FilterMode::BySearch { term } => FetchIntent::Search { term: term.clone() },
        }
    }
}
