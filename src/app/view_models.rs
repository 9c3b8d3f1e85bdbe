use super::*;
use crate::model::FilterMode;

impl TriviaApp {
    /// Fila de paginación: 1..=max_page, cada entrada marcada si es la
    /// página actual. Finito, perezoso y reiniciable (cada llamada
    /// devuelve la secuencia desde el principio).
    pub fn page_numbers(&self) -> impl Iterator<Item = PageNumber> + '_ {
        let current = self.view.page;
        (1..=self.view.max_page()).map(move |number| PageNumber {
            number,
            current: number == current,
        })
    }

    /// Anotación de cabecera para el filtro activo. Excluyente por
    /// construcción: sale directa del `FilterMode`.
    pub fn active_filter_banner(&self) -> Banner {
        match &self.view.filter {
            FilterMode::AllPaginated => Banner::none(),
            FilterMode::ByCategory { name, .. } => Banner::category(name),
            FilterMode::BySearch { term } => Banner::search(term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_questions_make_three_pages() {
        let mut app = TriviaApp::default();
        app.view.total_questions = 23;

        let pages: Vec<_> = app.page_numbers().collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], PageNumber { number: 1, current: true });
        assert!(pages.iter().all(|p| (1..=3).contains(&p.number)));
    }

    #[test]
    fn no_questions_means_no_page_numbers() {
        let app = TriviaApp::default();
        assert_eq!(app.page_numbers().count(), 0);
    }

    #[test]
    fn page_numbers_restart_on_every_call() {
        let mut app = TriviaApp::default();
        app.view.total_questions = 15;
        app.view.page = 2;

        let first: Vec<_> = app.page_numbers().collect();
        let second: Vec<_> = app.page_numbers().collect();
        assert_eq!(first, second);
        assert!(first[1].current);
    }

    #[test]
    fn banner_follows_the_filter_mode() {
        let mut app = TriviaApp::default();
        assert_eq!(app.active_filter_banner().text(), None);

        app.view.filter = FilterMode::ByCategory {
            id: 1,
            name: "Science".into(),
        };
        assert_eq!(app.active_filter_banner().text().as_deref(), Some(" | Science"));

        app.view.filter = FilterMode::BySearch {
            term: "titanic".into(),
        };
        assert_eq!(
            app.active_filter_banner().text().as_deref(),
            Some(" | Search \"titanic\"")
        );
    }
}
