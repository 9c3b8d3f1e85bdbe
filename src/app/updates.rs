use super::*;
use crate::api::{ApiError, ApiResponse};
use crate::model::FilterMode;
use std::collections::HashSet;
use std::sync::mpsc::TryRecvError;

impl TriviaApp {
    /// Sondea el slot en vuelo una vez por frame, igual que el poll del
    /// judge remoto: si hay resultado, se reconcilia; si no, nada.
    pub fn poll_repository(&mut self) {
        let result = match self.in_flight.as_ref().map(|pending| pending.rx.try_recv()) {
            Some(Ok(result)) => result,
            Some(Err(TryRecvError::Disconnected)) => {
                Err(ApiError::Transport("request worker vanished".into()))
            }
            _ => return,
        };

        if let Some(pending) = self.in_flight.take() {
            self.settle(pending.intent, result);
        }
    }

    /// Reconcilia una petición resuelta. Un fallo deja `view` intacta y
    /// levanta el aviso; el éxito aplica el cambio de estado completo.
    pub(crate) fn settle(&mut self, intent: FetchIntent, result: ApiResult) {
        match result {
            Ok(response) => self.apply(intent, response),
            Err(err) => {
                log::warn!("{intent:?} failed: {err}");
                self.notice = Some(Self::notice_for(&intent).to_string());
            }
        }
    }

    fn notice_for(intent: &FetchIntent) -> &'static str {
        match intent {
            FetchIntent::NewCategory { .. } => {
                "Unable to add category. Please try your request again"
            }
            _ => "Unable to load questions. Please try your request again",
        }
    }

    fn apply(&mut self, intent: FetchIntent, response: ApiResponse) {
        match (intent, response) {
            (FetchIntent::Page { page }, ApiResponse::Page(body)) => {
                self.view.filter = FilterMode::AllPaginated;
                // El servidor puede corregir una página fuera de rango.
                self.view.page = body.actual_page.unwrap_or(page).max(1);
                self.view.questions = body.questions;
                self.view.total_questions = body.total_questions;
                self.view.categories = body.categories;
                self.view.revision += 1;
                self.prune_cards();
            }
            (FetchIntent::Category { id, name }, ApiResponse::Filtered(body)) => {
                self.view.filter = FilterMode::ByCategory { id, name };
                self.view.page = 1; // el filtrado llega sin paginar
                self.view.questions = body.questions;
                self.view.total_questions = body.total_questions;
                self.view.revision += 1;
                self.prune_cards();
            }
            (FetchIntent::Search { term }, ApiResponse::Filtered(body)) => {
                self.view.filter = FilterMode::BySearch { term };
                self.view.page = 1;
                self.view.questions = body.questions;
                self.view.total_questions = body.total_questions;
                self.view.revision += 1;
                self.prune_cards();
            }
            // Tras borrar se refresca con el filtro vigente, nunca se
            // vuelve en silencio al listado sin filtrar.
            (FetchIntent::Delete { .. }, ApiResponse::Deleted) => {
                let refresh = self.refresh_intent();
                self.dispatch(refresh);
            }
            (FetchIntent::NewCategory { .. }, ApiResponse::CategoryCreated) => {
                self.dispatch(FetchIntent::Page { page: 1 });
            }
            (intent, response) => {
                log::warn!("dropping mismatched response {response:?} for {intent:?}");
            }
        }
    }

    /// Descarta el estado local de cartas cuyas preguntas ya no se muestran.
    fn prune_cards(&mut self) {
        let shown: HashSet<QuestionId> = self.view.questions.iter().map(|q| q.id).collect();
        self.cards.retain(|id, _| shown.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FilteredResponse, PageResponse};
    use crate::model::{CategoryMap, Question};

    fn question(id: QuestionId, category: CategoryId) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 2,
        }
    }

    fn sample_categories() -> CategoryMap {
        let mut categories = CategoryMap::new();
        categories.insert(1, "Science".to_string());
        categories.insert(2, "Art".to_string());
        categories.insert(5, "History".to_string());
        categories
    }

    fn page_response(total: usize, actual_page: Option<usize>) -> ApiResponse {
        ApiResponse::Page(PageResponse {
            questions: vec![question(1, 1), question(2, 2)],
            total_questions: total,
            categories: sample_categories(),
            current_category: String::new(),
            actual_page,
        })
    }

    fn filtered_response(questions: Vec<Question>) -> ApiResponse {
        let total = questions.len();
        ApiResponse::Filtered(FilteredResponse {
            questions,
            total_questions: total,
            current_category: String::new(),
        })
    }

    fn app_with_page_loaded() -> TriviaApp {
        let mut app = TriviaApp::default();
        app.settle(FetchIntent::Page { page: 1 }, Ok(page_response(23, Some(1))));
        app
    }

    #[test]
    fn exactly_one_filter_mode_after_each_transition() {
        let mut app = app_with_page_loaded();
        assert_eq!(app.view.filter, FilterMode::AllPaginated);

        app.settle(
            FetchIntent::Category {
                id: 2,
                name: "Art".into(),
            },
            Ok(filtered_response(vec![question(3, 2)])),
        );
        assert_eq!(
            app.view.filter,
            FilterMode::ByCategory {
                id: 2,
                name: "Art".into()
            }
        );

        app.settle(
            FetchIntent::Search {
                term: "titanic".into(),
            },
            Ok(filtered_response(vec![question(4, 1)])),
        );
        assert_eq!(
            app.view.filter,
            FilterMode::BySearch {
                term: "titanic".into()
            }
        );

        app.settle(FetchIntent::Page { page: 1 }, Ok(page_response(23, Some(1))));
        assert_eq!(app.view.filter, FilterMode::AllPaginated);
    }

    #[test]
    fn switching_filter_resets_page_to_one() {
        let mut app = app_with_page_loaded();
        app.settle(FetchIntent::Page { page: 3 }, Ok(page_response(23, Some(3))));
        assert_eq!(app.view.page, 3);

        app.settle(
            FetchIntent::Category {
                id: 5,
                name: "History".into(),
            },
            Ok(filtered_response(vec![question(7, 5)])),
        );
        assert_eq!(app.view.page, 1);
    }

    #[test]
    fn failed_fetch_leaves_state_untouched_and_raises_notice() {
        let mut app = app_with_page_loaded();
        let before = app.view.clone();

        app.settle(
            FetchIntent::Page { page: 2 },
            Err(ApiError::Transport("connection refused".into())),
        );

        assert_eq!(app.view, before);
        assert_eq!(
            app.notice.as_deref(),
            Some("Unable to load questions. Please try your request again")
        );
    }

    #[test]
    fn failed_category_creation_uses_the_add_notice() {
        let mut app = app_with_page_loaded();
        app.settle(
            FetchIntent::NewCategory {
                name: "Geography".into(),
            },
            Err(ApiError::Status(500)),
        );
        assert_eq!(
            app.notice.as_deref(),
            Some("Unable to add category. Please try your request again")
        );
    }

    #[test]
    fn delete_refresh_targets_the_active_category() {
        let mut app = app_with_page_loaded();
        app.settle(
            FetchIntent::Category {
                id: 5,
                name: "History".into(),
            },
            Ok(filtered_response(vec![question(7, 5), question(8, 5)])),
        );

        app.settle(FetchIntent::Delete { id: 7 }, Ok(ApiResponse::Deleted));

        assert_eq!(
            app.in_flight_intent(),
            Some(&FetchIntent::Category {
                id: 5,
                name: "History".into()
            })
        );
    }

    #[test]
    fn delete_refresh_reissues_the_active_search() {
        let mut app = app_with_page_loaded();
        app.settle(
            FetchIntent::Search {
                term: "titanic".into(),
            },
            Ok(filtered_response(vec![question(4, 1)])),
        );

        app.settle(FetchIntent::Delete { id: 4 }, Ok(ApiResponse::Deleted));

        assert_eq!(
            app.in_flight_intent(),
            Some(&FetchIntent::Search {
                term: "titanic".into()
            })
        );
    }

    #[test]
    fn delete_refresh_keeps_the_current_page_when_unfiltered() {
        let mut app = app_with_page_loaded();
        app.settle(FetchIntent::Page { page: 2 }, Ok(page_response(23, Some(2))));

        app.settle(FetchIntent::Delete { id: 1 }, Ok(ApiResponse::Deleted));

        assert_eq!(app.in_flight_intent(), Some(&FetchIntent::Page { page: 2 }));
    }

    #[test]
    fn empty_search_never_reaches_the_repository() {
        let mut app = app_with_page_loaded();
        let before = app.view.clone();

        app.submit_search("   ");

        assert!(app.in_flight_intent().is_none());
        assert_eq!(app.view, before);
    }

    #[test]
    fn unknown_category_id_is_a_noop() {
        let mut app = TriviaApp::default();
        app.select_category(99);
        assert!(app.in_flight_intent().is_none());
    }

    #[test]
    fn category_selection_replaces_questions_but_not_the_mapping() {
        let mut app = app_with_page_loaded();
        let categories_before = app.view.categories.clone();

        app.settle(
            FetchIntent::Category {
                id: 2,
                name: "Art".into(),
            },
            Ok(filtered_response(vec![question(10, 2), question(11, 2)])),
        );

        assert_eq!(app.view.questions.len(), 2);
        assert_eq!(app.view.total_questions, 2);
        assert_eq!(app.view.categories, categories_before);
    }

    #[test]
    fn successful_category_creation_reloads_page_one() {
        let mut app = app_with_page_loaded();
        app.settle(
            FetchIntent::Search {
                term: "titanic".into(),
            },
            Ok(filtered_response(vec![question(4, 1)])),
        );

        app.settle(
            FetchIntent::NewCategory {
                name: "Geography".into(),
            },
            Ok(ApiResponse::CategoryCreated),
        );

        assert_eq!(app.in_flight_intent(), Some(&FetchIntent::Page { page: 1 }));
    }

    #[test]
    fn server_corrected_page_is_adopted() {
        let mut app = TriviaApp::default();
        app.settle(FetchIntent::Page { page: 7 }, Ok(page_response(23, Some(3))));
        assert_eq!(app.view.page, 3);
    }

    #[test]
    fn each_successful_apply_bumps_the_revision() {
        let mut app = TriviaApp::default();
        assert_eq!(app.view.revision, 0);

        app.settle(FetchIntent::Page { page: 1 }, Ok(page_response(23, Some(1))));
        assert_eq!(app.view.revision, 1);

        app.settle(
            FetchIntent::Page { page: 2 },
            Err(ApiError::Transport("timeout".into())),
        );
        assert_eq!(app.view.revision, 1);
    }
}
