use crate::api::{self, ApiRequest, ApiResult};
use crate::model::{CategoryId, QuestionId, ViewState};
use crate::ui::views::forms::{CategoryForm, SearchForm};
use crate::ui::views::question_card::QuestionCard;
use std::collections::HashMap;
use std::sync::mpsc::{Receiver, channel};

// Submódulos
pub mod actions;
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{Banner, BannerKind, PageNumber};

/// Lo que el controlador espera del repositorio en este momento. El intent
/// lleva todo lo necesario para aplicar la respuesta sin mirar atrás
/// (nombre de categoría incluido, nada de lookups inversos).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchIntent {
    Page { page: usize },
    Category { id: CategoryId, name: String },
    Search { term: String },
    Delete { id: QuestionId },
    NewCategory { name: String },
}

impl FetchIntent {
    fn to_request(&self) -> ApiRequest {
        match self {
            FetchIntent::Page { page } => ApiRequest::FetchPage { page: *page },
            FetchIntent::Category { id, .. } => ApiRequest::FetchByCategory { id: *id },
            FetchIntent::Search { term } => ApiRequest::Search { term: term.clone() },
            FetchIntent::Delete { id } => ApiRequest::DeleteQuestion { id: *id },
            FetchIntent::NewCategory { name } => ApiRequest::CreateCategory { name: name.clone() },
        }
    }
}

/// Petición en vuelo. Solo existe una: despachar otra sustituye el slot y
/// suelta el receiver anterior, así una respuesta tardía de una petición
/// vieja no puede pisar estado más nuevo.
pub(crate) struct PendingFetch {
    seq: u64,
    pub(crate) intent: FetchIntent,
    rx: Receiver<ApiResult>,
}

pub struct TriviaApp {
    /// Única fuente de verdad de lo que se muestra.
    pub view: ViewState,
    /// Aviso no-fatal pendiente de que el usuario lo cierre.
    pub notice: Option<String>,
    /// Pregunta esperando la confirmación sí/no de borrado.
    pub pending_delete: Option<QuestionId>,

    // Componentes hoja: cada uno guarda su propio estado local.
    pub search_form: SearchForm,
    pub category_form: CategoryForm,
    pub cards: HashMap<QuestionId, QuestionCard>,

    in_flight: Option<PendingFetch>,
    next_seq: u64,
}

impl Default for TriviaApp {
    fn default() -> Self {
        Self {
            view: ViewState::default(),
            notice: None,
            pending_delete: None,
            search_form: SearchForm::default(),
            category_form: CategoryForm::default(),
            cards: HashMap::new(),
            in_flight: None,
            next_seq: 0,
        }
    }
}

impl TriviaApp {
    /// Al montar se pide la primera página del listado sin filtrar.
    pub fn new() -> Self {
        let mut app = Self::default();
        app.load_page(1);
        app
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    #[cfg(test)]
    pub(crate) fn in_flight_intent(&self) -> Option<&FetchIntent> {
        self.in_flight.as_ref().map(|pending| &pending.intent)
    }

    /// Lanza la petición en segundo plano y ocupa el slot en vuelo.
    pub(crate) fn dispatch(&mut self, intent: FetchIntent) {
        let request = intent.to_request();
        self.next_seq += 1;
        let seq = self.next_seq;

        let (tx, rx) = channel::<ApiResult>();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = api::execute(&request);
            let _ = tx.send(result);
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::execute(&request).await;
            let _ = tx.send(result);
        });

        if let Some(previous) = self.in_flight.take() {
            log::warn!(
                "request #{} ({:?}) superseded by #{seq} ({intent:?})",
                previous.seq,
                previous.intent
            );
        }
        self.in_flight = Some(PendingFetch { seq, intent, rx });
    }
}
