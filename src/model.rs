use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type QuestionId = u32;
pub type CategoryId = u32;

/// Tamaño de página fijado por el backend.
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String, // Pregunta
    pub answer: String,   // Respuesta
    pub category: CategoryId,
    pub difficulty: u8,
}

/// id → nombre. Solo lookup, el orden de inserción da igual.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Modo de filtrado activo. Exactamente uno a la vez (invariante del
/// controlador). `ByCategory` guarda el id además del nombre: el refresco
/// tras borrar nunca necesita buscar el id por nombre en el mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    AllPaginated,
    ByCategory { id: CategoryId, name: String },
    BySearch { term: String },
}

/// Estado canónico de la vista. Solo lo mutan las operaciones del
/// controlador al resolverse una llamada al repositorio; nunca los
/// componentes hoja.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub page: usize, // 1-based
    pub filter: FilterMode,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// Se incrementa en cada apply con éxito; una llamada fallida no lo toca.
    pub revision: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            filter: FilterMode::AllPaginated,
            questions: Vec::new(),
            total_questions: 0,
            categories: CategoryMap::new(),
            revision: 0,
        }
    }
}

impl ViewState {
    /// Última página del listado; 0 si no hay preguntas.
    pub fn max_page(&self) -> usize {
        self.total_questions.div_ceil(QUESTIONS_PER_PAGE)
    }

    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.categories.get(&id).map(String::as_str)
    }
}
