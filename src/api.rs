//! Frontera con el repositorio remoto de preguntas (JSON sobre HTTP).
//!
//! Cuatro lecturas (una por modo de filtrado) y dos escrituras. En nativo
//! se usa `reqwest::blocking` desde un thread del controlador; en WASM,
//! `fetch` vía `web_sys` dentro de un `spawn_local`.

use crate::model::{CategoryId, CategoryMap, Question, QuestionId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_BASE: &str = "http://127.0.0.1:5000";

/// Una petición concreta al backend, lista para ejecutar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    FetchPage { page: usize },
    FetchByCategory { id: CategoryId },
    Search { term: String },
    DeleteQuestion { id: QuestionId },
    CreateCategory { name: String },
}

#[derive(Debug, Serialize)]
struct SearchBody {
    search_term: String,
}

#[derive(Debug, Serialize)]
struct NewCategoryBody {
    category: String,
}

/// Respuesta de `GET /questions?page=N`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    #[serde(default)]
    pub current_category: String,
    /// El servidor corrige aquí una página fuera de rango. Si falta,
    /// el controlador conserva la página pedida.
    #[serde(default)]
    pub actual_page: Option<usize>,
}

/// Respuesta de `GET /categories/{id}/questions` y de la búsqueda.
/// No incluye el mapping de categorías.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FilteredResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(default)]
    pub current_category: String,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    #[serde(default)]
    success: bool,
}

/// Resultado ya tipado de una petición resuelta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Page(PageResponse),
    Filtered(FilteredResponse),
    Deleted,
    CategoryCreated,
}

/// Único tipo de fallo reconocido: la red. Siempre no-fatal para el
/// controlador; las variantes existen para que el log sea útil.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult = Result<ApiResponse, ApiError>;

/// Base del API. En nativo sale de `TRIVIA_API_BASE`; en WASM se usan
/// rutas relativas al mismo origen.
#[cfg(not(target_arch = "wasm32"))]
pub fn api_base() -> String {
    std::env::var("TRIVIA_API_BASE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NATIVE_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn api_base() -> String {
    String::new()
}

fn request_url(base: &str, request: &ApiRequest) -> String {
    let base = base.trim_end_matches('/');
    match request {
        ApiRequest::FetchPage { page } => format!("{base}/questions?page={page}"),
        ApiRequest::FetchByCategory { id } => format!("{base}/categories/{id}/questions"),
        ApiRequest::Search { .. } => format!("{base}/questions"),
        ApiRequest::DeleteQuestion { id } => format!("{base}/questions/{id}"),
        ApiRequest::CreateCategory { .. } => format!("{base}/categories"),
    }
}

fn request_body(request: &ApiRequest) -> Option<String> {
    match request {
        ApiRequest::Search { term } => serde_json::to_string(&SearchBody {
            search_term: term.clone(),
        })
        .ok(),
        ApiRequest::CreateCategory { name } => serde_json::to_string(&NewCategoryBody {
            category: name.clone(),
        })
        .ok(),
        _ => None,
    }
}

fn http_method(request: &ApiRequest) -> &'static str {
    match request {
        ApiRequest::FetchPage { .. } | ApiRequest::FetchByCategory { .. } => "GET",
        ApiRequest::Search { .. } | ApiRequest::CreateCategory { .. } => "POST",
        ApiRequest::DeleteQuestion { .. } => "DELETE",
    }
}

fn decode_response(request: &ApiRequest, body: &str) -> ApiResult {
    match request {
        ApiRequest::FetchPage { .. } => serde_json::from_str::<PageResponse>(body)
            .map(ApiResponse::Page)
            .map_err(|err| ApiError::Decode(err.to_string())),
        ApiRequest::FetchByCategory { .. } | ApiRequest::Search { .. } => {
            serde_json::from_str::<FilteredResponse>(body)
                .map(ApiResponse::Filtered)
                .map_err(|err| ApiError::Decode(err.to_string()))
        }
        ApiRequest::DeleteQuestion { .. } | ApiRequest::CreateCategory { .. } => {
            let ack = serde_json::from_str::<AckResponse>(body)
                .map_err(|err| ApiError::Decode(err.to_string()))?;
            if !ack.success {
                return Err(ApiError::Decode("server reported success=false".into()));
            }
            match request {
                ApiRequest::DeleteQuestion { .. } => Ok(ApiResponse::Deleted),
                _ => Ok(ApiResponse::CategoryCreated),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn execute(request: &ApiRequest) -> ApiResult {
    let url = request_url(&api_base(), request);
    let client = reqwest::blocking::Client::new();

    let mut builder = match http_method(request) {
        "POST" => client.post(&url),
        "DELETE" => client.delete(&url),
        _ => client.get(&url),
    };
    if let Some(body) = request_body(request) {
        builder = builder
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
    }

    let response = builder
        .send()
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let text = response
        .text()
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    decode_response(request, &text)
}

#[cfg(target_arch = "wasm32")]
pub async fn execute(request: &ApiRequest) -> ApiResult {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let url = request_url(&api_base(), request);

    let opts = RequestInit::new();
    opts.set_method(http_method(request));
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = request_body(request) {
        opts.set_body(&JsValue::from_str(&body));
    }

    let fetch_request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    if request_body(request).is_some() {
        fetch_request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("fetch did not return a Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| ApiError::Transport("response body is not text".into()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    decode_response(request, &text)
}
