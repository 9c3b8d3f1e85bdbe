// src/view_models.rs

/// Una entrada de la fila de paginación.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageNumber {
    pub number: usize, // 1-based
    pub current: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    None,
    Category,
    Search,
}

/// Anotación de cabecera con el filtro activo. Como mucho una a la vez.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub label: String,
}

impl Banner {
    pub fn none() -> Self {
        Self {
            kind: BannerKind::None,
            label: String::new(),
        }
    }

    pub fn category(name: &str) -> Self {
        Self {
            kind: BannerKind::Category,
            label: name.to_string(),
        }
    }

    pub fn search(term: &str) -> Self {
        Self {
            kind: BannerKind::Search,
            label: term.to_string(),
        }
    }

    /// Texto para la cabecera, al estilo del original: ` | Science`,
    /// ` | Search "titanic"`, o nada.
    pub fn text(&self) -> Option<String> {
        match self.kind {
            BannerKind::None => None,
            BannerKind::Category => Some(format!(" | {}", self.label)),
            BannerKind::Search => Some(format!(" | Search \"{}\"", self.label)),
        }
    }
}
