//! Export request handling
//!
//! Resolves a puzzle id through a `PuzzleStore`, renders it, and wraps the
//! bytes with the response metadata a CDN-fronted download expects. Bad ids
//! and store misses short-circuit before any rendering.

use serde::Serialize;

use crate::config::Settings;
use crate::error::ExportError;
use crate::parser::puzzle_from_db;
use crate::render::PuzzleSheetRenderer;
use crate::store::PuzzleStore;

pub const CACHE_CONTROL: &str = "public, max-age=1800, s-maxage=3600";
pub const ROBOTS_TAG: &str = "noindex";
pub const CONTENT_TYPE: &str = "application/pdf";

/// A successful export
#[derive(Debug, Clone)]
pub struct PdfResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    /// Filename suggested by the content disposition
    pub filename: String,
    pub body: Vec<u8>,
}

impl PdfResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// JSON body sent with error statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

impl ExportError {
    pub fn status_code(&self) -> u16 {
        match self {
            ExportError::BadParams | ExportError::NotFound => 404,
            ExportError::Store(_) | ExportError::InvalidPuzzle(_) | ExportError::Render(_) => 500,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status_code(),
            message: self.to_string(),
        }
    }

    pub fn body_json(&self) -> String {
        serde_json::to_string(&self.body()).unwrap_or_else(|_| {
            format!(
                "{{\"statusCode\":{},\"message\":\"export failed\"}}",
                self.status_code()
            )
        })
    }
}

/// Download filename: the title with everything but word characters and spaces removed
pub fn pdf_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ' ')
        .collect();
    format!("{}.pdf", stem)
}

fn valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}

/// Handle one export request
pub fn export_pdf(
    store: &dyn PuzzleStore,
    puzzle_id: Option<&str>,
    settings: &Settings,
) -> Result<PdfResponse, ExportError> {
    let id = match puzzle_id {
        Some(id) if valid_id(id) => id,
        _ => {
            log::warn!("Rejecting export with puzzle id {:?}", puzzle_id);
            return Err(ExportError::BadParams);
        }
    };

    let stored = store.get_puzzle(id)?.ok_or_else(|| {
        log::warn!("Puzzle {} not found", id);
        ExportError::NotFound
    })?;
    let puzzle = puzzle_from_db(&stored)?;

    let body = PuzzleSheetRenderer::new(settings.clone()).render(&puzzle)?;
    let filename = pdf_filename(&stored.t);

    Ok(PdfResponse {
        status: 200,
        headers: vec![
            ("X-Robots-Tag", ROBOTS_TAG.to_string()),
            ("Cache-Control", CACHE_CONTROL.to_string()),
            (
                "Content-Disposition",
                format!("inline; filename=\"{}\"", filename),
            ),
            ("Content-Type", CONTENT_TYPE.to_string()),
        ],
        filename,
        body,
    })
}
