//! Visual resource loading.
//!
//! This module is intentionally small: it classifies the visual path into a
//! display mode, decodes raster images for display, and degrades to a
//! fallback (mode kept, no pixels) when the file cannot be read. Keeping it
//! isolated makes it easy to extend with more formats later.

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How the visual layer behaves. A document page is shown fit-to-window; an
/// image additionally gets the zoom/pan viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Document,
    Image,
}

pub struct LoadedVisual {
    pub mode: DisplayMode,
    /// Decoded pixels ready for display; `None` when loading failed or the
    /// format has no rasterizer (e.g. a PDF), in which case the view shows a
    /// fallback hint instead.
    pub handle: Option<Handle>,
    /// Pixel dimensions of the decoded visual.
    pub size: Option<(u32, u32)>,
    pub path: PathBuf,
}

/// Load the visual resource. Never fails hard: a broken or unsupported file
/// yields a `LoadedVisual` without pixels.
pub fn load_visual(path: &Path) -> LoadedVisual {
    let mode = display_mode_for(path);
    let decoded = match mode {
        // Documents arrive either as a pre-rendered page image or as a PDF;
        // only the former can be decoded here.
        DisplayMode::Document if !has_raster_extension(path) => None,
        _ => match image::open(path) {
            Ok(img) => Some(img),
            Err(err) => {
                warn!(path = %path.display(), "Failed to decode visual: {err}");
                None
            }
        },
    };

    match decoded {
        Some(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            info!(path = %path.display(), width, height, ?mode, "Loaded visual");
            LoadedVisual {
                mode,
                handle: Some(Handle::from_rgba(width, height, rgba.into_raw())),
                size: Some((width, height)),
                path: path.to_path_buf(),
            }
        }
        None => LoadedVisual {
            mode,
            handle: None,
            size: None,
            path: path.to_path_buf(),
        },
    }
}

/// Raster images get the pannable viewport; everything else is treated as a
/// static document page.
pub fn display_mode_for(path: &Path) -> DisplayMode {
    if has_raster_extension(path) && !is_prerendered_page(path) {
        DisplayMode::Image
    } else {
        DisplayMode::Document
    }
}

fn has_raster_extension(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "webp")
    )
}

/// A `*.page.<ext>` name marks a pre-rendered document page, so it renders
/// fit-to-window instead of through the zoom viewport.
fn is_prerendered_page(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_ascii_lowercase().ends_with(".page"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_extensions_are_image_mode() {
        assert_eq!(display_mode_for(Path::new("scene.png")), DisplayMode::Image);
        assert_eq!(display_mode_for(Path::new("scene.JPG")), DisplayMode::Image);
        assert_eq!(
            display_mode_for(Path::new("scene.webp")),
            DisplayMode::Image
        );
    }

    #[test]
    fn documents_and_unknowns_are_document_mode() {
        assert_eq!(
            display_mode_for(Path::new("hackers.pdf")),
            DisplayMode::Document
        );
        assert_eq!(display_mode_for(Path::new("notes")), DisplayMode::Document);
    }

    #[test]
    fn prerendered_pages_are_document_mode() {
        assert_eq!(
            display_mode_for(Path::new("hackers.page.png")),
            DisplayMode::Document
        );
    }

    #[test]
    fn missing_file_degrades_to_fallback() {
        let visual = load_visual(Path::new("missing.png"));
        assert_eq!(visual.mode, DisplayMode::Image);
        assert!(visual.handle.is_none());
        assert!(visual.size.is_none());
    }

    #[test]
    fn pdf_is_not_decoded() {
        let visual = load_visual(Path::new("missing.pdf"));
        assert_eq!(visual.mode, DisplayMode::Document);
        assert!(visual.handle.is_none());
    }
}
