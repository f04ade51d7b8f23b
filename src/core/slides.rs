//! Slide discovery and decoding.
//!
//! Walks a directory for image files, sorts them by name and decodes
//! each into an RGBA buffer ready for terminal rendering. No UI types
//! here — the carousel treats slides as opaque content.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum SlideError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no image files found in {}", .0.display())]
    NoImages(PathBuf),
}

/// One unit of carousel content.
#[derive(Debug, Clone)]
pub struct Slide {
    pub path: PathBuf,
    pub name: String,
    pub image: Arc<image::RgbaImage>,
}

/// Load every image under `dir`, sorted by file name. Non-recursive
/// unless `recursive` is set. Files that fail to decode are skipped
/// with a warning; an empty result is an error — the carousel refuses
/// to run without at least one slide.
pub fn load_slides(dir: &Path, recursive: bool) -> Result<Vec<Slide>, SlideError> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).max_depth(max_depth) {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            match e.into_io_error() {
                Some(source) => SlideError::Io { path, source },
                None => SlideError::Io {
                    path,
                    source: std::io::Error::other("walk error"),
                },
            }
        })?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut slides = Vec::with_capacity(paths.len());
    for path in paths {
        match image::open(&path) {
            Ok(img) => {
                let name = path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| path.display().to_string());
                slides.push(Slide {
                    name,
                    image: Arc::new(img.to_rgba8()),
                    path,
                });
            }
            Err(e) => {
                tracing::warn!("skipping {}: {e}", path.display());
            }
        }
    }

    if slides.is_empty() {
        return Err(SlideError::NoImages(dir.to_path_buf()));
    }
    for slide in &slides {
        tracing::debug!("slide {}", slide.path.display());
    }
    Ok(slides)
}

/// Content-based image detection via shared-mime-info signatures, not
/// just extension matching.
fn is_image(path: &Path) -> bool {
    tree_magic_mini::from_filepath(path)
        .map(|mime| mime.starts_with("image/"))
        .unwrap_or(false)
}
