//! Lazy image loading.
//!
//! Images start with only a `data-src`; the real `src` is set the first
//! time the image intersects the viewport, after which it is no longer
//! observed.

use crate::error::{FolioError, FolioResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    pub id: String,
    pub data_src: String,
    pub alt: String,
    src: Option<String>,
}

impl LazyImage {
    /// The loaded source, once intersected
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Still carries the `lazy` class and is still observed
    pub fn is_lazy(&self) -> bool {
        self.src.is_none()
    }
}

#[derive(Debug, Default)]
pub struct LazyImages {
    images: Vec<LazyImage>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, data_src: impl Into<String>, alt: impl Into<String>) {
        self.images.push(LazyImage {
            id: id.into(),
            data_src: data_src.into(),
            alt: alt.into(),
            src: None,
        });
    }

    pub fn images(&self) -> &[LazyImage] {
        &self.images
    }

    pub fn get(&self, id: &str) -> Option<&LazyImage> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Ids still waiting to intersect
    pub fn observed(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .filter(|i| i.is_lazy())
            .map(|i| i.id.as_str())
    }

    /// The image entered the viewport. Returns true if it loaded just now.
    pub fn on_intersect(&mut self, id: &str) -> FolioResult<bool> {
        let image = self
            .images
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| FolioError::UnknownImage(id.to_string()))?;

        if image.src.is_some() {
            return Ok(false);
        }
        image.src = Some(image.data_src.clone());
        tracing::debug!(id, src = %image.data_src, "Lazy image loaded");
        Ok(true)
    }
}
