//! Full-page loading overlay.

/// Shown from first paint until the page's `load` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLoader {
    visible: bool,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl PageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Page finished loading. Returns true the first time only.
    pub fn loaded(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_hides_once() {
        let mut loader = PageLoader::new();
        assert!(loader.is_visible());
        assert!(loader.loaded());
        assert!(!loader.is_visible());
        assert!(!loader.loaded());
    }
}
