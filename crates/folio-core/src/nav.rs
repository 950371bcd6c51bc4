//! Mobile navigation menu (hamburger toggle).

/// Open/closed state of the mobile menu.
///
/// While the menu is open the page body must not scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    /// Hamburger clicked
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Nav menu toggled");
        self.open
    }

    /// A nav link was followed
    pub fn link_clicked(&mut self) {
        self.close();
    }

    /// A click landed outside both the menu and the hamburger
    pub fn outside_click(&mut self) {
        self.close();
    }

    /// Escape pressed anywhere
    pub fn escape(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.open = false;
    }
}
