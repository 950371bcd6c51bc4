//! Project page gallery and demo project links.

use crate::error::{FolioError, FolioResult};
use crate::notification::{Notifier, Severity};

pub const DEMO_LINK_MESSAGE: &str = "This project link is for demonstration purposes. In a real project, this would link to the live website or GitHub repository.";

const UPDATED_OVERLAY: &str = "Updated View";

/// What the large gallery image shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    pub icon: String,
    pub overlay: Option<&'static str>,
}

#[derive(Debug)]
pub struct Gallery {
    thumbnails: Vec<String>,
    active: Option<usize>,
    main: MainView,
}

impl Gallery {
    /// `main_icon` is shown until a thumbnail is picked
    pub fn new(main_icon: impl Into<String>, thumbnails: Vec<String>) -> Self {
        Self {
            thumbnails,
            active: None,
            main: MainView {
                icon: main_icon.into(),
                overlay: None,
            },
        }
    }

    pub fn thumbnails(&self) -> &[String] {
        &self.thumbnails
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn main_view(&self) -> &MainView {
        &self.main
    }

    /// Make one thumbnail active and mirror its icon in the main view
    pub fn select(&mut self, index: usize) -> FolioResult<()> {
        let icon = self
            .thumbnails
            .get(index)
            .ok_or(FolioError::UnknownThumbnail {
                index,
                len: self.thumbnails.len(),
            })?;

        self.main = MainView {
            icon: icon.clone(),
            overlay: Some(UPDATED_OVERLAY),
        };
        self.active = Some(index);
        Ok(())
    }
}

/// A project link was clicked. Placeholder links (`#`) are blocked with an
/// info notification; returns whether navigation should proceed.
pub fn follow_project_link(href: &str, notifier: &mut impl Notifier) -> bool {
    if href == "#" {
        notifier.notify(DEMO_LINK_MESSAGE, Severity::Info);
        return false;
    }
    true
}
