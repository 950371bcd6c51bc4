//! The whole interactive page: every widget sharing one notification service.
//!
//! [`Page`] is what the web app keeps in its root signal and what the CLI
//! replays scripts against. Its fields are public so renderers can project
//! them directly; commands that involve more than one widget (anything that
//! raises a notification) go through `Page` methods so the shared
//! [`NotificationCenter`] is threaded through.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::error::{FolioError, FolioResult};
use crate::gallery::{self, Gallery};
use crate::lazy::LazyImages;
use crate::loader::PageLoader;
use crate::nav::NavMenu;
use crate::notification::{NotificationCenter, Severity};
use crate::portfolio::Portfolio;
use crate::scroll::{ScrollSpy, Section};
use crate::skills::SkillBars;
use crate::thread::CommentThread;
use crate::types::{CommentId, NotificationId, ReplyId, TimestampLabel};
use crate::widget::ReplyWidget;

#[derive(Debug)]
pub struct Page {
    config: SiteConfig,
    pub notifications: NotificationCenter,
    pub thread: CommentThread,
    pub nav: NavMenu,
    pub portfolio: Portfolio,
    pub skills: SkillBars,
    pub spy: ScrollSpy,
    /// Document layout of the page sections, top to bottom
    pub sections: Vec<Section>,
    /// Document tops of the skill bars, paired with `skills.bars()`
    pub skill_tops: Vec<f64>,
    pub images: LazyImages,
    pub loader: PageLoader,
    pub contact: ContactForm,
    pub gallery: Gallery,
    active_section: Option<String>,
}

impl Page {
    /// An empty page
    pub fn new(config: SiteConfig) -> Self {
        Self {
            notifications: NotificationCenter::new(config.notifications),
            thread: CommentThread::new(),
            nav: NavMenu::new(),
            portfolio: Portfolio::new(config.portfolio),
            skills: SkillBars::new(config.skills),
            spy: ScrollSpy::new(config.scroll),
            sections: Vec::new(),
            skill_tops: Vec::new(),
            images: LazyImages::new(),
            loader: PageLoader::new(),
            contact: ContactForm::new(config.contact),
            gallery: Gallery::new("fas fa-image", Vec::new()),
            active_section: None,
            config,
        }
    }

    /// The sample portfolio page the site ships with
    pub fn demo(config: SiteConfig) -> Self {
        let mut page = Self::new(config);

        page.thread.add_comment(
            "Alice",
            "This breakdown of the design process is exactly what I needed. The section on typography was especially helpful!",
            TimestampLabel::posted(2024, 3, 15),
        );
        page.thread.add_comment(
            "Marcus",
            "Great article! Would love to see a follow-up on responsive layouts.",
            TimestampLabel::posted(2024, 3, 16),
        );

        for (slug, title, category) in [
            ("shop", "E-Commerce Storefront", "web"),
            ("fitness", "Fitness Tracker App", "mobile"),
            ("identity", "Coffee Brand Identity", "design"),
            ("dashboard", "Analytics Dashboard", "web"),
            ("recipes", "Recipe Finder", "mobile"),
            ("posters", "Concert Poster Series", "design"),
        ] {
            page.portfolio.add_item(slug, title, category);
        }

        for (name, percent) in [
            ("HTML/CSS", 95),
            ("JavaScript", 85),
            ("Rust", 80),
            ("UI/UX Design", 75),
        ] {
            page.skills.add(name, percent);
        }
        page.skill_tops = vec![1400.0, 1460.0, 1520.0, 1580.0];

        page.sections = vec![
            Section::new("home", 0.0, 700.0),
            Section::new("about", 700.0, 600.0),
            Section::new("skills", 1300.0, 500.0),
            Section::new("portfolio", 1800.0, 900.0),
            Section::new("blog", 2700.0, 800.0),
            Section::new("contact", 3500.0, 600.0),
        ];

        page.images.register("portrait", "/assets/portrait.webp", "Portrait");
        page.images.register("shop-shot", "/assets/shop.webp", "E-Commerce Storefront");
        page.images.register("fitness-shot", "/assets/fitness.webp", "Fitness Tracker App");

        page.gallery = Gallery::new(
            "fas fa-laptop-code",
            vec![
                "fas fa-desktop".to_string(),
                "fas fa-mobile-alt".to_string(),
                "fas fa-tablet-alt".to_string(),
            ],
        );

        page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Raise a notification on the page's shared service
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notifications.push(message, severity)
    }

    /// Open the reply widget on `anchor`, closing any other first
    pub fn open_reply(&mut self, anchor: CommentId) -> FolioResult<Option<ReplyWidget>> {
        self.thread.open(anchor)
    }

    pub fn submit_reply(&mut self) -> FolioResult<ReplyId> {
        self.thread.submit(&mut self.notifications)
    }

    pub fn cancel_reply(&mut self) -> Option<ReplyWidget> {
        self.thread.cancel()
    }

    pub fn reply_to_reply(&mut self, id: ReplyId) -> FolioResult<()> {
        self.thread.reply_to_reply(id, &mut self.notifications)
    }

    pub fn submit_contact(&mut self) -> FolioResult<()> {
        self.contact.submit()
    }

    pub fn follow_project_link(&mut self, href: &str) -> bool {
        gallery::follow_project_link(href, &mut self.notifications)
    }

    /// Window scrolled: update the scroll spy and reveal skill bars.
    /// Returns how many bars were newly revealed.
    pub fn scroll(&mut self, scroll_y: f64, viewport_height: f64) -> usize {
        self.active_section = self
            .spy
            .active_section(scroll_y, &self.sections)
            .map(str::to_string);

        let tops: Vec<f64> = self.skill_tops.iter().map(|top| top - scroll_y).collect();
        self.skills.on_scroll(viewport_height, &tops)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Scroll target for an in-page link
    pub fn scroll_target(&self, href: &str) -> Option<f64> {
        self.spy.scroll_target(href, &self.sections)
    }

    /// Advance every timeline on the page by the same virtual duration.
    ///
    /// The window is split at each pending contact delivery so the resulting
    /// toast is created at the moment the delivery came due.
    pub fn advance(&mut self, by: Duration) -> bool {
        let mut remaining = by;
        let mut changed = false;
        loop {
            let step = match self.contact.time_until_next() {
                Some(next) if next < remaining => next,
                _ => remaining,
            };

            changed |= self.notifications.advance(step) > 0;
            changed |= self.portfolio.advance(step);
            changed |= self.contact.advance(step, &mut self.notifications);

            remaining -= step;
            if remaining.is_zero() {
                break;
            }
        }
        changed
    }

    /// Whether any timeline still has something scheduled
    pub fn has_pending(&self) -> bool {
        self.notifications.has_pending()
            || self.portfolio.has_pending()
            || self.contact.time_until_next().is_some()
    }

    /// Resolve a comment by author name, for scripted interaction
    pub fn comment_by_author(&self, author: &str) -> FolioResult<CommentId> {
        self.thread
            .find_comment_by_author(author)
            .ok_or_else(|| FolioError::UnknownAuthor(author.to_string()))
    }

    /// Resolve the latest reply by author name, for scripted interaction
    pub fn reply_by_author(&self, author: &str) -> FolioResult<ReplyId> {
        self.thread
            .find_reply_by_author(author)
            .ok_or_else(|| FolioError::UnknownAuthor(author.to_string()))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::demo(SiteConfig::default())
    }
}
