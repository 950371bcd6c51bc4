//! Portfolio category filter with fade transitions.
//!
//! Applying a filter starts a fade on every item: matches fade in and
//! settle as `Shown`, the rest fade out and settle as `Hidden`. Each item
//! keeps at most one pending settle, so switching filters quickly never
//! lets an older fade override a newer one.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::FadeTimings;
use crate::error::{FolioError, FolioResult};
use crate::scheduler::{Scheduler, TimerId};

/// Which items the filter buttons select.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => wanted == category,
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        if value == "all" {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::from(value.as_str())
    }
}

impl From<Filter> for String {
    fn from(value: Filter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Category(category) => f.write_str(category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemVisibility {
    Shown,
    /// Displayed, opacity rising
    FadingIn,
    /// Still displayed, opacity falling
    FadingOut,
    Hidden,
}

impl ItemVisibility {
    pub fn is_displayed(&self) -> bool {
        !matches!(self, ItemVisibility::Hidden)
    }

    /// CSS class for the item's animation state
    pub fn class(&self) -> &'static str {
        match self {
            ItemVisibility::Shown => "portfolio-item shown",
            ItemVisibility::FadingIn => "portfolio-item fading-in",
            ItemVisibility::FadingOut => "portfolio-item fading-out",
            ItemVisibility::Hidden => "portfolio-item hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub visibility: ItemVisibility,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    item: usize,
    to: ItemVisibility,
}

#[derive(Debug)]
pub struct Portfolio {
    items: Vec<PortfolioItem>,
    filter: Filter,
    timings: FadeTimings,
    scheduler: Scheduler<Settle>,
    pending: Vec<Option<TimerId>>,
}

impl Portfolio {
    pub fn new(timings: FadeTimings) -> Self {
        Self {
            items: Vec::new(),
            filter: Filter::All,
            timings,
            scheduler: Scheduler::new(),
            pending: Vec::new(),
        }
    }

    pub fn add_item(
        &mut self,
        slug: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) {
        self.items.push(PortfolioItem {
            slug: slug.into(),
            title: title.into(),
            category: category.into(),
            visibility: ItemVisibility::Shown,
        });
        self.pending.push(None);
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// The highlighted filter button
    pub fn active_filter(&self) -> &Filter {
        &self.filter
    }

    /// Distinct categories in item order, for rendering filter buttons
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Items currently taking up space in the grid
    pub fn visible_items(&self) -> impl Iterator<Item = &PortfolioItem> {
        self.items.iter().filter(|i| i.visibility.is_displayed())
    }

    /// Select a filter and start fading items in or out
    pub fn apply(&mut self, filter: Filter) -> FolioResult<()> {
        if let Filter::Category(category) = &filter {
            if !self.items.iter().any(|i| &i.category == category) {
                return Err(FolioError::UnknownCategory(category.clone()));
            }
        }

        for index in 0..self.items.len() {
            if let Some(timer) = self.pending[index].take() {
                self.scheduler.cancel(timer);
            }

            let item = &mut self.items[index];
            let (now, settle, delay) = if filter.matches(&item.category) {
                (ItemVisibility::FadingIn, ItemVisibility::Shown, self.timings.fade_in)
            } else if item.visibility == ItemVisibility::Hidden {
                continue;
            } else {
                (ItemVisibility::FadingOut, ItemVisibility::Hidden, self.timings.fade_out)
            };

            item.visibility = now;
            let timer = self
                .scheduler
                .schedule_after(delay, Settle { item: index, to: settle });
            self.pending[index] = Some(timer);
        }

        tracing::debug!(%filter, "Portfolio filter applied");
        self.filter = filter;
        Ok(())
    }

    /// Advance fade timelines. Returns true if any item changed.
    pub fn advance(&mut self, by: Duration) -> bool {
        let fired = self.scheduler.advance(by);
        for fired in &fired {
            let Settle { item, to } = fired.event;
            if self.pending[item] == Some(fired.id) {
                self.pending[item] = None;
                self.items[item].visibility = to;
            }
        }
        !fired.is_empty()
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.has_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn portfolio() -> Portfolio {
        let mut p = Portfolio::new(FadeTimings::default());
        p.add_item("shop", "Online Shop", "web");
        p.add_item("tracker", "Habit Tracker", "mobile");
        p.add_item("brand", "Brand Kit", "design");
        p.add_item("blog", "Blog Engine", "web");
        p
    }

    fn visibilities(p: &Portfolio) -> Vec<ItemVisibility> {
        p.items().iter().map(|i| i.visibility).collect()
    }

    #[test]
    fn filter_fades_then_settles() {
        use ItemVisibility::*;
        let mut p = portfolio();
        p.apply(Filter::from("web")).unwrap();
        assert_eq!(visibilities(&p), vec![FadingIn, FadingOut, FadingOut, FadingIn]);

        p.advance(ms(50));
        assert_eq!(visibilities(&p), vec![Shown, FadingOut, FadingOut, Shown]);

        p.advance(ms(250));
        assert_eq!(visibilities(&p), vec![Shown, Hidden, Hidden, Shown]);
        assert_eq!(p.visible_items().count(), 2);
        assert_eq!(p.active_filter(), &Filter::Category("web".into()));
    }

    #[test]
    fn newer_filter_supersedes_pending_fade() {
        let mut p = portfolio();
        p.apply(Filter::from("web")).unwrap();
        p.advance(ms(100));
        // Tracker is mid fade-out; switching back must not let it hide
        p.apply(Filter::All).unwrap();
        p.advance(ms(1000));

        assert!(p.items().iter().all(|i| i.visibility == ItemVisibility::Shown));
        assert!(!p.has_pending());
    }

    #[test]
    fn hidden_items_stay_hidden_when_still_filtered_out() {
        let mut p = portfolio();
        p.apply(Filter::from("web")).unwrap();
        p.advance(ms(300));
        p.apply(Filter::from("design")).unwrap();

        assert_eq!(p.items()[1].visibility, ItemVisibility::Hidden);
        assert_eq!(p.items()[2].visibility, ItemVisibility::FadingIn);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut p = portfolio();
        assert!(matches!(
            p.apply(Filter::from("games")),
            Err(FolioError::UnknownCategory(_))
        ));
        assert_eq!(p.active_filter(), &Filter::All);
    }

    #[test]
    fn categories_are_distinct_in_order() {
        assert_eq!(portfolio().categories(), vec!["web", "mobile", "design"]);
    }

    #[test]
    fn filter_serializes_as_string() {
        let json = serde_json::to_string(&Filter::Category("web".into())).unwrap();
        assert_eq!(json, "\"web\"");
        let parsed: Filter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, Filter::All);
    }
}
