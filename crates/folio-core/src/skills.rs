//! Skill bars that animate to their width once scrolled into view.

use crate::config::SkillConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    pub name: String,
    /// Target width, 0 to 100
    pub percent: u8,
    revealed: bool,
}

impl SkillBar {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Current rendered width in percent
    pub fn width(&self) -> u8 {
        if self.revealed {
            self.percent
        } else {
            0
        }
    }
}

/// Reveal state for every skill bar on the page. Reveals never revert.
#[derive(Debug)]
pub struct SkillBars {
    bars: Vec<SkillBar>,
    config: SkillConfig,
}

impl SkillBars {
    pub fn new(config: SkillConfig) -> Self {
        Self {
            bars: Vec::new(),
            config,
        }
    }

    /// Add a bar; percentages above 100 are clamped
    pub fn add(&mut self, name: impl Into<String>, percent: u8) {
        self.bars.push(SkillBar {
            name: name.into(),
            percent: percent.min(100),
            revealed: false,
        });
    }

    pub fn bars(&self) -> &[SkillBar] {
        &self.bars
    }

    pub fn get(&self, name: &str) -> Option<&SkillBar> {
        self.bars.iter().find(|b| b.name == name)
    }

    /// Scroll check against each bar's viewport-relative top.
    ///
    /// `tops` pairs with [`SkillBars::bars`] by index; extra entries are
    /// ignored. Returns how many bars were newly revealed.
    pub fn on_scroll(&mut self, viewport_height: f64, tops: &[f64]) -> usize {
        let threshold = viewport_height / self.config.reveal_ratio;
        let mut revealed = 0;
        for (bar, top) in self.bars.iter_mut().zip(tops) {
            if !bar.revealed && *top < threshold {
                bar.revealed = true;
                revealed += 1;
            }
        }
        if revealed > 0 {
            tracing::debug!(revealed, threshold, "Skill bars revealed on scroll");
        }
        revealed
    }

    /// Reveal bars reported as intersecting by a visibility observer
    pub fn reveal_intersecting<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> usize {
        let mut revealed = 0;
        for name in names {
            if let Some(bar) = self.bars.iter_mut().find(|b| b.name == name && !b.revealed) {
                bar.revealed = true;
                revealed += 1;
            }
        }
        revealed
    }

    pub fn all_revealed(&self) -> bool {
        self.bars.iter().all(|b| b.revealed)
    }
}
