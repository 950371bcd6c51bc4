//! Browser bridge.
//!
//! Window-level events (scroll, Escape, load, lazy image intersections) have
//! no element to hang an `on*` handler on, so a small script forwards them as
//! JSON messages and [`listen`] applies each one to the page signal.

use dioxus::prelude::*;
use folio_core::{Page, Section};
use serde::Deserialize;

/// Forwards window events to Rust. Layout is re-measured on load and resize
/// since section tops depend on rendered content.
const LISTENER_JS: &str = r#"
const measure = () => dioxus.send({
  kind: "layout",
  sections: [...document.querySelectorAll("section[id]")]
    .map(s => [s.id, s.offsetTop, s.offsetHeight]),
  skills: [...document.querySelectorAll(".skill-bar")]
    .map(b => b.getBoundingClientRect().top + window.scrollY),
});
const scrolled = () => dioxus.send({
  kind: "scroll", y: window.scrollY, viewport: window.innerHeight,
});

window.addEventListener("scroll", scrolled, { passive: true });
window.addEventListener("resize", () => { measure(); scrolled(); });
document.addEventListener("keydown", e => {
  if (e.key === "Escape") dioxus.send({ kind: "escape" });
});

const observer = new IntersectionObserver(entries => {
  for (const entry of entries) {
    if (entry.isIntersecting) {
      observer.unobserve(entry.target);
      dioxus.send({ kind: "image", id: entry.target.dataset.lazyId });
    }
  }
});
const observeImages = () =>
  document.querySelectorAll("img.lazy[data-lazy-id]").forEach(img => observer.observe(img));

const loaded = () => {
  measure();
  observeImages();
  scrolled();
  dioxus.send({ kind: "load" });
};
if (document.readyState === "complete") {
  loaded();
} else {
  window.addEventListener("load", loaded);
}
"#;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BrowserEvent {
    Layout {
        sections: Vec<(String, f64, f64)>,
        skills: Vec<f64>,
    },
    Scroll {
        y: f64,
        viewport: f64,
    },
    Escape,
    Image {
        id: String,
    },
    Load,
}

/// Apply forwarded window events to the page until the bridge closes.
pub async fn listen(mut page: Signal<Page>) {
    let mut bridge = document::eval(LISTENER_JS);

    loop {
        let event = match bridge.recv::<BrowserEvent>().await {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(?err, "Browser bridge closed");
                return;
            }
        };

        match event {
            BrowserEvent::Layout { sections, skills } => {
                let mut page = page.write();
                page.sections = sections
                    .into_iter()
                    .map(|(id, top, height)| Section::new(id, top, height))
                    .collect();
                page.skill_tops = skills;
            }
            BrowserEvent::Scroll { y, viewport } => {
                let revealed = page.write().scroll(y, viewport);
                if revealed > 0 {
                    tracing::debug!(revealed, "Skill bars revealed");
                }
            }
            BrowserEvent::Escape => page.write().nav.escape(),
            BrowserEvent::Image { id } => {
                if let Err(err) = page.write().images.on_intersect(&id) {
                    tracing::warn!(%err, "Lazy image intersect ignored");
                }
            }
            BrowserEvent::Load => {
                if page.write().loader.loaded() {
                    tracing::info!("Page loaded");
                }
            }
        }
    }
}

/// Smooth-scroll the window to a document offset
pub fn scroll_to(y: f64) {
    let _ = document::eval(&format!(
        "window.scrollTo({{ top: {}, behavior: 'smooth' }});",
        y
    ));
}

/// Lock or release body scrolling while the mobile menu is open
pub fn lock_body_scroll(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    let _ = document::eval(&format!(
        "document.body.style.overflow = '{}';",
        overflow
    ));
}
