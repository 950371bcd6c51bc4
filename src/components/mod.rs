//! UI Components for the portfolio site.

mod comment_thread;
mod contact_form;
mod nav_header;
mod page_loader;
mod portfolio_grid;
mod project_gallery;
mod reply_form;
mod skills_section;

pub use comment_thread::CommentSection;
pub use contact_form::ContactSection;
pub use nav_header::NavHeader;
pub use page_loader::PageLoaderOverlay;
pub use portfolio_grid::{LazyImg, PortfolioSection};
pub use project_gallery::ProjectGallery;
pub use reply_form::ReplyForm;
pub use skills_section::SkillsSection;
