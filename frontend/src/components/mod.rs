//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod post_card;
mod theme;
mod toast;

pub use header::SiteHeader;
pub use post_card::PostCard;
pub use theme::{theme_class, ThemeToggle};
pub use toast::{provide_toaster, use_toaster, ToastHost, Toaster};
