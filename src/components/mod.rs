//! UI Components
//!
//! Reusable Leptos components.

mod coming_soon;
mod header;
mod icons;
mod login_form;
mod route_guard;
mod sidebar;
mod tab_bar;
mod theme_toggle;
mod toaster;

pub use coming_soon::ComingSoon;
pub use header::Header;
pub use icons::icon_glyph;
pub use login_form::LoginForm;
pub use route_guard::RouteGuard;
pub use sidebar::Sidebar;
pub use tab_bar::TabBar;
pub use theme_toggle::ThemeToggle;
pub use toaster::Toaster;
