//! Shelfscope core: catalog models, view derivations, favorites and config.

pub mod config;
pub mod error;
pub mod favorites;
pub mod format;
pub mod models;
pub mod pagination;
pub mod view;

pub use config::{ApiConfig, AppConfig, LocaleConfig, UiConfig};
pub use error::{CoreError, ExitCode, Result};
pub use favorites::FavoritesStore;
pub use models::*;
pub use pagination::{PageControls, total_pages, visible_page_window};
pub use view::{LayoutMode, PageSize, Searchable, ViewState};
