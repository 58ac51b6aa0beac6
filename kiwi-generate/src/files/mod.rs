//! File templates.
//!
//! Project files are rooted at the project directory; the framework files
//! written by synchronization are rooted at the temp directory.

mod client_entry;
mod client_template;
mod page_style;
mod page_tsx;
mod plugins_ts;
mod routes_ts;
mod tailwind_config;
mod tailwind_css;

pub use client_entry::{CLIENT_ENTRY, ClientEntry};
pub use client_template::ClientTemplate;
pub use page_style::PageStyle;
pub use page_tsx::PageTsx;
pub use plugins_ts::PluginsTs;
pub use routes_ts::RoutesTs;
pub use tailwind_config::TailwindConfig;
pub use tailwind_css::TailwindCss;

use kiwi_core::FileRules;

/// Directory holding page components, relative to the project root.
pub const PAGES_DIR: &str = "src/pages";

/// Rules for project files that ask before replacing an existing copy.
fn confirm_rules(display_path: &str) -> FileRules {
    FileRules::confirm(format!("{} already exists, overwrite it?", display_path))
}
