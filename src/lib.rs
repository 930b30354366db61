//! Social network icon links.
//!
//! A site key ("github", "linkedin", "twitter") and a url resolve to a link
//! wrapping that site's icon, or to nothing when the site is missing or
//! unknown. The same resolution backs the Dioxus components, the static HTML
//! renderer and the terminal preview.

pub mod app;
pub mod components;
pub mod config;
pub mod icons;
pub mod link;
pub mod render;
pub mod theme;
pub mod ui;

pub use components::{SocialIcon, SocialIconProps, SocialIcons, SocialIconsProps};
pub use link::{resolve, resolve_all, ResolvedLink, SocialLinkSpec, DEFAULT_CLASS};
