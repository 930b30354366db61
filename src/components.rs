//! Dioxus components for social icon links

#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::icons::IconAsset;
use crate::link::{self, ResolvedLink, SocialLinkSpec};

#[derive(Props, Clone, PartialEq)]
pub struct SocialIconProps {
    pub url: String,
    pub site: Option<String>,
    /// Overrides [`link::DEFAULT_CLASS`]
    pub class: Option<String>,
}

/// A link wrapping the icon for `site`, or nothing when the site is missing
/// or has no icon.
pub fn SocialIcon(props: SocialIconProps) -> Element {
    let spec = SocialLinkSpec {
        url: props.url,
        site: props.site,
    };

    match link::resolve(&spec, props.class.as_deref()) {
        Some(link) => rsx! {
            IconLink { link }
        },
        None => rsx! {},
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SocialIconsProps {
    pub links: Vec<SocialLinkSpec>,
    /// Applied to every link
    pub class: Option<String>,
}

/// Renders each spec in order; entries that resolve to nothing are skipped.
pub fn SocialIcons(props: SocialIconsProps) -> Element {
    let resolved = link::resolve_all(&props.links, props.class.as_deref());

    rsx! {
        for link in resolved.into_iter() {
            IconLink { key: "{link.key}", link: link.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IconLinkProps {
    pub link: ResolvedLink,
}

/// Anchor around an inline SVG icon
pub fn IconLink(props: IconLinkProps) -> Element {
    let link = props.link;
    let target = link.external.then_some("_blank");
    let rel = link.external.then_some("noopener noreferrer");

    rsx! {
        a {
            href: "{link.href}",
            class: "{link.class}",
            aria_label: "{link.label}",
            target,
            rel,
            IconSvg { icon: link.icon }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IconSvgProps {
    pub icon: &'static IconAsset,
}

pub fn IconSvg(props: IconSvgProps) -> Element {
    let icon = props.icon;

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{icon.view_box}",
            fill: "currentColor",
            "aria-hidden": "true",
            g {
                transform: icon.transform,
                for d in icon.paths.iter() {
                    path { d: "{d}" }
                }
            }
        }
    }
}
