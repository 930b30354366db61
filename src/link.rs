//! Resolution of social link specs into renderable links
//!
//! Every surface (Dioxus components, HTML output, terminal preview) renders
//! from a [`ResolvedLink`]. A spec whose site is missing or not registered
//! resolves to nothing and is skipped without an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::{self, IconAsset};

/// Class applied to a link when the caller gives none
pub const DEFAULT_CLASS: &str = "social-icon";

/// One social link to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkSpec {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl SocialLinkSpec {
    pub fn new(site: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            site: Some(site.into()),
        }
    }

    /// A link without a site. Never renders.
    pub fn without_site(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            site: None,
        }
    }
}

/// Why a spec renders nothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Omission {
    #[error("no site given")]
    MissingSite,
    #[error("no icon registered for site {0:?}")]
    UnknownSite(String),
}

/// A link that will render, with everything the renderers need
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    /// Position of the source spec in its list
    pub key: usize,
    pub href: String,
    /// Accessible label, always the site key
    pub label: String,
    pub class: String,
    pub external: bool,
    pub icon: &'static IconAsset,
}

/// Resolve a spec, reporting why it would be omitted
pub fn try_resolve(spec: &SocialLinkSpec, class: Option<&str>) -> Result<ResolvedLink, Omission> {
    let site = match spec.site.as_deref() {
        Some(site) if !site.is_empty() => site,
        _ => return Err(Omission::MissingSite),
    };

    let icon = icons::lookup(site).ok_or_else(|| Omission::UnknownSite(site.to_string()))?;

    Ok(ResolvedLink {
        key: 0,
        href: spec.url.clone(),
        label: site.to_string(),
        class: class.unwrap_or(DEFAULT_CLASS).to_string(),
        external: is_external(&spec.url),
        icon,
    })
}

/// Resolve a single spec. `None` means render nothing.
pub fn resolve(spec: &SocialLinkSpec, class: Option<&str>) -> Option<ResolvedLink> {
    match try_resolve(spec, class) {
        Ok(link) => Some(link),
        Err(reason) => {
            tracing::debug!(url = %spec.url, %reason, "Omitting social link");
            None
        }
    }
}

/// Resolve a list of specs with a shared class.
///
/// Input order is kept and each link is keyed by its index in `specs`, so
/// omitted entries leave gaps in the keys.
pub fn resolve_all(specs: &[SocialLinkSpec], class: Option<&str>) -> Vec<ResolvedLink> {
    specs
        .iter()
        .enumerate()
        .filter_map(|(key, spec)| resolve(spec, class).map(|link| ResolvedLink { key, ..link }))
        .collect()
}

/// Specs that would be omitted, with their index and reason
pub fn omissions(specs: &[SocialLinkSpec]) -> Vec<(usize, &SocialLinkSpec, Omission)> {
    specs
        .iter()
        .enumerate()
        .filter_map(|(i, spec)| try_resolve(spec, None).err().map(|reason| (i, spec, reason)))
        .collect()
}

/// Human readable report of the specs that render nothing
pub fn check_report(specs: &[SocialLinkSpec]) -> String {
    let omitted = omissions(specs);
    if omitted.is_empty() {
        return format!("All {} links render", specs.len());
    }

    let mut lines: Vec<String> = omitted
        .iter()
        .map(|(i, spec, reason)| format!("#{} {}: {}", i, spec.url, reason))
        .collect();
    lines.push(format!("{} of {} links will be omitted", omitted.len(), specs.len()));
    lines.join("\n")
}

/// Absolute http(s) URLs open in a new tab
pub fn is_external(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_site_renders_nothing() {
        assert!(resolve(&SocialLinkSpec::without_site("https://example.com"), None).is_none());
        assert!(resolve(&SocialLinkSpec::new("", "https://example.com"), None).is_none());
        assert_eq!(
            try_resolve(&SocialLinkSpec::new("", "x"), None),
            Err(Omission::MissingSite)
        );
    }

    #[test]
    fn test_unknown_site_renders_nothing() {
        for site in ["mastodon", "GitHub", "Twitter", " github"] {
            let spec = SocialLinkSpec::new(site, "https://example.com");
            assert!(resolve(&spec, None).is_none(), "{site} should be omitted");
            assert_eq!(
                try_resolve(&spec, None),
                Err(Omission::UnknownSite(site.to_string()))
            );
        }
    }

    #[test]
    fn test_github_link() {
        let link = resolve(&SocialLinkSpec::new("github", "https://github.com/octo"), None).unwrap();
        assert_eq!(link.href, "https://github.com/octo");
        assert_eq!(link.label, "github");
        assert_eq!(link.class, DEFAULT_CLASS);
        assert_eq!(link.icon.name, "GitHub");
        assert!(link.external);
    }

    #[test]
    fn test_class_override() {
        let spec = SocialLinkSpec::new("linkedin", "https://linkedin.com/in/someone");
        assert_eq!(resolve(&spec, Some("footer-icon")).unwrap().class, "footer-icon");
        assert_eq!(resolve(&spec, None).unwrap().class, DEFAULT_CLASS);
    }

    #[test]
    fn test_resolve_all_keeps_order_and_position_keys() {
        let specs = vec![
            SocialLinkSpec::new("github", "a"),
            SocialLinkSpec::without_site("b"),
            SocialLinkSpec::new("linkedin", "c"),
        ];

        let links = resolve_all(&specs, Some("shared"));
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        let keys: Vec<_> = links.iter().map(|l| l.key).collect();

        assert_eq!(hrefs, vec!["a", "c"]);
        assert_eq!(keys, vec![0, 2]);
        assert!(links.iter().all(|l| l.class == "shared"));
    }

    #[test]
    fn test_resolve_all_does_not_dedupe() {
        let specs = vec![
            SocialLinkSpec::new("twitter", "https://twitter.com/x"),
            SocialLinkSpec::new("twitter", "https://twitter.com/x"),
        ];
        assert_eq!(resolve_all(&specs, None).len(), 2);
    }

    #[test]
    fn test_omissions_report() {
        let specs = vec![
            SocialLinkSpec::new("github", "a"),
            SocialLinkSpec::without_site("b"),
            SocialLinkSpec::new("myspace", "c"),
        ];

        let report = omissions(&specs);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].0, 1);
        assert_eq!(report[0].2, Omission::MissingSite);
        assert_eq!(report[1].0, 2);
        assert_eq!(report[1].2.to_string(), "no icon registered for site \"myspace\"");
    }

    #[test]
    fn test_check_report_lists_reasons() {
        let specs = vec![
            SocialLinkSpec::new("github", "a"),
            SocialLinkSpec::without_site("b"),
            SocialLinkSpec::new("myspace", "c"),
        ];

        assert_eq!(
            check_report(&specs),
            "#1 b: no site given\n\
             #2 c: no icon registered for site \"myspace\"\n\
             2 of 3 links will be omitted"
        );
    }

    #[test]
    fn test_check_report_all_render() {
        let specs = vec![
            SocialLinkSpec::new("github", "a"),
            SocialLinkSpec::new("twitter", "b"),
        ];
        assert_eq!(check_report(&specs), "All 2 links render");
        assert_eq!(check_report(&[]), "All 0 links render");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com"));
        assert!(is_external("HTTP://example.com"));
        assert!(is_external("//cdn.example.com"));
        assert!(!is_external("/community"));
        assert!(!is_external("mailto:someone@example.com"));
    }
}
