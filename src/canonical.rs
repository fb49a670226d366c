// Mon Feb 9 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

pub const ARTICLE_PREFIX: &str = "/wiki/";

// The backward frontier walks "what links here" pages, so its raw labels
// carry this extra path segment even though they denote the same article.
pub const BACKWARD_MARKER: &str = "/Special:WhatLinksHere";

static DENIED_NAMESPACES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"/wiki/Category",
        r"/wiki/Help",
        r"/wiki/Wikipedia",
        r"/wiki/Special",
        r"/wiki/Main_Page",
        r"/wiki/Template",
        r"/wiki/File",
        r"/wiki/Portal",
        r"/wiki/Talk",
        r"/wiki/Verifiability",
        r"/wiki/Notability",
        r"/wiki/Geographic_coordinate_system",
        r"/wiki/User",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Maps a raw, possibly direction-tagged label to the identity used for
/// cross-frontier comparison. Idempotent; malformed input maps to itself.
pub fn canonicalize(raw_label: &str) -> String {
    raw_label.replace(BACKWARD_MARKER, "")
}

/// Rewrites an article label into its backward-direction form
/// (`/wiki/Special:WhatLinksHere/<title>`).
pub fn mark_backward(raw_label: &str) -> String {
    let title = raw_label.strip_prefix(ARTICLE_PREFIX).unwrap_or(raw_label);
    format!("{}Special:WhatLinksHere/{}", ARTICLE_PREFIX, title)
}

pub fn is_backward(raw_label: &str) -> bool {
    raw_label.contains(BACKWARD_MARKER)
}

/// Article-namespace filter applied before links are offered for admission.
/// Maintenance and meta namespaces are not part of the route graph.
pub fn is_link_admissible(raw_label: &str) -> bool {
    if !raw_label.starts_with("/wiki") {
        return false;
    }
    !DENIED_NAMESPACES.iter().any(|re| re.is_match(raw_label))
}

/// Turns user input ("Sicilian language" or "/wiki/Sicilian_language")
/// into the article-path form used as a raw label.
pub fn article_path(input: &str) -> String {
    if input.starts_with(ARTICLE_PREFIX) {
        input.to_string()
    } else {
        format!("{}{}", ARTICLE_PREFIX, input.trim().replace(' ', "_"))
    }
}

/// Full URL for display and refetch.
pub fn complete_link(site_base: &str, raw_label: &str) -> String {
    format!("{}{}", site_base, canonicalize(raw_label))
}

/// Human-readable article title: marker stripped, `/wiki/` prefix removed.
pub fn display_title(raw_label: &str) -> String {
    let identity = canonicalize(raw_label);
    identity
        .strip_prefix(ARTICLE_PREFIX)
        .unwrap_or(&identity)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_strips_backward_marker() {
        assert_eq!(
            canonicalize("/wiki/Special:WhatLinksHere/Rust"),
            "/wiki/Rust"
        );
        assert_eq!(canonicalize("/wiki/Rust"), "/wiki/Rust");
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let labels = ["/wiki/Rust", "/wiki/Special:WhatLinksHere/Rust", "garbage"];
        for label in labels {
            let once = canonicalize(label);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_canonicalize_direction_agnostic() {
        let labels = ["/wiki/Rust", "/wiki/Sicilian_language", "/wiki/A_(letter)"];
        for label in labels {
            assert_eq!(canonicalize(&mark_backward(label)), canonicalize(label));
        }
    }

    #[test]
    fn test_malformed_input_maps_to_itself() {
        assert_eq!(canonicalize("not a url at all"), "not a url at all");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_mark_backward() {
        assert_eq!(
            mark_backward("/wiki/Rust"),
            "/wiki/Special:WhatLinksHere/Rust"
        );
        assert!(is_backward(&mark_backward("/wiki/Rust")));
        assert!(!is_backward("/wiki/Rust"));
    }

    #[test]
    fn test_namespace_filter() {
        assert!(is_link_admissible("/wiki/Rust_(programming_language)"));
        assert!(!is_link_admissible("/wiki/Category:Programming"));
        assert!(!is_link_admissible("/wiki/Special:Random"));
        assert!(!is_link_admissible("/wiki/Talk:Rust"));
        assert!(!is_link_admissible("/wiki/Main_Page"));
        assert!(!is_link_admissible("https://example.com/wiki/Rust"));
        assert!(!is_link_admissible("#cite_note-1"));
    }

    #[test]
    fn test_article_path() {
        assert_eq!(article_path("Sicilian language"), "/wiki/Sicilian_language");
        assert_eq!(article_path("/wiki/Rust"), "/wiki/Rust");
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("/wiki/Special:WhatLinksHere/Rust"), "Rust");
        assert_eq!(display_title("/wiki/Rust"), "Rust");
    }
}
