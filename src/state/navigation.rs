//! Navigation bar state and link helpers

/// Rows of scrolling before the navigation bar turns sticky (100px at 20px a row)
pub const STICKY_THRESHOLD_ROWS: u16 = 5;

/// Page used when a path has no final segment
pub const DEFAULT_PAGE: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Navbar {
    scrolled: bool,
    menu_open: bool,
}

impl Navbar {
    pub fn on_scroll(&mut self, offset: u16) {
        self.scrolled = offset > STICKY_THRESHOLD_ROWS;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link collapses the menu
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

/// Final path segment, or the default page
pub fn page_from_path(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => DEFAULT_PAGE,
    }
}

/// Index of the link pointing at the current page
pub fn active_link(links: &[NavLink], page: &str) -> Option<usize> {
    links.iter().position(|link| link.href == page)
}

/// Target id of an in-page anchor, ignoring bare `#` and external links
pub fn resolve_anchor(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKS: &[NavLink] = &[
        NavLink {
            label: "Home",
            href: "index.html",
        },
        NavLink {
            label: "Contact",
            href: "contact.html",
        },
    ];

    #[test]
    fn test_sticky_threshold() {
        let mut navbar = Navbar::default();
        navbar.on_scroll(STICKY_THRESHOLD_ROWS);
        assert!(!navbar.is_scrolled());
        navbar.on_scroll(STICKY_THRESHOLD_ROWS + 1);
        assert!(navbar.is_scrolled());
        navbar.on_scroll(0);
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut navbar = Navbar::default();
        navbar.toggle_menu();
        assert!(navbar.is_menu_open());
        navbar.close_menu();
        assert!(!navbar.is_menu_open());
        navbar.close_menu();
        assert!(!navbar.is_menu_open());
    }

    #[test]
    fn test_page_from_path() {
        assert_eq!(page_from_path("/site/contact.html"), "contact.html");
        assert_eq!(page_from_path("contact.html"), "contact.html");
        assert_eq!(page_from_path("/site/"), DEFAULT_PAGE);
        assert_eq!(page_from_path(""), DEFAULT_PAGE);
    }

    #[test]
    fn test_active_link() {
        assert_eq!(active_link(LINKS, "contact.html"), Some(1));
        assert_eq!(active_link(LINKS, "missing.html"), None);
    }

    #[test]
    fn test_resolve_anchor() {
        assert_eq!(resolve_anchor("#about"), Some("about"));
        assert_eq!(resolve_anchor("#"), None);
        assert_eq!(resolve_anchor(""), None);
        assert_eq!(resolve_anchor("contact.html"), None);
    }
}
