use crate::config::NavigationConfig;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// What a click somewhere on the page means for the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    Toggle,
    NavLink,
    InsideHeader,
    Outside,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    state: MenuState,
    header_offset: f64,
}

impl NavigationController {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            state: MenuState::default(),
            header_offset: config.header_offset,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Applies a click and returns whether the menu is open afterwards.
    pub fn handle_click(&mut self, click: MenuClick) -> bool {
        match click {
            MenuClick::Toggle => {
                self.state.toggle();
            }
            MenuClick::NavLink | MenuClick::Outside => {
                self.state.close();
            }
            MenuClick::InsideHeader => {}
        }
        self.state.is_open()
    }

    /// Absolute scroll position that puts a section just below the fixed header.
    pub fn scroll_target(&self, element_top: f64, page_offset: f64) -> f64 {
        element_top + page_offset - self.header_offset
    }
}

/// The section id of a same-page anchor (`#services` -> `services`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavigationController {
        NavigationController::new(&NavigationConfig::default())
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut nav = controller();
        assert!(nav.handle_click(MenuClick::Toggle));
        assert!(!nav.handle_click(MenuClick::Toggle));
    }

    #[test]
    fn test_links_and_outside_clicks_close() {
        let mut nav = controller();
        nav.handle_click(MenuClick::Toggle);
        assert!(!nav.handle_click(MenuClick::NavLink));

        nav.handle_click(MenuClick::Toggle);
        assert!(nav.handle_click(MenuClick::InsideHeader));
        assert!(!nav.handle_click(MenuClick::Outside));
        assert!(!nav.handle_click(MenuClick::Outside));
    }

    #[test]
    fn test_close_reports_previous_state() {
        let mut state = MenuState::default();
        assert!(!state.close());
        state.toggle();
        assert!(state.close());
        assert!(!state.is_open());
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        let nav = controller();
        assert_eq!(nav.scroll_target(400.0, 250.0), 590.0);
        assert_eq!(nav.scroll_target(-100.0, 250.0), 90.0);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }
}
