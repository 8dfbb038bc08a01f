/// Vertical scroll offset (px) past which the navbar gets a solid background
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Experience", href: "#experience" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Contact", href: "#contact" },
];

/// "01." for the first item
pub fn ordinal(index: usize) -> String {
    format!("{:02}.", index + 1)
}

/// Navbar UI state, owned by a single `Navbar` instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "navbar navbar--scrolled"
        } else {
            "navbar"
        }
    }
}
