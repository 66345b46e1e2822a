//! Slide-in navigation drawer.

/// A navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Links in drawer order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Order", href: "/order" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Login", href: "/login" },
];

/// Open/closed state of the drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        tracing::debug!("nav drawer opened");
        self.open = true;
    }

    pub fn close(&mut self) {
        tracing::debug!("nav drawer closed");
        self.open = false;
    }

    /// Backdrop click.
    pub fn backdrop_clicked(&mut self) {
        self.close();
    }

    /// Activates the link at `index`, closing the drawer and returning the
    /// href to navigate to.
    pub fn activate(&mut self, index: usize) -> Option<&'static str> {
        let link = NAV_LINKS.get(index)?;
        self.close();
        Some(link.href)
    }

    /// Activates a link by label, ignoring case.
    pub fn activate_label(&mut self, label: &str) -> Option<&'static str> {
        let index = NAV_LINKS.iter().position(|l| l.label.eq_ignore_ascii_case(label))?;
        self.activate(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activating_link_closes_and_navigates() {
        let mut drawer = NavDrawer::new();
        drawer.open();
        assert_eq!(drawer.activate_label("order"), Some("/order"));
        assert!(!drawer.is_open());
    }

    #[test]
    fn unknown_link_keeps_drawer_open() {
        let mut drawer = NavDrawer::new();
        drawer.open();
        assert_eq!(drawer.activate(9), None);
        assert!(drawer.is_open());

        drawer.backdrop_clicked();
        assert!(!drawer.is_open());
    }
}
