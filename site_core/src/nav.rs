//! Mobile menu open/closed state.

/// Where a document click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the mobile nav container.
    Menu,
    /// On (or inside) the menu toggle button.
    Toggle,
    Elsewhere,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Outside-click rule: a click away from both the menu and its toggle
    /// closes an open menu. Returns whether the menu was closed.
    pub fn on_document_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Elsewhere => self.close(),
            ClickTarget::Menu | ClickTarget::Toggle => false,
        }
    }
}
