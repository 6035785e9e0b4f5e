//! Top-level view selection for the application shell.
//!
//! DESIGN
//! ======
//! The shell is a three-way switch with no guards: any view can be reached
//! from any other in one step and there is no terminal view.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// One of the mutually exclusive top-level screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Home,
    Map,
    Report,
}

impl ActiveView {
    pub const ALL: [Self; 3] = [Self::Home, Self::Map, Self::Report];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Map => "Map",
            Self::Report => "Report",
        }
    }
}

/// Shell state held by the root page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub active_view: ActiveView,
}

impl ShellState {
    /// Switch to `view`. Returns `true` when the view actually changed.
    pub fn navigate(&mut self, view: ActiveView) -> bool {
        let changed = self.active_view != view;
        self.active_view = view;
        changed
    }

    /// Return to the home screen.
    pub fn go_home(&mut self) {
        self.navigate(ActiveView::Home);
    }
}
