//! # Menu State Machine
//!
//! ```text
//!                 ┌──────── invalid input ────────┐
//!                 ▼                               │
//!   start ──► MainMenu ──────────────────────────┘
//!              │   │   │
//!          1   │   │ 2 │ 3
//!              ▼   ▼   ▼
//!     RecordHire  ShowReport  Terminated
//!          │          │
//!          └── done ──┴──► MainMenu
//! ```
//!
//! The console controller owns the I/O; this module only decides where the
//! session goes next.

/// A valid main menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    /// Option 1: enter customer and equipment details.
    RecordHire,
    /// Option 2: print the earnings report.
    ShowReport,
    /// Option 3: leave the program.
    Exit,
}

/// Where the menu session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    MainMenu,
    RecordHire,
    ShowReport,
    Terminated,
}

impl MenuState {
    /// Applies a main menu choice.
    ///
    /// Choices only mean something at the main menu; any other state is
    /// returned unchanged.
    pub fn select(self, selection: MenuSelection) -> MenuState {
        match (self, selection) {
            (MenuState::MainMenu, MenuSelection::RecordHire) => MenuState::RecordHire,
            (MenuState::MainMenu, MenuSelection::ShowReport) => MenuState::ShowReport,
            (MenuState::MainMenu, MenuSelection::Exit) => MenuState::Terminated,
            (state, _) => state,
        }
    }

    /// Marks the current activity as finished.
    ///
    /// Recording a hire and showing the report both return to the main menu.
    pub fn finish(self) -> MenuState {
        match self {
            MenuState::RecordHire | MenuState::ShowReport => MenuState::MainMenu,
            state => state,
        }
    }

    /// True once the session has ended.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        matches!(self, MenuState::Terminated)
    }
}
