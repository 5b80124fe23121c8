mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Preview,
    Source,
    Labels,
    Help,
}

/// Views reachable from the tab bar, in display order.
pub const TABS: [AppView; 3] = [AppView::Preview, AppView::Source, AppView::Labels];
