/// Popup panel state machine
///
/// All popup behavior that is independent of the DOM lives here: the
/// once-per-second clock, the once-per-lifetime active-tab title, and
/// the liveness guard that makes every event after close a no-op. The
/// Yew layer in `ui::popup` only wires browser events to `apply`.
use crate::tab_data::TabInfo;

/// Shown in place of the active tab title when none was fetched.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Events the popup reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Timer fired; payload is the sampled wall clock in ms since epoch.
    Tick(f64),
    /// The active-tab query resolved with the host's tab list.
    ActiveTab(Vec<TabInfo>),
    /// The popup is being torn down.
    Closed,
}

/// Transient, UI-local popup state. Discarded when the popup closes;
/// the browser recreates the panel (and this state) on every open.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Liveness flag: true from mount until `Closed`.
    pub open: bool,
    /// Wall clock in ms since epoch, replaced on every tick.
    pub current_time: f64,
    /// Active tab title, empty until a non-empty title arrives.
    pub active_tab_title: String,
    /// The query has been answered, whatever the answer looked like.
    title_resolved: bool,
}

impl PanelState {
    pub fn new(now_ms: f64) -> PanelState {
        PanelState {
            open: true,
            current_time: now_ms,
            active_tab_title: String::new(),
            title_resolved: false,
        }
    }

    /// Apply one event. Invariants: `current_time` only moves while the
    /// panel is open; `active_tab_title` is written at most once per
    /// lifetime; nothing mutates after `Closed`.
    pub fn apply(&mut self, msg: PanelMsg) {
        match msg {
            PanelMsg::Tick(now) if self.open => {
                self.current_time = now;
            }
            PanelMsg::ActiveTab(tabs) if self.open && !self.title_resolved => {
                self.title_resolved = true;
                if let Some(title) = tabs.first().and_then(|tab| tab.title.as_deref()) {
                    if !title.is_empty() {
                        self.active_tab_title = title.to_string();
                    }
                }
            }
            PanelMsg::Closed => {
                self.open = false;
            }
            _ => {}
        }
    }

    /// Title to render: the fetched one, or the placeholder when the
    /// stored value is still empty.
    pub fn display_title(&self) -> &str {
        if self.active_tab_title.is_empty() {
            UNKNOWN_TITLE
        } else {
            &self.active_tab_title
        }
    }
}
