//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::outline::MarkerItem;

/// Fire-and-forget notifications from the host application.
///
/// None carries a payload: each only means "something changed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The host's active view changed
    ActiveViewChanged,
    /// A document's text was modified
    DocumentModified,
    /// A document was opened
    DocumentOpened,
    /// The host finished laying out its views
    LayoutReady,
}

/// Outline panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineMsg {
    /// Refresh immediately
    Refresh,
    /// A scheduled refresh timer fired
    RefreshDue { token: u64 },
    /// A change-monitor sampling timer fired
    SampleTick { generation: u64 },
    /// Jump to an item (click on an outline row)
    Activate(MarkerItem),
    /// The outline panel was opened
    PanelOpened,
    /// The outline panel was closed
    PanelClosed,
    /// Notification from the host
    Host(HostEvent),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Outline(OutlineMsg),
    /// Stop the runtime loop
    Quit,
}

impl From<OutlineMsg> for Msg {
    fn from(msg: OutlineMsg) -> Self {
        Msg::Outline(msg)
    }
}

impl From<HostEvent> for Msg {
    fn from(event: HostEvent) -> Self {
        Msg::Outline(OutlineMsg::Host(event))
    }
}
