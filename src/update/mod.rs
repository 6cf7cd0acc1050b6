//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod outline;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::host::DocumentHost;
use crate::messages::{Msg, OutlineMsg};
use crate::model::OutlineModel;

pub use outline::{close_panel, update_outline};

/// Main update function - dispatches to sub-handlers
pub fn update<H: DocumentHost + ?Sized>(
    model: &mut OutlineModel,
    host: &mut H,
    msg: Msg,
) -> Option<Cmd> {
    // Skip span noise for the periodic sampler
    let is_noisy = matches!(&msg, Msg::Outline(OutlineMsg::SampleTick { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        debug!(target: "message", msg = msg_name, "processing");
        Some(span!(Level::DEBUG, "update", msg = msg_name).entered())
    };

    match msg {
        Msg::Outline(m) => update_outline(model, host, m),
        Msg::Quit => {
            close_panel(model);
            Some(Cmd::Quit)
        }
    }
}

fn msg_type_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::Outline(m) => match m {
            OutlineMsg::Refresh => "Outline::Refresh",
            OutlineMsg::RefreshDue { .. } => "Outline::RefreshDue",
            OutlineMsg::SampleTick { .. } => "Outline::SampleTick",
            OutlineMsg::Activate(_) => "Outline::Activate",
            OutlineMsg::PanelOpened => "Outline::PanelOpened",
            OutlineMsg::PanelClosed => "Outline::PanelClosed",
            OutlineMsg::Host(_) => "Outline::Host",
        },
        Msg::Quit => "Quit",
    }
}
