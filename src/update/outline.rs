//! Outline panel update handlers
//!
//! Refresh, change sampling and item activation. Every handler runs to
//! completion; delays are requested through [`Cmd`] and come back as messages.

use crate::commands::Cmd;
use crate::host::DocumentHost;
use crate::messages::{HostEvent, OutlineMsg};
use crate::model::{DocumentTracker, OutlineModel, RenderedOutline};
use crate::outline::{extract_markers, outlines_equivalent, MarkerItem};
use crate::tracing::OutlineSnapshot;

/// Handle outline panel messages
pub fn update_outline<H: DocumentHost + ?Sized>(
    model: &mut OutlineModel,
    host: &mut H,
    msg: OutlineMsg,
) -> Option<Cmd> {
    match msg {
        OutlineMsg::PanelOpened => {
            if !model.panel_open {
                tracing::info!("outline: panel opened");
            }
            model.panel_open = true;
            model.retry_armed = model.config.retry_on_empty;
            let delay = model.config.settle_ms;
            Some(schedule_refresh(model, delay))
        }

        OutlineMsg::PanelClosed => {
            close_panel(model);
            None
        }

        OutlineMsg::Host(event) => {
            if !model.panel_open {
                return None;
            }
            tracing::debug!("outline: host event {:?}", event);
            let delay = match event {
                // Edits arrive in bursts: wait for a quiet period
                HostEvent::DocumentModified => {
                    model.config.debounce_ms.max(model.config.settle_ms)
                }
                HostEvent::LayoutReady => {
                    model.retry_armed = model.config.retry_on_empty;
                    model.config.settle_ms
                }
                HostEvent::ActiveViewChanged | HostEvent::DocumentOpened => model.config.settle_ms,
            };
            Some(schedule_refresh(model, delay))
        }

        OutlineMsg::Refresh => {
            if !model.panel_open {
                return None;
            }
            refresh(model, host)
        }

        OutlineMsg::RefreshDue { token } => {
            if !model.pending_refresh.take_if_current(token) {
                tracing::debug!("outline: refresh token {} superseded", token);
                return None;
            }
            if !model.panel_open {
                return None;
            }
            refresh(model, host)
        }

        OutlineMsg::SampleTick { generation } => sample(model, host, generation),

        OutlineMsg::Activate(item) => {
            activate(model, host, &item);
            None
        }
    }
}

/// Cancel pending work and forget the tracked document.
///
/// Idempotent: closing an already-closed panel changes nothing.
pub fn close_panel(model: &mut OutlineModel) {
    if model.panel_open {
        tracing::info!("outline: panel closed");
    }
    model.panel_open = false;
    model.retry_armed = false;
    model.pending_refresh.cancel();
    model.monitor.stop();
    model.tracker.clear();
    model.rendered = RenderedOutline::NoDocument;
}

/// Arm the single pending refresh, superseding any earlier one
fn schedule_refresh(model: &mut OutlineModel, delay_ms: u64) -> Cmd {
    let token = model.pending_refresh.schedule();
    Cmd::ScheduleRefresh { token, delay_ms }
}

/// Resolve the current document, re-extract and replace the rendered outline
fn refresh<H: DocumentHost + ?Sized>(model: &mut OutlineModel, host: &mut H) -> Option<Cmd> {
    model.refresh_count += 1;

    let Some(doc) = model.tracker.resolve(&*host) else {
        return Some(show_no_document(model));
    };

    // The capability can vanish between resolution and use
    let Some(text) = host.text(doc.view) else {
        tracing::debug!("outline: text of {} unavailable", doc.path);
        model.tracker.clear();
        return Some(show_no_document(model));
    };

    model.retry_armed = false;
    let items = extract_markers(&text);
    tracing::debug!(
        "outline: refresh #{} {} -> {} items",
        model.refresh_count,
        doc.path,
        items.len()
    );
    model.rendered = RenderedOutline::Items {
        path: doc.path.clone(),
        items,
    };

    let sampling = if model.monitor.is_monitoring(&doc) {
        Cmd::None
    } else {
        let generation = model.monitor.start(doc);
        Cmd::ScheduleSample {
            generation,
            delay_ms: model.config.sample_interval_ms,
        }
    };

    Some(Cmd::batch(vec![Cmd::Redraw, sampling]))
}

fn show_no_document(model: &mut OutlineModel) -> Cmd {
    model.monitor.stop();
    model.rendered = RenderedOutline::NoDocument;

    // Host startup can briefly report no documents at all: look once more
    let retry = if model.retry_armed {
        model.retry_armed = false;
        tracing::debug!("outline: no document yet, retrying once");
        let delay = model.config.settle_ms;
        schedule_refresh(model, delay)
    } else {
        Cmd::None
    };

    Cmd::batch(vec![Cmd::Redraw, retry])
}

/// One change-monitor tick: re-extract and schedule a debounced refresh on change
fn sample<H: DocumentHost + ?Sized>(
    model: &mut OutlineModel,
    host: &mut H,
    generation: u64,
) -> Option<Cmd> {
    if !model.panel_open || !model.monitor.accepts(generation) {
        tracing::trace!("outline: dropping stale sample gen={}", generation);
        return None;
    }
    let target = model.monitor.target()?.clone();

    // Resolving here notices a switch to another document, a navigation
    // within the view, or a torn-down capability
    let text = if model.tracker.resolve(&*host).as_ref() == Some(&target) {
        host.text(target.view)
    } else {
        None
    };

    let Some(text) = text else {
        tracing::debug!("outline: {} no longer sampleable, stopping monitor", target.path);
        model.monitor.stop();
        let delay = model.config.settle_ms;
        return Some(schedule_refresh(model, delay));
    };

    let rearm = Cmd::ScheduleSample {
        generation,
        delay_ms: model.config.sample_interval_ms,
    };

    let items = extract_markers(&text);
    if outlines_equivalent(&items, model.rendered.items()) {
        return Some(rearm);
    }

    if let Some(diff) = OutlineSnapshot::from_items(model.rendered.items())
        .diff(&OutlineSnapshot::from_items(&items))
    {
        tracing::debug!("outline: change in {}: {}", target.path, diff);
    }

    let delay = model.config.debounce_ms;
    let refresh = schedule_refresh(model, delay);
    Some(Cmd::batch(vec![refresh, rearm]))
}

/// Move the tracked document's cursor to the start of the item's line.
///
/// A stale click (document closed or capability gone) is silently ignored.
fn activate<H: DocumentHost + ?Sized>(model: &OutlineModel, host: &mut H, item: &MarkerItem) {
    let Some(doc) = model.tracker.current() else {
        tracing::debug!("outline: activate with no tracked document");
        return;
    };

    if !DocumentTracker::is_valid(&*host, doc)
        || host.path(doc.view).as_deref() != Some(doc.path.as_str())
    {
        tracing::debug!("outline: ignoring stale activation in {}", doc.path);
        return;
    }

    tracing::debug!("outline: jump to {}:{}", doc.path, item.line + 1);
    host.set_cursor(doc.view, item.line, 0);
    host.focus(doc.view);
    host.scroll_into_view(doc.view, item.line, item.line);
}
