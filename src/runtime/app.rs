use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::config::OutlineConfig;
use crate::host::{DocumentHost, OutlineSurface};
use crate::messages::{HostEvent, Msg, OutlineMsg};
use crate::model::OutlineModel;
use crate::outline::MarkerItem;
use crate::update::update;

/// Cloneable sender for feeding messages into a running [`OutlineRuntime`]
/// from other threads (host event callbacks, file watchers, click handlers).
#[derive(Debug, Clone)]
pub struct OutlineHandle {
    tx: Sender<Msg>,
}

impl OutlineHandle {
    /// Queue a message; returns false if the runtime is gone
    pub fn send(&self, msg: impl Into<Msg>) -> bool {
        self.tx.send(msg.into()).is_ok()
    }

    pub fn refresh(&self) -> bool {
        self.send(OutlineMsg::Refresh)
    }

    pub fn notify(&self, event: HostEvent) -> bool {
        self.send(event)
    }

    pub fn activate(&self, item: MarkerItem) -> bool {
        self.send(OutlineMsg::Activate(item))
    }

    pub fn quit(&self) -> bool {
        self.send(Msg::Quit)
    }
}

/// Single-threaded outline driver.
///
/// Only the thread that owns the runtime touches the model, host and surface.
/// Timers are one-shot threads that sleep and post a message back, so every
/// state change is serialized through [`OutlineRuntime::dispatch`].
pub struct OutlineRuntime<H: DocumentHost, S: OutlineSurface> {
    model: OutlineModel,
    host: H,
    surface: S,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    quit: bool,
}

impl<H: DocumentHost, S: OutlineSurface> OutlineRuntime<H, S> {
    pub fn new(config: OutlineConfig, host: H, surface: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: OutlineModel::new(config),
            host,
            surface,
            msg_tx,
            msg_rx,
            quit: false,
        }
    }

    pub fn handle(&self) -> OutlineHandle {
        OutlineHandle {
            tx: self.msg_tx.clone(),
        }
    }

    pub fn model(&self) -> &OutlineModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access for the owning thread (e.g. applying edits).
    ///
    /// Follow up with a [`HostEvent`] so the outline learns about the change.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Run one message through update and perform the resulting commands
    pub fn dispatch(&mut self, msg: impl Into<Msg>) {
        if let Some(cmd) = update(&mut self.model, &mut self.host, msg.into()) {
            let redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if redraw {
                self.render();
            }
        }
    }

    /// Click on the outline row at `index`
    pub fn activate_row(&mut self, index: usize) -> bool {
        match self.model.rendered.items().get(index).cloned() {
            Some(item) => {
                self.dispatch(OutlineMsg::Activate(item));
                true
            }
            None => false,
        }
    }

    fn render(&mut self) {
        self.surface.render(&self.model.view());
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::ScheduleRefresh { token, delay_ms } => {
                self.send_after(delay_ms, OutlineMsg::RefreshDue { token });
            }
            Cmd::ScheduleSample {
                generation,
                delay_ms,
            } => {
                self.send_after(delay_ms, OutlineMsg::SampleTick { generation });
            }
            Cmd::Quit => {
                self.quit = true;
            }
        }
    }

    fn send_after(&self, delay_ms: u64, msg: OutlineMsg) {
        let tx = self.msg_tx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(delay_ms));
            let _ = tx.send(Msg::Outline(msg));
        });
    }

    /// Handle messages (including timer messages) as they arrive until
    /// `deadline` passes or the runtime quits
    pub fn run_until(&mut self, deadline: Instant) {
        while !self.quit {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match self.msg_rx.recv_timeout(deadline - now) {
                Ok(msg) => self.dispatch(msg),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    pub fn run_for(&mut self, duration: Duration) {
        self.run_until(Instant::now() + duration);
    }

    /// Handle messages until a [`Msg::Quit`] arrives
    pub fn run(&mut self) {
        while !self.quit {
            match self.msg_rx.recv() {
                Ok(msg) => self.dispatch(msg),
                Err(_) => break,
            }
        }
    }
}
