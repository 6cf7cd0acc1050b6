//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command
    #[default]
    None,
    /// Re-render the outline surface from the model
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // === Timer Commands ===
    /// Start a one-shot refresh timer
    /// After delay_ms, sends OutlineMsg::RefreshDue { token }
    ScheduleRefresh { token: u64, delay_ms: u64 },
    /// Start a one-shot sampling timer
    /// After delay_ms, sends OutlineMsg::SampleTick { generation }
    ScheduleSample { generation: u64, delay_ms: u64 },

    /// Request runtime exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Timers redraw later, when their message arrives
            Cmd::ScheduleRefresh { .. } => false,
            Cmd::ScheduleSample { .. } => false,
            Cmd::Quit => false,
        }
    }

    /// Flatten into the list of leaf commands (for inspection in tests and logs)
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
