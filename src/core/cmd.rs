use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, logging, etc.). Commands
/// capture application intent (what to do); the executor decides how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Fetch the dashboard overview from the backend. The generation tags
    /// the request so a stale response can be discarded by `update`.
    FetchOverview {
        generation: u64,
    },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchOverview { .. } => true,

            Cmd::Tui(..) | Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) => 0,

            // Network-related has medium priority
            Cmd::FetchOverview { .. } => 1,

            // Logging has lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 2,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}

/// Command execution result
#[derive(Debug, Clone)]
pub enum CmdResult {
    /// Success (may generate new messages)
    Success,
    /// Error
    Error(String),
    /// Still executing (for async commands)
    Pending,
}
