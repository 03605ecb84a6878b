use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::overview_service::OverviewOperation,
};

/// Command executor that bridges Elm commands to the overview service and
/// the TUI host. Senders are optional so the runtime works in tests without
/// any services attached; commands without a sink are dropped with a log.
#[derive(Clone, Default)]
pub struct CmdExecutor {
    overview_tx: Option<mpsc::UnboundedSender<OverviewOperation>>,
    tui_tx: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create a new command executor with no sinks attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the overview-service sender for executing fetch commands.
    pub fn set_overview_sender(&mut self, sender: mpsc::UnboundedSender<OverviewOperation>) {
        self.overview_tx = Some(sender);
    }

    /// Inject the TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_tx = Some(sender);
    }

    /// Execute a single command by routing it to the appropriate sink
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::FetchOverview { generation } => {
                if let Some(overview_tx) = &self.overview_tx {
                    overview_tx.send(OverviewOperation::Fetch {
                        generation: *generation,
                    })?;
                } else {
                    log::warn!("FetchOverview ignored: OverviewService not available");
                }
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(tui_tx) = &self.tui_tx {
                    let _ = tui_tx.send(tui_cmd.clone());
                } else {
                    log::warn!("TuiCommand ignored: no TUI sender configured");
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute a list of commands in order
    pub fn execute_commands(&self, cmds: &[Cmd]) -> Result<()> {
        for cmd in cmds {
            self.execute_command(cmd)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_fetch_routes_to_overview_sender() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_overview_sender(tx);

        executor
            .execute_command(&Cmd::FetchOverview { generation: 5 })
            .expect("execute");

        assert_eq!(
            rx.try_recv().expect("operation queued"),
            OverviewOperation::Fetch { generation: 5 }
        );
    }

    #[tokio::test]
    async fn test_fetch_without_sender_is_dropped() {
        let executor = CmdExecutor::new();
        // Must not error; the command is logged and dropped.
        executor
            .execute_command(&Cmd::FetchOverview { generation: 1 })
            .expect("execute");
    }

    #[tokio::test]
    async fn test_batch_executes_all() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_overview_sender(tx);

        let batch = Cmd::Batch(vec![
            Cmd::FetchOverview { generation: 1 },
            Cmd::LogInfo {
                message: "after".to_string(),
            },
        ]);
        executor.execute_command(&batch).expect("execute");

        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_resize_routes_to_tui_sender() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tx);

        executor
            .execute_command(&Cmd::Tui(TuiCommand::Resize {
                width: 100,
                height: 40,
            }))
            .expect("execute");

        assert_eq!(
            rx.try_recv().expect("command queued"),
            TuiCommand::Resize {
                width: 100,
                height: 40
            }
        );
    }
}
