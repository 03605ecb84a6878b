use std::collections::VecDeque;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    integration::cmd_executor::CmdExecutor,
};

/// Runtime driving the Elm cycle: raw messages are translated to domain
/// messages, processed by the pure update function, and the resulting
/// commands are dispatched through the executor.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Set the command executor
    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a domain message directly (for testing and startup)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send a raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get a raw message sender for background services
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        for cmd in &commands {
            self.cmd_queue.push_back(cmd.clone());
        }

        commands
    }

    /// Process all queued raw and domain messages
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Translate internally queued raw messages first
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                self.msg_queue.push_back(msg);
            }
        }

        // Then raw messages from external sources (input, services)
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                self.msg_queue.push_back(msg);
            }
        }

        // Process domain messages
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Drain pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<()> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(());
        }

        if let Some(executor) = &self.cmd_executor {
            executor.execute_commands(&commands)?;
        } else {
            log::warn!(
                "Dropping {} command(s): no executor configured",
                commands.len()
            );
        }
        Ok(())
    }

    /// One full cycle: translate, update, execute
    pub fn run_update_cycle(&mut self) -> Result<()> {
        self.process_all_messages();
        self.execute_pending_commands()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::{system::SystemMsg, ui::UiMsg};
    use crate::domain::route::Route;

    #[test]
    fn test_send_msg_updates_state() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.send_msg(Msg::System(SystemMsg::Quit));
        let cmds = runtime.process_all_messages();

        assert!(cmds.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_raw_msg_is_translated() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.send_raw_msg(RawMsg::Quit);
        runtime.process_all_messages();

        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_external_raw_sender_feeds_runtime() {
        let mut runtime = Runtime::new(AppState::default());
        let sender = runtime.raw_sender();

        sender.send(RawMsg::Quit).expect("send");
        runtime.process_all_messages();

        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_commands_are_queued_until_executed() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.send_msg(Msg::Ui(UiMsg::Navigate(Route::Dashboard)));
        let cmds = runtime.process_all_messages();

        assert_eq!(cmds, vec![Cmd::FetchOverview { generation: 1 }]);
        assert_eq!(
            runtime.pending_commands(),
            vec![Cmd::FetchOverview { generation: 1 }]
        );
        // Draining empties the queue.
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_update_cycle_without_executor_drops_commands() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.send_msg(Msg::Ui(UiMsg::Navigate(Route::Dashboard)));
        runtime.run_update_cycle().expect("cycle");

        assert!(runtime.pending_commands().is_empty());
    }
}
