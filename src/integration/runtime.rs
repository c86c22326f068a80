use std::{collections::VecDeque, sync::Arc};

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::{CardTiming, CmdExecutor},
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update_in_place,
    },
    infrastructure::greeting::GreetingSource,
};

/// Integration point between the Elm architecture and the outside world
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without side effects (commands are only queued)
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose commands are executed against `greeting_source`
    pub fn new_with_executor(
        initial_state: AppState,
        greeting_source: Arc<dyn GreetingSource>,
    ) -> Self {
        let timing = CardTiming::from(&initial_state.config.config.card);
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor =
            Some(CmdExecutor::new(runtime.msg_tx.clone(), greeting_source).with_timing(timing));
        runtime
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use new_with_executor() first.".to_string())
        }
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable state access for the host (mount/unmount)
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = &self.cmd_executor else {
            return Err("No command executor available. Use new_with_executor().".to_string());
        };

        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            tracing::debug!(?msg, "update");
        }
        let commands = update_in_place(msg, &mut self.state);
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state as it is now
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            for msg in domain_msgs {
                all_commands.extend(self.process_message(msg));
            }
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Results of side effects
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        if self.cmd_executor.is_none() {
            return Ok(vec![]);
        }
        self.execute_pending_commands()
    }

    /// Wait for the next side-effect result and process it (with everything
    /// else queued). Returns `false` once no sender is left.
    pub async fn process_next_external(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.msg_queue.push_back(msg);
                true
            }
            None => false,
        }
    }

    /// Cancel in-flight side effects
    pub fn shutdown(&self) {
        if let Some(executor) = &self.cmd_executor {
            executor.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{card::CardMsg, system::SystemMsg},
            state::CardPhase,
        },
        domain::theme::Theme,
        infrastructure::{config::Config, greeting::GreetingError},
    };

    struct Echo;

    #[async_trait]
    impl GreetingSource for Echo {
        async fn generate(&self, theme: Theme) -> Result<String, GreetingError> {
            Ok(format!("greeting for {theme}"))
        }
    }

    fn create_test_runtime() -> Runtime {
        let config = Config::embedded().expect("embedded config should parse");
        Runtime::new(AppState::new_with_seed(config, 3))
    }

    #[test]
    fn test_runtime_creation() {
        let mut runtime = create_test_runtime();

        assert!(runtime.pending_commands().is_empty());
        assert_eq!(runtime.state().card.phase(), CardPhase::Closed);
        assert!(runtime.state().snow.flakes().is_empty());
        assert!(runtime.process_all_messages().is_empty());
    }

    #[test]
    fn test_send_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Card(CardMsg::Activate));
        assert_eq!(runtime.state().card.phase(), CardPhase::Closed);

        let commands = runtime.process_all_messages();

        assert_eq!(runtime.state().card.phase(), CardPhase::Loading);
        assert_eq!(
            commands,
            vec![Cmd::GenerateGreeting {
                request_id: 1,
                theme: Theme::Magic
            }]
        );
        assert_eq!(runtime.pending_commands().len(), 1);
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_raw_messages_are_translated() {
        let mut runtime = create_test_runtime();

        runtime.send_raw_msg(RawMsg::Resize(100, 32));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('3'),
            KeyModifiers::NONE,
        )));
        runtime.send_raw_msg(RawMsg::Frame);
        runtime.process_all_messages();

        assert_eq!(runtime.state().snow.flakes().len(), 150);
        assert_eq!(runtime.state().card.theme, Theme::Hope);
        assert_eq!(runtime.state().system.frame_count, 1);
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_execute_without_executor_fails() {
        let mut runtime = create_test_runtime();
        assert!(runtime.execute_pending_commands().is_err());
        assert!(runtime.add_tui_sender(mpsc::unbounded_channel().0).is_err());
        // the update cycle itself still works
        assert!(runtime.run_update_cycle().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_greeting_round_trip() {
        let config = Config::embedded().expect("embedded config should parse");
        let mut runtime =
            Runtime::new_with_executor(AppState::new_with_seed(config, 3), Arc::new(Echo));

        runtime.send_msg(Msg::Card(CardMsg::Activate));
        runtime.run_update_cycle().expect("cycle should run");
        assert_eq!(runtime.state().card.phase(), CardPhase::Loading);

        assert!(runtime.process_next_external().await);
        runtime.run_update_cycle().expect("cycle should run");

        assert_eq!(runtime.state().card.phase(), CardPhase::Open);
        assert_eq!(
            runtime.state().card.greeting.as_deref(),
            Some("greeting for magic")
        );
    }
}
