use std::{fmt, sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{card::CardMsg, Msg},
    },
    domain::theme::Theme,
    infrastructure::{
        config::CardConfig,
        greeting::{greeting_or_fallback, GreetingSource},
    },
};

/// Delays the card transitions wait for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTiming {
    /// Minimum time between asking for a greeting and revealing it
    pub reveal_delay: Duration,
    /// Time the greeting stays after the card is closed
    pub clear_delay: Duration,
}

impl Default for CardTiming {
    fn default() -> Self {
        Self::from(&CardConfig::default())
    }
}

impl From<&CardConfig> for CardTiming {
    fn from(config: &CardConfig) -> Self {
        Self {
            reveal_delay: Duration::from_millis(config.reveal_delay_ms),
            clear_delay: Duration::from_millis(config.clear_delay_ms),
        }
    }
}

/// Command executor: turns Elm commands into spawned tasks whose results come
/// back to the runtime as domain messages
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    greeting_source: Arc<dyn GreetingSource>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    timing: CardTiming,
    cancellation_token: CancellationToken,
}

impl fmt::Debug for CmdExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmdExecutor")
            .field("timing", &self.timing)
            .field("has_tui_sender", &self.tui_sender.is_some())
            .field("cancelled", &self.cancellation_token.is_cancelled())
            .finish()
    }
}

impl CmdExecutor {
    pub fn new(
        msg_sender: mpsc::UnboundedSender<Msg>,
        greeting_source: Arc<dyn GreetingSource>,
    ) -> Self {
        Self {
            msg_sender,
            greeting_source,
            tui_sender: None,
            timing: CardTiming::default(),
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn with_timing(mut self, timing: CardTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    pub fn timing(&self) -> CardTiming {
        self.timing
    }

    /// Cancel every task spawned so far; their results are never delivered
    pub fn shutdown(&self) {
        self.cancellation_token.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    /// Execute a single command. Must be called from within a tokio runtime.
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::GenerateGreeting { request_id, theme } => {
                self.spawn_greeting(*request_id, *theme);
            }

            Cmd::ScheduleClear { close_id } => {
                self.spawn_clear(*close_id);
            }

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => tx.send(tui_cmd.clone())?,
                None => {
                    tracing::debug!(?tui_cmd, "TUI sender not configured; dropping command");
                }
            },

            Cmd::LogError { message } => {
                tracing::error!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    tracing::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// The greeting is delivered once both the request and the reveal delay
    /// are done, whichever takes longer.
    fn spawn_greeting(&self, request_id: u64, theme: Theme) {
        let source = Arc::clone(&self.greeting_source);
        let tx = self.msg_sender.clone();
        let token = self.cancellation_token.clone();
        let reveal_delay = self.timing.reveal_delay;
        tokio::spawn(async move {
            let work = async {
                let (text, ()) = tokio::join!(
                    greeting_or_fallback(source.as_ref(), theme),
                    tokio::time::sleep(reveal_delay)
                );
                text
            };
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(request_id, "greeting request cancelled");
                }
                text = work => {
                    if tx.send(Msg::Card(CardMsg::GreetingReady { request_id, text })).is_err() {
                        tracing::debug!(request_id, "runtime gone; dropping greeting");
                    }
                }
            }
        });
    }

    fn spawn_clear(&self, close_id: u64) {
        let tx = self.msg_sender.clone();
        let token = self.cancellation_token.clone();
        let clear_delay = self.timing.clear_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(clear_delay) => {
                    let _ = tx.send(Msg::Card(CardMsg::ClearGreeting { close_id }));
                }
            }
        });
    }
}
