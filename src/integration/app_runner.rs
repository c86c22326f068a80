use std::{sync::Arc, time::Instant};

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::fps::FrameMeter, state::AppState},
    infrastructure::{
        config::Config,
        greeting::{GeminiClient, GreetingSource},
        tui::{self, event_source::EventSource, real::RealTui, TuiLike},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm loop: pulls terminal events, runs update cycles, executes
/// side effects and draws one frame per render event.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    renderer: Renderer,
    frame_meter: FrameMeter,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a runner that asks Gemini for greetings.
    pub async fn new_with_config<T>(
        config: Config,
        tui: Arc<Mutex<T>>,
        event_source: EventSource,
    ) -> Result<Self>
    where
        T: TuiLike + 'static,
    {
        let source = Arc::new(GeminiClient::new(&config.gemini)?);
        Self::new_with_source(config, tui, event_source, source).await
    }

    /// Create a runner around an arbitrary greeting source.
    pub async fn new_with_source<T>(
        config: Config,
        tui: Arc<Mutex<T>>,
        event_source: EventSource,
        greeting_source: Arc<dyn GreetingSource>,
    ) -> Result<Self>
    where
        T: TuiLike + 'static,
    {
        let tui: Arc<Mutex<dyn TuiLike + Send>> = tui;
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let mut runtime =
            Runtime::new_with_executor(AppState::new_with_config(config), greeting_source);
        runtime
            .add_tui_sender(tui_tx)
            .map_err(|e| color_eyre::eyre::eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            event_source,
            tui_rx,
            renderer: Renderer::new(),
            frame_meter: FrameMeter::new(),
        })
    }

    /// Create a runner on the real terminal.
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let events: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<RealTui>>::clone(&tui);
        Self::new_with_config(config, tui, EventSource::real(events)).await
    }

    pub fn show_fps(mut self, show_fps: bool) -> Self {
        self.renderer = std::mem::take(&mut self.renderer).show_fps(show_fps);
        self
    }

    /// Run until the state asks to quit or the event source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        // mounts the animators
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));

        let result = self.event_loop().await;

        // teardown: stop side effects, drop animation state, restore terminal
        self.runtime.shutdown();
        self.runtime.state_mut().unmount();
        self.tui.lock().await.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            let mut should_render = false;

            tokio::select! {
                event = self.event_source.next() => match event {
                    Some(event) => should_render = self.handle_event(event),
                    None => self.runtime.send_raw_msg(RawMsg::Quit),
                },
                // a side effect finished; it is processed below
                _ = self.runtime.process_next_external() => {}
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                tracing::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                        should_render = true;
                    }
                }
            }

            if should_render {
                self.render().await?;
            }

            if self.runtime.state().system.should_suspend {
                // blocks until the process is brought back to the foreground
                self.tui.lock().await.suspend()?;
                self.tui.lock().await.resume()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
            }

            if self.runtime.state().system.should_quit {
                return Ok(());
            }
        }
    }

    /// Forward a terminal event; returns whether a frame should be drawn.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Render => {
                self.runtime.send_raw_msg(RawMsg::Frame);
                return true;
            }
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            tui::Event::FocusGained => self.runtime.send_raw_msg(RawMsg::FocusGained),
            tui::Event::FocusLost => self.runtime.send_raw_msg(RawMsg::FocusLost),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event error".to_string())),
            tui::Event::Init => {}
        }
        false
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await?;
        if let Some(fps) = self.frame_meter.record(Instant::now()) {
            self.runtime.send_raw_msg(RawMsg::AppFpsUpdate(fps));
        }
        Ok(())
    }
}
