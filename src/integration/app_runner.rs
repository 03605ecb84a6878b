use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{AppState, Session},
    },
    domain::route::Route,
    infrastructure::{
        api::OverviewClient,
        config::Config,
        overview_service::OverviewService,
        tui::{Event, TuiLike},
    },
    integration::{cmd_executor::CmdExecutor, runtime::Runtime},
    presentation::components::Components,
};

/// Drives the application: feeds TUI events and service completions into
/// the runtime, executes the resulting commands, and renders.
pub struct AppRunner {
    runtime: Runtime,
    // In tests or non-interactive environments, the TUI can be absent.
    tui: Option<Box<dyn TuiLike>>,
    components: Components,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    overview_cancel: Option<CancellationToken>,
}

impl AppRunner {
    /// Create a runner with the runtime and executor wired, but no overview
    /// service attached: fetch commands are dropped with a warning. Useful
    /// for tests; interactive sessions call [`Self::with_overview_service`].
    pub fn new(config: Config, tui: Option<Box<dyn TuiLike>>) -> Self {
        let session = Session::new(config.session_token.clone(), config.account_email.clone());
        let initial_state = AppState::new(session, config);
        let mut runtime = Runtime::new(initial_state);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tui_cmd_tx);
        runtime.set_executor(executor);

        Self {
            runtime,
            tui,
            components: Components::new(),
            tui_cmd_rx,
            overview_cancel: None,
        }
    }

    /// Attach the background overview service backed by the configured API.
    pub fn with_overview_service(mut self) -> Result<Self> {
        let config = &self.runtime.state().config.config;
        let client = OverviewClient::new(config.base_url.as_str(), config.session_token.clone())?;

        let (op_tx, cancel_token, service) = OverviewService::new(client, self.runtime.raw_sender())?;
        service.run();

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_overview_sender(op_tx);
        executor.set_tui_sender(tui_cmd_tx);
        self.runtime.set_executor(executor);
        self.tui_cmd_rx = tui_cmd_rx;
        self.overview_cancel = Some(cancel_token);

        Ok(self)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop: handle TUI events, service completions, update
    /// state and render.
    pub async fn run(&mut self) -> Result<()> {
        if let Some(tui) = &mut self.tui {
            tui.enter()?;
        }

        // Initial navigation goes through the normal update path, so a
        // signed-in session is redirected to the dashboard before the
        // landing view is ever rendered.
        self.runtime
            .send_msg(Msg::Ui(UiMsg::Navigate(Route::Landing)));

        loop {
            if let Some(tui) = &mut self.tui {
                if let Some(e) = tui.next().await {
                    match e {
                        Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                        Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                        Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                        Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                        // Rendering is handled below explicitly
                        Event::Render => {}
                        Event::Init
                        | Event::Error
                        | Event::Closed
                        | Event::FocusGained
                        | Event::FocusLost
                        | Event::Paste(_)
                        | Event::Mouse(_) => {}
                    }
                }
            } else {
                // In headless mode, yield briefly to avoid a busy loop
                tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            }

            // Process the update cycle and execute commands
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            // Handle TUI commands that require host reaction
            while let Ok(tui_cmd) = self.tui_cmd_rx.try_recv() {
                match tui_cmd {
                    TuiCommand::Resize { width, height } => {
                        if let Some(tui) = &mut self.tui {
                            tui.resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                        }
                    }
                }
            }

            self.render()?;

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                if let Some(tui) = &mut self.tui {
                    tui.suspend()?;
                }
                self.runtime.send_raw_msg(RawMsg::Resume);
            }
        }

        // Shutdown the service and leave the terminal clean
        if let Some(cancel) = &self.overview_cancel {
            cancel.cancel();
        }
        if let Some(tui) = &mut self.tui {
            tui.exit()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        if let Some(tui) = &mut self.tui {
            let components = &mut self.components;
            tui.draw(&mut |f| components.render(f, &state))?;
        }
        Ok(())
    }
}
