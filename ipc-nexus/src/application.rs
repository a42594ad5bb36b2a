//! Terminal application loop and the context handed to components.

use crate::component::traits::{Action, Component, Event};
use crate::error::{IoSnafu, TerminalSnafu};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use snafu::ResultExt;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

/// A navigation request queued from outside the component tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    To(String),
    Back,
}

impl From<Navigation> for Event {
    fn from(nav: Navigation) -> Self {
        match nav {
            Navigation::To(path) => Event::Navigate(path),
            Navigation::Back => Event::Back,
        }
    }
}

/// Application context providing access to global services.
#[derive(Clone)]
pub struct AppContext {
    /// Internal: Channel to trigger a re-render.
    re_render_tx: mpsc::UnboundedSender<()>,
    /// Internal: Navigation requests, handled in arrival order.
    navigate_tx: mpsc::UnboundedSender<Navigation>,
}

impl AppContext {
    fn channel() -> (Self, mpsc::UnboundedReceiver<()>, mpsc::UnboundedReceiver<Navigation>) {
        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let (navigate_tx, navigate_rx) = mpsc::unbounded_channel();
        let cx = Self {
            re_render_tx,
            navigate_tx,
        };
        (cx, re_render_rx, navigate_rx)
    }

    /// A context that is not attached to a running loop. Requests are dropped.
    pub fn detached() -> Self {
        Self::channel().0
    }

    /// Queue a navigation to `path`.
    pub fn navigate(&self, path: impl Into<String>) {
        let _ = self.navigate_tx.send(Navigation::To(path.into()));
    }

    /// Queue a navigation back to the previous path.
    pub fn back(&self) {
        let _ = self.navigate_tx.send(Navigation::Back);
    }

    /// Trigger a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }
}

/// A specialized context passed to component methods.
#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub area: Rect,
}

impl Context {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self { app, area }
    }

    /// Same application, different region.
    pub fn with_area(&self, area: Rect) -> Self {
        Self {
            app: self.app.clone(),
            area,
        }
    }

    /// Access the underlying AppContext.
    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// Explicitly trigger a re-render.
    pub fn notify(&self) {
        self.app.refresh();
    }
}

/// EventContext for event handling, currently identical to Context but renamed for clarity.
pub type EventContext = Context;

/// Main application handle.
#[derive(Default)]
pub struct Application;

impl Application {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self
    }

    /// Run the application. `setup` builds the root component.
    pub fn run<F, C>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AppContext) -> anyhow::Result<C>,
        C: Component,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;

        let (app_context, re_render_rx, navigate_rx) = AppContext::channel();

        let _guard = rt.enter();
        let root = setup(&app_context)?;
        drop(_guard);

        rt.block_on(async move {
            self.run_loop(app_context, root, re_render_rx, navigate_rx)
                .await
                .map_err(anyhow::Error::from)
        })
    }

    async fn run_loop<C: Component>(
        &self,
        app: AppContext,
        mut root: C,
        re_render_rx: mpsc::UnboundedReceiver<()>,
        navigate_rx: mpsc::UnboundedReceiver<Navigation>,
    ) -> crate::Result<()> {
        enable_raw_mode().context(TerminalSnafu)?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, event::EnableFocusChange)
            .context(TerminalSnafu)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context(TerminalSnafu)?;

        // Lifecycle: the root is mounted before the first frame
        {
            let size = terminal.size().context(TerminalSnafu)?;
            let mut cx = Context::new(app.clone(), Rect::new(0, 0, size.width, size.height));
            root.on_mount(&mut cx);
        }

        let result = self
            .run_app_loop(app, &mut terminal, &mut root, re_render_rx, navigate_rx)
            .await;

        disable_raw_mode().context(TerminalSnafu)?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            event::DisableFocusChange
        )
        .context(TerminalSnafu)?;
        terminal.show_cursor().context(TerminalSnafu)?;

        result
    }

    async fn run_app_loop<C: Component>(
        &self,
        app: AppContext,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        root: &mut C,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
        mut navigate_rx: mpsc::UnboundedReceiver<Navigation>,
    ) -> crate::Result<()> {
        // Initial render
        app.refresh();

        loop {
            tokio::select! {
                Some(()) = re_render_rx.recv() => {
                    terminal.draw(|frame| {
                        let mut cx = Context::new(app.clone(), frame.area());
                        root.render(frame, &mut cx);
                    }).context(TerminalSnafu)?;
                }
                Some(nav) = navigate_rx.recv() => {
                    tracing::debug!(?nav, "navigation request");
                    let mut cx = self.event_context(&app, terminal)?;
                    let action = root.handle_event(nav.into(), &mut cx);
                    app.refresh();
                    if let Some(Action::Quit) = action {
                        root.on_unmount(&mut cx);
                        return Ok(());
                    }
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        let crossterm_event = event::read().context(IoSnafu)?;
                        let internal_event = match crossterm_event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = internal_event {
                            let mut cx = self.event_context(&app, terminal)?;
                            let action = root.handle_event(event, &mut cx);
                            app.refresh(); // Trigger refresh after any event handling

                            if let Some(Action::Quit) = action {
                                // Lifecycle: unmount the whole tree
                                root.on_unmount(&mut cx);
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }

    fn event_context(
        &self,
        app: &AppContext,
        terminal: &Terminal<CrosstermBackend<io::Stdout>>,
    ) -> crate::Result<EventContext> {
        let size = terminal.size().context(TerminalSnafu)?;
        Ok(EventContext::new(app.clone(), Rect::new(0, 0, size.width, size.height)))
    }
}
