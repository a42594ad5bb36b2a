use crate::application::{Context, EventContext};
use crate::component::props::Props;

/// Event type for component interactions.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
    /// A navigation request delivered from outside the component tree.
    Navigate(String),
    /// A request to return to the previous path.
    Back,
}

/// Action that a component can return after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String), // path
    Back,
    Quit,
    Noop,
}

/// The core Component trait for implementers.
pub trait Component: Send + 'static {
    /// Called when the component is mounted into an anchor.
    fn on_mount(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Called when the component is replaced by another mount, or at shutdown.
    fn on_unmount(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Render the component into `cx.area`.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        let _ = event;
        let _ = cx;
        None
    }
}

/// A component that can be built from mount props.
///
/// Usually derived with `#[ipc_setup::view]`.
pub trait View: Component + Sized {
    fn build(props: Props) -> Self;
}
