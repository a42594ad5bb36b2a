//! A router bound to the outlet it mounts into.

use crate::component::traits::{Action, Event};
use crate::mount::Outlet;
use crate::registry::ViewKind;
use crate::router::{Dispatch, Router};
use ratatui::layout::Rect;

pub struct Shell<K: ViewKind> {
    router: Router<Outlet<K>>,
    outlet: Outlet<K>,
}

impl<K: ViewKind> Shell<K> {
    pub fn new(router: Router<Outlet<K>>, outlet: Outlet<K>) -> Self {
        Self { router, outlet }
    }

    pub fn start(&mut self, mount_initial_route: bool) -> Dispatch {
        self.router.start(mount_initial_route, &mut self.outlet)
    }

    pub fn stop(&mut self) {
        self.router.stop();
    }

    pub fn navigate(&mut self, path: &str) -> Dispatch {
        self.router.navigate(path, &mut self.outlet)
    }

    pub fn back(&mut self) -> Dispatch {
        self.router.back(&mut self.outlet)
    }

    pub fn exec(&mut self) -> Dispatch {
        self.router.exec(&mut self.outlet)
    }

    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    pub fn mounted_view(&self) -> Option<K> {
        self.outlet.mounted_view()
    }

    pub fn router(&self) -> &Router<Outlet<K>> {
        &self.router
    }

    pub fn outlet(&self) -> &Outlet<K> {
        &self.outlet
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        self.outlet.render(frame, area);
    }

    /// Forward an event to the mounted view and apply any navigation it asks for.
    /// Actions the shell does not handle are returned.
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match self.outlet.handle_event(event)? {
            Action::Navigate(path) => {
                self.navigate(&path);
                None
            }
            Action::Back => {
                self.back();
                None
            }
            Action::Noop => None,
            Action::Quit => Some(Action::Quit),
        }
    }

    /// Stop routing and unmount the current view.
    pub fn shutdown(&mut self) {
        self.router.stop();
        self.outlet.unmount();
    }
}
