use crate::cli::Settings;
use crate::pages::{
    AddressBar, GroupPage, GroupsPage, IndexPage, Menu, UploadPage, UsagePage, View,
};
use crossterm::event::KeyCode;
use ipc_nexus::{
    Action, AppContext, Component, Context, Event, EventContext, MountRequest, MountTarget, Outlet,
    Registry, RouteMatch, Router, Shell,
};
use ratatui::layout::{Constraint, Direction, Layout};

/// Every view the console can mount.
pub fn registry() -> Registry<View> {
    let mut registry = Registry::new();
    registry
        .register_view::<IndexPage>(View::Index)
        .register_view::<GroupPage>(View::Group)
        .register_view::<GroupsPage>(View::Groups)
        .register_view::<UsagePage>(View::Usage)
        .register_view::<UploadPage>(View::Upload);
    registry
}

fn show<T>(anchor: &str, view: View) -> impl Fn(&RouteMatch, &mut T) + Send + Sync + 'static
where
    T: MountTarget<View> + 'static,
{
    let anchor = anchor.to_string();
    move |_: &RouteMatch, target: &mut T| target.mount(MountRequest::new(anchor.clone(), view))
}

/// The route table. Order matters: the first matching pattern wins.
pub fn routes<T>(initial_path: &str, anchor: &str) -> ipc_nexus::Result<Router<T>>
where
    T: MountTarget<View> + 'static,
{
    let group_anchor = anchor.to_string();

    let mut router = Router::new(initial_path);
    router
        .add_route("/", show::<T>(anchor, View::Index))?
        .add_route("/group/*", move |m: &RouteMatch, target: &mut T| {
            let group_id = m.wildcard().unwrap_or_default();
            tracing::debug!(group_id, "group path");
            target.mount(
                MountRequest::new(group_anchor.clone(), View::Group).with_prop("groupId", group_id),
            );
        })?
        .add_route("/groups", show::<T>(anchor, View::Groups))?
        .add_route("/usage", show::<T>(anchor, View::Usage))?
        .add_route("/upload", show::<T>(anchor, View::Upload))?;

    router.on_unmatched(|segments| {
        tracing::info!(route = ?segments, "unmatched route");
    });

    Ok(router)
}

/// The root component: top menu, the routed outlet and the address bar.
pub struct Root {
    menu: Menu,
    address: AddressBar,
    shell: Shell<View>,
    mount_initial: bool,
}

impl Root {
    pub fn new(settings: &Settings, cx: &AppContext) -> anyhow::Result<Self> {
        let outlet = Outlet::new(settings.anchor.clone(), registry(), cx.clone());
        let router = routes(&settings.path, &settings.anchor)?;

        Ok(Self {
            menu: Menu::default(),
            address: AddressBar::default(),
            shell: Shell::new(router, outlet),
            mount_initial: settings.mount_initial,
        })
    }

    #[cfg(test)]
    pub fn shell(&self) -> &Shell<View> {
        &self.shell
    }

    fn apply(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Navigate(path) => {
                let dispatch = self.shell.navigate(&path);
                tracing::trace!(%path, ?dispatch, "navigate");
                None
            }
            Action::Back => {
                let dispatch = self.shell.back();
                tracing::trace!(?dispatch, "back");
                None
            }
            Action::Quit => Some(Action::Quit),
            Action::Noop => None,
        }
    }
}

impl Component for Root {
    fn on_mount(&mut self, _cx: &mut Context) {
        self.shell.start(self.mount_initial);
    }

    fn on_unmount(&mut self, _cx: &mut Context) {
        self.shell.shutdown();
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Menu
                Constraint::Min(0),    // Outlet
                Constraint::Length(3), // Address bar
            ])
            .split(cx.area);

        self.menu.set_active(self.shell.current_path());
        self.menu.render(frame, &mut cx.with_area(chunks[0]));
        self.shell.render(frame, chunks[1]);
        self.address.render(frame, &mut cx.with_area(chunks[2]));
    }

    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        let action = match event {
            Event::Navigate(path) => Some(Action::Navigate(path)),
            Event::Back => Some(Action::Back),
            event @ (Event::Key(_) | Event::Paste(_)) if self.address.is_open() => {
                self.address.handle_event(event, cx)
            }
            Event::Key(key) => match key.code {
                KeyCode::Char(':') | KeyCode::Char('/') => {
                    self.address.open(self.shell.current_path());
                    None
                }
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Backspace => Some(Action::Back),
                KeyCode::Char(c) if c.is_ascii_digit() => self.menu.handle_event(Event::Key(key), cx),
                _ => self.shell.handle_event(Event::Key(key)),
            },
            other => self.shell.handle_event(other),
        };

        action.and_then(|action| self.apply(action))
    }
}
