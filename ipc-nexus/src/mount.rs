//! Mount requests and the outlet that serves them.

use crate::application::{AppContext, Context, EventContext};
use crate::component::traits::{Action, Event};
use crate::component::{Component, Props};
use crate::registry::{Registry, ViewKind};
use ratatui::layout::Rect;

/// "Render view `view` with `props` into anchor `target`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRequest<K> {
    pub target: String,
    pub view: K,
    pub props: Props,
}

impl<K> MountRequest<K> {
    pub fn new(target: impl Into<String>, view: K) -> Self {
        Self {
            target: target.into(),
            view,
            props: Props::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key, value);
        self
    }
}

/// Something route handlers can mount views into.
pub trait MountTarget<K> {
    fn mount(&mut self, request: MountRequest<K>);
}

struct Mounted<K> {
    view: K,
    props: Props,
    component: Box<dyn Component>,
}

/// A named region that shows one view at a time.
///
/// Each mount builds a fresh instance from the registry and unmounts the
/// previous one. Requests for other anchors or unregistered views leave the
/// current content in place.
pub struct Outlet<K: ViewKind> {
    anchor: String,
    registry: Registry<K>,
    app: AppContext,
    area: Rect,
    mounted: Option<Mounted<K>>,
}

impl<K: ViewKind> Outlet<K> {
    pub fn new(anchor: impl Into<String>, registry: Registry<K>, app: AppContext) -> Self {
        Self {
            anchor: anchor.into(),
            registry,
            app,
            area: Rect::default(),
            mounted: None,
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    /// The view currently shown, if any.
    pub fn mounted_view(&self) -> Option<K> {
        self.mounted.as_ref().map(|m| m.view)
    }

    pub fn mounted_props(&self) -> Option<&Props> {
        self.mounted.as_ref().map(|m| &m.props)
    }

    fn context(&self) -> Context {
        Context::new(self.app.clone(), self.area)
    }

    /// Render the mounted view into `area`. Renders nothing when empty.
    pub fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        self.area = area;
        let mut cx = self.context();
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.component.render(frame, &mut cx);
        }
    }

    /// Forward an event to the mounted view.
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        let mut cx: EventContext = self.context();
        self.mounted
            .as_mut()
            .and_then(|mounted| mounted.component.handle_event(event, &mut cx))
    }

    /// Unmount the current view, if any.
    pub fn unmount(&mut self) {
        let mut cx = self.context();
        if let Some(mut mounted) = self.mounted.take() {
            tracing::debug!(anchor = %self.anchor, view = %mounted.view, "unmount");
            mounted.component.on_unmount(&mut cx);
        }
    }
}

impl<K: ViewKind> MountTarget<K> for Outlet<K> {
    fn mount(&mut self, request: MountRequest<K>) {
        if request.target != self.anchor {
            tracing::warn!(target_anchor = %request.target, anchor = %self.anchor, "mount target not found");
            return;
        }

        let Some(mut component) = self.registry.build(request.view, &request.props) else {
            tracing::warn!(view = %request.view, "view is not registered; nothing mounted");
            return;
        };

        self.unmount();
        let mut cx = self.context();
        component.on_mount(&mut cx);
        tracing::info!(anchor = %self.anchor, view = %request.view, props = %request.props, "mount");

        self.mounted = Some(Mounted {
            view: request.view,
            props: request.props,
            component,
        });
        self.app.refresh();
    }
}
