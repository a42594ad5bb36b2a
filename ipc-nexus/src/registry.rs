//! View registry.
//!
//! Maps a typed view kind to the factory that builds it. Filled once at
//! startup and read by the outlet on every mount.

use crate::component::{Component, Props, View};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A closed set of view names, usually generated with `#[ipc_setup::view_kind]`.
pub trait ViewKind: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The registration name, e.g. `"usage"`.
    fn name(&self) -> &'static str;
}

/// Builds a fresh component instance for one mount.
pub type ViewFactory = Box<dyn Fn(&Props) -> Box<dyn Component> + Send + Sync>;

pub struct Registry<K: ViewKind> {
    views: HashMap<K, ViewFactory>,
}

impl<K: ViewKind> Default for Registry<K> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
        }
    }
}

impl<K: ViewKind> Registry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `kind`. A later registration replaces an earlier one.
    pub fn register<F>(&mut self, kind: K, factory: F) -> &mut Self
    where
        F: Fn(&Props) -> Box<dyn Component> + Send + Sync + 'static,
    {
        if self.views.insert(kind, Box::new(factory)).is_some() {
            tracing::debug!(view = %kind, "view registration replaced");
        }
        self
    }

    /// Register a `View` type for `kind`.
    pub fn register_view<V: View>(&mut self, kind: K) -> &mut Self {
        self.register(kind, |props| Box::new(V::build(props.clone())) as Box<dyn Component>)
    }

    pub fn contains(&self, kind: K) -> bool {
        self.views.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.views.keys().copied()
    }

    /// Build an instance of `kind`, or `None` if nothing is registered for it.
    pub fn build(&self, kind: K, props: &Props) -> Option<Box<dyn Component>> {
        self.views.get(&kind).map(|factory| factory(props))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::Context;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) enum TestView {
        Home,
        Detail,
    }

    impl ViewKind for TestView {
        fn name(&self) -> &'static str {
            match self {
                TestView::Home => "home",
                TestView::Detail => "detail",
            }
        }
    }

    impl fmt::Display for TestView {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    /// Renders `label` and every prop value.
    pub(crate) struct Label {
        pub(crate) label: &'static str,
        pub(crate) props: Props,
    }

    impl Component for Label {
        fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
            crate::component::placeholder(frame, cx.area, self.label, &self.props);
        }
    }

    pub(crate) fn label(label: &'static str) -> impl Fn(&Props) -> Box<dyn Component> + Send + Sync {
        move |props: &Props| -> Box<dyn Component> {
            Box::new(Label {
                label,
                props: props.clone(),
            })
        }
    }

    /// Render a component into a small test buffer and return its text.
    pub(crate) fn render_text(component: &mut dyn Component) -> String {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        terminal
            .draw(|frame| {
                let mut cx = Context::new(crate::AppContext::detached(), frame.area());
                component.render(frame, &mut cx);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_register_and_build() {
        let mut registry = Registry::new();
        registry.register(TestView::Home, label("home"));

        assert!(registry.contains(TestView::Home));
        assert!(!registry.contains(TestView::Detail));
        assert!(registry.build(TestView::Home, &Props::new()).is_some());
        assert!(registry.build(TestView::Detail, &Props::new()).is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = Registry::new();
        registry
            .register(TestView::Detail, label("first"))
            .register(TestView::Detail, label("second"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![TestView::Detail]);

        let mut view = registry.build(TestView::Detail, &Props::new()).unwrap();
        let text = render_text(view.as_mut());
        assert!(text.contains("second"));
        assert!(!text.contains("first"));
    }

    #[test]
    fn test_factory_receives_props() {
        let mut registry = Registry::new();
        registry.register(TestView::Detail, label("detail"));

        let props = Props::new().with("groupId", "42");
        let mut view = registry.build(TestView::Detail, &props).unwrap();
        assert!(render_text(view.as_mut()).contains("groupId: 42"));
    }
}
