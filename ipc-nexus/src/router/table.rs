//! Ordered route table and dispatch.
//!
//! Routes are tried in registration order and the first match wins. A handler
//! receives the match and the mount target it should drive; the router never
//! touches views itself.

use super::history::History;
use super::pattern::{normalize, RouteMatch, RoutePattern};
use crate::error::Result;

type Handler<T> = Box<dyn Fn(&RouteMatch, &mut T) + Send + Sync>;
type Fallback = Box<dyn Fn(&[&str]) + Send + Sync>;

/// What a navigation event turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A handler ran.
    Matched { pattern: String },
    /// No pattern matched; only the fallback (if any) ran.
    Unmatched,
    /// The path was already current, or there was nothing to go back to.
    Unchanged,
    /// The router is not started; the path was recorded but not dispatched.
    Stopped,
}

struct Route<T> {
    pattern: RoutePattern,
    handler: Handler<T>,
}

/// Maps path patterns to handlers driving a mount target `T`.
pub struct Router<T> {
    routes: Vec<Route<T>>,
    fallback: Option<Fallback>,
    history: History<String>,
    started: bool,
}

impl<T> Router<T> {
    /// Create a router whose currently active path is `initial_path`.
    pub fn new(initial_path: &str) -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
            history: History::new(normalize(initial_path)),
            started: false,
        }
    }

    /// Append a route. Earlier routes take precedence.
    pub fn add_route<F>(&mut self, pattern: &str, handler: F) -> Result<&mut Self>
    where
        F: Fn(&RouteMatch, &mut T) + Send + Sync + 'static,
    {
        let pattern = RoutePattern::parse(pattern)?;
        tracing::trace!(pattern = %pattern, "route added");
        self.routes.push(Route {
            pattern,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    /// Install a handler for paths no route matches. It gets the path segments.
    pub fn on_unmatched<F>(&mut self, fallback: F) -> &mut Self
    where
        F: Fn(&[&str]) + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Start observing navigation. With `mount_initial_route` the current
    /// path is dispatched right away.
    pub fn start(&mut self, mount_initial_route: bool, target: &mut T) -> Dispatch {
        self.started = true;
        tracing::debug!(path = %self.current_path(), mount_initial_route, "router started");
        if mount_initial_route {
            self.exec(target)
        } else {
            Dispatch::Unchanged
        }
    }

    /// Stop observing navigation. Later events only move the current path.
    pub fn stop(&mut self) {
        self.started = false;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Registered patterns, in matching order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.as_str())
    }

    /// Handle a navigation event.
    pub fn navigate(&mut self, path: &str, target: &mut T) -> Dispatch {
        let path = normalize(path);
        if !self.started {
            self.history.replace(path);
            return Dispatch::Stopped;
        }
        if !self.history.navigate(path) {
            return Dispatch::Unchanged;
        }
        self.dispatch(target)
    }

    /// Return to the previous path and dispatch it.
    pub fn back(&mut self, target: &mut T) -> Dispatch {
        if !self.started {
            return Dispatch::Stopped;
        }
        if !self.history.go_back() {
            return Dispatch::Unchanged;
        }
        self.dispatch(target)
    }

    /// Dispatch the current path again, even though it has not changed.
    pub fn exec(&mut self, target: &mut T) -> Dispatch {
        if !self.started {
            return Dispatch::Stopped;
        }
        self.dispatch(target)
    }

    fn dispatch(&self, target: &mut T) -> Dispatch {
        let path = self.history.current();
        for route in &self.routes {
            if let Some(matched) = route.pattern.matches(path) {
                tracing::debug!(%path, pattern = %route.pattern, "route matched");
                (route.handler)(&matched, target);
                return Dispatch::Matched {
                    pattern: route.pattern.as_str().to_string(),
                };
            }
        }

        if let Some(fallback) = &self.fallback {
            let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
            fallback(&segments);
        }
        Dispatch::Unmatched
    }
}
