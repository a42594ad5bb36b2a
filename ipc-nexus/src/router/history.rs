//! Navigation history.

/// How many earlier locations a history keeps by default.
pub const DEFAULT_LIMIT: usize = 64;

/// Tracks the current location and the locations visited before it.
///
/// Only the most recent `limit` earlier locations are kept; the oldest entry is
/// dropped when a navigation would exceed it.
///
/// # Example
/// ```
/// use ipc_nexus::History;
///
/// let mut history = History::new("/".to_string());
/// history.navigate("/usage".to_string());
/// assert_eq!(history.current(), "/usage");
/// history.go_back();
/// assert_eq!(history.current(), "/");
/// ```
#[derive(Debug, Clone)]
pub struct History<R: Clone + PartialEq> {
    current: R,
    history: Vec<R>,
    limit: usize,
}

impl<R: Clone + PartialEq> History<R> {
    pub fn new(initial: R) -> Self {
        Self::with_limit(initial, DEFAULT_LIMIT)
    }

    /// A history that remembers at most `limit` earlier locations.
    pub fn with_limit(initial: R, limit: usize) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
            limit,
        }
    }

    pub fn current(&self) -> &R {
        &self.current
    }

    /// Move to a new location, recording the current one.
    /// Returns false if `route` already is the current location.
    pub fn navigate(&mut self, route: R) -> bool {
        if self.current == route {
            return false;
        }

        let previous = std::mem::replace(&mut self.current, route);
        if self.limit > 0 {
            if self.history.len() == self.limit {
                self.history.remove(0);
            }
            self.history.push(previous);
        }
        true
    }

    /// Overwrite the current location without recording it.
    pub fn replace(&mut self, route: R) {
        self.current = route;
    }

    /// Go back to the previous location. Returns true if successful.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
