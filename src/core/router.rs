//=========================================================================
// View Router
//=========================================================================
//
// Tracks which of a fixed set of views is visible.
//
// Views are registered once and referenced by key. Activation of an
// unregistered key is a logged no-op: the previous view stays active.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;

//=== View Key Trait ======================================================

/// Marker trait for view identifiers.
///
/// Typically implemented by an application enum.
pub trait ViewKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== View ================================================================

/// The game's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Menu with navigation to both exercises.
    Home,

    /// Timeline ordering exercise.
    Timeline,

    /// Cause-chain exercise.
    Cause,
}

impl ViewKey for View {}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Timeline, View::Cause];

    /// Stable element name, e.g. `timeline-view`.
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home-view",
            View::Timeline => "timeline-view",
            View::Cause => "cause-view",
        }
    }
}

/// Returned when parsing a view name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view {0:?}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

//=== ViewRouter ==========================================================

/// Holds the registered views and the currently active one.
pub struct ViewRouter<V: ViewKey> {
    views: HashSet<V>,
    active: Option<V>,
}

impl<V: ViewKey> ViewRouter<V> {
    //--- Construction -----------------------------------------------------

    /// Creates a router with no views and nothing active.
    pub fn new() -> Self {
        Self {
            views: HashSet::new(),
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a view so it can be activated.
    pub fn register(&mut self, view: V) {
        if !self.views.insert(view) {
            warn!("View {:?} was already registered", view);
        }
    }

    /// Registers a view and makes it active.
    pub fn register_default(&mut self, view: V) {
        self.register(view);
        self.active = Some(view);
        debug!("Registered {:?} as default view", view);
    }

    //--- Navigation -------------------------------------------------------

    /// Makes `view` the only active view.
    ///
    /// Returns `false` and leaves the active view untouched if `view` was
    /// never registered.
    pub fn activate(&mut self, view: V) -> bool {
        if !self.views.contains(&view) {
            warn!("Attempted to activate unregistered view {:?}", view);
            return false;
        }

        if self.active != Some(view) {
            debug!("Switching view {:?} -> {:?}", self.active, view);
        }
        self.active = Some(view);
        true
    }

    //--- Queries ----------------------------------------------------------

    pub fn active(&self) -> Option<V> {
        self.active
    }

    pub fn is_active(&self, view: V) -> bool {
        self.active == Some(view)
    }

    pub fn is_registered(&self, view: V) -> bool {
        self.views.contains(&view)
    }
}

impl<V: ViewKey> Default for ViewRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
