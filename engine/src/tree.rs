//! Abstract view of a host-owned form tree.
//!
//! The engine never owns the tree it edits. [`FormTree`] is the read side
//! (structure, text and control state), [`ManagedHost`] adds the mutations
//! a managed control understands. Node handles are cheap copies and are
//! only valid until the host re-renders; callers re-resolve them on every
//! operation instead of caching them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Kind of input-capable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Free-text input.
    Text,
    /// Boolean control.
    Checkbox,
    /// One option of a named single-select group.
    Radio,
    /// Trigger that discloses an option list when activated.
    Disclosure,
}

/// Notification a human edit would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostEvent {
    Input,
    Change,
}

/// What kind of control a label lookup should resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlQuery<'a> {
    Text,
    Checkbox,
    /// A radio whose option value equals the given string.
    Radio(&'a str),
    Disclosure,
}

impl ControlQuery<'_> {
    /// Control kind the query targets.
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Text => ControlKind::Text,
            Self::Checkbox => ControlKind::Checkbox,
            Self::Radio(_) => ControlKind::Radio,
            Self::Disclosure => ControlKind::Disclosure,
        }
    }

    /// Returns `true` when `node` satisfies the query.
    pub fn matches<T: FormTree + ?Sized>(&self, tree: &T, node: T::Node) -> bool {
        if tree.control_kind(node) != Some(self.kind()) {
            return false;
        }
        match self {
            Self::Radio(value) => tree.option_value(node) == Some(*value),
            _ => true,
        }
    }
}

/// Read access to a form tree.
pub trait FormTree {
    /// Node handle.
    type Node: Copy + Eq + fmt::Debug;

    fn root(&self) -> Self::Node;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Child nodes in document order, text nodes included.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Content of a text node; `None` for elements.
    fn text(&self, node: Self::Node) -> Option<&str>;

    fn control_kind(&self, node: Self::Node) -> Option<ControlKind>;

    /// Option value of a radio control.
    fn option_value(&self, node: Self::Node) -> Option<&str>;

    /// Current value of a text control, or the selection of a disclosure.
    fn value(&self, node: Self::Node) -> Option<&str>;

    fn is_checked(&self, node: Self::Node) -> bool;

    /// Returns `true` for an option rendered by an open disclosure.
    fn is_option(&self, node: Self::Node) -> bool;

    fn is_element(&self, node: Self::Node) -> bool {
        self.text(node).is_none()
    }
}

/// Mutation access to managed controls.
///
/// Writing a managed control is a two-step protocol: assign through the
/// canonical property setter, then [`dispatch`](ManagedHost::dispatch) the
/// events the owning framework listens for. An assignment that is never
/// followed by events is discarded at the next re-render.
pub trait ManagedHost: FormTree {
    /// Canonical value setter of a text control.
    fn assign_value(&mut self, node: Self::Node, value: &str) -> Result<(), HostError>;

    /// Canonical checked setter of a checkbox or radio.
    fn assign_checked(&mut self, node: Self::Node, checked: bool) -> Result<(), HostError>;

    fn dispatch(&mut self, node: Self::Node, event: HostEvent) -> Result<(), HostError>;

    /// Simulated user activation (a click).
    fn activate(&mut self, node: Self::Node) -> Result<(), HostError>;

    /// Lets the host run work queued before a suspension point, such as
    /// re-rendering or showing a disclosed option list.
    fn pump(&mut self) {}
}
