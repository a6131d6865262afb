//! In-memory form document with framework-managed controls.
//!
//! [`FormDocument`] is an arena tree implementing [`ManagedHost`]. It models
//! the behaviour the engine has to cope with in a reactive UI:
//!
//! - A managed control keeps two states: the native property the user sees
//!   and the framework store. Assigning the property alone is not enough;
//!   an `input`/`change` event commits it to the store, and every re-render
//!   ([`pump`](ManagedHost::pump)) resets the property from the store.
//! - Radios are exclusive within their `name` group.
//! - A control may ignore simulated activation, as some frameworks only
//!   react to trusted clicks on certain control kinds.
//! - A disclosure renders its option list into a popup at the document
//!   root, but only on the render that follows the click that opened it.
//!
//! Documents are built from a [`NodeSpec`] tree, which is also the JSON
//! snapshot format used by the CLI.

use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result, SyncError};
use crate::tree::{ControlKind, FormTree, HostEvent, ManagedHost};

/// Arena index of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Input control kinds available in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Checkbox,
    Radio,
}

/// One option of a combobox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub label: String,
    /// Render the label inside a nested element instead of as direct text.
    #[serde(default)]
    pub nested: bool,
}

fn default_true() -> bool {
    true
}

/// Serializable description of a form tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeSpec {
    Text {
        text: String,
    },
    Element {
        tag: String,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Input {
        kind: InputKind,
        /// Radio group name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Current text for text inputs, option value for radios.
        #[serde(default)]
        value: String,
        #[serde(default)]
        checked: bool,
        #[serde(default = "default_true")]
        managed: bool,
        #[serde(default = "default_true")]
        accepts_activation: bool,
    },
    Combobox {
        options: Vec<OptionSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selected: Option<String>,
    },
}

impl NodeSpec {
    pub fn text(text: &str) -> Self {
        Self::Text {
            text: text.to_string(),
        }
    }

    pub fn element(tag: &str, children: Vec<NodeSpec>) -> Self {
        Self::Element {
            tag: tag.to_string(),
            children,
        }
    }

    pub fn text_input(value: &str) -> Self {
        Self::Input {
            kind: InputKind::Text,
            name: None,
            value: value.to_string(),
            checked: false,
            managed: true,
            accepts_activation: true,
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self::Input {
            kind: InputKind::Checkbox,
            name: None,
            value: String::new(),
            checked,
            managed: true,
            accepts_activation: true,
        }
    }

    pub fn radio(name: &str, value: &str) -> Self {
        Self::Input {
            kind: InputKind::Radio,
            name: Some(name.to_string()),
            value: value.to_string(),
            checked: false,
            managed: true,
            accepts_activation: true,
        }
    }

    pub fn combobox(options: &[&str]) -> Self {
        Self::Combobox {
            options: options
                .iter()
                .map(|label| OptionSpec {
                    label: label.to_string(),
                    nested: false,
                })
                .collect(),
            selected: None,
        }
    }

    /// Marks an input as one that ignores simulated activation.
    pub fn ignoring_activation(mut self) -> Self {
        if let Self::Input {
            accepts_activation, ..
        } = &mut self
        {
            *accepts_activation = false;
        }
        self
    }

    /// Marks an input as natively owned: property writes take effect
    /// without events.
    pub fn unmanaged(mut self) -> Self {
        if let Self::Input { managed, .. } = &mut self {
            *managed = false;
        }
        self
    }

    /// Marks a radio or checkbox as initially checked.
    pub fn checked(mut self) -> Self {
        if let Self::Input { checked, .. } = &mut self {
            *checked = true;
        }
        self
    }

    /// Renders every combobox option label inside a nested element.
    pub fn nested_options(mut self) -> Self {
        if let Self::Combobox { options, .. } = &mut self {
            for option in options {
                option.nested = true;
            }
        }
        self
    }
}

/// Operation recorded by the document, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    AssignValue(NodeId, String),
    AssignChecked(NodeId, bool),
    Dispatch(NodeId, HostEvent),
    Activate(NodeId),
    Render,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ControlState {
    value: String,
    checked: bool,
}

#[derive(Debug, Clone)]
struct Control {
    kind: ControlKind,
    name: Option<String>,
    option_value: Option<String>,
    managed: bool,
    accepts_activation: bool,
    property: ControlState,
    store: ControlState,
    options: Vec<OptionSpec>,
    open: bool,
    popup: Option<NodeId>,
}

impl Control {
    fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            name: None,
            option_value: None,
            managed: true,
            accepts_activation: true,
            property: ControlState::default(),
            store: ControlState::default(),
            options: Vec::new(),
            open: false,
            popup: None,
        }
    }
}

#[derive(Debug, Clone)]
enum NodeData {
    Text(String),
    Element {
        tag: String,
        control: Option<Control>,
        /// Disclosure trigger this rendered option belongs to.
        option_of: Option<NodeId>,
    },
}

#[derive(Debug, Clone)]
struct Slot {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// Arena-backed form tree.
#[derive(Debug, Clone)]
pub struct FormDocument {
    slots: Vec<Slot>,
    root: NodeId,
    events: Vec<DocumentEvent>,
}

impl FormDocument {
    /// Builds a document from a snapshot tree.
    pub fn from_spec(spec: &NodeSpec) -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            root: NodeId(0),
            events: Vec::new(),
        };
        doc.root = doc.insert(None, spec);
        doc
    }

    /// Parses a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Json`](SyncError::Json) for malformed JSON and
    /// [`InvalidSnapshot`](SyncError::InvalidSnapshot) when the root is a
    /// text node.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: NodeSpec = serde_json::from_str(json)?;
        if matches!(spec, NodeSpec::Text { .. }) {
            return Err(SyncError::InvalidSnapshot(
                "root node must be an element".to_string(),
            ));
        }
        Ok(Self::from_spec(&spec))
    }

    /// Serializes the attached tree, with each control's visible state.
    pub fn to_spec(&self) -> NodeSpec {
        self.spec_of(self.root)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_spec())?)
    }

    /// Operations performed on the document so far.
    pub fn events(&self) -> &[DocumentEvent] {
        &self.events
    }

    /// Committed framework value of a control, as opposed to its visible
    /// property.
    pub fn stored_value(&self, node: NodeId) -> Option<&str> {
        self.control(node).map(|control| control.store.value.as_str())
    }

    /// Committed framework checked state of a control.
    pub fn stored_checked(&self, node: NodeId) -> bool {
        self.control(node).is_some_and(|control| control.store.checked)
    }

    /// Whether a disclosure is currently open.
    pub fn is_open(&self, node: NodeId) -> bool {
        self.control(node).is_some_and(|control| control.open)
    }

    /// Replaces the options of a combobox, as a host re-render would.
    pub fn set_combobox_options(&mut self, node: NodeId, options: &[&str]) {
        if let Some(control) = self.control_mut(node) {
            control.options = options
                .iter()
                .map(|label| OptionSpec {
                    label: label.to_string(),
                    nested: false,
                })
                .collect();
        }
    }

    fn insert(&mut self, parent: Option<NodeId>, spec: &NodeSpec) -> NodeId {
        let id = NodeId(self.slots.len());
        let data = match spec {
            NodeSpec::Text { text } => NodeData::Text(text.clone()),
            NodeSpec::Element { tag, .. } => NodeData::Element {
                tag: tag.clone(),
                control: None,
                option_of: None,
            },
            NodeSpec::Input {
                kind,
                name,
                value,
                checked,
                managed,
                accepts_activation,
            } => {
                let control_kind = match kind {
                    InputKind::Text => ControlKind::Text,
                    InputKind::Checkbox => ControlKind::Checkbox,
                    InputKind::Radio => ControlKind::Radio,
                };
                let mut control = Control::new(control_kind);
                control.name = name.clone();
                control.managed = *managed;
                control.accepts_activation = *accepts_activation;
                let state = ControlState {
                    value: if *kind == InputKind::Text {
                        value.clone()
                    } else {
                        String::new()
                    },
                    checked: *checked,
                };
                if *kind == InputKind::Radio {
                    control.option_value = Some(value.clone());
                }
                control.property = state.clone();
                control.store = state;
                NodeData::Element {
                    tag: "input".to_string(),
                    control: Some(control),
                    option_of: None,
                }
            }
            NodeSpec::Combobox { options, selected } => {
                let mut control = Control::new(ControlKind::Disclosure);
                control.options = options.clone();
                let state = ControlState {
                    value: selected.clone().unwrap_or_default(),
                    checked: false,
                };
                control.property = state.clone();
                control.store = state;
                NodeData::Element {
                    tag: "button".to_string(),
                    control: Some(control),
                    option_of: None,
                }
            }
        };
        self.slots.push(Slot {
            parent,
            children: Vec::new(),
            data,
        });
        if let Some(parent) = parent {
            self.slots[parent.0].children.push(id);
        }
        if let NodeSpec::Element { children, .. } = spec {
            for child in children {
                self.insert(Some(id), child);
            }
        }
        id
    }

    fn spec_of(&self, id: NodeId) -> NodeSpec {
        let slot = &self.slots[id.0];
        match &slot.data {
            NodeData::Text(text) => NodeSpec::Text { text: text.clone() },
            NodeData::Element {
                tag,
                control: None,
                ..
            } => NodeSpec::Element {
                tag: tag.clone(),
                children: slot
                    .children
                    .iter()
                    .map(|child| self.spec_of(*child))
                    .collect(),
            },
            NodeData::Element {
                control: Some(control),
                ..
            } => match control.kind {
                ControlKind::Disclosure => NodeSpec::Combobox {
                    options: control.options.clone(),
                    selected: Some(control.property.value.clone())
                        .filter(|value| !value.is_empty()),
                },
                kind => NodeSpec::Input {
                    kind: match kind {
                        ControlKind::Checkbox => InputKind::Checkbox,
                        ControlKind::Radio => InputKind::Radio,
                        _ => InputKind::Text,
                    },
                    name: control.name.clone(),
                    value: control
                        .option_value
                        .clone()
                        .unwrap_or_else(|| control.property.value.clone()),
                    checked: control.property.checked,
                    managed: control.managed,
                    accepts_activation: control.accepts_activation,
                },
            },
        }
    }

    fn control(&self, id: NodeId) -> Option<&Control> {
        match &self.slots.get(id.0)?.data {
            NodeData::Element { control, .. } => control.as_ref(),
            NodeData::Text(_) => None,
        }
    }

    fn control_mut(&mut self, id: NodeId) -> Option<&mut Control> {
        match &mut self.slots.get_mut(id.0)?.data {
            NodeData::Element { control, .. } => control.as_mut(),
            NodeData::Text(_) => None,
        }
    }

    fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.slots.get(current.0).and_then(|slot| slot.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn attached_control_mut(
        &mut self,
        id: NodeId,
        operation: &'static str,
    ) -> std::result::Result<&mut Control, HostError> {
        if !self.is_attached(id) {
            return Err(HostError::Detached(id.to_string()));
        }
        self.control_mut(id).ok_or(HostError::Unsupported {
            node: id.to_string(),
            operation,
        })
    }

    /// Radios sharing `id`'s group name, `id` excluded.
    fn group_peers(&self, id: NodeId) -> Vec<NodeId> {
        let Some(name) = self.control(id).and_then(|control| control.name.clone()) else {
            return Vec::new();
        };
        (0..self.slots.len())
            .map(NodeId)
            .filter(|other| *other != id)
            .filter(|other| {
                self.control(*other).is_some_and(|control| {
                    control.kind == ControlKind::Radio && control.name.as_deref() == Some(name.as_str())
                })
            })
            .collect()
    }

    /// Checks a radio in both states and clears the rest of its group.
    fn select_radio(&mut self, id: NodeId) {
        for peer in self.group_peers(id) {
            if let Some(control) = self.control_mut(peer) {
                control.property.checked = false;
                control.store.checked = false;
            }
        }
        if let Some(control) = self.control_mut(id) {
            control.property.checked = true;
            control.store.checked = true;
        }
    }

    fn open_disclosure(&mut self, id: NodeId) {
        if let Some(control) = self.control_mut(id) {
            control.open = true;
        }
    }

    fn close_disclosure(&mut self, id: NodeId) {
        let popup = match self.control_mut(id) {
            Some(control) => {
                control.open = false;
                control.popup.take()
            }
            None => None,
        };
        if let Some(popup) = popup {
            self.detach(popup);
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.slots[id.0].parent.take() {
            self.slots[parent.0].children.retain(|child| *child != id);
        }
    }

    fn push_element(&mut self, parent: NodeId, tag: &str, option_of: Option<NodeId>) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            parent: Some(parent),
            children: Vec::new(),
            data: NodeData::Element {
                tag: tag.to_string(),
                control: None,
                option_of,
            },
        });
        self.slots[parent.0].children.push(id);
        id
    }

    fn push_text(&mut self, parent: NodeId, text: &str) {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            parent: Some(parent),
            children: Vec::new(),
            data: NodeData::Text(text.to_string()),
        });
        self.slots[parent.0].children.push(id);
    }

    /// Renders the option list of an opened disclosure into a popup.
    fn render_popup(&mut self, trigger: NodeId) {
        let options = match self.control(trigger) {
            Some(control) if control.open && control.popup.is_none() => control.options.clone(),
            _ => return,
        };
        let root = self.root;
        let popup = self.push_element(root, "ul", None);
        for option in &options {
            let item = self.push_element(popup, "li", Some(trigger));
            if option.nested {
                let inner = self.push_element(item, "span", None);
                self.push_text(inner, &option.label);
            } else {
                self.push_text(item, &option.label);
            }
        }
        if let Some(control) = self.control_mut(trigger) {
            control.popup = Some(popup);
        }
    }

    fn option_owner(&self, id: NodeId) -> Option<NodeId> {
        match &self.slots.get(id.0)?.data {
            NodeData::Element { option_of, .. } => *option_of,
            NodeData::Text(_) => None,
        }
    }
}

impl FormTree for FormDocument {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.root
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.slots.get(node.0).and_then(|slot| slot.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.slots
            .get(node.0)
            .map(|slot| slot.children.clone())
            .unwrap_or_default()
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        match &self.slots.get(node.0)?.data {
            NodeData::Text(text) => Some(text.as_str()),
            NodeData::Element { .. } => None,
        }
    }

    fn control_kind(&self, node: NodeId) -> Option<ControlKind> {
        self.control(node).map(|control| control.kind)
    }

    fn option_value(&self, node: NodeId) -> Option<&str> {
        self.control(node)?.option_value.as_deref()
    }

    fn value(&self, node: NodeId) -> Option<&str> {
        let control = self.control(node)?;
        match control.kind {
            ControlKind::Text | ControlKind::Disclosure => Some(control.property.value.as_str()),
            ControlKind::Checkbox | ControlKind::Radio => None,
        }
    }

    fn is_checked(&self, node: NodeId) -> bool {
        self.control(node)
            .is_some_and(|control| control.property.checked)
    }

    fn is_option(&self, node: NodeId) -> bool {
        self.option_owner(node).is_some()
    }
}

impl ManagedHost for FormDocument {
    fn assign_value(&mut self, node: NodeId, value: &str) -> std::result::Result<(), HostError> {
        self.events
            .push(DocumentEvent::AssignValue(node, value.to_string()));
        let control = self.attached_control_mut(node, "value assignment")?;
        if control.kind != ControlKind::Text {
            return Err(HostError::Unsupported {
                node: node.to_string(),
                operation: "value assignment",
            });
        }
        control.property.value = value.to_string();
        if !control.managed {
            control.store.value = value.to_string();
        }
        Ok(())
    }

    fn assign_checked(&mut self, node: NodeId, checked: bool) -> std::result::Result<(), HostError> {
        self.events.push(DocumentEvent::AssignChecked(node, checked));
        let control = self.attached_control_mut(node, "checked assignment")?;
        if !matches!(control.kind, ControlKind::Checkbox | ControlKind::Radio) {
            return Err(HostError::Unsupported {
                node: node.to_string(),
                operation: "checked assignment",
            });
        }
        control.property.checked = checked;
        if !control.managed {
            if control.kind == ControlKind::Radio && checked {
                self.select_radio(node);
            } else {
                control.store.checked = checked;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, node: NodeId, event: HostEvent) -> std::result::Result<(), HostError> {
        self.events.push(DocumentEvent::Dispatch(node, event));
        let control = self.attached_control_mut(node, "event dispatch")?;
        if !control.managed {
            return Ok(());
        }
        control.store = control.property.clone();
        if control.kind == ControlKind::Radio && control.store.checked {
            self.select_radio(node);
        }
        Ok(())
    }

    fn activate(&mut self, node: NodeId) -> std::result::Result<(), HostError> {
        self.events.push(DocumentEvent::Activate(node));
        if !self.is_attached(node) {
            return Err(HostError::Detached(node.to_string()));
        }

        if let Some(trigger) = self.option_owner(node) {
            let label = crate::locate::full_text(&*self, node);
            if let Some(control) = self.control_mut(trigger) {
                control.property.value = label.clone();
                control.store.value = label;
            }
            self.close_disclosure(trigger);
            return Ok(());
        }

        let Some((kind, open)) = self
            .control(node)
            .filter(|control| control.accepts_activation)
            .map(|control| (control.kind, control.open))
        else {
            return Ok(());
        };
        match kind {
            ControlKind::Checkbox => {
                if let Some(control) = self.control_mut(node) {
                    let checked = !control.store.checked;
                    control.property.checked = checked;
                    control.store.checked = checked;
                }
            }
            ControlKind::Radio => self.select_radio(node),
            ControlKind::Disclosure => {
                if open {
                    self.close_disclosure(node);
                } else {
                    self.open_disclosure(node);
                }
            }
            ControlKind::Text => {}
        }
        Ok(())
    }

    fn pump(&mut self) {
        self.events.push(DocumentEvent::Render);
        let mut opened = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let NodeData::Element {
                control: Some(control),
                ..
            } = &mut slot.data
            {
                if control.managed {
                    control.property = control.store.clone();
                }
                if control.open && control.popup.is_none() {
                    opened.push(NodeId(index));
                }
            }
        }
        for trigger in opened {
            self.render_popup(trigger);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::{full_text, own_text, rendered_options};

    fn single(spec: NodeSpec) -> (FormDocument, NodeId) {
        let doc = FormDocument::from_spec(&NodeSpec::element("form", vec![spec]));
        let node = doc.children(doc.root())[0];
        (doc, node)
    }

    #[test]
    fn test_property_write_without_events_is_reverted_on_render() {
        let (mut doc, input) = single(NodeSpec::text_input("old"));
        doc.assign_value(input, "new").unwrap();
        assert_eq!(doc.value(input), Some("new"));
        assert_eq!(doc.stored_value(input), Some("old"));

        doc.pump();
        assert_eq!(doc.value(input), Some("old"));
    }

    #[test]
    fn test_events_commit_property_to_store() {
        let (mut doc, input) = single(NodeSpec::text_input("old"));
        doc.assign_value(input, "new").unwrap();
        doc.dispatch(input, HostEvent::Input).unwrap();
        doc.pump();
        assert_eq!(doc.value(input), Some("new"));
        assert_eq!(doc.stored_value(input), Some("new"));
    }

    #[test]
    fn test_unmanaged_input_takes_property_writes() {
        let (mut doc, input) = single(NodeSpec::text_input("old").unmanaged());
        doc.assign_value(input, "new").unwrap();
        doc.pump();
        assert_eq!(doc.value(input), Some("new"));
    }

    #[test]
    fn test_radio_activation_is_exclusive() {
        let mut doc = FormDocument::from_spec(&NodeSpec::element(
            "form",
            vec![
                NodeSpec::radio("tier", "A").checked(),
                NodeSpec::radio("tier", "B"),
            ],
        ));
        let radios = doc.children(doc.root());
        doc.activate(radios[1]).unwrap();
        assert!(!doc.is_checked(radios[0]));
        assert!(doc.is_checked(radios[1]));
    }

    #[test]
    fn test_radio_ignoring_activation_needs_managed_write() {
        let mut doc = FormDocument::from_spec(&NodeSpec::element(
            "form",
            vec![
                NodeSpec::radio("tier", "A").checked(),
                NodeSpec::radio("tier", "B").ignoring_activation(),
            ],
        ));
        let radios = doc.children(doc.root());
        doc.activate(radios[1]).unwrap();
        assert!(!doc.is_checked(radios[1]));

        doc.assign_checked(radios[1], true).unwrap();
        doc.dispatch(radios[1], HostEvent::Change).unwrap();
        doc.pump();
        assert!(doc.is_checked(radios[1]));
        assert!(!doc.is_checked(radios[0]));
    }

    #[test]
    fn test_disclosure_renders_options_after_pump() {
        let (mut doc, trigger) = single(NodeSpec::combobox(&["Argentina", "Others"]));
        doc.activate(trigger).unwrap();
        assert!(doc.is_open(trigger));
        assert!(rendered_options(&doc).is_empty());

        doc.pump();
        let options = rendered_options(&doc);
        assert_eq!(options.len(), 2);
        assert_eq!(own_text(&doc, options[0]), "Argentina");

        doc.activate(options[1]).unwrap();
        assert_eq!(doc.value(trigger), Some("Others"));
        assert!(!doc.is_open(trigger));
        assert!(rendered_options(&doc).is_empty());
    }

    #[test]
    fn test_nested_options_have_no_own_text() {
        let (mut doc, trigger) = single(NodeSpec::combobox(&["Goal Poacher"]).nested_options());
        doc.activate(trigger).unwrap();
        doc.pump();
        let option = rendered_options(&doc)[0];
        assert_eq!(own_text(&doc, option), "");
        assert_eq!(full_text(&doc, option), "Goal Poacher");
    }

    #[test]
    fn test_detached_option_rejects_activation() {
        let (mut doc, trigger) = single(NodeSpec::combobox(&["A"]));
        doc.activate(trigger).unwrap();
        doc.pump();
        let option = rendered_options(&doc)[0];
        doc.activate(trigger).unwrap();
        assert_eq!(
            doc.activate(option),
            Err(HostError::Detached(option.to_string()))
        );
    }

    #[test]
    fn test_assign_value_on_checkbox_is_unsupported() {
        let (mut doc, checkbox) = single(NodeSpec::checkbox(false));
        assert!(matches!(
            doc.assign_value(checkbox, "x"),
            Err(HostError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let spec = NodeSpec::element(
            "form",
            vec![
                NodeSpec::element("label", vec![NodeSpec::text("Age"), NodeSpec::text_input("30")]),
                NodeSpec::radio("foot", "Left").checked(),
                NodeSpec::combobox(&["Others"]),
            ],
        );
        let doc = FormDocument::from_spec(&spec);
        let json = doc.to_json().unwrap();
        let reloaded = FormDocument::from_json(&json).unwrap();
        assert_eq!(reloaded.to_spec(), spec);
    }

    #[test]
    fn test_text_root_snapshot_rejected() {
        let err = FormDocument::from_json(r#"{"type":"text","text":"x"}"#).unwrap_err();
        assert!(matches!(err, SyncError::InvalidSnapshot(_)));
    }
}
