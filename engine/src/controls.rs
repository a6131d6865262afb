//! Value-setting primitives for managed controls.
//!
//! Each primitive resolves its control from scratch (region → label →
//! control), so it stays correct when the host re-renders between calls.
//! A missing label, control or option is not an error: the primitive
//! returns `false` (or `None`) and the caller decides how to report it.
//! Only failures raised by the host itself propagate.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::SyncTiming;
use crate::error::Result;
use crate::locate;
use crate::tree::{ControlKind, ControlQuery, HostEvent, ManagedHost};

/// Value written through the managed protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagedValue<'a> {
    Text(&'a str),
    Checked(bool),
}

/// Drives control mutations on a host tree.
///
/// Holds no state about the tree between calls; every method re-scans.
pub struct Synchronizer<'h, H: ManagedHost> {
    host: &'h mut H,
    timing: SyncTiming,
}

impl<'h, H: ManagedHost> Synchronizer<'h, H> {
    pub fn new(host: &'h mut H, timing: SyncTiming) -> Self {
        Self { host, timing }
    }

    /// Finds the region following the heading `title`.
    pub fn find_section(&self, title: &str) -> Option<H::Node> {
        locate::find_section(&*self.host, title)
    }

    /// Finds the element in `region` whose own text is `text`.
    pub fn locate_control_by_text(&self, region: H::Node, text: &str) -> Option<H::Node> {
        locate::locate_control_by_text(&*self.host, region, text)
    }

    fn resolve(&self, region: H::Node, label: &str, query: ControlQuery<'_>) -> Option<H::Node> {
        let Some(label_node) = self.locate_control_by_text(region, label) else {
            debug!(label, "Label not found");
            return None;
        };
        let control = locate::find_control(
            &*self.host,
            region,
            label_node,
            query,
            self.timing.label_climb_depth,
        );
        if control.is_none() {
            debug!(label, ?query, "No matching control next to label");
        }
        control
    }

    /// Suspends for `delay` (or one scheduling tick), then lets the host
    /// process what the suspension allowed to happen.
    async fn settle(&mut self, delay: Duration) {
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
        self.host.pump();
    }

    /// Writes through the canonical setter and emits the events a human
    /// edit produces, so the owning framework commits the value.
    pub async fn write_managed(&mut self, node: H::Node, value: ManagedValue<'_>) -> Result<()> {
        match value {
            ManagedValue::Text(text) => self.host.assign_value(node, text)?,
            ManagedValue::Checked(checked) => self.host.assign_checked(node, checked)?,
        }
        self.host.dispatch(node, HostEvent::Input)?;
        self.host.dispatch(node, HostEvent::Change)?;
        self.settle(Duration::ZERO).await;
        Ok(())
    }

    /// Sets the text control labelled `label`.
    ///
    /// Returns `false` without touching the tree when `value` is absent or
    /// the control cannot be found.
    pub async fn set_text_value(
        &mut self,
        region: H::Node,
        label: &str,
        value: Option<&str>,
    ) -> Result<bool> {
        let Some(value) = value else {
            debug!(label, "No value to write");
            return Ok(false);
        };
        let Some(input) = self.resolve(region, label, ControlQuery::Text) else {
            return Ok(false);
        };
        self.write_managed(input, ManagedValue::Text(value)).await?;
        debug!(label, value, "Set text value");
        Ok(true)
    }

    /// Sets the checkbox labelled `label`.
    pub async fn set_checkbox(&mut self, region: H::Node, label: &str, value: bool) -> Result<bool> {
        let Some(checkbox) = self.resolve(region, label, ControlQuery::Checkbox) else {
            return Ok(false);
        };
        if self.host.is_checked(checkbox) != value {
            self.write_managed(checkbox, ManagedValue::Checked(value))
                .await?;
        }
        debug!(label, value, "Set checkbox");
        Ok(true)
    }

    /// Selects option `value` of the radio group labelled `label`.
    pub async fn set_radio_option(
        &mut self,
        region: H::Node,
        label: &str,
        value: &str,
    ) -> Result<bool> {
        let Some(radio) = self.resolve(region, label, ControlQuery::Radio(value)) else {
            return Ok(false);
        };
        let checked = self.select_radio(radio).await?;
        debug!(label, value, checked, "Set radio option");
        Ok(checked)
    }

    /// Activates a radio like a user would, then falls back to the managed
    /// protocol when the host ignored the activation.
    async fn select_radio(&mut self, radio: H::Node) -> Result<bool> {
        if self.host.is_checked(radio) {
            return Ok(true);
        }
        self.host.activate(radio)?;
        self.settle(self.timing.activation_delay()).await;
        if self.host.is_checked(radio) {
            return Ok(true);
        }
        debug!(?radio, "Activation ignored, writing radio through setter");
        self.write_managed(radio, ManagedValue::Checked(true)).await?;
        Ok(self.host.is_checked(radio))
    }

    /// Sets every checkbox in `region` to `value`; returns how many changed.
    pub async fn set_all_checkboxes_in_region(
        &mut self,
        region: H::Node,
        value: bool,
    ) -> Result<usize> {
        let checkboxes = locate::controls_of_kind(&*self.host, region, ControlKind::Checkbox);
        let mut changed = 0;
        for checkbox in checkboxes {
            if self.host.is_checked(checkbox) != value {
                self.write_managed(checkbox, ManagedValue::Checked(value))
                    .await?;
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Selects option `value` in every radio group of `region`; returns
    /// how many groups changed.
    pub async fn set_all_radios_in_region(&mut self, region: H::Node, value: &str) -> Result<usize> {
        let radios: Vec<_> = locate::controls_of_kind(&*self.host, region, ControlKind::Radio)
            .into_iter()
            .filter(|radio| self.host.option_value(*radio) == Some(value))
            .collect();
        let mut changed = 0;
        for radio in radios {
            if self.host.is_checked(radio) {
                continue;
            }
            if self.select_radio(radio).await? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Picks `option` from the combobox labelled `label`.
    ///
    /// Opens the disclosure, waits for the option list to render and
    /// activates the option whose own text (or full subtree text, when
    /// `match_full_subtree` is set) equals `option`. If none matches, the
    /// list is closed and the whole sequence is retried once with
    /// `fallback`; a fallback equal to `option` is not retried.
    ///
    /// Returns the option that was selected.
    pub async fn select_combobox_option(
        &mut self,
        region: H::Node,
        label: &str,
        option: &str,
        fallback: Option<&str>,
        match_full_subtree: bool,
    ) -> Result<Option<String>> {
        let mut candidates = vec![option];
        candidates.extend(fallback.filter(|fallback| *fallback != option));

        for (attempt, candidate) in candidates.into_iter().enumerate() {
            let Some(trigger) = self.resolve(region, label, ControlQuery::Disclosure) else {
                return Ok(None);
            };
            if attempt > 0 {
                warn!(label, option, fallback = candidate, "Option not listed, retrying with fallback");
            }

            self.host.activate(trigger)?;
            self.settle(self.timing.render_delay()).await;

            let matched = locate::rendered_options(&*self.host)
                .into_iter()
                .find(|node| {
                    locate::option_matches(&*self.host, *node, candidate, match_full_subtree)
                });
            match matched {
                Some(node) => {
                    self.host.activate(node)?;
                    self.settle(Duration::ZERO).await;
                    debug!(label, option = candidate, "Selected combobox option");
                    return Ok(Some(candidate.to_string()));
                }
                None => {
                    debug!(label, option = candidate, "Option not rendered, closing list");
                    self.host.activate(trigger)?;
                    self.settle(Duration::ZERO).await;
                }
            }
        }

        Ok(None)
    }
}
