// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin settings tooltip sequencer.
//!
//! Shows a short onboarding sequence of contextual tooltips on an admin
//! settings surface. The sequence only activates when the admin page was
//! opened with the activation query flag; advancing from one tooltip to
//! the next can be gated on the current value of a settings form field;
//! dismissing the final tooltip notifies the host once so the sequence
//! does not replay on the next visit.

use std::sync::Arc;

use merx_core::Transport;
use serde_json::json;
use tracing::debug;

/// A single tooltip in the sequence.
#[derive(Debug, Clone)]
pub struct TooltipStep {
    /// Stable identifier reported to the host on dismissal.
    pub id: String,
    /// Text shown to the admin.
    pub text: String,
    /// When set, the sequence advances past this step only while the
    /// observed form-field value equals this expectation.
    pub advance_when: Option<String>,
}

impl TooltipStep {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            advance_when: None,
        }
    }

    /// Gates advancement past this step on a form-field value.
    pub fn advance_when(mut self, expected: impl Into<String>) -> Self {
        self.advance_when = Some(expected.into());
        self
    }
}

/// Sequencer over an ordered list of tooltip steps.
///
/// Stateless beyond its own cursor; the enclosing admin surface drives it
/// from form events.
pub struct TooltipSequencer {
    steps: Vec<TooltipStep>,
    position: usize,
    active: bool,
    dismissed: bool,
    transport: Arc<dyn Transport>,
    dismiss_endpoint: Option<String>,
}

impl TooltipSequencer {
    /// Creates a sequencer.
    ///
    /// `active` reflects the activation query flag of the admin page;
    /// an inactive sequencer shows nothing and notifies nothing.
    pub fn new(
        steps: Vec<TooltipStep>,
        active: bool,
        transport: Arc<dyn Transport>,
        dismiss_endpoint: Option<String>,
    ) -> Self {
        Self {
            steps,
            position: 0,
            active,
            dismissed: false,
            transport,
            dismiss_endpoint,
        }
    }

    /// Returns true while a tooltip is showing.
    pub fn is_showing(&self) -> bool {
        self.active && !self.dismissed && self.position < self.steps.len()
    }

    /// The tooltip currently shown, if any.
    pub fn current(&self) -> Option<&TooltipStep> {
        if self.is_showing() {
            self.steps.get(self.position)
        } else {
            None
        }
    }

    /// Attempts to advance to the next tooltip.
    ///
    /// `field_value` is the current value of the form field the active
    /// step is watching. Advancement happens only when the step has no
    /// gate or the gate matches. Returns true if the cursor moved.
    pub fn advance(&mut self, field_value: &str) -> bool {
        let Some(step) = self.current() else {
            return false;
        };

        if let Some(ref expected) = step.advance_when
            && expected != field_value
        {
            debug!(step = %step.id, "tooltip advance gated on form field");
            return false;
        }

        self.position += 1;
        true
    }

    /// Returns true while the final tooltip of the sequence is showing.
    pub fn on_final_step(&self) -> bool {
        self.is_showing() && self.position + 1 == self.steps.len()
    }

    /// Dismisses the sequence.
    ///
    /// Dismissing the final tooltip issues a single fire-and-forget
    /// notification to the host so the sequence does not repeat on the
    /// next visit; dismissing earlier just hides the sequence for this
    /// page view.
    pub async fn dismiss(&mut self) {
        if !self.is_showing() {
            return;
        }

        let notify = self.on_final_step();
        self.dismissed = true;

        if notify
            && let Some(ref endpoint) = self.dismiss_endpoint
        {
            let step_id = self.steps[self.position].id.clone();
            self.transport
                .notify(
                    endpoint,
                    json!({
                        "action": "tooltip_dismissed",
                        "step": step_id,
                    }),
                )
                .await;
        }
    }
}
