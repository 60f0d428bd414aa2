//! Confirm modal shown before the contact form is sent.
//!
//! The dialog is a two-state machine (`Closed`, `Open`). Opening it renders a
//! [`FormSnapshot`]; it then resolves at most once per open period, either
//! through the confirm button or through one of the cancel triggers. Events
//! arriving while closed are ignored.

use tracing::{debug, warn};

use crate::error::Result;
use crate::form::FormField;

/// Trimmed copy of the form fields, taken when confirmation is requested.
///
/// Display only: the form fields are read again when the form is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormSnapshot {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Value as shown in the dialog: `placeholder` when the field is empty.
    pub fn display<'a>(&'a self, field: FormField, placeholder: &'a str) -> &'a str {
        let value = self.get(field);
        if value.is_empty() { placeholder } else { value }
    }
}

/// What closed the dialog without confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTrigger {
    Button,
    Backdrop,
    Escape,
}

/// How an open period ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Confirmed,
    Cancelled(CancelTrigger),
}

/// The modal's presence in the page.
pub trait DialogSurface {
    /// Write the display text for one snapshot row.
    fn set_field_text(&mut self, field: FormField, text: &str) -> Result<()>;
    /// Show or hide the modal, keeping `aria-hidden` in step.
    fn set_visible(&mut self, visible: bool) -> Result<()>;
    /// Suppress or restore scrolling of the page behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DialogState {
    Closed,
    Open(FormSnapshot),
}

pub struct ConfirmDialog<V> {
    surface: V,
    placeholder: String,
    state: DialogState,
}

impl<V: DialogSurface> ConfirmDialog<V> {
    pub fn new(surface: V, placeholder: impl Into<String>) -> Self {
        Self {
            surface,
            placeholder: placeholder.into(),
            state: DialogState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    /// Snapshot currently on display, if open.
    pub fn snapshot(&self) -> Option<&FormSnapshot> {
        match &self.state {
            DialogState::Open(snapshot) => Some(snapshot),
            DialogState::Closed => None,
        }
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Render `snapshot` and show the modal.
    pub fn open(&mut self, snapshot: FormSnapshot) {
        for field in FormField::ALL {
            let text = snapshot.display(field, &self.placeholder);
            if let Err(err) = self.surface.set_field_text(field, text) {
                debug!(?field, %err, "confirm row missing");
            }
        }

        match self.surface.set_visible(true) {
            Ok(()) => self.surface.set_scroll_locked(true),
            Err(err) => warn!(%err, "confirm modal missing, cannot show it"),
        }
        debug!("confirm dialog opened");
        self.state = DialogState::Open(snapshot);
    }

    /// Close without confirming. Ignored while closed.
    pub fn cancel(&mut self, trigger: CancelTrigger) -> Option<Resolution> {
        if !self.is_open() {
            return None;
        }
        self.close();
        debug!(?trigger, "confirm dialog cancelled");
        Some(Resolution::Cancelled(trigger))
    }

    /// Close and confirm. Ignored while closed.
    pub fn confirm(&mut self) -> Option<Resolution> {
        if !self.is_open() {
            return None;
        }
        self.close();
        debug!("confirm dialog confirmed");
        Some(Resolution::Confirmed)
    }

    fn close(&mut self) {
        match self.surface.set_visible(false) {
            Ok(()) => self.surface.set_scroll_locked(false),
            Err(err) => warn!(%err, "confirm modal missing, cannot hide it"),
        }
        self.state = DialogState::Closed;
    }
}
