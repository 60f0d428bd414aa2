//! Contact form submission gate.
//!
//! The first submit gesture never reaches the network: it runs native
//! validation and, if the form is valid, opens the [`ConfirmDialog`] with a
//! snapshot of the fields. Only after the dialog is confirmed does a submit go
//! through, after which the form stays locked for the rest of the page's life.

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::dialog::{CancelTrigger, ConfirmDialog, DialogSurface, FormSnapshot, Resolution};
use crate::dom;
use crate::error::Result;

/// The four user-editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Id of the form input.
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Name => dom::FIELD_NAME,
            FormField::Email => dom::FIELD_EMAIL,
            FormField::Subject => dom::FIELD_SUBJECT,
            FormField::Message => dom::FIELD_MESSAGE,
        }
    }

    /// Id of the matching read-only row in the confirm modal.
    pub fn confirm_id(&self) -> &'static str {
        match self {
            FormField::Name => dom::CONFIRM_NAME,
            FormField::Email => dom::CONFIRM_EMAIL,
            FormField::Subject => dom::CONFIRM_SUBJECT,
            FormField::Message => dom::CONFIRM_MESSAGE,
        }
    }
}

/// The form element and its surroundings, as seen by the controller.
pub trait FormHost {
    /// Native constraint validation (`checkValidity`).
    fn check_validity(&mut self) -> bool;
    /// Surface native validation messages (`reportValidity`).
    fn report_validity(&mut self);
    fn field_value(&self, field: FormField) -> Result<String>;
    fn set_reply_to(&mut self, value: &str) -> Result<()>;
    fn set_send_enabled(&mut self, enabled: bool) -> Result<()>;
    fn set_status(&mut self, text: &str) -> Result<()>;
    /// Whether the host can re-dispatch a submit event (`requestSubmit`).
    fn can_request_submit(&self) -> bool;
}

/// Result of one submit gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the host has been asked to report it.
    Invalid,
    /// Valid, and the confirm dialog is now showing.
    AwaitingConfirmation,
    /// Confirmed; the native POST must be allowed through.
    Sending,
    /// The form was already sent from this page.
    AlreadySubmitted,
}

impl SubmitOutcome {
    /// `false` means the caller must `preventDefault()` the submit event.
    pub fn allows_native_submit(&self) -> bool {
        matches!(self, SubmitOutcome::Sending)
    }
}

/// What the caller must do after the confirm button was pressed.
///
/// The controller never submits by itself: `requestSubmit` dispatches the
/// submit event synchronously, which re-enters [`ContactForm::on_submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The dialog was not open.
    Ignored,
    /// Call `requestSubmit()`; the resulting submit event is let through.
    RequestSubmit,
    /// Already finalized; call the native `submit()` (no submit event fires).
    SubmitDirectly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Confirming,
    Confirmed,
    Submitted,
}

/// Owns the confirmation state of one page's contact form.
pub struct ContactForm<H, V> {
    host: H,
    dialog: ConfirmDialog<V>,
    phase: Phase,
    sending_message: String,
    success_message: String,
    notice_shown: bool,
}

impl<H: FormHost, V: DialogSurface> ContactForm<H, V> {
    pub fn new(host: H, surface: V, config: &SiteConfig) -> Self {
        Self {
            host,
            dialog: ConfirmDialog::new(surface, config.placeholder.clone()),
            phase: Phase::Editing,
            sending_message: config.sending_message.clone(),
            success_message: config.success_message.clone(),
            notice_shown: false,
        }
    }

    /// The confirmation flag: set by the dialog's confirm action, consumed by
    /// the next submit.
    pub fn is_confirmed(&self) -> bool {
        self.phase == Phase::Confirmed
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn dialog(&self) -> &ConfirmDialog<V> {
        &self.dialog
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle a submit event.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        match self.phase {
            Phase::Submitted => {
                debug!("form already submitted, blocking");
                SubmitOutcome::AlreadySubmitted
            }
            Phase::Confirmed => {
                self.finalize();
                SubmitOutcome::Sending
            }
            Phase::Editing | Phase::Confirming => {
                if !self.host.check_validity() {
                    self.host.report_validity();
                    debug!("form invalid, confirmation not requested");
                    return SubmitOutcome::Invalid;
                }
                let snapshot = self.capture();
                self.dialog.open(snapshot);
                self.phase = Phase::Confirming;
                SubmitOutcome::AwaitingConfirmation
            }
        }
    }

    /// Handle the dialog's confirm button.
    pub fn on_confirm(&mut self) -> ConfirmOutcome {
        if self.dialog.confirm().is_none() {
            return ConfirmOutcome::Ignored;
        }
        self.phase = Phase::Confirmed;

        if self.host.can_request_submit() {
            ConfirmOutcome::RequestSubmit
        } else {
            debug!("requestSubmit unavailable, finalizing directly");
            self.finalize();
            ConfirmOutcome::SubmitDirectly
        }
    }

    /// Call after executing [`ConfirmOutcome::RequestSubmit`].
    ///
    /// `requestSubmit` validates again before dispatching, and fires no submit
    /// event when that fails. The confirmation must not survive into the next
    /// gesture, so a form left `Confirmed` goes back to editing. Returns whether
    /// the confirmation was dropped.
    pub fn settle_confirm(&mut self) -> bool {
        if self.phase != Phase::Confirmed {
            return false;
        }
        debug!("re-submit rejected by validation, confirmation dropped");
        self.phase = Phase::Editing;
        true
    }

    /// Handle the cancel button, a backdrop click or Escape.
    pub fn on_cancel(&mut self, trigger: CancelTrigger) -> Option<Resolution> {
        let resolution = self.dialog.cancel(trigger)?;
        self.phase = Phase::Editing;
        Some(resolution)
    }

    /// Show the success notice if the page was loaded with `sent=1`.
    ///
    /// `sent` is the raw value of the `sent` query parameter. Only the first
    /// call can have an effect.
    pub fn show_sent_notice(&mut self, sent: Option<&str>) -> bool {
        if self.notice_shown || sent != Some("1") {
            return false;
        }
        self.notice_shown = true;
        if let Err(err) = self.host.set_status(&self.success_message) {
            debug!(%err, "no status element for success notice");
            return false;
        }
        info!("contact form sent on previous visit");
        true
    }

    fn capture(&self) -> FormSnapshot {
        let read = |field: FormField| self.read_field(field);
        FormSnapshot::new(
            &read(FormField::Name),
            &read(FormField::Email),
            &read(FormField::Subject),
            &read(FormField::Message),
        )
    }

    fn read_field(&self, field: FormField) -> String {
        self.host.field_value(field).unwrap_or_else(|err| {
            debug!(?field, %err, "reading missing field as empty");
            String::new()
        })
    }

    /// Effects shared by both send paths.
    fn finalize(&mut self) {
        let email = self.read_field(FormField::Email);
        if let Err(err) = self.host.set_reply_to(email.trim()) {
            debug!(%err, "no reply-to field");
        }
        if let Err(err) = self.host.set_send_enabled(false) {
            debug!(%err, "no send button to disable");
        }
        if let Err(err) = self.host.set_status(&self.sending_message) {
            debug!(%err, "no status element");
        }
        self.phase = Phase::Submitted;
        info!("contact form submitting");
    }
}
