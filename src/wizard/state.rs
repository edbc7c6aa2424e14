/// Wizard state management
///
/// Tracks the current step, collected inputs, the transient status message
/// and the in-flight guard. Created fresh per session, never persisted.

use super::steps::WizardStep;
use std::time::Duration;

/// How long a status message stays visible before auto-clearing.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Minimum phone number length accepted before a lookup is attempted
pub const MIN_PHONE_LEN: usize = 10;

/// Minimum verification code length accepted before deletion is attempted
pub const MIN_CODE_LEN: usize = 4;

/// Kind of status message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient status message
///
/// Each message carries the generation it was created under. Scheduled clears
/// quote that generation back, so the clear for an old message never wipes a
/// newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub generation: u64,
}

/// Wizard state
#[derive(Debug, Clone)]
pub struct WizardState {
    /// Current step
    step: WizardStep,

    /// Mobile number entered at the Phone step
    phone_number: String,

    /// Email address entered at the Email step
    email: String,

    /// One-time code entered at the Code step
    verification_code: String,

    /// Currently visible status message, if any
    status: Option<StatusMessage>,

    /// Monotonic counter backing message supersession
    message_generation: u64,

    /// True only while a network call for the current step is in flight
    busy: bool,
}

impl WizardState {
    /// Create a new wizard state (fresh start at the Phone step)
    pub fn new() -> Self {
        Self {
            step: WizardStep::Phone,
            phone_number: String::new(),
            email: String::new(),
            verification_code: String::new(),
            status: None,
            message_generation: 0,
            busy: false,
        }
    }

    /// Get current step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Set current step
    pub fn set_step(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn set_phone_number(&mut self, phone: impl Into<String>) {
        self.phone_number = phone.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn verification_code(&self) -> &str {
        &self.verification_code
    }

    pub fn set_verification_code(&mut self, code: impl Into<String>) {
        self.verification_code = code.into();
    }

    /// Check if a network call is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Set the in-flight guard
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Get the currently visible status message
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Show a status message, superseding any previous one.
    ///
    /// Returns the generation of the new message. The caller schedules a
    /// clear for that generation after [`MESSAGE_TTL`]; because the counter
    /// advances here, any clear still pending for an older message becomes
    /// stale and is ignored by [`expire_message`](Self::expire_message).
    pub fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) -> u64 {
        self.message_generation += 1;
        let generation = self.message_generation;
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            generation,
        });
        generation
    }

    /// Clear the status message if `generation` still matches the one shown
    pub fn expire_message(&mut self, generation: u64) {
        if self
            .status
            .as_ref()
            .is_some_and(|msg| msg.generation == generation)
        {
            self.status = None;
        }
    }

    /// Validate the phone number for the Phone step
    pub fn phone_is_valid(&self) -> bool {
        // Character count, not byte length: multi-byte input must not
        // sneak past the minimum
        !self.phone_number.is_empty() && self.phone_number.chars().count() >= MIN_PHONE_LEN
    }

    /// Validate the email for the Email step
    pub fn email_is_valid(&self) -> bool {
        !self.email.is_empty()
    }

    /// Validate the verification code for the Code step
    pub fn code_is_valid(&self) -> bool {
        !self.verification_code.is_empty() && self.verification_code.chars().count() >= MIN_CODE_LEN
    }

    /// Reset wizard to the beginning, clearing all collected inputs.
    ///
    /// The busy flag is left alone: reset is only reachable from Done, where
    /// no call can be in flight. The generation counter keeps advancing so
    /// clears scheduled before the reset stay stale.
    pub fn reset(&mut self) {
        self.step = WizardStep::Phone;
        self.phone_number.clear();
        self.email.clear();
        self.verification_code.clear();
        self.status = None;
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
