/// Wizard flow management
///
/// Applies user actions to the wizard state: per-step validation, the
/// in-flight guard, account service calls and step transitions. Validation
/// failures short-circuit before any network call is made.

use super::events::{ActionOutcome, WizardAction};
use super::state::{MessageKind, WizardState};
use super::steps::WizardStep;
use crate::error::GatewayError;
use crate::gateway::AccountService;

/// Shown whenever a transport-level failure is mapped to a user message
const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Wizard flow engine
pub struct WizardFlow<S: AccountService> {
    state: WizardState,
    service: S,
}

impl<S: AccountService> WizardFlow<S> {
    /// Create a new flow at the Phone step
    pub fn new(service: S) -> Self {
        Self {
            state: WizardState::new(),
            service,
        }
    }

    /// Get current step
    pub fn current_step(&self) -> WizardStep {
        self.state.step()
    }

    /// Get wizard state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Get mutable wizard state (input setters)
    pub fn state_mut(&mut self) -> &mut WizardState {
        &mut self.state
    }

    /// Check if the wizard reached the terminal step
    pub fn is_done(&self) -> bool {
        self.state.step().is_terminal()
    }

    /// Apply a user action to the wizard
    pub fn apply(&mut self, action: WizardAction) -> ActionOutcome {
        log::info!("Applying action: {}", action.description());

        match action {
            WizardAction::Submit => self.submit(),
            WizardAction::Back => self.back(),
            WizardAction::Reset => self.reset(),
            WizardAction::MessageExpired { generation } => {
                self.state.expire_message(generation);
                ActionOutcome::Stayed
            }
        }
    }

    /// Submit the current step's input
    fn submit(&mut self) -> ActionOutcome {
        if self.state.is_busy() {
            return ActionOutcome::Blocked {
                reason: "A request is already in progress".to_string(),
            };
        }

        match self.state.step() {
            WizardStep::Phone => self.submit_phone(),
            WizardStep::Email => self.submit_email(),
            WizardStep::Code => self.submit_code(),
            WizardStep::Done => ActionOutcome::Blocked {
                reason: "Wizard already finished; reset to start over".to_string(),
            },
        }
    }

    fn submit_phone(&mut self) -> ActionOutcome {
        if !self.state.phone_is_valid() {
            self.state
                .show_message("Please enter a valid phone number", MessageKind::Error);
            return ActionOutcome::Stayed;
        }

        self.state.set_busy(true);
        let result = self.service.check_user(self.state.phone_number());
        self.state.set_busy(false);

        match result {
            Ok(account) if account.has_email => {
                self.state.set_step(WizardStep::Email);
                self.state.show_message(
                    "Account found! Please verify your identity.",
                    MessageKind::Success,
                );
                log::info!("Step advanced: Phone -> Email");
                ActionOutcome::Moved(WizardStep::Email)
            }
            Ok(_) => {
                // Account exists but has no email to verify against
                self.state.show_message(
                    "Please add your email address in the app first, then try again.",
                    MessageKind::Error,
                );
                ActionOutcome::Stayed
            }
            Err(GatewayError::Rejected { message }) => {
                let text = message
                    .unwrap_or_else(|| "Account not found with this phone number.".to_string());
                self.state.show_message(text, MessageKind::Error);
                ActionOutcome::Stayed
            }
            Err(GatewayError::Transport(_)) => {
                self.state
                    .show_message(NETWORK_ERROR_MESSAGE, MessageKind::Error);
                ActionOutcome::Stayed
            }
        }
    }

    fn submit_email(&mut self) -> ActionOutcome {
        if !self.state.email_is_valid() {
            self.state
                .show_message("Please enter your email address", MessageKind::Error);
            return ActionOutcome::Stayed;
        }

        self.state.set_busy(true);
        let result = self
            .service
            .send_verification(self.state.phone_number(), self.state.email());
        self.state.set_busy(false);

        match result {
            Ok(()) => {
                self.state.set_step(WizardStep::Code);
                self.state.show_message(
                    "Verification code sent to your email!",
                    MessageKind::Success,
                );
                log::info!("Step advanced: Email -> Code");
                ActionOutcome::Moved(WizardStep::Code)
            }
            Err(GatewayError::Rejected { message }) => {
                let text =
                    message.unwrap_or_else(|| "Email does not match our records.".to_string());
                self.state.show_message(text, MessageKind::Error);
                ActionOutcome::Stayed
            }
            Err(GatewayError::Transport(_)) => {
                self.state
                    .show_message(NETWORK_ERROR_MESSAGE, MessageKind::Error);
                ActionOutcome::Stayed
            }
        }
    }

    fn submit_code(&mut self) -> ActionOutcome {
        if !self.state.code_is_valid() {
            self.state
                .show_message("Please enter the verification code", MessageKind::Error);
            return ActionOutcome::Stayed;
        }

        self.state.set_busy(true);
        let result = self.service.delete_account(
            self.state.phone_number(),
            self.state.email(),
            self.state.verification_code(),
        );
        self.state.set_busy(false);

        match result {
            Ok(()) => {
                self.state.set_step(WizardStep::Done);
                self.state
                    .show_message("Account deleted successfully!", MessageKind::Success);
                log::info!("Step advanced: Code -> Done, account deleted");
                ActionOutcome::Completed
            }
            Err(GatewayError::Rejected { message }) => {
                let text = message.unwrap_or_else(|| "Invalid verification code.".to_string());
                self.state.show_message(text, MessageKind::Error);
                ActionOutcome::Stayed
            }
            Err(GatewayError::Transport(_)) => {
                self.state
                    .show_message(NETWORK_ERROR_MESSAGE, MessageKind::Error);
                ActionOutcome::Stayed
            }
        }
    }

    /// Go back one step; inputs are preserved and no network call is made
    fn back(&mut self) -> ActionOutcome {
        if self.state.is_busy() {
            return ActionOutcome::Blocked {
                reason: "A request is already in progress".to_string(),
            };
        }

        match self.state.step().previous() {
            Some(prev) => {
                self.state.set_step(prev);
                log::info!("Step moved back to {:?}", prev);
                ActionOutcome::Moved(prev)
            }
            None => ActionOutcome::Blocked {
                reason: "Cannot go back from this step".to_string(),
            },
        }
    }

    /// Start over; only valid once the wizard reached Done
    fn reset(&mut self) -> ActionOutcome {
        if !self.state.step().is_terminal() {
            return ActionOutcome::Blocked {
                reason: "Reset is only available after completion".to_string(),
            };
        }

        self.state.reset();
        log::info!("Wizard reset to Phone step");
        ActionOutcome::Moved(WizardStep::Phone)
    }
}
