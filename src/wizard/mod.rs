/// Account deletion wizard module
///
/// Drives the multi-step deletion flow: verify a phone number, verify the
/// email on file, enter the one-time code, delete the account.
///
/// ## Architecture
///
/// ```text
/// WizardFlow
///   ├── WizardState (step, inputs, status message, busy flag)
///   ├── WizardStep (Phone, Email, Code, Done)
///   ├── WizardAction (Submit, Back, Reset, MessageExpired)
///   └── AccountService (network gateway, injected)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use deletion_wizard::wizard::{WizardAction, WizardFlow};
///
/// let mut flow = WizardFlow::new(service);
///
/// flow.state_mut().set_phone_number("5551234567");
/// match flow.apply(WizardAction::Submit) {
///     ActionOutcome::Moved(step) => {
///         // Render the next step
///     }
///     ActionOutcome::Stayed => {
///         // Show flow.state().status()
///     }
///     // ... other outcomes
/// }
/// ```
///
/// ## Steps
///
/// 1. **Phone** - Look up the account by mobile number
/// 2. **Email** - Confirm the email on file, send a one-time code
/// 3. **Code** - Enter the code and authorize deletion
/// 4. **Done** - Account deleted; reset starts over

pub mod events;
pub mod flow;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use events::{ActionOutcome, WizardAction};
pub use flow::WizardFlow;
pub use state::{MessageKind, StatusMessage, WizardState, MESSAGE_TTL};
pub use steps::WizardStep;
