/// Action and outcome types for the wizard
///
/// Actions represent user requests (imperative). They are applied by the
/// flow, which answers with an outcome.

use super::steps::WizardStep;

/// Wizard actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Submit the current step's input
    Submit,

    /// Go back one step (Email to Phone, Code to Email); never a network call
    Back,

    /// After Done, clear all fields and start over
    Reset,

    /// A scheduled message clear fired
    MessageExpired { generation: u64 },
}

impl WizardAction {
    /// Get a human-readable description of the action
    pub fn description(&self) -> String {
        match self {
            WizardAction::Submit => "Submit current step".to_string(),
            WizardAction::Back => "Go back one step".to_string(),
            WizardAction::Reset => "Reset wizard".to_string(),
            WizardAction::MessageExpired { generation } => {
                format!("Message expired (generation {})", generation)
            }
        }
    }
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The wizard moved to a different step
    Moved(WizardStep),

    /// The step did not change; the status message explains why
    Stayed,

    /// Action not applicable right now (busy, or wrong step)
    Blocked { reason: String },

    /// Deletion succeeded, wizard reached Done
    Completed,
}
