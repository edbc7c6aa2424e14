/// Wizard step definitions
///
/// Defines all steps in the account deletion flow.

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Phone verification - Look up the account by mobile number
    Phone,

    /// Email verification - Confirm the email on file and send a code
    Email,

    /// Code entry - One-time code authorizing the deletion
    Code,

    /// Done - Account has been deleted
    Done,
}

impl WizardStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Phone => "Enter Your Phone Number",
            WizardStep::Email => "Verify Your Email",
            WizardStep::Code => "Enter Verification Code",
            WizardStep::Done => "Account Deleted Successfully",
        }
    }

    /// Get step description
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Phone => "We'll verify your account using your registered mobile number",
            WizardStep::Email => "Enter your email address to receive verification code",
            WizardStep::Code => "Enter the code we sent to your email",
            WizardStep::Done => "Your account has been permanently deleted",
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Phone => 1,
            WizardStep::Email => 2,
            WizardStep::Code => 3,
            WizardStep::Done => 4,
        }
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        4
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, WizardStep::Phone)
    }

    /// Check if this is the terminal step
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Done)
    }

    /// Get next step
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Phone => Some(WizardStep::Email),
            WizardStep::Email => Some(WizardStep::Code),
            WizardStep::Code => Some(WizardStep::Done),
            WizardStep::Done => None,
        }
    }

    /// Get previous step
    ///
    /// Done has no previous: the only way out of the terminal step is reset.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Phone => None,
            WizardStep::Email => Some(WizardStep::Phone),
            WizardStep::Code => Some(WizardStep::Email),
            WizardStep::Done => None,
        }
    }

    /// Get all steps in order
    pub fn all_steps() -> Vec<WizardStep> {
        vec![
            WizardStep::Phone,
            WizardStep::Email,
            WizardStep::Code,
            WizardStep::Done,
        ]
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Phone
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        let step = WizardStep::Phone;
        assert!(step.is_first());
        assert!(!step.is_terminal());

        let next = step.next().unwrap();
        assert_eq!(next, WizardStep::Email);

        let done = WizardStep::Done;
        assert!(done.is_terminal());
        assert!(done.next().is_none());
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::Phone.number(), 1);
        assert_eq!(WizardStep::Done.number(), 4);
        assert_eq!(WizardStep::total_steps(), 4);
    }

    #[test]
    fn test_previous_navigation() {
        assert_eq!(WizardStep::Email.previous(), Some(WizardStep::Phone));
        assert_eq!(WizardStep::Code.previous(), Some(WizardStep::Email));

        assert_eq!(WizardStep::Phone.previous(), None);
        // No back from the terminal step, only reset
        assert_eq!(WizardStep::Done.previous(), None);
    }

    #[test]
    fn test_all_steps() {
        let steps = WizardStep::all_steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], WizardStep::Phone);
        assert_eq!(steps[3], WizardStep::Done);
    }
}
