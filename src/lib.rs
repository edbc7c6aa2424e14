/// Account deletion wizard
///
/// Library side of the deletion-wizard binary: the step state machine, the
/// HTTP gateway to the account service, and the interactive console session
/// that ties them together.

pub mod config;
pub mod error;
pub mod gateway;
pub mod session;
pub mod wizard;

pub use config::Config;
pub use error::{AppResult, ConfigError, GatewayError};
pub use gateway::{AccountService, HttpAccountService};
pub use wizard::{ActionOutcome, WizardAction, WizardFlow, WizardStep};
