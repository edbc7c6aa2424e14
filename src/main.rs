use deletion_wizard::config::Config;
use deletion_wizard::gateway::HttpAccountService;
use deletion_wizard::session::Session;
use deletion_wizard::wizard::WizardFlow;

/// Initialize tracing with an env-filter console layer.
///
/// The `log` bridge is enabled in tracing-subscriber's features, so the
/// library's `log::` records land here too.
fn initialize_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() {
    initialize_tracing();

    println!("===========================================");
    println!("  Account Deletion Request");
    println!("===========================================");
    println!("Delete your account permanently. This cannot be undone.\n");

    let config = match Config::from_env() {
        Ok(config) => {
            tracing::info!("Using account service at {}", config.api_base_url);
            config
        }
        Err(e) => {
            eprintln!("✗ Configuration error: {}", e);
            eprintln!("  Set DELETION_API_BASE_URL to the account service base URL.");
            std::process::exit(1);
        }
    };

    let service = HttpAccountService::new(&config);
    let flow = WizardFlow::new(service);

    Session::new(flow).run();
}
