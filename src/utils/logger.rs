use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr; stdout belongs to the interactive session.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = if verbose {
        "fixlet_manager=debug,info".to_string()
    } else {
        match level {
            Some(level) => format!("fixlet_manager={}", level),
            None => "fixlet_manager=warn".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
