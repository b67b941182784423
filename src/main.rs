use clap::Parser;
use fixlet_manager::utils::logger;
use fixlet_manager::{AppConfig, CliConfig, FixletLoader, FixletStore, LocalStorage, Session};

fn main() {
    let cli = CliConfig::parse();

    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            // 日誌尚未初始化，直接輸出
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    tracing::debug!("Resolved config: {:?}", config);

    let mut store = FixletStore::new();
    let loader = FixletLoader::new(LocalStorage::default(), config);
    if let Err(e) = loader.load_into(&mut store) {
        tracing::error!(
            "❌ Load failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(store, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("❌ Session failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
