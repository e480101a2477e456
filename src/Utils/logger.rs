use simplelog::*;

/// Initialize a terminal logger with the given level string
/// ("debug" | "info" | "warn" | "error"); anything else falls back to info.
pub fn init_logger(loglevel: Option<String>) {
    let log_option = if let Some(level) = loglevel {
        match level.as_str() {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    } else {
        LevelFilter::Info
    };
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    if let Err(e) = logger_instance {
        eprintln!("logger already initialized: {}", e);
    }
}
