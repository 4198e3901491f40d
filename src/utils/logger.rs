use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 沒有設定檔時使用預設的 compact 輸出
pub fn init_cli_logger(verbose: bool) {
    init_from_config(&LoggingConfig::default(), verbose);
}

/// 依設定檔初始化；`verbose` 會覆蓋設定中的 level
pub fn init_from_config(config: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
    }
}

fn filter_directive(config: &LoggingConfig, verbose: bool) -> &str {
    if verbose {
        "event_calendar=debug,info"
    } else {
        &config.level
    }
}
