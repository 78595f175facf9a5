use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "rambler_horoscopes=info";
const VERBOSE_FILTER: &str = "rambler_horoscopes=debug,info";

/// 建立日誌過濾器：`RUST_LOG` 優先，其次是設定檔的 level，最後才是預設值
fn build_filter(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(VERBOSE_FILTER)
        } else if let Some(level) = level {
            EnvFilter::try_new(format!("rambler_horoscopes={}", level))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

pub fn init_logger(level: Option<&str>, verbose: bool, json: bool) {
    let filter = build_filter(level, verbose);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}
