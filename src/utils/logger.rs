use crate::domain::model::OutputFormat;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// JSON 輸出時日誌也改用 JSON，除非要求 verbose
pub fn init_for_format(format: OutputFormat, verbose: bool) -> Result<(), TryInitError> {
    match format {
        OutputFormat::Json if !verbose => init_json_logger(),
        _ => init_cli_logger(verbose),
    }
}

pub fn init_cli_logger(verbose: bool) -> Result<(), TryInitError> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("circle_area=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("circle_area=info"))
    };

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
        .try_init()
}

/// 結構化 JSON 日誌，給機器讀取的輸出模式使用
pub fn init_json_logger() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("circle_area=info"));

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
        .try_init()
}
