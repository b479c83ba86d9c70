use anyhow::Context;
use circle_area::utils::logger;
use circle_area::{AreaError, CliConfig, DemoRunner};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 先合併設定，才知道日誌要用哪種格式
    let resolved = config.load_settings();
    let format = resolved
        .as_ref()
        .map(|settings| settings.format)
        .unwrap_or_default();
    logger::init_for_format(format, config.verbose).context("failed to initialise logging")?;

    tracing::info!("Starting circle-area");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match resolved {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    if let Some(path) = &config.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }

    let runner = DemoRunner::new(settings);
    let outcome = match runner.run_and_render() {
        Ok(outcome) => outcome,
        Err(e) => exit_with(&e),
    };

    println!("{}", outcome.output);

    if let Some(e) = &outcome.first_error {
        tracing::warn!(
            "{} of {} radii were rejected",
            outcome.rejected(),
            outcome.entries.len()
        );
        report(e);
        std::process::exit(outcome.exit_code());
    }

    tracing::info!("✅ Computed {} areas", outcome.entries.len());
    Ok(())
}

fn report(e: &AreaError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn exit_with(e: &AreaError) -> ! {
    report(e);
    std::process::exit(e.exit_code())
}
