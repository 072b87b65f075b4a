use bar_foo::utils::{logger, validation::Validate};
use bar_foo::{CliConfig, FixtureError};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting bar-foo");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    if config.verify {
        let (report, rendered) = config.run_verify().unwrap_or_else(|e| fail(e));
        println!("{}", rendered);

        if !report.holds() {
            anyhow::bail!("free functions and Foo methods disagree on {}", report.input);
        }
        return Ok(());
    }

    match config.run() {
        Ok(output) => {
            tracing::info!("✅ All calls completed");
            println!("{}", output);
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: FixtureError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
