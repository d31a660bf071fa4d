use clap::Parser;
use pwa_icons::config::LogFormat;
use pwa_icons::domain::ports::ConfigProvider;
use pwa_icons::utils::{logger, validation::Validate};
use pwa_icons::{
    select_renderer, CliConfig, IconGenerator, IconTemplate, LocalStorage, Result, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting pwa-icons");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => {
                    tracing::debug!("TOML config: {:?}", config);
                    execute(&config, cli.dry_run).await
                }
                Err(e) => Err(e),
            }
        }
        None => execute(&cli, cli.dry_run).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "Icon generation failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn execute<C: ConfigProvider + Validate>(config: &C, dry_run: bool) -> Result<()> {
    config.validate()?;

    let template = match config.template_path() {
        Some(path) => IconTemplate::from_file(path).await?,
        None => IconTemplate::default(),
    };

    let renderer = select_renderer(config.svg_only());
    let storage = LocalStorage::new(config.output_dir());
    let generator = IconGenerator::from_config(storage, renderer, template, config);

    if dry_run {
        tracing::info!("Dry run, nothing will be written");
        for (file_name, size) in generator.plan() {
            println!("{}/{}  ({}x{})", config.output_dir(), file_name, size, size);
        }
        return Ok(());
    }

    let report = generator.run().await?;

    println!(
        "Wrote {} icons to {}",
        report.written.len(),
        config.output_dir()
    );
    for failed in &report.failed {
        eprintln!("Skipped {}: {}", failed.file_name, failed.message);
    }

    Ok(())
}
