use anyhow::Context;
use clap::Parser;
use small_library::utils::{logger, validation::Validate};
use small_library::{CatalogConfig, CliConfig, Describe, Item, LibraryError, Session};

fn load_config(path: Option<&str>) -> small_library::Result<CatalogConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading catalog from: {}", path);
            CatalogConfig::from_file(path)?
        }
        None => CatalogConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn fail(e: &LibraryError) -> ! {
    tracing::error!("Catalog setup failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| fail(&e));
    let mut catalog = config.build_catalog().unwrap_or_else(|e| fail(&e));

    if cli.list {
        let available: Vec<&Item> = catalog.list_available().collect();
        if cli.json {
            let rendered = serde_json::to_string_pretty(&available)
                .context("rendering available items as JSON")?;
            println!("{}", rendered);
        } else {
            for item in available {
                println!("{}", item.describe());
            }
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&mut catalog, stdin.lock(), stdout.lock())
        .run()
        .context("interactive session failed")?;

    Ok(())
}
