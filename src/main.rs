use clap::Parser;
use movie_explorer::app::render::{self, ListLayout};
use movie_explorer::domain::ports::{ConfigProvider, MovieUsecase};
use movie_explorer::utils::error::{ErrorSeverity, ExplorerError};
use movie_explorer::utils::{logger, validation::Validate};
use movie_explorer::{
    BundledStorage, CatalogService, CliConfig, DetailPresenter, JsonMovieRepository,
    LocalStorage, MovieListPresenter, TomlConfig,
};
use std::io::Write;

fn exit_code(error: &ExplorerError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(error: &ExplorerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(error));
}

fn build_usecase(config: &TomlConfig) -> Box<dyn MovieUsecase> {
    match config.resource_dir() {
        Some(dir) => {
            tracing::info!("📁 Reading catalog '{}' from {}", config.catalog_name(), dir);
            let storage = LocalStorage::new(dir.to_string());
            Box::new(CatalogService::new(JsonMovieRepository::from_config(
                storage, config,
            )))
        }
        None => {
            tracing::info!("📦 Reading bundled catalog '{}'", config.catalog_name());
            Box::new(CatalogService::new(JsonMovieRepository::from_config(
                BundledStorage::new(),
                config,
            )))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => fail(&e),
            }
        }
        None => TomlConfig::default(),
    };
    config.apply_cli_overrides(&cli);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let usecase = build_usecase(&config);
    let format = config.output.format;
    let mut presenter = MovieListPresenter::new(&config.display);
    presenter.load(usecase.as_ref()).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(message) = presenter.error_message() {
        render::render_empty(&mut out, message, format)?;
        out.flush()?;
        eprintln!("❌ {}", message);
        std::process::exit(2);
    }

    match cli.select {
        Some(selection) => {
            let movie = match presenter.resolve(selection.group, selection.item) {
                Ok(movie) => movie,
                Err(e) => fail(&e),
            };
            let detail = DetailPresenter::new(&config.display).present(movie);
            render::render_detail(&mut out, &detail, format)?;
        }
        None => match config.output.layout {
            ListLayout::Grouped => {
                render::render_groups(&mut out, presenter.sections(), format)?;
            }
            ListLayout::Flat => {
                let items = presenter.present_flat(presenter.catalog());
                render::render_flat(&mut out, &items, format)?;
            }
        },
    }

    out.flush()?;
    Ok(())
}
