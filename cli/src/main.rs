//! CLI entrypoint for beanquiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use beanquiz_application::{
    AppController, BLEND_CHART_SIZE, CatalogSource, CatalogStore, ChartRequest, MAIN_CHART,
    PacingParams, QuizPresenter, RecommendationSelector, blend_chart_target,
};
use beanquiz_domain::{ChartStyleOverrides, RandomSource};
#[cfg(feature = "remote-catalog")]
use beanquiz_infrastructure::HttpCatalogSource;
use beanquiz_infrastructure::{
    ConfigLoader, DirectoryCatalogSource, FileConfig, SeededRandom, SvgChartSink, ThreadRandom,
};
use beanquiz_presentation::{
    Cli, Command, ConsoleFormatter, ConsolePresenter, OutputConfig, QuizRepl,
};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting beanquiz");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        println!("Configuration sources:");
        for source in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("  {}", source);
        }
        println!();
        println!("{}", config.to_toml().context("Failed to serialize configuration")?);
        return Ok(());
    }

    let output = OutputConfig {
        format: cli.output,
        color: config.output.color,
        quiet: config.output.quiet,
    };
    output.apply_color();

    // === Dependency Injection ===
    let rng: Arc<dyn RandomSource> = match config.random.seed {
        Some(seed) => {
            debug!("Using seeded random source ({})", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let mut presenter = ConsolePresenter::new(output);
    if !cli.no_charts {
        let sink = SvgChartSink::new(
            config.chart.output_dir.clone(),
            config.chart.to_chart_options(),
        );
        presenter = presenter.with_chart_sink(Arc::new(sink));
    }
    let presenter = Arc::new(presenter);

    let pacing = if output.quiet || output.is_json() {
        PacingParams::immediate()
    } else {
        config.pacing.to_pacing_params()
    };

    let mut app = AppController::new(
        Arc::clone(&presenter) as Arc<dyn QuizPresenter>,
        Arc::clone(&rng),
        pacing,
    );

    let source = catalog_source(&config)?;
    if let Err(e) = app.load(source.as_ref()).await {
        bail!("Could not load the catalog: {}", e);
    }

    match cli.resolved_command() {
        Command::Quiz => {
            let mut repl = QuizRepl::new(app);
            repl.run().await?;
        }
        Command::Omakase => {
            let result = app.omakase().await?;
            if result.primary.is_blend() {
                app.show_blend_detail().await?;
            }
        }
        Command::Gacha { pulls } => {
            for _ in 0..pulls.max(1) {
                app.pull_gacha().await?;
            }
        }
        Command::Chart { bean_id } => {
            if cli.no_charts {
                bail!("--no-charts leaves nothing for the chart command to do");
            }
            let Some(catalog) = app.catalog() else {
                bail!("Catalog is not loaded");
            };
            render_bean_charts(catalog, rng, presenter.as_ref(), &bean_id)?;
            if !output.is_json() && presenter.written_charts().is_empty() {
                bail!("No chart was written for {}", bean_id);
            }
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&presenter.written_charts()));
            }
        }
        Command::Beans => {
            let Some(catalog) = app.catalog() else {
                bail!("Catalog is not loaded");
            };
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&catalog.beans()));
            } else {
                print!("{}", ConsoleFormatter::format_bean_list(catalog.beans()));
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr so results on stdout stay machine readable; with
/// `--log-file` a plain-text copy is also written there.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

/// Command-line flags win over every configuration layer
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(dir) = &cli.data_dir {
        config.catalog.data_dir = dir.clone();
    }
    if let Some(url) = &cli.base_url {
        config.catalog.base_url = Some(url.clone());
    }
    if let Some(seed) = cli.seed {
        config.random.seed = Some(seed);
    }
    if let Some(dir) = &cli.chart_dir {
        config.chart.output_dir = dir.clone();
    }
    if cli.quiet {
        config.output.quiet = true;
    }
}

fn catalog_source(config: &FileConfig) -> Result<Box<dyn CatalogSource>> {
    match &config.catalog.base_url {
        #[cfg(feature = "remote-catalog")]
        Some(url) => Ok(Box::new(HttpCatalogSource::new(url.clone()))),
        #[cfg(not(feature = "remote-catalog"))]
        Some(url) => bail!(
            "Remote catalog {} needs a build with the remote-catalog feature",
            url
        ),
        None => Ok(Box::new(DirectoryCatalogSource::new(
            config.catalog.data_dir.clone(),
        ))),
    }
}

/// Write the radar chart of one bean, plus one per component if it is a blend
fn render_bean_charts(
    catalog: Arc<dyn CatalogStore>,
    rng: Arc<dyn RandomSource>,
    presenter: &dyn QuizPresenter,
    bean_id: &str,
) -> Result<()> {
    let Some(bean) = catalog.bean_by_id(bean_id).cloned() else {
        bail!("Unknown bean: {}", bean_id);
    };

    presenter.render_chart(&ChartRequest::new(MAIN_CHART, bean.scores.clone()));

    let selector = RecommendationSelector::new(catalog, rng);
    if let Some(breakdown) = selector.blend_breakdown(&bean) {
        for component in &breakdown.components {
            presenter.render_chart(
                &ChartRequest::new(blend_chart_target(&component.bean), component.bean.scores.clone())
                    .with_overrides(ChartStyleOverrides::sized(BLEND_CHART_SIZE)),
            );
        }
    }
    Ok(())
}
