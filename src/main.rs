use anyhow::{Context, Result};
use helpidx::Config;
use std::fs;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Max verbosity is -ddd");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    setup_logging(config.debug);
    config.validate().context("Invalid configuration")?;

    let tree = helpidx::load_terms(&config.input).context("Failed to load index terms")?;
    info!(terms = tree.len(), "term tree loaded");

    let options = config.render_options();

    for &format in config.format.formats() {
        let index_path = format.index_path(&config.output);

        if let Some(parent) = index_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }

        // Unresolved see references are already warned about while rendering
        helpidx::write_index(&tree, format, &options, &index_path)
            .with_context(|| format!("Failed to write {} index", format))?;

        println!("Generated: {}", index_path.display());
    }

    Ok(())
}
