use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_slides_config::Config;
use markdown_slides_engine::{
    MappingStatistics, SlideData, SlideMapper, all_samples, get_mapping_statistics,
    parse_markdown, sample, to_slide_data,
};
use serde::Serialize;
use std::{
    io::{self, Read},
    path::PathBuf,
};

#[derive(Parser)]
#[command(name = "markdown-slides-cli")]
#[command(about = "Convert markdown into presentation slide data (JSON)")]
struct Args {
    /// Markdown file to convert; `-` or nothing reads stdin
    file: Option<PathBuf>,

    /// Convert a built-in sample instead of a file
    #[arg(long, value_name = "NAME", conflicts_with = "file")]
    sample: Option<String>,

    /// List the built-in sample names and exit
    #[arg(long)]
    list_samples: bool,

    /// Include mapping statistics in the output
    #[arg(long)]
    stats: bool,

    /// Print the parsed tokens instead of slides
    #[arg(long)]
    tokens: bool,

    /// Pretty-print JSON (also enabled by `[output] pretty` in the config)
    #[arg(long)]
    pretty: bool,

    /// Write JSON here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/markdown-slides/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct SlidesWithStats {
    slides: Vec<SlideData>,
    statistics: MappingStatistics,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if args.list_samples {
        for (name, _) in all_samples() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = load_config(args.config.as_ref())?;
    let markdown = read_input(&args)?;
    let pretty = args.pretty || config.output.pretty;

    let parsed = parse_markdown(&markdown);
    let json = if args.tokens {
        to_json(&parsed, pretty)?
    } else {
        let results = SlideMapper::new(config.classifier.clone()).map(&parsed);
        log::info!("mapped {} slides", results.len());
        if args.stats {
            let statistics = get_mapping_statistics(&results);
            to_json(
                &SlidesWithStats {
                    slides: to_slide_data(results),
                    statistics,
                },
                pretty,
            )?
        } else {
            to_json(&to_slide_data(results), pretty)?
        }
    };

    match &args.output {
        Some(output) => {
            let path = config.resolve_output(output);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::debug!(
            "no config at {}, using defaults",
            Config::config_path().display()
        );
    }
    Ok(loaded.unwrap_or_default())
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(name) = &args.sample {
        return sample(name).map(str::to_string).with_context(|| {
            let names: Vec<_> = all_samples().iter().map(|(n, _)| *n).collect();
            format!("Unknown sample '{name}'; available: {}", names.join(", "))
        });
    }

    match &args.file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}
