mod settings;

use anyhow::Result;
use blocktrail_config::Config;
use blocktrail_engine::normalizing::snapshot::render;
use blocktrail_engine::{Operation, io};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let (input, output) = match args.len() {
        2 => (PathBuf::from(&args[1]), None),
        3 => (PathBuf::from(&args[1]), Some(PathBuf::from(&args[2]))),
        _ => {
            eprintln!("Usage: {} <input.json> [output.json]", args[0]);
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!("No config at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let document = io::load_document(&input)?;
    let mut editor = settings::editor_from_config(&config, document)?;

    let passes = editor.normalize()?;
    log::info!(
        "Normalized {} in {passes} changing pass(es)",
        input.display()
    );
    for op in editor.operations() {
        match op {
            Operation::InsertNode { path, node } => {
                log::info!("Inserted {} block at {path}", node.kind().unwrap_or_default());
            }
        }
    }

    print!("{}", render(editor.document()));

    if let Some(output) = output {
        io::save_document(&output, editor.document())?;
        log::info!("Wrote {}", output.display());
    }

    Ok(())
}
