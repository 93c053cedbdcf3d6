use anyhow::Context;
use cutterkit::{init_logging_with, Config, LogFormat, ToolPartFlags, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::{info, warn};

const USAGE: &str = "usage: cutterkit [--log-format pretty|json] [CONFIG.toml|CONFIG.json]";

struct Args {
    log_format: LogFormat,
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        log_format: LogFormat::default(),
        config: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--log-format" => {
                let value = iter.next().context(USAGE)?;
                args.log_format = value.parse()?;
            }
            "-h" | "--help" => anyhow::bail!(USAGE),
            path if args.config.is_none() => args.config = Some(PathBuf::from(path)),
            other => anyhow::bail!("unexpected argument '{}'\n{}", other, USAGE),
        }
    }
    Ok(args)
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()));
    }

    match Config::default_config_path() {
        Ok(path) if path.exists() => {
            info!(path = %path.display(), "using default configuration file");
            Config::load_from_file(&path).with_context(|| format!("loading {}", path.display()))
        }
        Ok(_) => {
            info!("no configuration file, using the built in sample");
            Ok(Config::sample())
        }
        Err(e) => {
            warn!(error = %e, "using the built in sample");
            Ok(Config::sample())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    init_logging_with(args.log_format)?;
    info!(version = VERSION, build_date = BUILD_DATE, "cutterkit starting");

    let config = load_config(args.config)?;
    let library = config.build_library()?;
    info!(tools = library.len(), units = %config.units.system, "tool library ready");

    let shank = ToolPartFlags::CUTTING | ToolPartFlags::NON_CUTTING;
    for entry in library.get_all_tools() {
        println!("{}", entry.description_short());
        println!("{}", entry.tool);
        println!("  all parts: {}", entry.tool.tool_part_bounding_box(ToolPartFlags::ALL));
        println!("  {}: {}", shank, entry.tool.tool_part_bounding_box(shank));
        println!("  holder: {}", entry.tool.tool_part_bounding_box(ToolPartFlags::HOLDER));
        println!();
    }

    Ok(())
}
