use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use stray_bridge::{BridgeConfig, LIBRARY_ENV};
use stray_core::abi::RecordLayout;
use stray_core::logging::{LoggingConfig, init_logging};
use stray_core::{EntityNative, SettingsNative, StrayNative};

#[derive(Parser, Debug)]
#[command(name = "stray-demo")]
#[command(about = "Opens a Stray window through the native bridge", long_about = None)]
struct Args {
    /// Window title
    #[arg(short, long, default_value = "appka")]
    title: String,

    /// Path to the backend shared library
    #[arg(short, long, env = LIBRARY_ENV)]
    library: Option<PathBuf>,

    /// Print the C record layouts and exit
    #[arg(long)]
    layouts: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::default());

    if args.layouts {
        let layouts: [RecordLayout; 3] = [
            SettingsNative::layout(),
            StrayNative::layout(),
            EntityNative::layout(),
        ];
        for layout in layouts {
            println!("{layout}");
        }
        return Ok(());
    }

    let config = args.library.map(BridgeConfig::new).unwrap_or_default();
    log::info!("backend: {}", config.library_path.display());

    stray_bridge::construct_with(&config, &args.title)
        .with_context(|| format!("failed to run \"{}\"", args.title))?;

    stray_bridge::teardown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["stray-demo"]).unwrap();
        assert_eq!(args.title, "appka");
        assert!(!args.layouts);
    }

    #[test]
    fn explicit_flags() {
        let args =
            Args::try_parse_from(["stray-demo", "-t", "Pong", "--library", "/tmp/libx.so"]).unwrap();
        assert_eq!(args.title, "Pong");
        assert_eq!(args.library, Some(PathBuf::from("/tmp/libx.so")));
    }
}
