// dmg-settings - resolve the disk-image packaging settings
//
// Loads the settings file, applies -D key=value overrides in order, and
// prints the resolved settings for the external image builder.
//
// Usage: dmg-settings [-s settings.toml] [-D key=value]... [--json]

use anyhow::{bail, Context, Result};

use fcpx_hacks_tools::dmg::{Define, DmgSettings};

struct Args {
    settings_path: Option<String>,
    defines: Vec<Define>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        settings_path: None,
        defines: Vec::new(),
        json: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-s" => {
                let path = iter.next().context("-s requires a settings file path")?;
                args.settings_path = Some(path);
            }
            "-D" => {
                let define = iter.next().context("-D requires a key=value argument")?;
                args.defines.push(Define::parse(&define)?);
            }
            "--json" => args.json = true,
            other if other.starts_with("-D") => {
                args.defines.push(Define::parse(&other[2..])?);
            }
            other => {
                bail!("Unknown argument '{other}'\nUsage: dmg-settings [-s settings.toml] [-D key=value]... [--json]");
            }
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = parse_args()?;

    let mut settings = match &args.settings_path {
        Some(path) => DmgSettings::load(path)
            .with_context(|| format!("Failed to load settings from {path}"))?,
        None => DmgSettings::default(),
    };

    settings
        .apply_defines(&args.defines)
        .context("Failed to apply command-line defines")?;
    settings.validate().context("Settings are not usable")?;

    tracing::info!(
        filename = %settings.filename,
        volume = %settings.volume_name,
        format = %settings.format,
        "Resolved dmg settings"
    );

    let rendered = if args.json {
        settings.to_json()?
    } else {
        settings.to_toml()?
    };
    println!("{rendered}");
    Ok(())
}
