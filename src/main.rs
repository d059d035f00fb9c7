// font-family-name - print the family name of a font file
//
// Usage: font-family-name <font-file>

use anyhow::{bail, Context, Result};

use fcpx_hacks_tools::font;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => bail!("Usage: font-family-name <font-file>"),
    };

    let names = font::read_names(&path)
        .with_context(|| format!("Failed to read font names from {path}"))?;

    println!("{}", names.family);
    Ok(())
}
