//! Colors command handler.

use anyhow::Result;
use std::io::{self, Write};

use crate::cli::ColorsArgs;
use crate::cli::config::Config;
use crate::cli::output::{ColorListing, Output, OutputFormat};
use crate::domain::{CardColor, ColorTag};

pub fn handle_colors(args: &ColorsArgs, config: &Config) -> Result<()> {
    let format = config.format(args.format);
    let mut out = io::stdout().lock();
    write_colors(&mut out, format)
}

pub(crate) fn write_colors(out: &mut impl Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for (position, color) in ColorTag::ALL.iter().enumerate() {
                if position == 0 {
                    writeln!(out, "{} (default)", color)?;
                } else {
                    writeln!(out, "{}", color)?;
                }
            }
            writeln!(out, "{} (notes without a matching category)", CardColor::Neutral)?;
        }
        OutputFormat::Json => {
            let listings: Vec<ColorListing> = ColorTag::ALL
                .iter()
                .map(|c| ColorListing {
                    name: c.as_str(),
                    selectable: true,
                })
                .chain(std::iter::once(ColorListing {
                    name: CardColor::Neutral.as_str(),
                    selectable: false,
                }))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listings))?)?;
        }
    }
    Ok(())
}
