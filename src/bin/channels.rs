//! Prints the 802.11 channel table as labels and frequencies
//
// ieee80211-channels
// Licensed under MPL-2.0

use std::io::{self, Write};

use log::{debug, info};

use structopt::StructOpt;
use strum::EnumString;

use ieee80211_channels::prelude::*;


#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
#[strum(serialize_all = "lowercase")]
enum OutputFormat {
    /// Labels list then frequencies list, one line each
    List,
    /// One label per line
    Table,
}

#[derive(Debug, StructOpt)]
struct Options {

    #[structopt(long)]
    /// Only show channels for this standard (eg. "11g", "11a (SRD)")
    pub standard: Option<Standard>,

    #[structopt(long, default_value = "list")]
    /// Output format (list, table)
    pub format: OutputFormat,

    #[structopt(long, default_value = "3")]
    /// Minimum channel number width
    pub width: usize,

    #[structopt(long, default_value = " | ")]
    /// Separator between label fields
    pub separator: String,

    #[structopt(long, default_value = "warn")]
    /// Configure log level
    pub log_level: simplelog::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    // Load options
    let opts = Options::from_args();

    // Initialise logging, stdout is reserved for the table
    let log_cfg = simplelog::ConfigBuilder::new().build();
    let _ = simplelog::TermLogger::init(opts.log_level, log_cfg,
        simplelog::TerminalMode::Stderr, simplelog::ColorChoice::Auto);

    let fmt = LabelFormat::new(opts.width, &opts.separator);

    let expanded = match opts.standard {
        Some(s) => {
            debug!("Filtering for standard {}", s);
            expand_with(table::by_standard(s), &fmt)
        },
        None => expand_with(CHANNELS, &fmt),
    };

    info!("Expanded {} channels", expanded.len());

    let mut buff = String::new();
    match opts.format {
        OutputFormat::List => expanded.write_list(&mut buff)?,
        OutputFormat::Table => expanded.write_table(&mut buff)?,
    }

    io::stdout().lock().write_all(buff.as_bytes())?;

    Ok(())
}
