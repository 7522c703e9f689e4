use anyhow::Result;
use clap::Parser;

use dnsfsd_convert_cli::cmd::convert::{self, ConvertArgs};
use dnsfsd_convert_cli::logging;
use dnsfsd_convert_core::Format;

#[derive(Parser, Debug)]
#[command(name = "dnsfsd-adblock")]
#[command(about = "Convert an Adblock Plus 2.0 list on stdin to dnsfsd rules", long_about = None)]
struct Args {
    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() -> Result<()> {
    let a = Args::parse();
    logging::init();

    convert::run(Format::Adblock, a.convert)
}
