// crates/dnsfsd-convert-cli/src/main.rs

use clap::{Parser, Subcommand};
use dnsfsd_convert_cli::{cmd, logging};
use dnsfsd_convert_core::Format;

#[derive(Parser)]
#[command(name = "dnsfsd-convert")]
#[command(about = "Convert third-party block lists to dnsfsd rules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Adblock Plus 2.0 exact-address and domain rules
    Adblock(cmd::convert::ConvertArgs),

    /// dnscrypt-proxy blacklist
    DnscryptProxy(cmd::convert::ConvertArgs),

    /// Blocking hostfile (`0.0.0.0 domain`)
    Hostfile(cmd::convert::ConvertArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    match cli.cmd {
        Commands::Adblock(args) => cmd::convert::run(Format::Adblock, args),
        Commands::DnscryptProxy(args) => cmd::convert::run(Format::DnscryptProxy, args),
        Commands::Hostfile(args) => cmd::convert::run(Format::Hostfile, args),
    }
}
