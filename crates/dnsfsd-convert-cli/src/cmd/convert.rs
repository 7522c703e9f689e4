// crates/dnsfsd-convert-cli/src/cmd/convert.rs

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Args;
use dnsfsd_convert_core::guard::ensure_piped;
use dnsfsd_convert_core::{convert_stream, Format, Summary};
use tracing::debug;

#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Read the list from this file instead of stdin
    #[arg(long)]
    pub input: Option<String>,

    /// Write rules to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,
}

pub fn run(format: Format, args: ConvertArgs) -> anyhow::Result<()> {
    let summary = match args.input.as_deref() {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("read input {p}"))?;
            write_to(format, BufReader::new(f), args.output.as_deref())?
        }
        None => {
            let stdin = io::stdin();
            ensure_piped(&stdin)?;
            write_to(format, stdin.lock(), args.output.as_deref())?
        }
    };

    debug!(
        format = %format,
        lines_read = summary.lines_read,
        rules_written = summary.rules_written,
        lines_skipped = summary.lines_skipped,
        "conversion finished"
    );
    Ok(())
}

fn write_to<R: io::BufRead>(
    format: Format,
    reader: R,
    output: Option<&str>,
) -> anyhow::Result<Summary> {
    let writer: Box<dyn Write> = match output {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("create output {p}"))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(io::stdout().lock()),
    };

    let summary = convert_stream(format, reader, writer)
        .with_context(|| format!("convert {format} list"))?;
    Ok(summary)
}
