// crates/dnsfsd-convert-core/src/pipeline.rs
//
// Header, then one rule line per accepted input line, in input order.
// No state is carried between lines.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::format::Format;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines_read: u64,
    pub rules_written: u64,
    pub lines_skipped: u64,
}

pub fn write_header<W: Write>(format: Format, writer: &mut W) -> Result<()> {
    for line in format.header() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Convert a whole stream. Lines that are not valid UTF-8 are decoded lossily
/// instead of aborting the run.
pub fn convert_stream<R: BufRead, W: Write>(
    format: Format,
    mut reader: R,
    mut writer: W,
) -> Result<Summary> {
    write_header(format, &mut writer)?;

    let mut summary = Summary::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let chunk = String::from_utf8_lossy(&buf);
        for raw in split_lines(&chunk) {
            summary.lines_read += 1;
            match format.convert_line(raw) {
                Some(rule) => {
                    writeln!(writer, "{rule}")?;
                    summary.rules_written += 1;
                }
                None => summary.lines_skipped += 1,
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Split a `\n`-terminated chunk into lines, treating `\n`, `\r\n` and a
/// bare `\r` all as line breaks.
pub fn split_lines(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}
