use crate::model::Average;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Write the averages as a JSON array to `file`, or to standard output if `None`.
pub fn write_averages(averages: &[Average], file: Option<&Path>) -> Result<()> {
    match file {
        Some(file) => {
            let file_handle =
                File::create(file).with_context(|| format!("failed to create {file:?}"))?;
            write_json(averages, BufWriter::new(file_handle))?;
            log::info!("wrote {} averages to {file:?}", averages.len());
        }
        None => {
            write_json(averages, io::stdout().lock())?;
            log::info!("wrote {} averages to stdout", averages.len());
        }
    }
    Ok(())
}

/// Serialize the averages as a pretty-printed JSON array followed by a newline.
pub fn write_json<W: Write>(averages: &[Average], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, averages).context("failed to serialize averages")?;
    writeln!(writer).context("failed to write averages")?;
    writer.flush().context("failed to flush writer stream")?;
    Ok(())
}
