use std::path::Path;
use std::process::Command;

use log::{info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::exec;

/// Convert a PDF to DOCX by invoking the configured pdf2docx command as
/// `pdf2docx convert <input> <output>`. Layout detection and DOCX assembly
/// are the tool's business; this only validates, invokes, and verifies.
pub(crate) fn convert(config: &Config, input: &Path, output: &Path) -> Result<(), Error> {
    crate::require_input_file(input)?;
    crate::ensure_parent_dir(output)?;

    info!("[1/4] initializing converter");

    info!("[2/4] parsing {}", input.display());
    match lopdf::Document::load(input) {
        Ok(doc) => info!("document has {} pages", doc.get_pages().len()),
        // Page count is progress reporting only; the converter gets to
        // make its own call on whether the PDF is readable.
        Err(e) => warn!("could not read page count: {e}"),
    }

    info!("[3/4] converting to DOCX");
    let mut cmd = Command::new(&config.pdf2docx);
    cmd.arg("convert").arg(input).arg(output);
    exec::run_tool(cmd, None)?;

    info!("[4/4] finalizing");
    if !output.is_file() {
        return Err(Error::OutputMissing(output.to_path_buf()));
    }
    info!("converted {} to {}", input.display(), output.display());
    Ok(())
}
