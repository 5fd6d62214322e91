use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use crate::config::Config;
use crate::error::Error;
use crate::exec;

/// Convert a DOCX (or anything else LibreOffice can open) to PDF by running
/// soffice headless. The tool names its output after the input file's stem,
/// so the result is renamed to the caller's requested path afterwards.
pub(crate) fn convert(config: &Config, input: &Path, output: &Path) -> Result<(), Error> {
    crate::require_input_file(input)?;

    if !config.soffice.is_file() {
        return Err(Error::ToolNotFound(config.soffice.clone()));
    }

    let out_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&out_dir)?;

    info!("converting {} with {}", input.display(), config.soffice.display());
    let mut cmd = Command::new(&config.soffice);
    cmd.args(["--headless", "--convert-to", "pdf", "--outdir"])
        .arg(&out_dir)
        .arg(input);
    exec::run_tool(cmd, Some(config.timeout))?;

    let generated = generated_output_path(&out_dir, input);
    if !generated.is_file() {
        return Err(Error::OutputMissing(generated));
    }
    if generated != *output {
        fs::rename(&generated, output)?;
    }
    info!("converted {} to {}", input.display(), output.display());
    Ok(())
}

/// Where soffice puts its result: the input's stem with a `.pdf` extension,
/// inside the output directory.
fn generated_output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(input.as_os_str()));
    name.push(".pdf");
    out_dir.join(name)
}
