mod config;
mod docx_to_pdf;
mod error;
mod exec;
mod pdf_to_docx;

pub use config::{Config, DEFAULT_TIMEOUT, PDF2DOCX_ENV, SOFFICE_ENV};
pub use error::Error;

use std::fs;
use std::path::Path;

/// Convert a PDF to a DOCX at `output`, with tool locations from the
/// environment.
pub fn convert_pdf_to_docx(input: &Path, output: &Path) -> Result<(), Error> {
    convert_pdf_to_docx_with(&Config::from_env(), input, output)
}

pub fn convert_pdf_to_docx_with(config: &Config, input: &Path, output: &Path) -> Result<(), Error> {
    pdf_to_docx::convert(config, input, output)
}

/// Convert a DOCX to a PDF at exactly `output`, with tool locations from
/// the environment.
pub fn convert_docx_to_pdf(input: &Path, output: &Path) -> Result<(), Error> {
    convert_docx_to_pdf_with(&Config::from_env(), input, output)
}

pub fn convert_docx_to_pdf_with(config: &Config, input: &Path, output: &Path) -> Result<(), Error> {
    docx_to_pdf::convert(config, input, output)
}

fn require_input_file(path: &Path) -> Result<(), Error> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::InputNotFound(path.to_path_buf()))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
