use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the headless LibreOffice binary location.
pub const SOFFICE_ENV: &str = "DOCRELAY_SOFFICE";
/// Environment variable overriding the pdf2docx converter command.
pub const PDF2DOCX_ENV: &str = "DOCRELAY_PDF2DOCX";

const DEFAULT_SOFFICE: &str = "/usr/lib/libreoffice/program/soffice";
const DEFAULT_PDF2DOCX: &str = "pdf2docx";

/// Upper bound on a single soffice conversion run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(240);

/// Locations of the external converter tools and the subprocess timeout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Headless LibreOffice binary, used for DOCX to PDF.
    pub soffice: PathBuf,
    /// pdf2docx command, used for PDF to DOCX. A bare name is resolved
    /// through PATH by the OS.
    pub pdf2docx: PathBuf,
    /// Kill the soffice subprocess after this long.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            soffice: PathBuf::from(DEFAULT_SOFFICE),
            pdf2docx: PathBuf::from(DEFAULT_PDF2DOCX),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Default config with tool locations taken from the environment when set.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Some(path) = env::var_os(SOFFICE_ENV) {
            config.soffice = PathBuf::from(path);
        }
        if let Some(path) = env::var_os(PDF2DOCX_ENV) {
            config.pdf2docx = PathBuf::from(path);
        }
        config
    }
}
