use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docx-to-pdf", about = "Convert a DOCX file to PDF via headless LibreOffice")]
struct Args {
    /// Input DOCX file
    input: PathBuf,
    /// Output PDF file
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = docrelay::convert_docx_to_pdf(&args.input, &args.output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!(
        "Converted {} to {}",
        args.input.display(),
        args.output.display()
    );
}
