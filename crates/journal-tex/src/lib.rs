mod compile;
mod tex;

pub use compile::{CompilePasses, compile_pdf, manual_command, write_tex};
pub use tex::render_document;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pdflatex not found on PATH; install a TeX distribution or compile manually: {hint}")]
    CompilerNotFound { hint: String },
    #[error("pdflatex exited with status {status}; inspect the .log file in the output directory")]
    CompilerFailed { status: i32 },
}

pub type Result<T> = std::result::Result<T, TexError>;
