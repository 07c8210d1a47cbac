//! Output writing and external compiler invocation
//!
//! The markup file is the product; the PDF pass is a convenience that
//! shells out to `pdflatex`. A missing compiler is reported with the
//! manual invocation and never corrupts the already-written file.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use crate::{Result, TexError};

/// How many compiler passes to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilePasses {
    Single,
    /// Two passes, resolving `\pageref` cross-references
    Double,
}

impl CompilePasses {
    pub fn count(self) -> u32 {
        match self {
            CompilePasses::Single => 1,
            CompilePasses::Double => 2,
        }
    }
}

/// Create the output directory and write the markup file into it
pub async fn write_tex(
    output_dir: impl AsRef<Path>,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    tokio::fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(file_name);
    tokio::fs::write(&path, contents).await?;
    Ok(path)
}

/// The command line a user would run by hand
pub fn manual_command(tex_path: &Path, output_dir: &Path) -> String {
    format!(
        "pdflatex -output-directory {} {}",
        output_dir.display(),
        tex_path.display()
    )
}

/// Run `pdflatex` against the written markup file.
///
/// The compiler's own console output passes through; a non-zero exit
/// is an error but leaves the markup file intact.
pub async fn compile_pdf(
    tex_path: &Path,
    output_dir: &Path,
    passes: CompilePasses,
) -> Result<()> {
    for pass in 1..=passes.count() {
        if passes == CompilePasses::Double {
            println!("Pass {pass}/2...");
        }
        let status = tokio::process::Command::new("pdflatex")
            .arg(format!("-output-directory={}", output_dir.display()))
            .arg("-interaction=nonstopmode")
            .arg(tex_path)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TexError::CompilerNotFound {
                        hint: manual_command(tex_path, output_dir),
                    }
                } else {
                    TexError::Io(e)
                }
            })?;

        if !status.success() {
            return Err(TexError::CompilerFailed {
                status: status.code().unwrap_or(-1),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_tex_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("deep");

        let path = write_tex(&nested, "journal.tex", "\\documentclass{article}")
            .await
            .unwrap();
        assert!(path.exists());
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "\\documentclass{article}");
    }

    #[test]
    fn test_manual_command_hint() {
        let hint = manual_command(Path::new("output/j.tex"), Path::new("output"));
        assert_eq!(hint, "pdflatex -output-directory output output/j.tex");
    }

    #[test]
    fn test_pass_counts() {
        assert_eq!(CompilePasses::Single.count(), 1);
        assert_eq!(CompilePasses::Double.count(), 2);
    }
}
