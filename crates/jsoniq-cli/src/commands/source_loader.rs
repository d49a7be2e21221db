use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("source is required: use positional argument, '-' for stdin, or -s/--source")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolves the input text: inline `-s` wins, then a file path (`-` is stdin).
pub fn load_source(
    source_path: Option<&Path>,
    source_text: Option<&str>,
) -> Result<String, LoadError> {
    if let Some(text) = source_text {
        return Ok(text.to_string());
    }

    match source_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

/// Like [`load_source`], but reports the failure and exits.
pub fn load_source_or_exit(source_path: Option<&Path>, source_text: Option<&str>) -> String {
    match load_source(source_path, source_text) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}
