//! Loading serialized syntax trees and printer configuration.
//!
//! Trees are accepted as JSON or YAML, chosen by file extension; `-`
//! reads JSON from stdin. Configuration files are TOML.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ast::File;
use crate::printer::Config;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML tree: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown tree format: {0} (expected .json, .yaml or .yml)")]
    UnknownExtension(PathBuf),
}

fn read_to_string(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_json(src: &str) -> Result<File, InputError> {
    Ok(serde_json::from_str(src)?)
}

pub fn parse_yaml(src: &str) -> Result<File, InputError> {
    Ok(serde_yaml::from_str(src)?)
}

/// Load a tree from `path`, or JSON from stdin when `path` is `-`.
pub fn load_file(path: &Path) -> Result<File, InputError> {
    if path.as_os_str() == "-" {
        let mut src = String::new();
        std::io::stdin()
            .read_to_string(&mut src)
            .map_err(|source| InputError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        return parse_json(&src);
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "json" => parse_json(&read_to_string(path)?),
        "yaml" | "yml" => parse_yaml(&read_to_string(path)?),
        _ => Err(InputError::UnknownExtension(path.to_path_buf())),
    }
}

pub fn load_config(path: &Path) -> Result<Config, InputError> {
    Ok(toml::from_str(&read_to_string(path)?)?)
}
