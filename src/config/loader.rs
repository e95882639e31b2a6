use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::toc::template::{TocTemplate, PLACEHOLDERS};
use crate::utils::error::{BoxResult, RustocError};

/// Template file names to look for
const TEMPLATE_FILES: [&str; 3] = ["_toc.yml", "_toc.yaml", "_toc.toml"];

/// Parse a template configuration from a YAML string
pub fn template_from_yaml_str(input: &str) -> BoxResult<TocTemplate> {
    let template: TocTemplate =
        serde_yaml::from_str(input).map_err(|e| RustocError::Config(e.to_string()))?;
    validate_template(&template);
    Ok(template)
}

/// Parse a template configuration from a TOML string
pub fn template_from_toml_str(input: &str) -> BoxResult<TocTemplate> {
    let template: TocTemplate =
        toml::from_str(input).map_err(|e| RustocError::Config(e.to_string()))?;
    validate_template(&template);
    Ok(template)
}

/// Load a template configuration file, dispatching on its extension
pub fn load_template<P: AsRef<Path>>(path: P) -> BoxResult<TocTemplate> {
    let path = path.as_ref();
    debug!("Loading template configuration from {}", path.display());
    let contents = fs::read_to_string(path).map_err(RustocError::Io)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => template_from_yaml_str(&contents),
        Some("toml") => template_from_toml_str(&contents),
        _ => Err(RustocError::Template(format!(
            "Unsupported template format: {}",
            path.display()
        ))
        .into()),
    }
}

/// Find the default template file in a directory, if any
pub fn find_default_template_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    TEMPLATE_FILES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Warn when the item format cannot produce any per-heading output
pub fn validate_template(template: &TocTemplate) {
    if !PLACEHOLDERS
        .iter()
        .any(|placeholder| template.item_format.contains(placeholder))
    {
        warn!(
            "item_format contains none of the recognized placeholders: {}",
            PLACEHOLDERS.join(", ")
        );
    }
}
