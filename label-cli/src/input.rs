//! JSON input files

use std::path::Path;

use anyhow::{Context, Result, bail};
use shared::models::{InventoryElement, LabelOptions};

/// Load label options from a JSON file
pub fn load_options(path: &Path) -> Result<LabelOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid options in {}", path.display()))
}

/// Load the elements to label from a JSON array
pub fn load_elements(path: &Path) -> Result<Vec<InventoryElement>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read elements file {}", path.display()))?;
    let elements: Vec<InventoryElement> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid elements in {}", path.display()))?;

    if elements.is_empty() {
        bail!("{} contains no elements", path.display());
    }
    Ok(elements)
}

/// Reject elements the options were not made for
pub fn check_supported(options: &LabelOptions, elements: &[InventoryElement]) -> Result<()> {
    for (index, element) in elements.iter().enumerate() {
        let kind = element.kind();
        if !options.supports(kind) {
            bail!(
                "Element #{} is a {}, but the label options are for {}",
                index + 1,
                kind.scan_type(),
                options.supported_element.scan_type()
            );
        }
    }
    Ok(())
}
