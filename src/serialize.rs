//! YAML output for catalogs.

use crate::error::SerializeError;
use crate::types::Catalog;

/// Writes a catalog as a YAML document.
///
/// Pass a normalized catalog to get canonical output. Keys come out in
/// struct order: `catalog` first, then `product` with its variants, and any
/// `x-` extensions after the known fields.
pub fn serialize(catalog: &Catalog) -> Result<String, SerializeError> {
    // preserve_order keeps the struct order through the intermediate tree
    let tree = serde_json::to_value(catalog).map_err(|e| SerializeError {
        message: format!("catalog is not representable as a YAML tree: {}", e),
    })?;

    serde_saphyr::to_string(&tree).map_err(|e| SerializeError {
        message: format!("cannot emit catalog YAML: {}", e),
    })
}
