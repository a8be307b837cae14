use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use crate::app::Interaction;
use crate::error::{ParseError, ParseErrorKind};
use crate::types::Catalog;

/// Parse a YAML string into an unvalidated Catalog.
///
/// Performs YAML deserialization and type mapping only.
/// Does NOT validate catalog rules or apply normalization.
pub fn parse(input: &str) -> Result<Catalog, ParseError> {
    let value = parse_value(input)?;

    let Some(obj) = value.as_object() else {
        return Err(ParseError::new(
            ParseErrorKind::TypeMismatch,
            "catalog root must be a YAML mapping",
        ));
    };

    // Only `catalog` and `product` are allowed at the top level
    for key in obj.keys() {
        match key.as_str() {
            "catalog" | "product" => {}
            other => {
                return Err(ParseError {
                    path: Some(other.to_string()),
                    ..ParseError::new(
                        ParseErrorKind::UnknownField,
                        format!("unknown top-level field: {}", other),
                    )
                });
            }
        }
    }

    let catalog: Catalog = from_value(value)?;

    validate_extension_keys(&catalog)?;

    Ok(catalog)
}

/// Parse a YAML sequence of interactions.
///
/// An empty document is an empty script.
pub fn parse_script(input: &str) -> Result<Vec<Interaction>, ParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value = parse_value(input)?;
    if !value.is_array() {
        return Err(ParseError::new(
            ParseErrorKind::TypeMismatch,
            "script root must be a YAML sequence",
        ));
    }
    from_value(value)
}

/// Parse any YAML document into `T` through a JSON value tree.
pub(crate) fn parse_yaml<T: DeserializeOwned>(input: &str) -> Result<T, ParseError> {
    from_value(parse_value(input)?)
}

fn parse_value(input: &str) -> Result<Value, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::Syntax, "empty input"));
    }

    check_multi_document(input)?;

    serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_saphyr_error(&msg), msg)
    })
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ParseError> {
    serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        let (line, column) = (e.line(), e.column());
        ParseError {
            line: (line > 0).then_some(line),
            column: (column > 0).then_some(column),
            ..ParseError::new(classify_json_error(&msg), msg)
        }
    })
}

/// Validate that all extension (flatten) fields start with "x-".
fn validate_extension_keys(catalog: &Catalog) -> Result<(), ParseError> {
    check_extensions(&catalog.product.extensions, "product")?;
    for (i, variant) in catalog.product.variants.iter().enumerate() {
        check_extensions(&variant.extensions, &format!("product.variants[{}]", i))?;
    }
    Ok(())
}

fn check_extensions(extensions: &HashMap<String, Value>, path: &str) -> Result<(), ParseError> {
    // Sorted so the reported key does not depend on hash order
    let mut keys: Vec<&String> = extensions.keys().collect();
    keys.sort();
    if let Some(key) = keys.into_iter().find(|k| !k.starts_with("x-")) {
        return Err(ParseError {
            path: Some(format!("{}.{}", path, key)),
            ..ParseError::new(
                ParseErrorKind::UnknownField,
                format!(
                    "unknown field '{}' at {} (extension fields must start with 'x-')",
                    key, path
                ),
            )
        });
    }
    Ok(())
}

/// Check for multiple YAML documents (--- separator).
/// Only matches `---` at column 0 to avoid false positives inside block scalars.
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for (line_num, line) in input.lines().enumerate() {
        if line.starts_with("---") && line[3..].trim().is_empty() {
            doc_count += 1;
            if doc_count > 1 {
                return Err(ParseError {
                    line: Some(line_num + 1),
                    ..ParseError::new(
                        ParseErrorKind::Syntax,
                        "multi-document YAML is not supported",
                    )
                });
            }
        }
    }
    Ok(())
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        ParseErrorKind::UnknownField
    } else if lower.contains("missing field") || lower.contains("invalid type") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
