//! Pulls the four `machineKey` attributes out of a configuration document.
//!
//! This is a pattern extractor, not an XML parser: it finds the first
//! `machineKey` element and reads `name="value"` pairs from its tag.

use crate::domain::errors::TicketError;

/// Attributes read from the `machineKey` element, in return order.
pub const MACHINE_KEY_ATTRIBUTES: [&str; 4] =
    ["decryption", "decryptionKey", "validation", "validationKey"];

/// Extract `[decryption, decryptionKey, validation, validationKey]`.
///
/// # Errors
///
/// - `InvalidConfig` if the document has no `machineKey` element
/// - `MissingAttribute` naming the first attribute not present
pub fn parse_machine_key(document: &str) -> Result<[String; 4], TicketError> {
    let (_, rest) = document
        .split_once("machineKey")
        .ok_or_else(|| TicketError::InvalidConfig("no machineKey element found".into()))?;

    // Attributes live in the opening tag.
    let tag = rest.split_once('>').map_or(rest, |(tag, _)| tag);

    let mut values: [String; 4] = Default::default();
    for (slot, name) in values.iter_mut().zip(MACHINE_KEY_ATTRIBUTES) {
        *slot = attribute(tag, name).ok_or(TicketError::MissingAttribute(name))?;
    }

    tracing::debug!(decryption = %values[0], validation = %values[2], "machineKey extracted");
    Ok(values)
}

fn attribute(tag: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let mut from = 0;

    while let Some(found) = tag[from..].find(&needle) {
        let start = from + found;
        let value_start = start + needle.len();

        // Reject suffix matches such as `xvalidation="`.
        let at_boundary = tag[..start]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);

        if at_boundary {
            let len = tag[value_start..].find('"')?;
            return Some(tag[value_start..value_start + len].to_string());
        }
        from = value_start;
    }

    None
}
