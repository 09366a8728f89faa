//! Small XML helpers shared by the slide, chart, and diagram walkers.

use quick_xml::events::BytesStart;

/// Extract the local name from a potentially namespaced XML element name.
pub(crate) fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Look up an attribute by its full (possibly prefixed) key, e.g. `r:id`.
pub(crate) fn attr_value(e: &BytesStart<'_>, wanted: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == wanted)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}
