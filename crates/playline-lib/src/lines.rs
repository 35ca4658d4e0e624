//! Projection of the compiler's string table into runtime line records.

use indexmap::IndexMap;
use playline_core::StringTableEntry;
use serde::Serialize;

/// A string table entry as the runtime sees it.
///
/// `tags` is `None` exactly when the entry carries no metadata; it is then
/// left out of the output entirely rather than written as an empty table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectedLine {
    pub text: String,
    pub node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<IndexMap<String, String>>,
    pub line_number: i32,
}

/// Split a metadata tag on its first `:`, trimming both halves.
///
/// A tag without `:` becomes a key with an empty value.
pub fn parse_tag(raw: &str) -> (&str, &str) {
    match raw.split_once(':') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (raw.trim(), ""),
    }
}

pub fn project_entry(entry: &StringTableEntry) -> ProjectedLine {
    let tags = (!entry.metadata.is_empty()).then(|| {
        // Later duplicates overwrite earlier ones but keep the first position.
        entry
            .metadata
            .iter()
            .map(|raw| {
                let (key, value) = parse_tag(raw);
                (key.to_owned(), value.to_owned())
            })
            .collect::<IndexMap<_, _>>()
    });

    ProjectedLine {
        text: entry.text.clone(),
        node: entry.node_name.clone(),
        tags,
        line_number: entry.line_number,
    }
}

/// Project a whole string table, keeping its order.
pub fn project(table: &IndexMap<String, StringTableEntry>) -> IndexMap<String, ProjectedLine> {
    table
        .iter()
        .map(|(id, entry)| (id.clone(), project_entry(entry)))
        .collect()
}
