use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::DataValue;

/// A column of the tabular projection of a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: String,
    pub name: String,
    pub is_sortable: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ColumnFilter>,
}

/// The rendered type of a table column. Untyped columns render their
/// values verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Timestamp,
}

/// The filter control attached to a value column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFilter {
    pub placeholder_text: String,
}

/// One row of the tabular projection: an identifier plus a cell value per
/// column id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: String,
    pub values: BTreeMap<String, DataValue>,
    pub is_selectable: bool,
}
