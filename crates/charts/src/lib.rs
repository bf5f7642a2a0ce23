//! Data shaping for IoT-style dashboard cards.
//!
//! Raw tabular or time-series records, together with a declarative series
//! configuration, are turned into the structures a chart or table renderer
//! consumes: chart-ready data, axis-to-field mappings, per-group color
//! scales, tooltip documents and a tabular projection of the same records.
//! Synthetic sample data covers the preview and edit states of a card.
//!
//! Rendering itself is a consumer concern. Every output is a plain value
//! that serializes to the field names the renderer expects.

pub mod bar;
pub mod error;
pub mod grain;
pub mod palette;
pub mod record;
pub mod series;
pub mod table;
pub mod timeseries;
