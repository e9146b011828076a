//! Fixed-shape grouped identifiers.
//!
//! Identifiers look like `A1B2-3C4D-E5F6-7G8H`: four groups of four
//! characters, letters and digits strictly alternating inside each group.

mod structured;

pub use structured::{is_structured_id, StructuredIdGenerator, GROUPS, GROUP_LEN, SEPARATOR};
