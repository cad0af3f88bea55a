//! Hindi farming advisory composed from the soil and sky labels.
//!
//! The advisory is a pure function of `(MoistureLabel, CloudLabel)`: one
//! moisture sentence, one weather sentence and a machine-readable summary.

pub mod compose;

pub use compose::{compose_advisory, CYCLONE_WARNING, IRRIGATE_NOW, LOW_FERTILIZER, NORMAL_WEATHER};
