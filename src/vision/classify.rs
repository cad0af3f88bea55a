//! Mean-color heuristics for soil moisture and cloud type.
//!
//! Both classifiers use strict comparisons evaluated in a fixed order: the
//! first rule that holds wins and anything else falls through to the
//! default label.  Ties therefore never pick the "interesting" label.

use std::fmt;

use serde::Serialize;

use super::stats::ChannelMeans;

// ---------------------------------------------------------------------------
// MoistureLabel
// ---------------------------------------------------------------------------

/// Coarse soil dampness read from the color of a soil (Nostoc) photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoistureLabel {
    /// Green dominates: bright green / blue-green growth.
    Moist,
    /// Anything else: dark green, brown or black.
    Dry,
}

impl MoistureLabel {
    /// Human-readable label, as shown to the farmer and embedded in the
    /// advisory summary.
    pub fn label(&self) -> &'static str {
        match self {
            MoistureLabel::Moist => "Moist (Bright Green/Blue-Green)",
            MoistureLabel::Dry => "Dry (Dark Green/Brown/Black)",
        }
    }
}

impl fmt::Display for MoistureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// CloudLabel
// ---------------------------------------------------------------------------

/// Coarse cloud type read from the color of a sky photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CloudLabel {
    /// Blue dominates: thin, white, high clouds.
    Cirrus,
    /// Green dominates.
    Cumulus,
    /// Fallback: grayish layered sky.
    Stratus,
}

impl CloudLabel {
    /// Human-readable label, as shown to the farmer and embedded in the
    /// advisory summary.
    pub fn label(&self) -> &'static str {
        match self {
            CloudLabel::Cirrus => "Cirrus (Thin, White Clouds)",
            CloudLabel::Cumulus => "Cumulus (Fluffy White Clouds)",
            CloudLabel::Stratus => "Stratus (Grayish Layered Clouds)",
        }
    }

    /// Whether this sky is treated as an early cyclone sign.
    pub fn is_cyclone_risk(&self) -> bool {
        matches!(self, CloudLabel::Cirrus)
    }
}

impl fmt::Display for CloudLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Classifiers
// ---------------------------------------------------------------------------

/// `Moist` iff the green mean strictly exceeds both other channel means.
pub fn classify_moisture(means: &ChannelMeans) -> MoistureLabel {
    if means.green > means.blue && means.green > means.red {
        MoistureLabel::Moist
    } else {
        MoistureLabel::Dry
    }
}

/// `Cirrus` when blue strictly dominates, else `Cumulus` when green strictly
/// dominates, else `Stratus`.
pub fn classify_cloud(means: &ChannelMeans) -> CloudLabel {
    if means.blue > means.green && means.blue > means.red {
        CloudLabel::Cirrus
    } else if means.green > means.red && means.green > means.blue {
        CloudLabel::Cumulus
    } else {
        CloudLabel::Stratus
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
