//! Color classification of soil and sky photographs.
//!
//! # Pipeline
//!
//! ```text
//! uploaded bytes ─▶ decode_rgb ─▶ RgbImage ─▶ ChannelMeans ─┬─▶ classify_moisture ─▶ MoistureLabel
//!                                                           └─▶ classify_cloud    ─▶ CloudLabel
//! ```
//!
//! The heuristics look only at the mean of each color channel, so a photo
//! is reduced to three numbers before any decision is made.
//!
//! # Quick start
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use krishi_advisor::vision::{classify_cloud, classify_moisture, ChannelMeans, CloudLabel, MoistureLabel};
//!
//! let soil = RgbImage::from_pixel(4, 4, Rgb([40, 200, 60]));
//! let means = ChannelMeans::of(&soil).unwrap();
//! assert_eq!(classify_moisture(&means), MoistureLabel::Moist);
//!
//! let sky = RgbImage::from_pixel(4, 4, Rgb([90, 140, 230]));
//! let means = ChannelMeans::of(&sky).unwrap();
//! assert_eq!(classify_cloud(&means), CloudLabel::Cirrus);
//! ```

pub mod classify;
pub mod stats;

pub use classify::{classify_cloud, classify_moisture, CloudLabel, MoistureLabel};
pub use stats::{decode_rgb, ChannelMeans, VisionError};
