//! Advisory pipeline: two photos in, labels + advisory + speech out.
//!
//! # Architecture
//!
//! ```text
//! soil bytes ─┐
//!             ├─ spawn_blocking(classify_photos) ─▶ (MoistureLabel, CloudLabel)
//! sky bytes  ─┘                                          │
//!                                                        ▼
//!                                               compose_advisory
//!                                                        │
//!                                                        ▼
//!                                    SpeechSynthesizer::synthesize (async)
//!                                                        │
//!                                                        ▼
//!                              write_temp_audio → read → cleanup (always)
//!                                                        │
//!                                                        ▼
//!                                                 AdvisoryReport
//! ```
//!
//! Every call is independent: the pipeline holds no per-request state, so a
//! single instance is shared by all HTTP handlers behind an `Arc`.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use krishi_advisor::config::AppConfig;
//! use krishi_advisor::pipeline::AdvisoryPipeline;
//!
//! # async fn example(soil: Vec<u8>, sky: Vec<u8>) {
//! let pipeline = AdvisoryPipeline::from_config(&AppConfig::default());
//! let report = pipeline.run(soil, sky).await.unwrap();
//! println!("{}", report.advice);
//! # }
//! ```

pub mod report;
pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use report::AdvisoryReport;
pub use runner::{classify_photos, AdvisoryPipeline, PipelineError};
