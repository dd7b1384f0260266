//! Signal-conditioning and motion-mapping core for a head-tracked
//! "parallax window" effect.
//!
//! A raw facial-position signal is noisy, intermittent and arrives at a
//! variable rate; the virtual camera driven from it must stay smooth,
//! bounded and low-latency, and degrade gracefully when tracking drops out.
//! This crate provides that pipeline:
//! 1. Per-axis adaptive low-pass filtering (one-pole, velocity-adaptive cutoff)
//! 2. Critically-damped interpolation with bounded output
//! 3. A decaying confidence score with a tracked/fallback mode state machine
//! 4. Mapping from smoothed position to camera offset and asymmetric frustum
//!    shift for the external renderer
//!
//! Rendering and raw landmark detection live behind trait boundaries: the
//! core consumes one normalized `(x, y, detected)` sample per cycle and emits
//! plain numbers each frame.
//!
//! # Examples
//!
//! ## Mapping a head-position signal
//!
//! ```
//! use parallax_window::mapper::ParallaxMapper;
//!
//! let mut mapper = ParallaxMapper::new(2.0, 0.1, true);
//!
//! // Once per rendered frame, with the latest head estimate
//! let frame = mapper.update(0.3, -0.1, Some(0.0));
//! assert!(frame.camera.x.abs() <= 2.0);
//! assert!(frame.frustum.is_some());
//! ```
//!
//! ## Running a full session
//!
//! ```
//! use parallax_window::{
//!     confidence::{ConfidenceTracker, InputMode},
//!     mapper::ParallaxMapper,
//!     session::TrackingSession,
//!     source::{PointerSource, ScriptedSource},
//! };
//!
//! # fn main() -> parallax_window::Result<()> {
//! let detector = ScriptedSource::new(0.5, 120.0);
//! let mut session = TrackingSession::new(
//!     ParallaxMapper::new(2.0, 0.1, true),
//!     ConfidenceTracker::new(InputMode::Tracking, 50.0),
//!     PointerSource::new(800.0, 600.0)?,
//!     Some(Box::new(detector)),
//! );
//!
//! session.start();
//! for i in 0..10 {
//!     let out = session.tick(Some(f64::from(i) / 60.0))?;
//!     // Hand out.frame.camera and out.frame.frustum to the renderer,
//!     // surface out.low_confidence to the UI.
//!     assert_eq!(out.mode, InputMode::Tracking);
//! }
//! session.stop();
//! # Ok(())
//! # }
//! ```
//!
//! ## Filtering a scalar signal directly
//!
//! ```
//! use parallax_window::filters::{one_euro::OneEuroFilter, SignalFilter};
//!
//! let mut filter = OneEuroFilter::default();
//! let first = filter.filter(0.5, Some(0.0));
//! assert_eq!(first, 0.5); // first sample passes through
//! let second = filter.filter(0.6, Some(1.0 / 60.0));
//! assert!(second > 0.5 && second < 0.6);
//! ```

/// Signal filtering for noisy tracking samples
pub mod filters;

/// Exponential motion smoothing with bounded output
pub mod smoother;

/// Confidence scoring and input-mode state machine
pub mod confidence;

/// Position-to-camera mapping and frustum shift derivation
pub mod mapper;

/// Input-source boundary: detection trait, pointer fallback, synthetic source
pub mod source;

/// Session lifecycle and per-frame orchestration
pub mod session;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
