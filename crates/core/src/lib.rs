//! Core library for the pulsing heart particle visualiser.
//!
//! The pipeline is built leaf-first: [`curve`] samples the heart parametric
//! curve and scatters diffusion points inward, [`field`] provides the
//! stateless radial force transforms, [`sim`] freezes the point sets and
//! precomputes the fixed cycle of animation frames, [`timeline`] advances
//! the logical beat independently of the paint rate, and [`render`] draws
//! one frame per callback onto whatever [`render::Surface`] the host
//! supplies. [`engine`] ties the pieces together behind a single facade.

pub mod config;
pub mod curve;
pub mod engine;
pub mod error;
pub mod field;
pub mod geometry;
pub mod render;
pub mod sim;
pub mod timeline;

pub use config::EngineConfig;
pub use engine::HeartEngine;
pub use error::{HeartVizError, Result};
pub use geometry::{AnimationCycle, Frame, Point, Rgb, SizedPoint};
pub use render::{draw_frame, PixelSurface, Surface};
pub use sim::HeartSimulator;
pub use timeline::{PlaybackClock, StopHandle};
