//! # qrsmith - QR Code Generation, Styling and Decoding
//!
//! qrsmith turns JSON job files into QR code images and back. It provides:
//!
//! - **Generation**: flat two-color codes, or rounded dots with a color gradient
//! - **Beautification**: rounded corners, centered logos, radial shading
//! - **Decoding**: every QR symbol in an image, with bounding boxes
//!
//! Symbol encoding is done by the `qrcode` crate, decoding by `rqrr`, and
//! pixel work by `image`. This crate is the orchestration around them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use qrsmith::{JobRequest, tools};
//!
//! let job = JobRequest::from_json(r#"{
//!     "input": "https://example.com",
//!     "options": { "color": "navy", "roundedCorners": true }
//! }"#)?;
//! tools::beautify::run(&job, Path::new("code.png"))?;
//!
//! let decode = JobRequest::from_json(r#"{"input": "code.png"}"#)?;
//! let found = tools::decode::run(&decode, Path::new("result.json"))?;
//! assert_eq!(found, 1);
//! # Ok::<(), qrsmith::QrsmithError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`job`] | Job file parsing, option defaults, input classification |
//! | [`color`] | Loosely-typed color parsing |
//! | [`symbol`] | Encoding, version fitting, module grid |
//! | [`render`] | Flat, gradient, rounded and logo rendering |
//! | [`output`] | File containers (PNG, JPEG, SVG, ...) |
//! | [`scan`] | Decoding and the result envelope |
//! | [`tools`] | The four entry points |
//! | [`error`] | Error types |

pub mod color;
pub mod error;
pub mod job;
pub mod output;
pub mod render;
pub mod scan;
pub mod symbol;
pub mod tools;

// Re-exports for convenience
pub use error::QrsmithError;
pub use job::{JobOptions, JobRequest, StyleDefaults};
