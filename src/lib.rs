// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive camera manipulation for 3D viewers.
//!
//! Camutils turns pointer, wheel and keyboard input into a camera
//! `eye`/`target`/`up` basis for a host renderer. It never renders anything
//! itself and has no windowing dependency.
//!
//! # Key entry points
//!
//! - [`Builder`] - fluent construction of a manipulator for one [`Mode`]
//! - [`Manipulator`] - orbit, map or free-flight navigation
//! - [`Bookmark`] - copyable view snapshots with interpolation
//! - [`BookmarkTransition`] - eased animation between bookmarks
//! - [`input::InputProcessor`] - drives a manipulator from window events
//! - [`options::Config`] - TOML-backed configuration presets
//!
//! # Example
//!
//! ```
//! use camutils::{Builder, Mode};
//! use glam::Vec3;
//!
//! let mut camera = Builder::new()
//!     .viewport(800, 600)
//!     .orbit_home_position(Vec3::new(0.0, 0.0, 5.0))
//!     .build(Mode::Orbit);
//!
//! camera.grab_begin(400.0, 300.0, false);
//! camera.grab_update(380.0, 310.0);
//! camera.grab_end();
//! camera.update(1.0 / 60.0);
//!
//! let look = camera.look_at();
//! assert!((look.eye - look.target).length() > 4.99);
//! ```

pub mod bookmark;
pub mod builder;
pub mod error;
pub mod input;
pub mod manipulator;
pub mod options;
pub mod plane;
pub mod transition;
pub mod util;

pub use bookmark::Bookmark;
pub use builder::Builder;
pub use error::CamutilsError;
pub use manipulator::{Key, LookAt, Manipulator, Ray};
pub use options::{Config, Mode};
pub use transition::BookmarkTransition;
