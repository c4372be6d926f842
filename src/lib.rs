//! # portrait
//!
//! Core logic for the portrait click-to-seek demo.
//!
//! A click on the page picks a playback offset into a looping audio track
//! from its horizontal position, and spawns a splash sprite animation at the
//! click location. Everything here is pure and DOM-free so the browser client
//! and the server share the same rules and configuration.
//!
//! ## Quick Start
//!
//! ```
//! use portrait::prelude::*;
//!
//! let mut stage = Stage::new(StageConfig::default());
//! let viewport = Viewport::new(1000.0, 800.0);
//!
//! let outcome = stage.click(Click::new(350.0, 400.0), viewport);
//! assert_eq!(outcome.action, SeekAction::Seek(116.0));
//!
//! let splash = outcome.spawned.expect("seeking clicks spawn a splash");
//! assert_eq!(stage.tick(splash.id), FrameTick::Show(0));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde` (default): Serialize/deserialize [`config::StageConfig`]
//!
//! ## Modules
//!
//! - [`seek`]: Seek table (horizontal fraction → playback offset)
//! - [`splash`]: Splash placement and frame animation
//! - [`stage`]: Per-page context tying clicks, audio time and the live splash together
//! - [`config`]: Shared stage configuration

// no_std support
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/seek.rs"]
pub mod seek;

#[path = "core/splash.rs"]
pub mod splash;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/stage.rs"]
pub mod stage;

/// Prelude module for convenient imports.
///
/// ```
/// use portrait::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{SpriteSheet, StageConfig};
    pub use crate::error::StageError;
    pub use crate::seek::{horizontal_fraction, Bucket, SeekAction, SeekTable};
    pub use crate::splash::{Click, Placement, SplashAnimation, Viewport};
    pub use crate::stage::{ClickOutcome, FrameTick, SplashId, SpawnedSplash, Stage};
}
