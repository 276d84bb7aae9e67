//! # simon-core - Core Domain Types
//!
//! Foundation crate for Simon Says. Provides the game model, lights, the
//! shared timer queue, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (rand, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Lights (`light`)
//! - [`Light`] - On/off cell with a bright color and a derived dim color
//! - [`LightColor`] - Fixed palette (red, yellow, green, blue)
//! - [`Rgb`] - Renderer-independent color
//!
//! ### Game Model (`model`)
//! - [`SimonModel`] - Sequence generation, input validation, score
//! - [`GamePhase`] - Idle / Playing / GameOver
//! - [`InputOutcome`] - Result of adjudicating one press
//!
//! ### Notifications (`events`)
//! - [`ModelEvent`] - Changes drained from the model after each call
//!
//! ### Sequence Sources (`sequence`)
//! - [`IndexSource`] - Where new sequence elements come from
//! - [`RandomSource`], [`ScriptedSource`]
//!
//! ### Timers (`timer`)
//! - [`TimerQueue`] - Cooperative, cancellable scheduler
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use simon_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod light;
pub mod logging;
pub mod model;
pub mod sequence;
pub mod timer;

/// Prelude for common imports used throughout all Simon Says crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::ModelEvent;
pub use light::{Light, LightColor, Rgb};
pub use model::{GamePhase, InputOutcome, SimonModel};
pub use sequence::{IndexSource, RandomSource, ScriptedSource};
pub use timer::{TimerId, TimerQueue};
