//! `vtrack-playback` — the route playback engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `PlaybackConfig` — base interval + steps per segment       |
//! | [`state`]    | `PlaybackState` + multiplier bounds                        |
//! | [`engine`]   | `PlaybackEngine` — tick, transport controls, accessors     |
//! | [`snapshot`] | `PlaybackSnapshot` — owned per-poll output bundle          |
//! | [`error`]    | `PlaybackError`, `PlaybackResult<T>`                       |
//!
//! # Execution model
//!
//! The engine is a pure state machine with **no built-in timer**.  One
//! external scheduler (a frame loop, a sleep loop, a test) repeatedly calls
//! [`PlaybackEngine::tick`] with monotonic timestamps while
//! [`is_playing`][PlaybackEngine::is_playing] holds, and stops calling the
//! moment it turns false.  An internal throttle accepts at most one tick per
//! `base_interval / multiplier`, so over-eager schedulers are harmless.
//!
//! ```text
//!          play()                    tick() crosses final point
//!   Idle ─────────▶ Playing ───────────────────────────▶ Completed
//!    ▲  ◀───────── pause()                                   │
//!    │                                                       │ play()
//!    └────────────────── reset() from anywhere ◀─────────────┘ restarts at 0
//! ```
//!
//! Completed is Idle with the index pinned at the final route point;
//! no state is unrecoverable.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::time::Instant;
//! use vtrack_playback::PlaybackEngine;
//!
//! let mut engine = PlaybackEngine::new(route);
//! engine.play();
//! let start = Instant::now();
//! while engine.is_playing() {
//!     engine.tick(start.elapsed());
//!     let snap = engine.snapshot();
//!     // hand snap to the renderer, then yield until the next frame
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod state;


pub use config::PlaybackConfig;
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, PlaybackResult};
pub use snapshot::PlaybackSnapshot;
pub use state::{DEFAULT_MULTIPLIER, MAX_MULTIPLIER, MIN_MULTIPLIER, PlaybackState};
