//! Composition engine for sharing campaign posts to a social network.
//!
//! A [`ComposeEngine`](ops::engine::ComposeEngine) owns one share session:
//! the draft text seeded from the active post, the selected mentions and
//! trend tags, and the composed text with its character budget, recomputed
//! after every mutation.

pub mod cli;
pub mod io;
pub mod logging;
pub mod model;
pub mod ops;
pub mod util;
