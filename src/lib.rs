//! LogDate Rewind viewer (rewind)
//!
//! TUI application for replaying LogDate journal Rewind stories: an ordered
//! sequence of content panels presented full-screen with auto-advance,
//! tap-zone and drag navigation.
//!
//! Layered as a pure core (model, state) under an impure shell (source,
//! view, logging).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
