//! Caesar cipher workbench.
//!
//! The [`cipher`] module is the core: a fixed 26-letter alphabet, a total
//! shift transform, and the alignment view model consumed by the terminal
//! front end in [`ui`]. [`analysis`] recovers unknown shifts by letter
//! frequency and a common-word check. Everything in the core is a pure
//! function over the input text and shift key; nothing is persisted.

pub mod analysis;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
