//! # contrast-cli
//!
//! Console formatting, the CLI result presenter, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIResultPresenter;
