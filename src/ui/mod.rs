//! Terminal-facing building blocks: the FIGlet banner, the prompter seam over
//! `dialoguer`, the cascading menu machinery, the input collector, and the
//! fixed-width table renderer.

pub mod banner;
pub mod collector;
pub mod menu;
pub mod prompt;
pub mod table;

pub use collector::{Choice, Collector};
pub use menu::{CascadingMenu, Menu, MenuEntry, Selection};
pub use prompt::{Prompter, TerminalPrompter};
