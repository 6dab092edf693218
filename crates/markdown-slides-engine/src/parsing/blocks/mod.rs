//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, blockquote depth, fence, heading,
//!    rule, list marker and table facts, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps at most one
//!    open block and emits `Token`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Token`, `ListItem`)
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Blockquote bodies are parsed recursively, one `>` level at a time
//! - Table rows always have the header's width
//! - A list item's depth is at most one more than the item before it

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::Alignment;
pub use types::{ListItem, Token};
