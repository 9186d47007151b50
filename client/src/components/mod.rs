//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are layout primitives with no knowledge of auth or routing;
//! pages compose them and pass data in through props.

pub mod ui;
