//! arbor: composite trees of components
//!
//! Leaves perform an action directly, composites delegate the same action to
//! their children in insertion order. Both are held behind the
//! [`Component`](domain::Component) capability.
//!
//! Layers, innermost first:
//! - [`domain`]: component trait, leaf, composite, tree queries
//! - [`application`]: blueprints and the driver
//! - [`infrastructure`]: concrete sinks, console pause
//! - [`cli`]: clap arguments and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
