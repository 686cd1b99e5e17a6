//! Application layer: tree assembly and use cases
//!
//! This layer turns settings and blueprints into component trees and drives them.

pub mod blueprint;
pub mod driver;
pub mod error;
pub mod error_ext;

pub use blueprint::NodeBlueprint;
pub use driver::{assemble_tree, build_demo_tree, run_action};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
