//! Declarative tree descriptions
//!
//! A blueprint is a TOML document describing a tree:
//!
//! ```toml
//! kind = "composite"
//! name = "root"
//!
//! [[children]]
//! kind = "leaf"
//! label = "L1"
//!
//! [[children]]
//! kind = "composite"
//! name = "branch"
//!
//! [[children.children]]
//! kind = "leaf"
//! label = "A"
//! ```
//!
//! Trees are built bottom-up, each child moved into its parent, so a blueprint
//! cannot describe a cycle.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Component, CompositeNode, DomainError, DomainResult, Leaf};

/// Name given to the root of the demo tree.
pub const DEMO_ROOT_NAME: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeBlueprint {
    Leaf {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Composite {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        children: Vec<NodeBlueprint>,
    },
}

impl NodeBlueprint {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::Leaf {
            label: Some(label.into()),
        }
    }

    /// One composite root with a leaf per label, in order.
    pub fn demo(labels: &[String]) -> Self {
        Self::Composite {
            name: Some(DEMO_ROOT_NAME.to_string()),
            children: labels.iter().map(Self::leaf).collect(),
        }
    }

    pub fn from_toml_str(content: &str) -> ApplicationResult<Self> {
        parse(content, "<inline>")
    }

    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let content = std::fs::read_to_string(path).with_path_context("read blueprint", path)?;
        let blueprint = parse(&content, &path.display().to_string())?;
        debug!("loaded blueprint from {}", path.display());
        Ok(blueprint)
    }

    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Blueprint {
            origin: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }

    /// Construct the described tree.
    ///
    /// A leaf without a label is rejected with [`DomainError::InvalidArgument`].
    pub fn build(&self) -> DomainResult<Box<dyn Component>> {
        match self {
            Self::Leaf { label } => {
                let label = label.as_deref().ok_or_else(|| {
                    DomainError::InvalidArgument("leaf blueprint has no label".to_string())
                })?;
                Ok(Box::new(Leaf::new(label)?))
            }
            Self::Composite { name, children } => {
                let mut node = match name {
                    Some(name) => CompositeNode::named(name.as_str()),
                    None => CompositeNode::new(),
                };
                for child in children {
                    node.add_boxed(child.build()?);
                }
                Ok(Box::new(node))
            }
        }
    }
}

fn parse(content: &str, origin: &str) -> ApplicationResult<NodeBlueprint> {
    toml::from_str(content).map_err(|e| ApplicationError::Blueprint {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}
