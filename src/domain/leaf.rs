//! Terminal tree node

use tracing::{instrument, trace};

use crate::domain::component::Component;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::sink::OutputSink;

/// Terminal node identified by a label.
///
/// The label is fixed at construction; performing the action writes it to
/// the sink once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    label: String,
}

impl Leaf {
    /// Create a leaf. An empty label counts as absent; any other string,
    /// whitespace included, is kept verbatim.
    pub fn new(label: impl Into<String>) -> DomainResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(DomainError::InvalidArgument(
                "leaf label must not be empty".to_string(),
            ));
        }
        Ok(Self { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Component for Leaf {
    #[instrument(level = "trace", skip(self, sink), fields(label = %self.label))]
    fn perform_action(&self, sink: &mut dyn OutputSink) -> DomainResult<()> {
        trace!("emitting label");
        sink.write_line(&self.label)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}
