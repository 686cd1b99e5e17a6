//! The shared component capability

use std::fmt;

use crate::domain::error::DomainResult;
use crate::domain::sink::OutputSink;

/// Capability shared by every node in a component tree.
///
/// Leaves act directly, composites delegate to their children. Callers hold
/// nodes as `&dyn Component` or `Box<dyn Component>` and never need to know
/// which kind they have.
pub trait Component: fmt::Debug {
    /// Perform this node's action, writing any output to `sink`.
    ///
    /// The only failure is the sink refusing a write; it is returned as
    /// [`DomainError::Sink`](crate::domain::DomainError::Sink) and aborts the
    /// remaining traversal.
    fn perform_action(&self, sink: &mut dyn OutputSink) -> DomainResult<()>;

    /// Display name: a leaf's label or a composite's name.
    fn name(&self) -> &str;

    /// Direct children in traversal order. Terminal nodes have none.
    fn children(&self) -> Vec<&dyn Component> {
        Vec::new()
    }

    /// Whether this node delegates to children rather than acting itself.
    /// An empty composite is still a composite.
    fn is_composite(&self) -> bool {
        false
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn perform_action(&self, sink: &mut dyn OutputSink) -> DomainResult<()> {
        (**self).perform_action(sink)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn children(&self) -> Vec<&dyn Component> {
        (**self).children()
    }

    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}
