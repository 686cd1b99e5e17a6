//! Internal tree node that owns and delegates to its children

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::domain::component::Component;
use crate::domain::error::DomainResult;
use crate::domain::sink::OutputSink;

const DEFAULT_NAME: &str = "composite";

/// Handle to one child entry of a [`CompositeNode`].
///
/// Returned by [`CompositeNode::add`] and consumed by [`CompositeNode::remove`].
/// A handle only matches the composite that issued it, and only until that
/// entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildId {
    owner: Uuid,
    index: Index,
}

/// Internal node owning an ordered sequence of child components.
///
/// Children are moved in on `add`, so a node can never be its own ancestor.
/// Insertion order is the traversal order.
#[derive(Debug)]
pub struct CompositeNode {
    id: Uuid,
    name: String,
    /// Arena storage for the children
    arena: Arena<Box<dyn Component>>,
    /// Arena indices in insertion order
    order: Vec<Index>,
}

impl Default for CompositeNode {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeNode {
    pub fn new() -> Self {
        Self::named(DEFAULT_NAME)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            arena: Arena::new(),
            order: Vec::new(),
        }
    }

    /// Append `child` to the end of the sequence.
    pub fn add<C: Component + 'static>(&mut self, child: C) -> ChildId {
        self.add_boxed(Box::new(child))
    }

    /// Append an already boxed child to the end of the sequence.
    #[instrument(level = "trace", skip(self, child), fields(composite = %self.name, child = %child.name()))]
    pub fn add_boxed(&mut self, child: Box<dyn Component>) -> ChildId {
        let index = self.arena.insert(child);
        self.order.push(index);
        trace!(len = self.order.len(), "child added");
        ChildId {
            owner: self.id,
            index,
        }
    }

    /// Builder-style [`add`](Self::add).
    pub fn with_child<C: Component + 'static>(mut self, child: C) -> Self {
        self.add(child);
        self
    }

    /// Remove the entry identified by `id` and hand it back.
    ///
    /// Unknown handles (already removed, or issued by another composite)
    /// leave the sequence untouched and return `None`.
    #[instrument(level = "trace", skip(self), fields(composite = %self.name))]
    pub fn remove(&mut self, id: ChildId) -> Option<Box<dyn Component>> {
        if id.owner != self.id {
            debug!("handle belongs to another composite, ignoring");
            return None;
        }
        let position = self.order.iter().position(|&idx| idx == id.index)?;
        self.order.remove(position);
        let removed = self.arena.remove(id.index);
        trace!(len = self.order.len(), "child removed");
        removed
    }

    pub fn get(&self, id: ChildId) -> Option<&dyn Component> {
        if id.owner != self.id {
            return None;
        }
        self.arena.get(id.index).map(|child| child.as_ref())
    }

    /// Handles of all current children in order.
    pub fn ids(&self) -> Vec<ChildId> {
        self.order
            .iter()
            .map(|&index| ChildId {
                owner: self.id,
                index,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Component for CompositeNode {
    #[instrument(level = "debug", skip(self, sink), fields(composite = %self.name, children = self.order.len()))]
    fn perform_action(&self, sink: &mut dyn OutputSink) -> DomainResult<()> {
        for &index in &self.order {
            if let Some(child) = self.arena.get(index) {
                child.perform_action(sink)?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> Vec<&dyn Component> {
        self.order
            .iter()
            .filter_map(|&index| self.arena.get(index))
            .map(|child| child.as_ref())
            .collect()
    }

    fn is_composite(&self) -> bool {
        true
    }
}
