//! Tree assembly and the single action run

use std::path::Path;

use tracing::{info, instrument};

use crate::application::blueprint::{NodeBlueprint, DEMO_ROOT_NAME};
use crate::application::ApplicationResult;
use crate::domain::{Component, CompositeNode, DomainResult, Leaf, OutputSink};

/// One composite root with one leaf per label, added in order.
#[instrument(level = "debug")]
pub fn build_demo_tree(labels: &[String]) -> DomainResult<CompositeNode> {
    let mut root = CompositeNode::named(DEMO_ROOT_NAME);
    for label in labels {
        root.add(Leaf::new(label.as_str())?);
    }
    Ok(root)
}

/// Build the tree described by `tree_file`, or the demo tree from `labels`.
pub fn assemble_tree(
    tree_file: Option<&Path>,
    labels: &[String],
) -> ApplicationResult<Box<dyn Component>> {
    let root: Box<dyn Component> = match tree_file {
        Some(path) => NodeBlueprint::load(path)?.build()?,
        None => Box::new(build_demo_tree(labels)?),
    };
    Ok(root)
}

/// Perform the action once on `root`, writing to `sink`.
#[instrument(level = "debug", skip_all, fields(root = %root.name()))]
pub fn run_action(root: &dyn Component, sink: &mut dyn OutputSink) -> ApplicationResult<()> {
    root.perform_action(sink)?;
    info!("action complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComponentTreeExt, DomainError};
    use crate::infrastructure::BufferSink;
    use crate::application::ApplicationError;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_default_labels_when_running_then_emits_l1_l2_l3() {
        let root = build_demo_tree(&labels(&["L1", "L2", "L3"])).unwrap();
        let component: &dyn Component = &root;
        let mut sink = BufferSink::new();

        run_action(component, &mut sink).unwrap();

        assert_eq!(sink.lines(), ["L1", "L2", "L3"]);
    }

    #[test]
    fn given_no_labels_when_running_then_emits_nothing() {
        let root = build_demo_tree(&[]).unwrap();
        let mut sink = BufferSink::new();

        run_action(&root, &mut sink).unwrap();

        assert!(sink.lines().is_empty());
    }

    #[test]
    fn given_empty_label_when_building_demo_then_invalid_argument() {
        let result = build_demo_tree(&labels(&["ok", ""]));
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn given_missing_tree_file_when_assembling_then_operation_failed() {
        let result = assemble_tree(Some(Path::new("/nonexistent/tree.toml")), &[]);
        assert!(matches!(
            result,
            Err(ApplicationError::OperationFailed { .. })
        ));
    }

    #[test]
    fn given_no_tree_file_when_assembling_then_uses_labels() {
        let root = assemble_tree(None, &labels(&["a", "b"])).unwrap();
        assert_eq!(root.leaf_labels(), ["a", "b"]);
    }
}
