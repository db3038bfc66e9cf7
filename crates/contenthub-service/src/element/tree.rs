//! Element tree building and the flattened parent listing.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use contenthub_core::error::AppError;
use contenthub_database::ElementStore;
use contenthub_entity::element::{ContentElement, ParentListEntry};

/// Builds element trees and the indented `/parents` listing.
#[derive(Debug, Clone)]
pub struct TreeService {
    elements: Arc<dyn ElementStore>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(elements: Arc<dyn ElementStore>) -> Self {
        Self { elements }
    }

    /// Every active root followed depth-first by its live descendants.
    pub async fn list_parents(&self) -> Result<Vec<ParentListEntry>, AppError> {
        let roots = self.elements.find_active_roots().await?;
        let root_ids: Vec<i64> = roots.iter().map(|r| r.id).collect();
        let descendants = self.elements.find_descendants(&root_ids).await?;

        debug!(
            roots = roots.len(),
            descendants = descendants.len(),
            "Building parent listing"
        );

        let forest = build_forest(roots, descendants);
        Ok(flatten(&forest))
    }
}

/// Attach `descendants` under `roots` through `elements`, keeping the
/// incoming order among siblings.
pub fn build_forest(
    roots: Vec<ContentElement>,
    descendants: Vec<ContentElement>,
) -> Vec<ContentElement> {
    let mut by_parent: HashMap<i64, Vec<ContentElement>> = HashMap::new();
    for element in descendants {
        by_parent.entry(element.parent_id).or_default().push(element);
    }

    roots
        .into_iter()
        .map(|root| attach_children(root, &mut by_parent))
        .collect()
}

fn attach_children(
    mut node: ContentElement,
    by_parent: &mut HashMap<i64, Vec<ContentElement>>,
) -> ContentElement {
    // Removing the bucket guarantees each node is placed once.
    let children = by_parent.remove(&node.id).unwrap_or_default();
    node.elements = children
        .into_iter()
        .map(|child| attach_children(child, by_parent))
        .collect();
    node
}

/// Flatten a forest depth-first, pre-order.
///
/// Roots are named `title + parent_id`; a node at depth `n` is named
/// `"--" * n + " " + title + parent_id`.
pub fn flatten(forest: &[ContentElement]) -> Vec<ParentListEntry> {
    let mut entries = Vec::new();
    for root in forest {
        entries.push(ParentListEntry::new(
            root.id,
            format!("{}{}", root.title, root.parent_id),
        ));
        push_descendants(&root.elements, 1, &mut entries);
    }
    entries
}

fn push_descendants(children: &[ContentElement], level: usize, out: &mut Vec<ParentListEntry>) {
    for child in children {
        out.push(ParentListEntry::new(
            child.id,
            format!("{} {}{}", "--".repeat(level), child.title, child.parent_id),
        ));
        push_descendants(&child.elements, level + 1, out);
    }
}
