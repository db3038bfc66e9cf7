//! Folds an element's comma-joined tags into the weighted tag index.

use std::sync::Arc;

use tracing::debug;

use contenthub_core::error::AppError;
use contenthub_database::TagStore;
use contenthub_entity::tag::Tag;

/// Split a tag string on `,`.
///
/// Names are taken verbatim: no trimming, and an empty string yields one
/// empty name.
pub fn split_tag_names(csv: &str) -> Vec<&str> {
    csv.split(',').collect()
}

/// Applies element tags to the tag index.
#[derive(Debug, Clone)]
pub struct TagAccumulator {
    tags: Arc<dyn TagStore>,
}

impl TagAccumulator {
    /// Creates a new accumulator.
    pub fn new(tags: Arc<dyn TagStore>) -> Self {
        Self { tags }
    }

    /// Create each named tag with weight 1 or bump its weight by 1.
    ///
    /// A name repeated in `csv` is bumped once per occurrence. Each bump is
    /// atomic on its own; the batch as a whole is not.
    pub async fn apply(&self, csv: &str) -> Result<Vec<Tag>, AppError> {
        let names = split_tag_names(csv);
        let mut touched = Vec::with_capacity(names.len());
        for name in names {
            let tag = self.tags.increment(name).await?;
            debug!(tag = %tag.name, weight = tag.weight, "Tag weight applied");
            touched.push(tag);
        }
        Ok(touched)
    }
}
