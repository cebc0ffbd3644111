//! Default column creation for new teams

use std::sync::Arc;

use tracing::debug;

use crate::domain::column::{ColumnTitle, ColumnTitleRepository, Topic};
use crate::domain::team::TeamUri;
use crate::domain::DomainError;

/// Creates the three default feedback columns for a newly registered
/// team, one per topic, in fixed order.
///
/// The three writes are not transactional; the first failure aborts the
/// operation and no recovery of earlier writes is attempted.
#[derive(Debug, Clone)]
pub struct ColumnInitializer {
    columns: Arc<dyn ColumnTitleRepository>,
}

impl ColumnInitializer {
    pub fn new(columns: Arc<dyn ColumnTitleRepository>) -> Self {
        Self { columns }
    }

    /// Write the default columns for `team_uri`
    pub async fn create_default_columns(&self, team_uri: &TeamUri) -> Result<(), DomainError> {
        debug!(team_uri = %team_uri, "Creating default columns");

        for topic in Topic::ALL {
            let column = ColumnTitle::new(team_uri.clone(), topic, topic.default_title());
            self.columns.save(column).await?;
        }

        Ok(())
    }
}
