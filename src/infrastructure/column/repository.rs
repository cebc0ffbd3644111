//! In-memory column title repository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::column::{ColumnTitle, ColumnTitleRepository};
use crate::domain::team::TeamUri;
use crate::domain::DomainError;

/// In-memory implementation of `ColumnTitleRepository`
#[derive(Debug, Default)]
pub struct InMemoryColumnTitleRepository {
    columns: Arc<RwLock<Vec<ColumnTitle>>>,
}

impl InMemoryColumnTitleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ColumnTitleRepository for InMemoryColumnTitleRepository {
    async fn save(&self, column: ColumnTitle) -> Result<ColumnTitle, DomainError> {
        let mut columns = self.columns.write().await;
        columns.push(column.clone());
        Ok(column)
    }

    async fn find_all_by_team_uri(&self, uri: &TeamUri) -> Result<Vec<ColumnTitle>, DomainError> {
        let columns = self.columns.read().await;
        let mut result: Vec<ColumnTitle> = columns
            .iter()
            .filter(|column| column.team_uri() == uri)
            .cloned()
            .collect();

        result.sort_by_key(|column| column.topic());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::Topic;

    #[tokio::test]
    async fn test_save_and_find_by_team() {
        let repo = InMemoryColumnTitleRepository::new();
        let uri = TeamUri::parse("my-team");
        let other = TeamUri::parse("other-team");

        repo.save(ColumnTitle::new(uri.clone(), Topic::Unhappy, "Sad"))
            .await
            .unwrap();
        repo.save(ColumnTitle::new(uri.clone(), Topic::Happy, "Happy"))
            .await
            .unwrap();
        repo.save(ColumnTitle::new(other, Topic::Happy, "Happy"))
            .await
            .unwrap();

        let columns = repo.find_all_by_team_uri(&uri).await.unwrap();
        assert_eq!(columns.len(), 2);
        // Returned in topic order regardless of insertion order
        assert_eq!(columns[0].topic(), Topic::Happy);
        assert_eq!(columns[1].topic(), Topic::Unhappy);
    }
}
