//! In-memory repositories for board content

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::board::{
    ActionItem, ActionItemRepository, Feedback, FeedbackRepository, Thought, ThoughtRepository,
};
use crate::domain::team::TeamUri;
use crate::domain::DomainError;

/// In-memory implementation of `ThoughtRepository`
#[derive(Debug, Default)]
pub struct InMemoryThoughtRepository {
    thoughts: Arc<RwLock<Vec<Thought>>>,
}

impl InMemoryThoughtRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThoughtRepository for InMemoryThoughtRepository {
    async fn save(&self, thought: Thought) -> Result<Thought, DomainError> {
        let mut thoughts = self.thoughts.write().await;
        thoughts.push(thought.clone());
        Ok(thought)
    }

    async fn find_all_by_team_uri_not_on_board(
        &self,
        uri: &TeamUri,
    ) -> Result<Vec<Thought>, DomainError> {
        let thoughts = self.thoughts.read().await;
        let mut result: Vec<Thought> = thoughts
            .iter()
            .filter(|thought| thought.team_uri() == uri && thought.board_id().is_none())
            .cloned()
            .collect();

        result.sort_by_key(|thought| thought.topic());
        Ok(result)
    }
}

/// In-memory implementation of `ActionItemRepository`
#[derive(Debug, Default)]
pub struct InMemoryActionItemRepository {
    items: Arc<RwLock<Vec<ActionItem>>>,
}

impl InMemoryActionItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActionItemRepository for InMemoryActionItemRepository {
    async fn save(&self, item: ActionItem) -> Result<ActionItem, DomainError> {
        let mut items = self.items.write().await;
        items.push(item.clone());
        Ok(item)
    }

    async fn find_all_by_team_uri_and_archived(
        &self,
        uri: &TeamUri,
        archived: bool,
    ) -> Result<Vec<ActionItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| item.team_uri() == uri && item.archived() == archived)
            .cloned()
            .collect())
    }
}

/// In-memory implementation of `FeedbackRepository`
#[derive(Debug, Default)]
pub struct InMemoryFeedbackRepository {
    records: Arc<RwLock<Vec<Feedback>>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn save(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        let mut records = self.records.write().await;
        records.push(feedback.clone());
        Ok(feedback)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let records = self.records.read().await;
        Ok(records.len())
    }
}
