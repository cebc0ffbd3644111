//! Board content entities: thoughts, action items, and feedback
//!
//! These carry only the shape the team lifecycle touches - CSV export
//! reads thoughts and action items, and the admin metrics endpoint
//! counts feedback records.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::column::Topic;
use crate::domain::team::TeamUri;
use crate::domain::DomainError;

/// A feedback entry submitted to one of a team's columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    team_uri: TeamUri,
    topic: Topic,
    message: String,
    hearts: u32,
    discussed: bool,
    /// Set once the thought has been archived onto a board
    board_id: Option<u64>,
}

impl Thought {
    pub fn new(team_uri: TeamUri, topic: Topic, message: impl Into<String>) -> Self {
        Self {
            team_uri,
            topic,
            message: message.into(),
            hearts: 0,
            discussed: false,
            board_id: None,
        }
    }

    pub fn with_hearts(mut self, hearts: u32) -> Self {
        self.hearts = hearts;
        self
    }

    pub fn with_discussed(mut self, discussed: bool) -> Self {
        self.discussed = discussed;
        self
    }

    pub fn with_board_id(mut self, board_id: u64) -> Self {
        self.board_id = Some(board_id);
        self
    }

    pub fn team_uri(&self) -> &TeamUri {
        &self.team_uri
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hearts(&self) -> u32 {
        self.hearts
    }

    pub fn discussed(&self) -> bool {
        self.discussed
    }

    pub fn board_id(&self) -> Option<u64> {
        self.board_id
    }
}

/// A follow-up task derived from a thought
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    team_uri: TeamUri,
    task: String,
    completed: bool,
    assignee: Option<String>,
    archived: bool,
}

impl ActionItem {
    pub fn new(team_uri: TeamUri, task: impl Into<String>) -> Self {
        Self {
            team_uri,
            task: task.into(),
            completed: false,
            assignee: None,
            archived: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn team_uri(&self) -> &TeamUri {
        &self.team_uri
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    pub fn archived(&self) -> bool {
        self.archived
    }
}

/// App feedback left by a team member; only counted by the metrics
/// endpoint in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    team_uri: Option<TeamUri>,
    stars: u8,
    comment: String,
}

impl Feedback {
    pub fn new(team_uri: Option<TeamUri>, stars: u8, comment: impl Into<String>) -> Self {
        Self {
            team_uri,
            stars,
            comment: comment.into(),
        }
    }

    pub fn team_uri(&self) -> Option<&TeamUri> {
        self.team_uri.as_ref()
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Repository for thoughts
#[async_trait]
pub trait ThoughtRepository: Send + Sync + std::fmt::Debug {
    /// Persist one thought
    async fn save(&self, thought: Thought) -> Result<Thought, DomainError>;

    /// Thoughts for a team that have not been archived onto a board,
    /// ordered by column topic.
    async fn find_all_by_team_uri_not_on_board(
        &self,
        uri: &TeamUri,
    ) -> Result<Vec<Thought>, DomainError>;
}

/// Repository for action items
#[async_trait]
pub trait ActionItemRepository: Send + Sync + std::fmt::Debug {
    /// Persist one action item
    async fn save(&self, item: ActionItem) -> Result<ActionItem, DomainError>;

    /// Action items for a team filtered by archived flag
    async fn find_all_by_team_uri_and_archived(
        &self,
        uri: &TeamUri,
        archived: bool,
    ) -> Result<Vec<ActionItem>, DomainError>;
}

/// Repository for feedback records
#[async_trait]
pub trait FeedbackRepository: Send + Sync + std::fmt::Debug {
    /// Persist one feedback record
    async fn save(&self, feedback: Feedback) -> Result<Feedback, DomainError>;

    /// Total number of feedback records
    async fn count(&self) -> Result<usize, DomainError>;
}
