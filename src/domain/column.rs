//! Feedback columns
//!
//! Every team gets exactly three columns, one per topic, created at
//! registration. Titles can be renamed later but the topics are fixed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::team::TeamUri;
use crate::domain::DomainError;

/// The fixed set of feedback topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Happy,
    Confused,
    Unhappy,
}

impl Topic {
    /// All topics, in the order their columns are created
    pub const ALL: [Topic; 3] = [Topic::Happy, Topic::Confused, Topic::Unhappy];

    /// Default column title for each topic
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Confused => "Confused",
            Self::Unhappy => "Sad",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Happy => write!(f, "happy"),
            Self::Confused => write!(f, "confused"),
            Self::Unhappy => write!(f, "unhappy"),
        }
    }
}

/// Per-team configuration of one feedback category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnTitle {
    team_uri: TeamUri,
    topic: Topic,
    title: String,
}

impl ColumnTitle {
    pub fn new(team_uri: TeamUri, topic: Topic, title: impl Into<String>) -> Self {
        Self {
            team_uri,
            topic,
            title: title.into(),
        }
    }

    pub fn team_uri(&self) -> &TeamUri {
        &self.team_uri
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Repository for per-team column titles
#[async_trait]
pub trait ColumnTitleRepository: Send + Sync + std::fmt::Debug {
    /// Persist one column title record
    async fn save(&self, column: ColumnTitle) -> Result<ColumnTitle, DomainError>;

    /// All column titles belonging to a team, in topic order
    async fn find_all_by_team_uri(&self, uri: &TeamUri) -> Result<Vec<ColumnTitle>, DomainError>;
}
