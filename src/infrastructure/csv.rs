//! CSV export assembly

use crate::domain::board::{ActionItem, Thought};
use crate::domain::column::{ColumnTitle, Topic};
use crate::domain::team::TeamUri;
use crate::domain::DomainError;

const CSV_HEADER: [&str; 5] = ["Column", "Message", "Likes", "Completed", "Assigned To"];

/// Export of a team's live board: thoughts not yet archived onto a
/// board, unarchived action items, and the team's column titles.
#[derive(Debug, Clone)]
pub struct CsvFile {
    team_uri: TeamUri,
    thoughts: Vec<Thought>,
    action_items: Vec<ActionItem>,
    columns: Vec<ColumnTitle>,
}

impl CsvFile {
    pub fn new(
        team_uri: TeamUri,
        thoughts: Vec<Thought>,
        action_items: Vec<ActionItem>,
        columns: Vec<ColumnTitle>,
    ) -> Self {
        Self {
            team_uri,
            thoughts,
            action_items,
            columns,
        }
    }

    pub fn team_uri(&self) -> &TeamUri {
        &self.team_uri
    }

    /// Suggested download filename
    pub fn file_name(&self) -> String {
        format!("{}-retro.csv", self.team_uri)
    }

    /// Render the export as CSV text. Thought rows carry the team's
    /// column title for their topic; action items land under a literal
    /// "action item" column.
    pub fn to_csv(&self) -> Result<String, DomainError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(CSV_HEADER)
            .map_err(|e| DomainError::internal(format!("Failed to write CSV header: {}", e)))?;

        for thought in &self.thoughts {
            let hearts = thought.hearts().to_string();
            writer
                .write_record([
                    self.column_title_for(thought.topic()),
                    thought.message(),
                    hearts.as_str(),
                    yes_no(thought.discussed()),
                    "",
                ])
                .map_err(|e| DomainError::internal(format!("Failed to write CSV row: {}", e)))?;
        }

        for item in &self.action_items {
            writer
                .write_record([
                    "action item",
                    item.task(),
                    "",
                    yes_no(item.completed()),
                    item.assignee().unwrap_or(""),
                ])
                .map_err(|e| DomainError::internal(format!("Failed to write CSV row: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DomainError::internal(format!("Failed to flush CSV: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| DomainError::internal(format!("CSV output was not UTF-8: {}", e)))
    }

    fn column_title_for(&self, topic: Topic) -> &str {
        self.columns
            .iter()
            .find(|column| column.topic() == topic)
            .map(|column| column.title())
            .unwrap_or_else(|| topic.default_title())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(uri: &TeamUri) -> Vec<ColumnTitle> {
        Topic::ALL
            .iter()
            .map(|&topic| ColumnTitle::new(uri.clone(), topic, topic.default_title()))
            .collect()
    }

    #[test]
    fn test_header_only_for_empty_board() {
        let uri = TeamUri::parse("my-team");
        let file = CsvFile::new(uri.clone(), vec![], vec![], columns(&uri));

        let csv = file.to_csv().unwrap();
        assert_eq!(csv.trim_end(), "Column,Message,Likes,Completed,Assigned To");
    }

    #[test]
    fn test_thought_rows_use_column_titles() {
        let uri = TeamUri::parse("my-team");
        let thoughts = vec![
            Thought::new(uri.clone(), Topic::Unhappy, "builds are slow").with_hearts(3),
        ];
        let file = CsvFile::new(uri.clone(), thoughts, vec![], columns(&uri));

        let csv = file.to_csv().unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], "Sad,builds are slow,3,no,");
    }

    #[test]
    fn test_renamed_column_title_flows_into_export() {
        let uri = TeamUri::parse("my-team");
        let columns = vec![ColumnTitle::new(uri.clone(), Topic::Happy, "Wins")];
        let thoughts = vec![Thought::new(uri.clone(), Topic::Happy, "shipped it")];
        let file = CsvFile::new(uri, thoughts, vec![], columns);

        let csv = file.to_csv().unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("Wins,"));
    }

    #[test]
    fn test_action_item_rows() {
        let uri = TeamUri::parse("my-team");
        let items = vec![
            ActionItem::new(uri.clone(), "fix the pipeline")
                .with_assignee("jo")
                .with_completed(true),
        ];
        let file = CsvFile::new(uri.clone(), vec![], items, columns(&uri));

        let csv = file.to_csv().unwrap();
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "action item,fix the pipeline,,yes,jo"
        );
    }

    #[test]
    fn test_file_name() {
        let uri = TeamUri::parse("my-team");
        let file = CsvFile::new(uri.clone(), vec![], vec![], columns(&uri));
        assert_eq!(file.file_name(), "my-team-retro.csv");
    }
}
