use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: u8,
    pub contents: String,
    pub writer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub url: String,
}

/// Aggregated feedback count of one kind for a food truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: String,
    pub count: u32,
}

impl Feedback {
    pub fn total(feedbacks: &[Feedback]) -> u32 {
        feedbacks.iter().map(|f| f.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitHistory {
    pub id: i64,
    pub store_id: i64,
    pub store_name: String,
    /// Whether the visitor found the store open.
    pub exists: bool,
}
