use serde::{Deserialize, Serialize};

use super::store::StoreVariant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Medal {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub medal: Medal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkFolder {
    pub id: String,
    pub name: String,
    pub introduction: String,
    pub bookmarks: Vec<StoreVariant>,
}
