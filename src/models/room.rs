//! Multiplayer room model as received from the online API.

use crate::system::bindable::Bindable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub username: String,
}

// Users are the same user when their ids match, whatever the cached name says.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

/// Wire shape of a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInfo {
    #[serde(default)]
    pub room_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub host: Option<User>,
}

#[derive(Debug)]
pub struct Room {
    pub room_id: Option<u64>,
    pub name: Bindable<String>,
    pub host: Bindable<Option<User>>,
}

impl Room {
    pub fn new(name: impl Into<String>, host: Option<User>) -> Self {
        Self {
            room_id: None,
            name: Bindable::new(name.into()),
            host: Bindable::new(host),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let info: RoomInfo =
            serde_json::from_str(json).map_err(|e| format!("Invalid room payload: {}", e))?;
        Ok(Self::from_info(info))
    }

    pub fn from_info(info: RoomInfo) -> Self {
        Self {
            room_id: info.room_id,
            name: Bindable::new(info.name),
            host: Bindable::new(info.host),
        }
    }

    /// Applies a fresh payload for the same room, notifying bound components.
    pub fn apply(&mut self, info: RoomInfo) {
        if info.room_id.is_some() {
            self.room_id = info.room_id;
        }
        self.name.set(info.name);
        self.host.set(info.host);
    }
}
