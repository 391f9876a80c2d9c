pub mod match_room;

pub use match_room::MatchRoomPanel;
