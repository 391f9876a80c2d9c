use crate::models::room::{Room, User};
use crate::system::bindable::Subscription;
use egui::{Color32, RichText};

/// Header panel of a multiplayer room, with an "Edit" button for the host.
///
/// Everything the panel needs is handed over at construction: the room to
/// bind to and the user currently logged in.
pub struct MatchRoomPanel {
    local_user: User,
    allow_edit: bool,
    room_name: String,
    host_name: Option<String>,
    edit_visible: bool,
    name_changes: Subscription<String>,
    host_changes: Subscription<Option<User>>,
    /// Invoked when the Edit button is pressed.
    pub on_edit: Option<Box<dyn FnMut()>>,
}

impl MatchRoomPanel {
    pub fn new(room: &mut Room, local_user: User, allow_edit: bool) -> Self {
        let host = room.host.value().clone();
        let mut panel = Self {
            local_user,
            allow_edit,
            room_name: room.name.value().clone(),
            host_name: None,
            edit_visible: false,
            name_changes: room.name.subscribe(),
            host_changes: room.host.subscribe(),
            on_edit: None,
        };
        panel.apply_host(host.as_ref());
        panel
    }

    fn apply_host(&mut self, host: Option<&User>) {
        self.host_name = host.map(|u| u.username.clone());
        self.edit_visible = self.allow_edit && host == Some(&self.local_user);
    }

    /// Pulls pending room changes into the panel.
    pub fn update(&mut self) {
        if let Some(change) = self.name_changes.latest() {
            self.room_name = change.new;
        }
        if let Some(change) = self.host_changes.latest() {
            self.apply_host(change.new.as_ref());
            log::debug!(
                "ROOM: host changed, edit button {}",
                if self.edit_visible { "shown" } else { "hidden" }
            );
        }
    }

    /// Whether the panel has an Edit button at all.
    pub fn has_edit_button(&self) -> bool {
        self.allow_edit
    }

    pub fn edit_button_visible(&self) -> bool {
        self.edit_visible
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    /// Presses the Edit button. Does nothing while it is hidden.
    pub fn press_edit(&mut self) -> bool {
        if !self.edit_visible {
            return false;
        }
        if let Some(on_edit) = self.on_edit.as_mut() {
            on_edit();
        }
        true
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.update();

        egui::Frame::default()
            .inner_margin(8.0)
            .fill(Color32::from_rgba_unmultiplied(40, 30, 55, 255))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&self.room_name).heading());
                        if let Some(host) = &self.host_name {
                            ui.label(RichText::new(format!("hosted by {}", host)).weak());
                        }
                    });
                    if self.allow_edit {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let button = egui::Button::new("Edit")
                                .fill(Color32::from_rgb(110, 60, 170));
                            let response = ui.add_visible(
                                self.edit_visible,
                                button.min_size(egui::vec2(100.0, 0.0)),
                            );
                            if response.clicked() {
                                self.press_edit();
                            }
                        });
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn user(id: u64) -> User {
        User {
            id,
            username: format!("user{}", id),
        }
    }

    #[test]
    fn test_initial_visibility_from_current_host() {
        let mut room = Room::new("room", Some(user(1)));
        assert!(MatchRoomPanel::new(&mut room, user(1), true).edit_button_visible());
        assert!(!MatchRoomPanel::new(&mut room, user(2), true).edit_button_visible());
    }

    #[test]
    fn test_follows_host_changes() {
        let mut room = Room::new("room", Some(user(2)));
        let mut panel = MatchRoomPanel::new(&mut room, user(1), true);
        assert!(!panel.edit_button_visible());

        room.host.set(Some(user(1)));
        panel.update();
        assert!(panel.edit_button_visible());

        room.host.set(None);
        panel.update();
        assert!(!panel.edit_button_visible());
    }

    #[test]
    fn test_no_edit_button_when_not_allowed() {
        let mut room = Room::new("room", Some(user(1)));
        let mut panel = MatchRoomPanel::new(&mut room, user(1), false);
        assert!(!panel.has_edit_button());
        assert!(!panel.edit_button_visible());
        assert!(!panel.press_edit());
    }

    #[test]
    fn test_press_edit_invokes_callback_only_for_host() {
        let mut room = Room::new("room", Some(user(2)));
        let mut panel = MatchRoomPanel::new(&mut room, user(1), true);
        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        panel.on_edit = Some(Box::new(move || counter.set(counter.get() + 1)));

        assert!(!panel.press_edit());
        room.host.set(Some(user(1)));
        panel.update();
        assert!(panel.press_edit());

        assert_eq!(presses.get(), 1);
    }

    #[test]
    fn test_dropping_panel_unsubscribes() {
        let mut room = Room::new("room", None);
        let panel = MatchRoomPanel::new(&mut room, user(1), true);
        assert_eq!(room.host.subscriber_count(), 1);

        drop(panel);
        room.host.set(Some(user(3)));
        assert_eq!(room.host.subscriber_count(), 0);
    }

    #[test]
    fn test_room_rename_is_picked_up() {
        let mut room = Room::new("old", None);
        let mut panel = MatchRoomPanel::new(&mut room, user(1), true);
        room.name.set("new".to_string());
        panel.update();
        assert_eq!(panel.room_name(), "new");
    }
}
