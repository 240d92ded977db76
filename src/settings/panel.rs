//! Settings form
//!
//! Each control's current value is the pending value. Wallpaper and
//! brightness reach the controller only through the apply actions, music is
//! forwarded as soon as it changes.

use crate::controller::{AppCommand, CommandSender};
use crate::settings::models::{Brightness, Settings, WallpaperId};
use tracing::{debug, warn};

/// Settings screen state
#[derive(Debug)]
pub struct SettingsPanel {
    wallpaper_options: Vec<WallpaperId>,
    selected_wallpaper: WallpaperId,
    brightness: Brightness,
    music_on: bool,
    commands: CommandSender,
}

impl SettingsPanel {
    /// Create a panel seeded with the current settings
    pub fn new(
        settings: &Settings,
        wallpaper_options: Vec<WallpaperId>,
        commands: CommandSender,
    ) -> Self {
        Self {
            wallpaper_options,
            selected_wallpaper: settings.wallpaper_id.clone(),
            brightness: settings.brightness,
            music_on: settings.music_on,
            commands,
        }
    }

    /// Wallpapers offered in the combo box
    pub fn wallpaper_options(&self) -> &[WallpaperId] {
        &self.wallpaper_options
    }

    /// Pending wallpaper selection
    pub fn selected_wallpaper(&self) -> &WallpaperId {
        &self.selected_wallpaper
    }

    /// Position of the pending selection in the offered list
    pub fn selected_index(&self) -> Option<usize> {
        self.wallpaper_options
            .iter()
            .position(|id| *id == self.selected_wallpaper)
    }

    /// Pending brightness
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Music checkbox state
    pub fn music_on(&self) -> bool {
        self.music_on
    }

    /// Change the pending wallpaper to the option at `index`
    pub fn select_wallpaper(&mut self, index: usize) {
        match self.wallpaper_options.get(index) {
            Some(id) => {
                debug!("Wallpaper selection changed to {}", id);
                self.selected_wallpaper = id.clone();
            }
            None => warn!("Ignoring wallpaper selection {} (out of range)", index),
        }
    }

    /// Move the brightness slider
    pub fn set_brightness(&mut self, position: f32) {
        self.brightness = Brightness::from_slider(position);
    }

    /// Commit the pending wallpaper
    pub fn apply_wallpaper(&self) {
        self.commands
            .send(AppCommand::ApplyWallpaper(self.selected_wallpaper.clone()));
    }

    /// Commit the pending brightness
    pub fn apply_brightness(&self) {
        self.commands.send(AppCommand::ApplyBrightness(self.brightness));
    }

    /// Toggle music; forwarded immediately
    pub fn toggle_music(&mut self, on: bool) {
        self.music_on = on;
        self.commands.send(AppCommand::SetMusic(on));
    }

    /// Reflect the music state the controller actually reached
    pub(crate) fn sync_music(&mut self, on: bool) {
        self.music_on = on;
    }

    /// Return to the main menu
    pub fn go_home(&self) {
        self.commands.send(AppCommand::ShowMainMenu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::command_channel;

    fn settings() -> Settings {
        Settings {
            wallpaper_id: WallpaperId::new("bg2.jpg"),
            brightness: Brightness::new(1.2),
            music_on: false,
        }
    }

    fn options() -> Vec<WallpaperId> {
        ["bg1.jpg", "bg2.jpg", "bg3.jpg"]
            .into_iter()
            .map(WallpaperId::new)
            .collect()
    }

    #[test]
    fn test_panel_seeded_with_current_settings() {
        let (tx, _rx) = command_channel();
        let panel = SettingsPanel::new(&settings(), options(), tx);

        assert_eq!(panel.selected_wallpaper().as_str(), "bg2.jpg");
        assert_eq!(panel.selected_index(), Some(1));
        assert!((panel.brightness().value() - 1.2).abs() < f32::EPSILON);
        assert!(!panel.music_on());
    }

    #[test]
    fn test_selection_is_pending_until_applied() {
        let (tx, rx) = command_channel();
        let mut panel = SettingsPanel::new(&settings(), options(), tx);

        panel.select_wallpaper(2);
        panel.set_brightness(0.7);
        assert!(rx.try_recv().is_err());

        panel.apply_wallpaper();
        panel.apply_brightness();
        assert_eq!(
            rx.try_recv().unwrap(),
            AppCommand::ApplyWallpaper(WallpaperId::new("bg3.jpg"))
        );
        match rx.try_recv().unwrap() {
            AppCommand::ApplyBrightness(b) => assert!((b.value() - 0.7).abs() < 1e-6),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let (tx, _rx) = command_channel();
        let mut panel = SettingsPanel::new(&settings(), options(), tx);

        panel.select_wallpaper(10);
        assert_eq!(panel.selected_wallpaper().as_str(), "bg2.jpg");
    }

    #[test]
    fn test_music_toggle_is_immediate() {
        let (tx, rx) = command_channel();
        let mut panel = SettingsPanel::new(&settings(), options(), tx);

        panel.toggle_music(true);
        assert!(panel.music_on());
        assert_eq!(rx.try_recv().unwrap(), AppCommand::SetMusic(true));
    }

    #[test]
    fn test_go_home() {
        let (tx, rx) = command_channel();
        let panel = SettingsPanel::new(&settings(), options(), tx);

        panel.go_home();
        assert_eq!(rx.try_recv().unwrap(), AppCommand::ShowMainMenu);
    }
}
