//! Application controller implementation
//!
//! This module implements the root controller that owns the settings,
//! swaps panels on navigation and talks to the external collaborators.

use crate::audio::MusicPlayer;
use crate::config::AppConfig;
use crate::controller::command::{AppCommand, CommandSender, command_channel};
use crate::dialog::{self, Dialogs};
use crate::game::{Difficulty, GamePanel, GameResult, GameState, SecretSource};
use crate::render::{Background, BackgroundRenderer};
use crate::settings::{Brightness, Settings, SettingsPanel, WallpaperId};
use std::sync::mpsc;
use tracing::{debug, info, warn};

/// Which screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title and difficulty buttons
    MainMenu,
    /// Wallpaper, brightness and music form
    Settings,
    /// Guessing
    Game,
}

/// The panel currently shown, owning its state
#[derive(Debug)]
pub enum ActivePanel {
    /// Main menu has no state of its own
    MainMenu,
    /// Settings form
    Settings(SettingsPanel),
    /// One play-through
    Game(GamePanel),
}

/// External services the controller calls into
pub struct Collaborators {
    /// Background rendering
    pub renderer: Box<dyn BackgroundRenderer>,
    /// Background music
    pub music: Box<dyn MusicPlayer>,
    /// Modal messages
    pub dialogs: Box<dyn Dialogs>,
    /// Secret number generation
    pub secrets: Box<dyn SecretSource>,
}

/// Root application controller
pub struct AppController {
    /// Launch configuration
    config: AppConfig,
    /// Global settings, process lifetime only
    settings: Settings,
    /// Visible panel
    panel: ActivePanel,
    /// Latest rendered background, `None` when rendering failed
    background: Option<Background>,
    /// Bumped on every render attempt so the GUI can skip unchanged images
    background_revision: u64,
    /// Cleared by `exit()`
    running: bool,
    renderer: Box<dyn BackgroundRenderer>,
    music: Box<dyn MusicPlayer>,
    dialogs: Box<dyn Dialogs>,
    secrets: Box<dyn SecretSource>,
    /// Handed to every panel
    command_sender: CommandSender,
    /// Drained by `dispatch_pending()`
    command_receiver: mpsc::Receiver<AppCommand>,
}

impl AppController {
    /// Create the controller and show the main menu
    pub fn new(config: AppConfig, collaborators: Collaborators) -> Self {
        let settings = config.initial_settings();
        let (command_sender, command_receiver) = command_channel();
        info!(
            "Starting with wallpaper {} at brightness {:.1}",
            settings.wallpaper_id,
            settings.brightness.value()
        );

        let mut controller = Self {
            config,
            settings,
            panel: ActivePanel::MainMenu,
            background: None,
            background_revision: 0,
            running: true,
            renderer: collaborators.renderer,
            music: collaborators.music,
            dialogs: collaborators.dialogs,
            secrets: collaborators.secrets,
            command_sender,
            command_receiver,
        };
        controller.show_main_menu();
        controller
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Launch configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Visible screen
    pub fn screen(&self) -> Screen {
        match self.panel {
            ActivePanel::MainMenu => Screen::MainMenu,
            ActivePanel::Settings(_) => Screen::Settings,
            ActivePanel::Game(_) => Screen::Game,
        }
    }

    /// Visible panel
    pub fn panel(&self) -> &ActivePanel {
        &self.panel
    }

    /// Settings panel, when the settings screen is visible
    pub fn settings_panel_mut(&mut self) -> Option<&mut SettingsPanel> {
        match &mut self.panel {
            ActivePanel::Settings(panel) => Some(panel),
            _ => None,
        }
    }

    /// Game panel, when a game is visible
    pub fn game_panel_mut(&mut self) -> Option<&mut GamePanel> {
        match &mut self.panel {
            ActivePanel::Game(panel) => Some(panel),
            _ => None,
        }
    }

    /// Latest rendered background
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Counter bumped on every background render attempt
    pub fn background_revision(&self) -> u64 {
        self.background_revision
    }

    /// False once `exit()` was called
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Discard any active panel and show the main menu
    pub fn show_main_menu(&mut self) {
        info!("Showing main menu");
        self.panel = ActivePanel::MainMenu;
        self.refresh_background();
    }

    /// Show the settings screen seeded with the current settings
    pub fn show_settings(&mut self) {
        info!("Showing settings");
        let panel = SettingsPanel::new(
            &self.settings,
            self.config.wallpaper_ids(),
            self.command_sender.clone(),
        );
        self.panel = ActivePanel::Settings(panel);
        self.refresh_background();
    }

    /// Start a new game at `difficulty`
    pub fn start_game(&mut self, difficulty: Difficulty) {
        let state = GameState::new(difficulty, self.secrets.as_mut());
        info!(
            "Starting {} game with {} attempts",
            difficulty,
            state.attempts_left()
        );
        self.panel = ActivePanel::Game(GamePanel::new(state, self.command_sender.clone()));
        self.refresh_background();
    }

    /// Change the wallpaper and re-render the background
    pub fn apply_wallpaper(&mut self, wallpaper: WallpaperId) {
        info!("Applying wallpaper {}", wallpaper);
        self.settings.wallpaper_id = wallpaper;
        self.refresh_background();
    }

    /// Change the brightness (clamped to 0.5-1.5) and re-render the background
    pub fn apply_brightness(&mut self, factor: f32) {
        let brightness = Brightness::new(factor);
        info!("Applying brightness {:.1}", brightness.value());
        self.settings.brightness = brightness;
        self.refresh_background();
    }

    /// Start or stop background music
    ///
    /// A player failure leaves music off.
    pub fn set_music(&mut self, on: bool) {
        if on == self.settings.music_on {
            debug!("Music already {}", if on { "on" } else { "off" });
            return;
        }

        if on {
            match self.music.play_loop(&self.config.music_track) {
                Ok(()) => {
                    info!("Music on: {}", self.config.music_track);
                    self.settings.music_on = true;
                }
                Err(e) => {
                    warn!("Failed to start music: {}", e);
                    self.settings.music_on = false;
                }
            }
        } else {
            self.music.stop();
            info!("Music off");
            self.settings.music_on = false;
        }

        let music_on = self.settings.music_on;
        if let Some(panel) = self.settings_panel_mut() {
            panel.sync_music(music_on);
        }
    }

    /// Stop music and mark the application as finished
    pub fn exit(&mut self) {
        info!("Exit requested");
        if self.settings.music_on {
            self.music.stop();
            self.settings.music_on = false;
        }
        self.running = false;
    }

    /// Apply every command panels queued since the last call
    ///
    /// Returns the number of commands handled.
    pub fn dispatch_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(command) = self.command_receiver.try_recv() {
            handled += 1;
            if !self.running {
                debug!("Ignoring {:?} after exit", command);
                continue;
            }
            self.handle_command(command);
        }
        handled
    }

    fn handle_command(&mut self, command: AppCommand) {
        debug!("Handling command {:?}", command);
        match command {
            AppCommand::ShowMainMenu => self.show_main_menu(),
            AppCommand::ShowSettings => self.show_settings(),
            AppCommand::StartGame(difficulty) => self.start_game(difficulty),
            AppCommand::ApplyWallpaper(wallpaper) => self.apply_wallpaper(wallpaper),
            AppCommand::ApplyBrightness(brightness) => self.apply_brightness(brightness.value()),
            AppCommand::SetMusic(on) => self.set_music(on),
            AppCommand::GameFinished(result) => self.finish_game(result),
            AppCommand::Exit => self.exit(),
        }
    }

    /// Announce a finished game; a win returns to the main menu
    fn finish_game(&mut self, result: GameResult) {
        match result {
            GameResult::Won => {
                self.dialogs
                    .show_info(dialog::WIN_TITLE, dialog::WIN_MESSAGE);
                self.show_main_menu();
            }
            GameResult::Lost { secret_number } => {
                self.dialogs
                    .show_info(dialog::LOSS_TITLE, &dialog::loss_message(secret_number));
            }
        }
    }

    /// Ask the renderer for the background matching the current settings
    fn refresh_background(&mut self) {
        self.background_revision += 1;
        match self
            .renderer
            .render_background(&self.settings.wallpaper_id, self.settings.brightness)
        {
            Ok(background) => self.background = Some(background),
            Err(e) => {
                warn!(
                    "Failed to render wallpaper {}: {}",
                    self.settings.wallpaper_id, e
                );
                self.background = None;
            }
        }
    }
}
