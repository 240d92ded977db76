//! GUI controller implementation
//!
//! Wires the Slint window callbacks to the [`AppController`] and mirrors the
//! controller state back into window properties after every action.
//!
//! Everything runs on the Slint event loop thread, so the controller is
//! shared through `Rc<RefCell<_>>`.

use crate::MainWindow;
use guessatron::audio::{self, MusicPlayer};
use guessatron::config::AppConfig;
use guessatron::controller::{ActivePanel, AppController, Collaborators, Screen};
use guessatron::dialog::{Dialogs, LogDialogs};
use guessatron::error::{GuessatronError, Result};
use guessatron::game::panel::GUESS_PROMPT;
use guessatron::game::{Difficulty, RandomSecret};
use guessatron::render::{Background, ImageRenderer};
use slint::{
    CloseRequestResponse, ComponentHandle, Image, LogicalSize, ModelRc, Rgba8Pixel,
    SharedPixelBuffer, SharedString, VecModel, Weak,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Modal messages shown as an overlay inside the main window
struct SlintDialogs {
    window: Weak<MainWindow>,
}

impl Dialogs for SlintDialogs {
    fn show_info(&mut self, title: &str, message: &str) {
        let Some(window) = self.window.upgrade() else {
            LogDialogs.show_info(title, message);
            return;
        };
        debug!("Showing dialog {:?}", title);
        window.set_dialog_title(title.into());
        window.set_dialog_message(message.into());
        window.set_dialog_visible(true);
    }
}

/// Shared handle every window callback acts through
#[derive(Clone)]
struct Bridge {
    window: Weak<MainWindow>,
    controller: Rc<RefCell<AppController>>,
    /// Background revision currently displayed
    shown_revision: Rc<Cell<u64>>,
}

impl Bridge {
    /// Run `action` on the controller, apply queued panel commands, then refresh the window
    fn act(&self, action: impl FnOnce(&mut AppController)) {
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            warn!("Ignoring re-entrant UI action");
            return;
        };

        action(&mut controller);
        let handled = controller.dispatch_pending();
        if handled > 0 {
            debug!("Dispatched {} panel command(s)", handled);
        }
        self.sync(&controller);

        if !controller.is_running() {
            info!("Leaving event loop");
            if let Err(e) = slint::quit_event_loop() {
                warn!("Failed to quit event loop: {}", e);
            }
        }
    }

    /// Copy controller state into window properties
    fn sync(&self, controller: &AppController) {
        let Some(window) = self.window.upgrade() else {
            return;
        };

        window.set_screen(screen_index(controller.screen()));

        let revision = controller.background_revision();
        if revision != self.shown_revision.get() {
            self.shown_revision.set(revision);
            window.set_wallpaper_image(
                controller
                    .background()
                    .map(to_image)
                    .unwrap_or_default(),
            );
        }

        match controller.panel() {
            ActivePanel::MainMenu => {}
            ActivePanel::Settings(panel) => {
                let options: Vec<SharedString> = panel
                    .wallpaper_options()
                    .iter()
                    .map(|id| SharedString::from(id.as_str()))
                    .collect();
                window.set_wallpaper_options(ModelRc::new(VecModel::from(options)));
                window.set_selected_wallpaper(
                    panel
                        .selected_index()
                        .and_then(|i| i32::try_from(i).ok())
                        .unwrap_or(-1),
                );
                window.set_brightness(panel.brightness().value());
                window.set_music_on(panel.music_on());
            }
            ActivePanel::Game(panel) => {
                window.set_level_label(panel.level_label().into());
                window.set_game_message(panel.message().into());
                window.set_input_enabled(panel.input_enabled());
                window.set_guess_text(panel.input().into());
            }
        }
    }
}

fn screen_index(screen: Screen) -> i32 {
    match screen {
        Screen::MainMenu => 0,
        Screen::Settings => 1,
        Screen::Game => 2,
    }
}

fn to_image(background: &Background) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        background.image().as_raw(),
        background.width(),
        background.height(),
    );
    Image::from_rgba8(buffer)
}

/// GUI controller owning the main window
pub struct GuiController {
    window: MainWindow,
    bridge: Bridge,
}

impl GuiController {
    /// Create the window, the application controller and its collaborators
    pub fn new(config: AppConfig) -> Result<Self> {
        let music = audio::default_player(&config.assets_dir);
        Self::with_music(config, music)
    }

    /// Same as [`GuiController::new`] with an explicit music player
    pub fn with_music(config: AppConfig, music: Box<dyn MusicPlayer>) -> Result<Self> {
        let window = MainWindow::new().map_err(|e| GuessatronError::GuiError(Box::new(e)))?;

        #[allow(clippy::cast_precision_loss)]
        window.window().set_size(LogicalSize::new(
            config.window_state.width as f32,
            config.window_state.height as f32,
        ));
        window.set_prompt(GUESS_PROMPT.into());

        let collaborators = Collaborators {
            renderer: Box::new(ImageRenderer::new(config.assets_dir.clone())),
            music,
            dialogs: Box::new(SlintDialogs {
                window: window.as_weak(),
            }),
            secrets: Box::new(RandomSecret::from_entropy()),
        };
        let controller = Rc::new(RefCell::new(AppController::new(config, collaborators)));

        let bridge = Bridge {
            window: window.as_weak(),
            controller,
            shown_revision: Rc::new(Cell::new(0)),
        };

        let gui = Self { window, bridge };
        gui.wire_callbacks();
        if let Ok(controller) = gui.bridge.controller.try_borrow() {
            gui.bridge.sync(&controller);
        }
        Ok(gui)
    }

    fn wire_callbacks(&self) {
        let window = &self.window;

        let bridge = self.bridge.clone();
        window.on_show_settings(move || bridge.act(AppController::show_settings));

        let bridge = self.bridge.clone();
        window.on_show_main_menu(move || {
            bridge.act(|c| {
                if let Some(panel) = c.settings_panel_mut() {
                    panel.go_home();
                } else if let Some(panel) = c.game_panel_mut() {
                    panel.go_back();
                } else {
                    c.show_main_menu();
                }
            });
        });

        let bridge = self.bridge.clone();
        window.on_start_game(move |index| {
            let difficulty = usize::try_from(index).ok().and_then(Difficulty::from_index);
            match difficulty {
                Some(difficulty) => bridge.act(|c| c.start_game(difficulty)),
                None => warn!("Unknown difficulty index {}", index),
            }
        });

        let bridge = self.bridge.clone();
        window.on_exit_game(move || {
            bridge.act(|c| {
                if let Some(panel) = c.game_panel_mut() {
                    panel.exit();
                } else {
                    c.exit();
                }
            });
        });

        let bridge = self.bridge.clone();
        window.on_select_wallpaper(move |index| {
            bridge.act(|c| {
                if let (Some(panel), Ok(index)) = (c.settings_panel_mut(), usize::try_from(index)) {
                    panel.select_wallpaper(index);
                }
            });
        });

        let bridge = self.bridge.clone();
        window.on_apply_wallpaper(move || {
            bridge.act(|c| {
                if let Some(panel) = c.settings_panel_mut() {
                    panel.apply_wallpaper();
                }
            });
        });

        let bridge = self.bridge.clone();
        window.on_brightness_changed(move |position| {
            bridge.act(|c| {
                if let Some(panel) = c.settings_panel_mut() {
                    panel.set_brightness(position);
                }
            });
        });

        let bridge = self.bridge.clone();
        window.on_apply_brightness(move || {
            bridge.act(|c| {
                if let Some(panel) = c.settings_panel_mut() {
                    panel.apply_brightness();
                }
            });
        });

        let bridge = self.bridge.clone();
        window.on_music_toggled(move |on| {
            bridge.act(|c| {
                if let Some(panel) = c.settings_panel_mut() {
                    panel.toggle_music(on);
                }
            });
        });

        let bridge = self.bridge.clone();
        window.on_submit_guess(move |text| {
            bridge.act(|c| {
                if let Some(panel) = c.game_panel_mut() {
                    panel.set_input(text.as_str());
                    if let Err(e) = panel.submit_guess() {
                        debug!("Submission rejected: {}", e);
                    }
                }
            });
        });

        let bridge = self.bridge.clone();
        window.window().on_close_requested(move || {
            bridge.act(AppController::exit);
            CloseRequestResponse::HideWindow
        });
    }

    /// Show the window and run the Slint event loop until exit
    pub fn run(self) -> Result<()> {
        self.window
            .run()
            .map_err(|e| GuessatronError::GuiError(Box::new(e)))?;

        // Event loop can also end when the last window is closed by the platform
        let mut controller = self.bridge.controller.borrow_mut();
        if controller.is_running() {
            controller.exit();
        }
        Ok(())
    }
}
