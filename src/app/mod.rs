// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the accounts and about screens.
//!
//! The `App` struct wires together localization, configuration, and the
//! accounts data source, and translates messages into side effects such as
//! mounting the accounts view (which issues its request).

pub mod config;
mod message;
pub mod paths;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::data_source::AccountDataSource;
use crate::domain::network::ApiBaseUrl;
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::ui::accounts;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// loaded configuration.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Mounted accounts view; `Some` exactly while the accounts screen is shown.
    accounts: Option<accounts::State>,
    data_source: Result<AccountDataSource, FetchError>,
    api_base: ApiBaseUrl,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("api_base", &self.api_base)
            .field("accounts_mounted", &self.accounts.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and mounts the starting screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "config could not be loaded, using defaults");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let api_base = config::resolve_api_base_from_env(flags.api_url.as_deref(), &config.api);
        let data_source = AccountDataSource::new(&api_base, config.api.timeout());
        if let Err(error) = &data_source {
            tracing::error!(%error, "failed to build HTTP client");
        }

        let screen = match flags.route.as_deref() {
            Some(route) => Screen::from_route(route).unwrap_or_else(|| {
                tracing::warn!(route, "unknown route, showing accounts");
                Screen::Accounts
            }),
            None => Screen::Accounts,
        };

        tracing::info!(
            endpoint = %api_base.accounts_url(),
            locale = %i18n.current_locale(),
            route = screen.route(),
            "starting"
        );

        let mut app = App {
            i18n,
            screen,
            accounts: None,
            data_source,
            api_base,
            theme_mode: config.general.theme_mode,
        };

        let task = if app.screen == Screen::Accounts {
            let (state, task) = update::mount_accounts(&app.data_source);
            app.accounts = Some(state);
            task
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = match self.screen {
            Screen::Accounts => self.i18n.tr("accounts-title"),
            Screen::About => self.i18n.tr("about-title"),
        };
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            accounts: &mut self.accounts,
            data_source: &self.data_source,
        };

        match message {
            Message::Accounts(message) => update::handle_accounts_message(&mut ctx, message),
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::About(message) => update::handle_about_message(&mut ctx, &message),
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            accounts: self.accounts.as_ref(),
            endpoint: self.endpoint(),
        })
    }

    /// URL the accounts view requests.
    fn endpoint(&self) -> &str {
        match &self.data_source {
            Ok(source) => source.url(),
            Err(_) => self.api_base.as_str(),
        }
    }
}
