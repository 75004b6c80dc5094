// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::accounts;
use crate::ui::navbar;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Accounts(accounts::Message),
    Navbar(navbar::Message),
    About(about::Message),
    SwitchScreen(Screen),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LEDGER_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional accounts service base URL.
    /// Takes precedence over `LEDGER_LENS_API_URL` and the config file.
    pub api_url: Option<String>,
    /// Optional initial route (`accounts` or `about`).
    pub route: Option<String>,
}
