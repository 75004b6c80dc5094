// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen switches own the accounts view lifecycle: entering the accounts
//! screen mounts a fresh view (and request), leaving it unmounts the view.

use super::{Message, Screen};
use crate::data_source::AccountDataSource;
use crate::error::FetchError;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::accounts::{self, Event as AccountsEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub accounts: &'a mut Option<accounts::State>,
    pub data_source: &'a Result<AccountDataSource, FetchError>,
}

/// Mounts a new accounts view and returns the task driving its request.
pub fn mount_accounts(
    data_source: &Result<AccountDataSource, FetchError>,
) -> (accounts::State, Task<Message>) {
    match data_source {
        Ok(source) => {
            let (state, task) = accounts::State::mount(source);
            (state, task.map(Message::Accounts))
        }
        Err(error) => {
            let mut state = accounts::State::new();
            state.abort(error.clone());
            (state, Task::none())
        }
    }
}

/// Handles messages from the accounts view.
pub fn handle_accounts_message(
    ctx: &mut UpdateContext<'_>,
    message: accounts::Message,
) -> Task<Message> {
    let Some(state) = ctx.accounts.as_mut() else {
        tracing::debug!("accounts message arrived with no mounted view");
        return Task::none();
    };

    match state.update(message) {
        AccountsEvent::Loaded { count } => {
            tracing::debug!(count, "accounts view resolved");
        }
        AccountsEvent::Failed(error) => {
            tracing::warn!(
                %error,
                kind = error.i18n_key(),
                transport = error.is_transport(),
                "accounts view failed"
            );
        }
        AccountsEvent::StaleResultDropped | AccountsEvent::None => {}
    }
    Task::none()
}

/// Handles messages from the navbar.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.screen.nav_item()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(item) => handle_screen_switch(ctx, Screen::from(item)),
    }
}

/// Handles messages from the about screen.
pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::BackToAccounts => handle_screen_switch(ctx, Screen::Accounts),
    }
}

/// Switches to `target`, unmounting or mounting the accounts view as needed.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }

    tracing::debug!(from = ctx.screen.route(), to = target.route(), "switching screen");

    if let Some(state) = ctx.accounts.take() {
        state.unmount();
    }
    *ctx.screen = target;

    if target == Screen::Accounts {
        let (state, task) = mount_accounts(ctx.data_source);
        *ctx.accounts = Some(state);
        task
    } else {
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::network::{ApiBaseUrl, RequestTimeout};

    fn source() -> Result<AccountDataSource, FetchError> {
        let base = ApiBaseUrl::parse("http://127.0.0.1:9").expect("valid base");
        AccountDataSource::new(&base, RequestTimeout::new(1))
    }

    #[test]
    fn switching_away_unmounts_accounts() {
        let data_source = source();
        let mut screen = Screen::Accounts;
        let (state, _task) = mount_accounts(&data_source);
        let mut mounted = Some(state);

        let mut ctx = UpdateContext {
            screen: &mut screen,
            accounts: &mut mounted,
            data_source: &data_source,
        };
        let _task = handle_screen_switch(&mut ctx, Screen::About);

        assert_eq!(screen, Screen::About);
        assert!(mounted.is_none());
    }

    #[test]
    fn returning_mounts_a_fresh_view() {
        let data_source = source();
        let mut screen = Screen::Accounts;
        let (state, _task) = mount_accounts(&data_source);
        let first_mount = state.mount_id();
        let mut mounted = Some(state);

        let mut ctx = UpdateContext {
            screen: &mut screen,
            accounts: &mut mounted,
            data_source: &data_source,
        };
        let _ = handle_screen_switch(&mut ctx, Screen::About);
        let _ = handle_screen_switch(&mut ctx, Screen::Accounts);

        let remounted = mounted.as_ref().expect("view mounted");
        assert_ne!(remounted.mount_id(), first_mount);
        assert!(remounted.fetch_state().is_loading());
    }

    #[test]
    fn switching_to_current_screen_keeps_view() {
        let data_source = source();
        let mut screen = Screen::Accounts;
        let (state, _task) = mount_accounts(&data_source);
        let mount = state.mount_id();
        let mut mounted = Some(state);

        let mut ctx = UpdateContext {
            screen: &mut screen,
            accounts: &mut mounted,
            data_source: &data_source,
        };
        let _ = handle_screen_switch(&mut ctx, Screen::Accounts);

        assert_eq!(mounted.as_ref().map(accounts::State::mount_id), Some(mount));
    }

    #[test]
    fn missing_client_settles_on_error() {
        let data_source = Err(FetchError::Transport("no client".into()));
        let (state, _task) = mount_accounts(&data_source);
        assert_eq!(
            state.fetch_state().error(),
            Some(&FetchError::Transport("no client".into()))
        );
    }

    #[test]
    fn late_result_for_unmounted_view_is_ignored() {
        let data_source = source();
        let mut screen = Screen::Accounts;
        let (state, _task) = mount_accounts(&data_source);
        let old_mount = state.mount_id();
        let mut mounted = Some(state);

        let mut ctx = UpdateContext {
            screen: &mut screen,
            accounts: &mut mounted,
            data_source: &data_source,
        };
        let _ = handle_screen_switch(&mut ctx, Screen::About);
        let _ = handle_screen_switch(&mut ctx, Screen::Accounts);
        let _ = handle_accounts_message(
            &mut ctx,
            accounts::Message::AccountsLoaded {
                mount: old_mount,
                result: Ok(Vec::new()),
            },
        );

        assert!(mounted
            .as_ref()
            .is_some_and(|state| state.fetch_state().is_loading()));
    }
}
