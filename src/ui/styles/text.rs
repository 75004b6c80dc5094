// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::text;
use iced::{Color, Theme};

/// Credit amounts.
pub fn positive(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::SUCCESS_600),
    }
}

/// Debit amounts and error titles.
pub fn negative(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Secondary text derived from the theme's text color.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::MUTED,
            ..theme.palette().text
        }),
    }
}

/// Data that could not be interpreted.
pub fn invalid(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::WARNING_500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_styles_differ() {
        assert_ne!(positive(&Theme::Light).color, negative(&Theme::Light).color);
    }

    #[test]
    fn muted_is_translucent() {
        let color = muted(&Theme::Dark).color.expect("muted sets a color");
        assert!(color.a < 1.0);
    }
}
