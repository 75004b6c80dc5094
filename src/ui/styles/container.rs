// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::accounts::BadgeVariant;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface wrapping the accounts table.
///
/// Derived from the active theme so it reads in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Neutral top bar.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Placeholder block shown while loading.
pub fn skeleton(theme: &Theme) -> container::Style {
    let text = theme.palette().text;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..text
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Destructive alert panel.
pub fn alert(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Header row of a table.
pub fn table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        text_color: Some(Color {
            a: opacity::MUTED,
            ..palette.background.base.text
        }),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Body row of a table; `striped` rows get a faint tint.
pub fn table_row(striped: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = striped.then(|| {
            Background::Color(Color {
                a: opacity::SUBTLE / 2.0,
                ..palette.background.base.text
            })
        });

        container::Style {
            background,
            ..Default::default()
        }
    }
}

/// Pill-shaped badge.
pub fn badge(variant: BadgeVariant) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let (background, text_color, border_color) = match variant {
            BadgeVariant::Default => (
                Some(Background::Color(palette.primary.strong.color)),
                palette.primary.strong.text,
                palette.primary.strong.color,
            ),
            BadgeVariant::Secondary => (
                Some(Background::Color(palette.secondary.weak.color)),
                palette.secondary.weak.text,
                palette.secondary.weak.color,
            ),
            BadgeVariant::Outline => (
                None,
                palette.background.base.text,
                palette.background.strong.color,
            ),
        };

        container::Style {
            background,
            text_color: Some(text_color),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}
