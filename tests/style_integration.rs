// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use ledger_lens::ui::accounts::BadgeVariant;
    use ledger_lens::ui::design_tokens::{palette, sizing, spacing};
    use ledger_lens::ui::styles::{button, container, text};
    use ledger_lens::ui::theming::ThemeMode;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::selected(&theme, iced::widget::button::Status::Active);
            let _ = button::nav_item(&theme, iced::widget::button::Status::Hovered);
            let _ = container::card(&theme);
            let _ = container::toolbar(&theme);
            let _ = container::skeleton(&theme);
            let _ = container::alert(&theme);
            let _ = container::table_header(&theme);
            let _ = container::table_row(true)(&theme);
            for variant in [
                BadgeVariant::Default,
                BadgeVariant::Secondary,
                BadgeVariant::Outline,
            ] {
                let _ = container::badge(variant)(&theme);
            }
            let _ = text::muted(&theme);
        }
    }

    #[test]
    fn balance_colors_come_from_semantic_tokens() {
        let theme = Theme::Light;
        assert_eq!(text::positive(&theme).color, Some(palette::SUCCESS_600));
        assert_eq!(text::negative(&theme).color, Some(palette::ERROR_500));
    }

    #[test]
    fn skeleton_blocks_match_row_height() {
        assert_eq!(sizing::SKELETON_HEIGHT, sizing::TABLE_ROW_HEIGHT);
        assert!(spacing::XS < spacing::LG);
    }

    #[test]
    fn explicit_theme_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
