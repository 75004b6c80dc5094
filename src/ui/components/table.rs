// SPDX-License-Identifier: MPL-2.0
//! Tabular layout: header row, body rows, and full-span rows.
//!
//! Columns are sized with `FillPortion`, so every row sharing the same
//! `widths` slice lines up.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};

fn cell<'a, Message: 'a>(content: Element<'a, Message>, portion: u16) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::FillPortion(portion))
        .padding([0.0, spacing::XS])
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Header labels laid out on `widths`.
pub fn header_row<'a, Message: 'a>(labels: Vec<String>, widths: &[u16]) -> Element<'a, Message> {
    let row = labels
        .into_iter()
        .zip(widths.iter().copied())
        .fold(Row::new().width(Length::Fill), |row, (label, portion)| {
            let text = Text::new(label).size(typography::BODY).font(Font {
                weight: Weight::Medium,
                ..Font::default()
            });
            row.push(cell(text.into(), portion))
        });

    Container::new(row.align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(sizing::TABLE_ROW_HEIGHT)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::table_header)
        .into()
}

/// One body row; odd indices are striped.
pub fn body_row<'a, Message: 'a>(
    cells: Vec<Element<'a, Message>>,
    widths: &[u16],
    index: usize,
) -> Element<'a, Message> {
    let row = cells
        .into_iter()
        .zip(widths.iter().copied())
        .fold(Row::new().width(Length::Fill), |row, (content, portion)| {
            row.push(cell(content, portion))
        });

    Container::new(row.align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(Length::Shrink)
        .padding([spacing::SM, 0.0])
        .style(styles::container::table_row(index % 2 == 1))
        .into()
}

/// A row whose single cell spans every column.
pub fn spanning_row<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XS])
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Header on top, scrollable body below.
pub fn table<'a, Message: 'a>(
    header: Element<'a, Message>,
    rows: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    let body = rows
        .into_iter()
        .fold(Column::new().width(Length::Fill), |column, row| column.push(row));

    Column::new()
        .width(Length::Fill)
        .push(header)
        .push(scrollable(body).height(Length::Fill))
        .into()
}
