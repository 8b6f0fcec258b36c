// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out, top to bottom: header, lamp, controls, info cards, footer.

use super::Message;
use crate::application::session::Snapshot;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::menorah::Menorah;
use crate::ui::{controls, info_panel, styles};
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Scrollable, Text};
use iced::{Color, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: &'a Snapshot,
    pub spinner_rotation: f32,
    pub insight_enabled: bool,
}

fn header<'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("app-title"))
        .size(typography::DISPLAY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GOLD_500),
        });
    let subtitle = Text::new(i18n.tr("app-subtitle").to_uppercase())
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(Color {
                a: 0.6,
                ..palette::SILVER
            }),
        });

    Column::new()
        .push(title)
        .push(subtitle)
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .into()
}

fn lamp<'a>(i18n: &I18n, snapshot: &Snapshot) -> Element<'a, Message> {
    let caption = Text::new(i18n.tr("shamash"))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GOLD_500),
        });

    Column::new()
        .push(Menorah::new(snapshot.slots).into_element())
        .push(caption)
        .align_x(Horizontal::Center)
        .into()
}

fn footer<'a>(i18n: &I18n) -> Element<'a, Message> {
    Text::new(i18n.tr("footer"))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(Color {
                a: 0.2,
                ..palette::WHITE
            }),
        })
        .into()
}

/// Renders the whole window.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let controls = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        snapshot: ctx.snapshot,
        spinner_rotation: ctx.spinner_rotation,
        insight_enabled: ctx.insight_enabled,
    })
    .map(Message::Controls);

    let content = Column::new()
        .push(header(ctx.i18n))
        .push(lamp(ctx.i18n, ctx.snapshot))
        .push(controls)
        .push(info_panel::view(ctx.i18n, ctx.snapshot))
        .push(footer(ctx.i18n))
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center);

    Container::new(Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::root)
    .into()
}
