// SPDX-License-Identifier: MPL-2.0
//! Control panel: language toggle, night selector and the three actions.
//!
//! Rows are mirrored for right-to-left languages.

use crate::application::session::Snapshot;
use crate::domain::language::Language;
use crate::domain::menorah::Day;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{Element, Length, Theme};

/// Commands the panel can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(Language),
    DaySelected(Day),
    Light,
    Reset,
    RequestInsight,
}

/// Context required to render the controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: &'a Snapshot,
    pub spinner_rotation: f32,
    pub insight_enabled: bool,
}

/// Builds a row, reversing child order when `rtl` is set.
fn directional_row<'a>(children: Vec<Element<'a, Message>>, rtl: bool) -> Row<'a, Message> {
    let mut children = children;
    if rtl {
        children.reverse();
    }
    children
        .into_iter()
        .fold(Row::new(), |row, child| row.push(child))
        .align_y(Vertical::Center)
}

fn language_toggle<'a>(current: Language, rtl: bool) -> Element<'a, Message> {
    let buttons = Language::ALL
        .into_iter()
        .map(|language| {
            button(Text::new(language.code()).size(typography::BODY))
                .on_press(Message::LanguageSelected(language))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::toggle(language == current))
                .into()
        })
        .collect();

    Container::new(directional_row(buttons, rtl).spacing(spacing::XS))
        .padding(spacing::XXS)
        .style(styles::container::inset)
        .into()
}

fn night_selector<'a>(i18n: &I18n, current: Day, rtl: bool) -> Element<'a, Message> {
    let label = Text::new(format!("{}:", i18n.tr("select-night")))
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GOLD_500),
        });

    let mut children: Vec<Element<'a, Message>> = vec![label.into()];
    children.extend(Day::ALL.into_iter().map(|day| {
        button(
            Container::new(Text::new(day.to_string()).size(typography::BODY))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press(Message::DaySelected(day))
        .width(Length::Fixed(sizing::NIGHT_BUTTON))
        .height(Length::Fixed(sizing::NIGHT_BUTTON))
        .padding([spacing::XS, 0.0])
        .style(styles::button::toggle(day == current))
        .into()
    }));

    directional_row(children, rtl).spacing(spacing::XS).into()
}

fn action_row<'a>(ctx: &ViewContext<'_>, rtl: bool) -> Element<'a, Message> {
    let snapshot = ctx.snapshot;
    let i18n = ctx.i18n;

    let light = button(Text::new(i18n.tr("light-candles")).size(typography::BODY_LG))
        .on_press_maybe((!snapshot.phase.is_lighting()).then_some(Message::Light))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let insight_label: Element<'a, Message> = if snapshot.insight_loading {
        Row::new()
            .push(AnimatedSpinner::new(palette::INDIGO_200, ctx.spinner_rotation).into_element())
            .push(Text::new(i18n.tr("get-insight")).size(typography::BODY_LG))
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .into()
    } else {
        Text::new(i18n.tr("get-insight"))
            .size(typography::BODY_LG)
            .into()
    };
    let insight_available = ctx.insight_enabled && !snapshot.insight_loading;
    let insight = button(insight_label)
        .on_press_maybe(insight_available.then_some(Message::RequestInsight))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::secondary);

    let reset = button(Text::new(i18n.tr("reset")).size(typography::BODY_LG))
        .on_press(Message::Reset)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::ghost);

    directional_row(vec![light.into(), insight.into(), reset.into()], rtl)
        .spacing(spacing::MD)
        .into()
}

/// Renders the control panel for the given snapshot.
///
/// The element owns its content, so the snapshot may be a temporary.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let rtl = ctx.snapshot.language.is_rtl();

    let top_row = directional_row(
        vec![
            language_toggle(ctx.snapshot.language, rtl),
            Space::new().width(Length::Fill).into(),
            night_selector(ctx.i18n, ctx.snapshot.day, rtl),
        ],
        rtl,
    )
    .spacing(spacing::MD);

    let content = Column::new()
        .push(top_row)
        .push(
            Container::new(action_row(&ctx, rtl))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .spacing(spacing::LG);

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
