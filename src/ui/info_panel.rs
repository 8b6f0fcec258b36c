// SPDX-License-Identifier: MPL-2.0
//! Blessing card and daily insight card.

use crate::application::session::Snapshot;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length, Theme};

/// What the insight card shows for a given snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightBody {
    Loading,
    Text(String),
    Failed,
    Placeholder,
}

impl InsightBody {
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        if snapshot.insight_loading {
            Self::Loading
        } else if let Some(text) = &snapshot.insight {
            Self::Text(text.clone())
        } else if snapshot.insight_failed {
            Self::Failed
        } else {
            Self::Placeholder
        }
    }
}

fn colored<'a>(content: String, size: f32, color: Color) -> Text<'a> {
    Text::new(content)
        .size(size)
        .wrapping(text::Wrapping::Word)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

fn centered<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
}

fn blessing_card<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .push(centered(colored(
            i18n.tr("blessing-title"),
            typography::TITLE_MD,
            palette::GOLD_500,
        )))
        .push(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(1.0))
                .style(styles::container::divider),
        )
        .push(centered(colored(
            i18n.tr("blessing-text"),
            typography::BODY_LG,
            palette::WHITE,
        )))
        .push(centered(colored(
            i18n.tr("blessing-note"),
            typography::CAPTION,
            palette::GRAY_400,
        )))
        .spacing(spacing::MD);

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::blessing_card)
        .into()
}

fn insight_card<'a, Message: 'a>(i18n: &I18n, snapshot: &Snapshot) -> Element<'a, Message> {
    let day = snapshot.day.to_string();
    let heading = colored(
        format!("✦ {}", i18n.tr_with_args("day-heading", &[("day", day.as_str())])),
        typography::TITLE_MD,
        palette::INDIGO_200,
    );

    let body = match InsightBody::from_snapshot(snapshot) {
        InsightBody::Loading => colored(
            i18n.tr("insight-loading"),
            typography::BODY,
            palette::GRAY_400,
        ),
        InsightBody::Text(insight) => colored(
            format!("\u{201C}{insight}\u{201D}"),
            typography::BODY_LG,
            palette::WHITE,
        ),
        InsightBody::Failed => colored(
            i18n.tr("insight-error"),
            typography::BODY,
            palette::ERROR_300,
        ),
        InsightBody::Placeholder => colored(
            i18n.tr("insight-placeholder"),
            typography::BODY,
            palette::GRAY_400,
        ),
    };

    let content = Column::new()
        .push(centered(heading))
        .push(centered(body))
        .spacing(spacing::MD);

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::insight_card)
        .into()
}

/// Renders both cards side by side; mirrored for right-to-left languages.
pub fn view<'a, Message: 'a>(i18n: &I18n, snapshot: &Snapshot) -> Element<'a, Message> {
    let mut cards = vec![blessing_card(i18n), insight_card(i18n, snapshot)];
    if snapshot.language.is_rtl() {
        cards.reverse();
    }

    cards
        .into_iter()
        .fold(Row::new(), |row, card| row.push(card))
        .spacing(spacing::LG)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::Session;
    use crate::domain::language::Language;
    use crate::domain::menorah::Day;

    #[test]
    fn fresh_session_shows_placeholder() {
        let session = Session::new(Day::FIRST, Language::English);
        assert_eq!(
            InsightBody::from_snapshot(&session.snapshot()),
            InsightBody::Placeholder
        );
    }

    #[test]
    fn body_follows_request_lifecycle() {
        let mut session = Session::new(Day::FIRST, Language::English);
        let request = session.begin_insight();
        assert_eq!(InsightBody::from_snapshot(&session.snapshot()), InsightBody::Loading);

        session.complete_insight(request.ticket, Some("Light grows.".into()));
        assert_eq!(
            InsightBody::from_snapshot(&session.snapshot()),
            InsightBody::Text("Light grows.".into())
        );

        let request = session.begin_insight();
        session.complete_insight(request.ticket, None);
        assert_eq!(InsightBody::from_snapshot(&session.snapshot()), InsightBody::Failed);
    }
}
