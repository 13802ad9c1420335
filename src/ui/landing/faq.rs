// SPDX-License-Identifier: MPL-2.0
//! Frequently asked questions, each answer collapsible under its question.

use super::components::{self, SEMIBOLD};
use super::{Message, ViewContext};
use crate::i18n::keys::{self, Key};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use std::collections::HashSet;

/// Questions in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    Anonymity,
    Recipients,
    Abuse,
    Offline,
}

impl Question {
    pub const ALL: [Question; 4] = [
        Question::Anonymity,
        Question::Recipients,
        Question::Abuse,
        Question::Offline,
    ];

    #[must_use]
    pub fn question_key(self) -> Key {
        match self {
            Question::Anonymity => keys::FAQ_Q1,
            Question::Recipients => keys::FAQ_Q2,
            Question::Abuse => keys::FAQ_Q3,
            Question::Offline => keys::FAQ_Q4,
        }
    }

    #[must_use]
    pub fn answer_key(self) -> Key {
        match self {
            Question::Anonymity => keys::FAQ_A1,
            Question::Recipients => keys::FAQ_A2,
            Question::Abuse => keys::FAQ_A3,
            Question::Offline => keys::FAQ_A4,
        }
    }
}

/// Tracks which answers are expanded. All start collapsed.
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<Question>,
}

impl State {
    #[must_use]
    pub fn is_expanded(&self, question: Question) -> bool {
        self.expanded.contains(&question)
    }

    /// Toggle a question's expanded state.
    pub fn toggle(&mut self, question: Question) {
        if !self.expanded.remove(&question) {
            self.expanded.insert(question);
        }
    }
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = Question::ALL
        .into_iter()
        .map(|question| entry(ctx, question))
        .collect();

    let content = Column::new()
        .spacing(spacing::LG)
        .push(components::section_header(ctx.i18n.t(keys::FAQ_TITLE), None))
        .push(components::grid(items, 2));

    components::section(content)
}

fn entry<'a>(ctx: &ViewContext<'a>, question: Question) -> Element<'a, Message> {
    let is_expanded = ctx.state.faq.is_expanded(question);
    let indicator = Text::new(if is_expanded { "▼" } else { "▶" }).size(typography::BODY);

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(indicator)
            .push(
                Text::new(ctx.i18n.t(question.question_key()))
                    .size(typography::BODY_LG)
                    .font(SEMIBOLD)
                    .width(Length::Fill),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(|theme: &Theme, status| {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
            _ => palette.background.base.color,
        };
        button::Style {
            background: Some(background.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .on_press(Message::ToggleFaq(question));

    let mut body = Column::new().spacing(spacing::XS).push(header);
    if is_expanded {
        body = body.push(
            Container::new(components::muted(
                ctx.i18n.t(question.answer_key()),
                typography::BODY,
            ))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::muted),
        );
    }

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}
