// SPDX-License-Identifier: MPL-2.0
//! Waitlist signup form.
//!
//! Submitting never leaves the machine: a valid address produces a
//! [`Event::Confirmed`] that the application turns into a confirmation toast,
//! an invalid one produces [`Event::Rejected`].

use super::components::{self, SEMIBOLD};
use super::ViewContext;
use crate::i18n::keys;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Form state: the address being typed.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
}

impl State {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
}

/// Outcome of a form message, handled by the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A well-formed address was submitted; the form has been cleared.
    Confirmed(String),
    /// The submitted text is not an email address; the form keeps it.
    Rejected,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::Submit => {
            let email = state.email.trim();
            if is_valid_email(email) {
                let email = email.to_string();
                state.email.clear();
                tracing::info!("waitlist signup confirmed locally");
                Event::Confirmed(email)
            } else {
                Event::Rejected
            }
        }
    }
}

/// Local-only address check following the HTML "valid e-mail address"
/// rule: a local part of atext characters and dots, one `@`, then one or
/// more dot-separated labels. Each label is 1 to 63 ASCII letters, digits
/// or hyphens and neither starts nor ends with a hyphen.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local.bytes().all(is_local_byte)
        && domain.split('.').all(is_valid_label)
}

fn is_local_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b".!#$%&'*+/=?^_`{|}~-".contains(&byte)
}

fn is_valid_label(label: &str) -> bool {
    (1..=MAX_LABEL_LEN).contains(&label.len())
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Longest DNS label.
const MAX_LABEL_LEN: usize = 63;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.t(keys::WAITLIST_TITLE))
                .size(typography::TITLE_LG)
                .font(SEMIBOLD),
        )
        .push(components::muted(i18n.t(keys::WAITLIST_SUBTITLE), typography::BODY_LG));

    let input = text_input(i18n.t(keys::WAITLIST_PLACEHOLDER), ctx.state.waitlist.email())
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY)
        .width(Length::Fill);

    let submit = button(Text::new(format!("✉ {}", i18n.t(keys::WAITLIST_CTA))).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Submit);

    let form = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(input)
                .push(submit),
        )
        .push(components::muted(i18n.t(keys::WAITLIST_NOTE), typography::CAPTION));

    let card = components::card(form).max_width(sizing::WAITLIST_FORM_WIDTH);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(header)
        .push(Container::new(card).width(Length::Fill).align_x(Horizontal::Center));

    components::section(content)
}
