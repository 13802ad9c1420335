// SPDX-License-Identifier: MPL-2.0
//! The single-page landing view.
//!
//! A fixed navbar sits above one scrollable column holding every section in
//! order: hero, social proof, features, how it works, privacy, pricing,
//! waitlist, FAQ and footer. All strings come from the active locale.
//!
//! Like the other components, the landing page keeps its own [`State`],
//! turns [`Message`]s into [`Event`]s in [`update`], and leaves anything
//! that reaches outside the page (switching language, scrolling, toasts)
//! to the application.

pub mod components;
pub mod faq;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod navbar;
mod pricing;
mod privacy;
pub mod waitlist;

pub use footer::{copyright, current_year};

use crate::i18n::keys::{self, Key};
use crate::i18n::{I18n, Locale};
use iced::widget::{scrollable, Column, Id};
use iced::{Element, Length};

/// Identifier of the page scrollable, target of section scrolling.
pub const SCROLLABLE_ID: &str = "landing-page";

/// Scroll targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Top,
    Features,
    HowItWorks,
    Privacy,
    Pricing,
    Waitlist,
    Faq,
}

impl Section {
    /// Sections linked from the navbar, in display order.
    pub const NAV: [Section; 5] = [
        Section::Features,
        Section::HowItWorks,
        Section::Privacy,
        Section::Pricing,
        Section::Faq,
    ];

    /// Navbar label, for sections that have one.
    #[must_use]
    pub fn nav_key(self) -> Option<Key> {
        match self {
            Section::Features => Some(keys::NAV_FEATURES),
            Section::HowItWorks => Some(keys::NAV_HOW),
            Section::Privacy => Some(keys::NAV_PRIVACY),
            Section::Pricing => Some(keys::NAV_PRICING),
            Section::Faq => Some(keys::NAV_FAQ),
            Section::Top | Section::Waitlist => None,
        }
    }

    /// Vertical position of the section start, relative to the scrollable
    /// content (0.0 top, 1.0 bottom).
    ///
    /// Section heights depend on window width and on the locale, so these
    /// are approximations tuned for the default window size.
    #[must_use]
    pub fn anchor(self) -> f32 {
        match self {
            Section::Top => 0.0,
            Section::Features => 0.2,
            Section::HowItWorks => 0.36,
            Section::Privacy => 0.52,
            Section::Pricing => 0.65,
            Section::Waitlist => 0.8,
            Section::Faq => 0.88,
        }
    }
}

/// Page-local state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub faq: faq::State,
    pub waitlist: waitlist::State,
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Year shown in the footer copyright line.
    pub year: i32,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(Locale),
    ScrollTo(Section),
    ToggleFaq(faq::Question),
    Waitlist(waitlist::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageSelected(Locale),
    ScrollTo(Section),
    WaitlistConfirmed(String),
    WaitlistRejected,
}

/// Process a page message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ScrollTo(section) => Event::ScrollTo(section),
        Message::ToggleFaq(question) => {
            state.faq.toggle(question);
            Event::None
        }
        Message::Waitlist(message) => match waitlist::update(&mut state.waitlist, message) {
            waitlist::Event::None => Event::None,
            waitlist::Event::Confirmed(email) => Event::WaitlistConfirmed(email),
            waitlist::Event::Rejected => Event::WaitlistRejected,
        },
    }
}

/// Render the page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page = Column::new()
        .width(Length::Fill)
        .push(hero::view(&ctx))
        .push(hero::social_proof(&ctx))
        .push(features::view(&ctx))
        .push(how_it_works::view(&ctx))
        .push(privacy::view(&ctx))
        .push(pricing::view(&ctx))
        .push(waitlist::view(&ctx).map(Message::Waitlist))
        .push(faq::view(&ctx))
        .push(footer::view(&ctx));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar::view(&ctx))
        .push(
            scrollable(page)
                .id(Id::new(SCROLLABLE_ID))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}
