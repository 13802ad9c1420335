// SPDX-License-Identifier: MPL-2.0
//! Numbered steps next to a static report-flow diagram.

use super::components::{self, SEMIBOLD};
use super::{Message, ViewContext};
use crate::i18n::keys::{self, Key};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

const STEPS: [(Key, Key); 5] = [
    (keys::HOW_1_TITLE, keys::HOW_1_DESC),
    (keys::HOW_2_TITLE, keys::HOW_2_DESC),
    (keys::HOW_3_TITLE, keys::HOW_3_DESC),
    (keys::HOW_4_TITLE, keys::HOW_4_DESC),
    (keys::HOW_5_TITLE, keys::HOW_5_DESC),
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let steps = STEPS
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::LG), |column, (index, (title, desc))| {
            column.push(step(index + 1, i18n.t(*title), i18n.t(*desc)))
        })
        .width(Length::FillPortion(1));

    let layout = Row::new()
        .spacing(spacing::XXL)
        .push(steps)
        .push(Container::new(flow_card(ctx)).width(Length::FillPortion(1)));

    let content = Column::new()
        .spacing(spacing::XL)
        .push(components::section_header(
            i18n.t(keys::HOW_TITLE),
            Some(i18n.t(keys::HOW_SUBTITLE)),
        ))
        .push(layout);

    components::section(content)
}

fn step<'a>(number: usize, title: &'a str, desc: &'a str) -> Element<'a, Message> {
    let badge = Container::new(Text::new(number.to_string()).size(typography::BODY_SM).font(SEMIBOLD))
        .center_x(Length::Fixed(sizing::ICON_LG))
        .center_y(Length::Fixed(sizing::ICON_LG))
        .style(styles::container::step_number);

    Row::new()
        .spacing(spacing::MD)
        .push(badge)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(Text::new(title).size(typography::BODY_LG).font(SEMIBOLD))
                .push(components::muted(desc, typography::BODY)),
        )
        .into()
}

/// Card holding the diagram:
///
/// ```text
/// [Reporter] -> [Privacy layer] -> [Responders]
///                     |
///                     v
///               [Moderation]
/// ```
fn flow_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let top = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(flow_box(i18n.t(keys::FLOW_BOX1), None))
        .push(arrow("→"))
        .push(flow_box(i18n.t(keys::FLOW_BOX2), Some(i18n.t(keys::FLOW_BOX2B))))
        .push(arrow("→"))
        .push(flow_box(i18n.t(keys::FLOW_BOX3), None));

    // The moderation box hangs below the middle box.
    let side = Length::FillPortion(1);
    let below = |content: Element<'a, Message>| -> Element<'a, Message> {
        Row::new()
            .push(Space::new().width(side))
            .push(Container::new(content).width(side).align_x(Horizontal::Center))
            .push(Space::new().width(side))
            .into()
    };

    let diagram = Column::new()
        .spacing(spacing::XS)
        .push(top)
        .push(below(arrow("↓")))
        .push(below(flow_box(i18n.t(keys::FLOW_BOX4), Some(i18n.t(keys::FLOW_BOX4B)))));

    let card = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.t(keys::FLOW_TITLE)).size(typography::TITLE_SM).font(SEMIBOLD))
        .push(components::muted(i18n.t(keys::FLOW_DESC), typography::BODY_SM))
        .push(
            Container::new(diagram)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::muted),
        );

    components::card(card).into()
}

fn flow_box<'a>(label: &'a str, caption: Option<&'a str>) -> Element<'a, Message> {
    let mut content = Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(label).size(typography::BODY_SM).font(SEMIBOLD));
    if let Some(caption) = caption {
        content = content.push(components::muted(caption, typography::CAPTION));
    }

    Container::new(content)
        .width(Length::FillPortion(1))
        .max_width(sizing::FLOW_BOX_WIDTH)
        .center_y(Length::Fixed(sizing::FLOW_BOX_HEIGHT))
        .align_x(Horizontal::Center)
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}

fn arrow<'a>(glyph: &'a str) -> Element<'a, Message> {
    Text::new(glyph).size(typography::TITLE_SM).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        for (index, (title, desc)) in STEPS.iter().enumerate() {
            let number = (index + 1).to_string();
            assert_eq!(title.path(), format!("how.{number}.title"));
            assert_eq!(desc.path(), format!("how.{number}.desc"));
        }
    }
}
