//! Reusable view fragments: result list rows and the detail panel.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use sagasu_core::format;
use sagasu_core::models::AnimeRecord;

use crate::cover_cache::CoverState;
use crate::style;
use crate::theme::{self, ColorScheme};

/// One numbered row of the result list ("1. Title").
pub fn result_list_item<'a, Message: Clone + 'a>(
    cs: &'a ColorScheme,
    index: usize,
    record: &'a AnimeRecord,
    selected: Option<usize>,
    on_select: impl Fn(usize) -> Message + 'a,
) -> Element<'a, Message> {
    let label = format!("{}. {}", index + 1, record.display_title());

    button(
        text(label)
            .size(style::TEXT_BASE)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding([style::SPACE_SM, style::SPACE_MD])
    .on_press(on_select(index))
    .style(theme::list_item(selected == Some(index), cs))
    .into()
}

/// Detail panel for the selected record: cover art plus the labeled
/// field set. The title heading and the formatted Title field both come
/// from `display_title`, so list and detail always agree.
pub fn detail_panel<'a, Message: 'a>(
    cs: &'a ColorScheme,
    record: &'a AnimeRecord,
    cover: Option<&'a CoverState>,
) -> Element<'a, Message> {
    let cover_widget: Element<'a, Message> = match cover {
        Some(CoverState::Loaded(path)) => image(path.as_path())
            .width(Length::Fixed(style::COVER_WIDTH))
            .height(Length::Fixed(style::COVER_HEIGHT))
            .into(),
        _ => container(
            text("\u{1F3AC}")
                .size(style::TEXT_3XL)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(style::COVER_WIDTH))
        .height(Length::Fixed(style::COVER_HEIGHT))
        .center_x(Length::Fixed(style::COVER_WIDTH))
        .center_y(Length::Fixed(style::COVER_HEIGHT))
        .style(theme::cover_placeholder(cs))
        .into(),
    };

    let mut title_section = column![text(record.display_title())
        .size(style::TEXT_XL)
        .line_height(style::LINE_HEIGHT_TIGHT)]
    .spacing(style::SPACE_XS);

    if let Some(romaji) = &record.title.romaji {
        if romaji != record.display_title() {
            title_section = title_section.push(
                text(romaji.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
    }

    // The Title field is already the heading; render the rest as rows.
    let mut fields = column![].spacing(style::SPACE_SM);
    for field in format::detail_fields(record).into_iter().skip(1) {
        if field.value.is_empty() {
            continue;
        }
        fields = fields.push(
            column![
                text(field.label)
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                text(field.value)
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            ]
            .spacing(style::SPACE_XXS),
        );
    }

    column![
        row![cover_widget, title_section]
            .spacing(style::SPACE_LG)
            .align_y(Alignment::Start),
        container(fields)
            .style(theme::card(cs))
            .padding(style::SPACE_LG)
            .width(Length::Fill),
    ]
    .spacing(style::SPACE_LG)
    .padding(style::SPACE_LG)
    .into()
}
