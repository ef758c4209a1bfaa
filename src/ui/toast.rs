// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering mounted notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with category-colored accents and a dismiss button.

use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

use crate::notifications::{Content, Manager, Message, Notification};

use super::surface::IcedSurface;
use super::theme::{
    accent_for_category, border, opacity, palette, radius, shadow, sizing, spacing, typography,
};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at the given width.
    ///
    /// The width is usually [`sizing::TOAST_WIDTH`]; during tag replacement
    /// it is the frozen width of the node being replaced, so the card does
    /// not jump while the swap happens.
    pub fn view(notification: &Notification, width: f32) -> Element<'_, Message> {
        let accent_color = accent_for_category(notification.category());

        // Optional title line above the message body.
        let mut lines = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            lines = lines.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        lines = match notification.content() {
            Content::Text(line) => lines.push(body_text(line)),
            Content::Lines(rows) => rows
                .iter()
                .fold(lines, |column, row| column.push(body_text(row))),
            // Markup is rendered verbatim; interpreting it is a richer
            // renderer's job.
            Content::Markup(raw) => lines.push(body_text(raw)),
        };

        // Dismiss button (always visible, uses main text color for good contrast)
        let notification_id = notification.id();
        let dismiss_button = button(Text::new("\u{2715}").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [title + message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(lines)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        // Toast container with accent border
        Container::new(content)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically, and
    /// forwards pointer enter/leave so hovering suspends every countdown.
    pub fn view_overlay(manager: &Manager<IcedSurface>) -> Element<'_, Message> {
        let surface = manager.renderer();
        let toasts: Vec<Element<'_, Message>> = surface
            .toasts()
            .filter(|toast| toast.is_visible())
            .filter_map(|toast| {
                let notification = manager.get(toast.id())?;
                let width = toast
                    .frozen()
                    .map_or(sizing::TOAST_WIDTH, |bounds| bounds.width);
                Some(Self::view(notification, width))
            })
            .collect();

        if !surface.is_shown() || toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            // Position in bottom-right with padding
            let overlay = Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD);

            mouse_area(overlay)
                .on_enter(Message::PointerEntered)
                .on_exit(Message::PointerExited)
                .into()
        }
    }
}

/// Message body text with the theme's main text color.
fn body_text(content: &str) -> Text<'_> {
    Text::new(content)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        })
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_flat_when_active() {
        let theme = Theme::Dark;
        let style = dismiss_button_style(&theme, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn dismiss_button_shows_overlay_when_hovered() {
        let theme = Theme::Dark;
        let style = dismiss_button_style(&theme, button::Status::Hovered);
        assert!(style.background.is_some());
    }
}
