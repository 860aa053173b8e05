// SPDX-License-Identifier: MIT
//! Layout of the main window.

use super::categories::{self, CategoryIndex};
use super::display::DisplayImage;
use super::feedback::FeedbackTarget;
use super::{menu, Message, Window};
use crate::config::{IMAGE_DISPLAY_HEIGHT, IMAGE_DISPLAY_WIDTH};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dialogs;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, image, mouse_area, opaque, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{Element, Length};

impl Window {
    pub fn view(&self) -> Element<'_, Message> {
        let surface = self.main_surface();

        let Some(dialog) = &self.dialog else {
            return surface;
        };

        let modal = Container::new(dialogs::view(dialog, &self.i18n).map(Message::Dialog))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::backdrop);

        Stack::new().push(surface).push(opaque(modal)).into()
    }

    fn main_surface(&self) -> Element<'_, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .push(self.top_bar());

        if self.menu_open {
            content = content.push(
                Container::new(menu::dropdown(&self.i18n).map(Message::Menu))
                    .width(Length::Fill)
                    .align_x(Horizontal::Left),
            );
        }

        content
            .push(self.folder_row())
            .push(Text::new(self.status.as_str()).size(typography::BODY_SM))
            .push(self.image_row())
            .push(self.category_grid())
            .into()
    }

    fn top_bar(&self) -> Element<'_, Message> {
        let mut bar = Row::new()
            .width(Length::Fill)
            .align_y(Vertical::Center)
            .push(menu::toggle_button(&self.i18n).map(Message::Menu))
            .push(Space::new().width(Length::Fill));

        if self.has_reset_button() {
            let pulsed = self.pulses.is_pulsed(FeedbackTarget::Reset);
            bar = bar.push(
                button(Text::new(self.i18n.tr("reset-button")))
                    .on_press(Message::ResetPressed)
                    .height(sizing::BUTTON_HEIGHT)
                    .style(styles::button::pulsed_or(pulsed, styles::button::danger)),
            );
        }

        bar.into()
    }

    fn folder_row(&self) -> Element<'_, Message> {
        let pulsed = self.pulses.is_pulsed(FeedbackTarget::SelectFolder);
        let select = button(Text::new(self.select_folder_label()).center())
            .on_press_maybe(
                self.select_folder_enabled
                    .then_some(Message::SelectFolderPressed),
            )
            .width(sizing::FOLDER_BUTTON_WIDTH)
            .height(sizing::BUTTON_HEIGHT)
            .style(styles::button::pulsed_or(pulsed, styles::button::primary));

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(select)
            .push(Text::new(self.folder_path_text()).size(typography::BODY_SM))
            .into()
    }

    fn image_row(&self) -> Element<'_, Message> {
        let picture: Element<'_, Message> = match &self.display {
            DisplayImage::Image(fitted) => image(fitted.handle.clone())
                .width(fitted.width as f32)
                .height(fitted.height as f32)
                .into(),
            DisplayImage::Placeholder => Text::new(self.i18n.tr("image-placeholder"))
                .size(typography::BODY)
                .into(),
        };

        let frame = Container::new(picture)
            .width(IMAGE_DISPLAY_WIDTH as f32)
            .height(IMAGE_DISPLAY_HEIGHT as f32)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::image_frame);

        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(self.nav_button("◀", FeedbackTarget::Previous, Message::PreviousPressed))
            .push(frame)
            .push(self.nav_button("▶", FeedbackTarget::Next, Message::NextPressed))
            .into()
    }

    fn nav_button(
        &self,
        label: &'static str,
        target: FeedbackTarget,
        message: Message,
    ) -> Element<'_, Message> {
        let pulsed = self.pulses.is_pulsed(target);
        button(Text::new(label).size(typography::TITLE_MD).center())
            .on_press(message)
            .width(sizing::NAV_BUTTON_WIDTH)
            .height(IMAGE_DISPLAY_HEIGHT as f32)
            .style(styles::button::pulsed_or(pulsed, styles::button::secondary))
            .into()
    }

    fn category_grid(&self) -> Element<'_, Message> {
        categories::rows(self.columns)
            .fold(Column::new().spacing(spacing::XS), |grid, row| {
                let buttons = row.iter().fold(Row::new().spacing(spacing::XS), |line, index| {
                    line.push(self.category_button(*index))
                });
                grid.push(buttons)
            })
            .into()
    }

    fn category_button(&self, index: CategoryIndex) -> Element<'_, Message> {
        let pulsed = self.pulses.is_pulsed(FeedbackTarget::Category(index));
        let width = if self.columns == 1 {
            Length::Fill
        } else {
            Length::Fixed(sizing::CATEGORY_BUTTON_WIDTH)
        };

        let press = button(Text::new(self.category_label(index)).center())
            .on_press(Message::CategoryPressed(index))
            .width(width)
            .height(sizing::BUTTON_HEIGHT)
            .style(styles::button::pulsed_or(
                pulsed,
                styles::button::category(self.grid.state(index)),
            ));

        let area = mouse_area(press).on_right_press(Message::CategoryRightPressed(index));

        let path = self.grid.slot(index).path.trim();
        if path.is_empty() {
            return area.into();
        }

        let tip = Container::new(Text::new(path).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(styles::container::tooltip);
        tooltip(area, tip, tooltip::Position::Top)
            .gap(spacing::XXS)
            .into()
    }
}
