use super::messages::Message;
use super::state::{App, SPEED_OPTIONS, ViewportState};
use crate::visual::DisplayMode;
use iced::advanced::graphics::core::Image;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, row, slider, stack, text};
use iced::{ContentFit, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut layers = stack![self.visual_layer()]
            .width(Length::Fill)
            .height(Length::Fill);

        if self.is_image_mode() {
            layers = layers.push(self.zoom_panel());
        }
        // Hidden means unmounted: invisible and not interactive.
        if self.overlay.visible {
            layers = layers.push(self.playback_panel());
        }

        layers.into()
    }

    fn visual_layer(&self) -> Element<'_, Message> {
        let Some(handle) = &self.visual.handle else {
            return self.visual_fallback();
        };

        match self.visual.mode {
            DisplayMode::Document => container(
                image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            DisplayMode::Image => canvas(ImageSurface {
                handle,
                size: self.visual.size.unwrap_or((1, 1)),
                viewport: &self.viewport,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        }
    }

    fn visual_fallback(&self) -> Element<'_, Message> {
        let hint = match self.visual.mode {
            DisplayMode::Document => "This viewer cannot display the document.",
            DisplayMode::Image => "The image could not be loaded.",
        };
        container(
            column![
                text(hint),
                text(self.visual.path.display().to_string()).size(13.0),
            ]
            .spacing(6)
            .align_x(Horizontal::Center),
        )
        .center(Length::Fill)
        .into()
    }

    /// The floating playback panel, docked left-center like a sidebar tab.
    fn playback_panel(&self) -> Element<'_, Message> {
        let play_button = button(text(if self.playback.is_playing { "⏸" } else { "▶" }))
            .on_press(Message::TogglePlayPause);

        let mut speed_buttons = column![].spacing(6).align_x(Horizontal::Center);
        for speed in SPEED_OPTIONS {
            let selected = (self.playback.speed - speed).abs() < f32::EPSILON;
            let style = if selected {
                button::primary
            } else {
                button::secondary
            };
            speed_buttons = speed_buttons.push(
                button(text(format!("{speed}x")).size(13.0))
                    .style(style)
                    .on_press(Message::SpeedSelected(speed)),
            );
        }

        let volume_block = column![
            text("Volume").size(13.0),
            slider(0.0..=1.0, self.playback.volume, Message::VolumeChanged)
                .step(0.05)
                .width(Length::Fixed(100.0)),
        ]
        .spacing(4)
        .align_x(Horizontal::Center);

        let stop_button = button(text("⏹"))
            .style(button::danger)
            .on_press(Message::Stop);

        let progress_block = column![
            text("Progress").size(13.0),
            slider(
                0.0..=self.playback.duration.max(1.0),
                self.playback.position,
                Message::SeekChanged,
            )
            .step(0.1)
            .width(Length::Fixed(120.0)),
            text(self.progress_label()).size(12.0),
        ]
        .spacing(4)
        .align_x(Horizontal::Center);

        let panel = column![
            play_button,
            speed_buttons,
            volume_block,
            stop_button,
            progress_block,
        ]
        .spacing(14)
        .align_x(Horizontal::Center);

        let panel = mouse_area(container(panel).padding(14).style(container::rounded_box))
            .on_enter(Message::OverlayHoverChanged(true))
            .on_exit(Message::OverlayHoverChanged(false));

        container(panel)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .padding(16)
            .into()
    }

    /// Zoom cluster, top-right, always visible in image mode. The percent
    /// label doubles as the reset button.
    fn zoom_panel(&self) -> Element<'_, Message> {
        let cluster = row![
            button(text("−")).on_press(Message::ZoomOut),
            button(text(format!("{:.0}%", self.viewport.zoom * 100.0)).size(13.0))
                .style(button::secondary)
                .on_press(Message::ResetView),
            button(text("+")).on_press(Message::ZoomIn),
        ]
        .spacing(6)
        .align_y(Vertical::Center);

        container(container(cluster).padding(8).style(container::rounded_box))
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(16)
            .into()
    }
}

/// Canvas surface rendering the image through the viewport transform: the
/// picture is fit to the window, scaled by the shown zoom, and translated by
/// the shown offset (offsets live in image space, so they are multiplied
/// back by the zoom on screen).
struct ImageSurface<'a> {
    handle: &'a Handle,
    size: (u32, u32),
    viewport: &'a ViewportState,
}

impl canvas::Program<Message> for ImageSurface<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let (width, height) = (self.size.0 as f32, self.size.1 as f32);
        if width <= 0.0 || height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let fit = (bounds.width / width).min(bounds.height / height);
        let zoom = self.viewport.shown_zoom;
        let offset = self.viewport.shown_offset;
        let drawn = Size::new(width * fit * zoom, height * fit * zoom);
        let top_left = Point::new(
            (bounds.width - drawn.width) / 2.0 + offset.x * zoom,
            (bounds.height - drawn.height) / 2.0 + offset.y * zoom,
        );

        frame.draw_image(
            Rectangle::new(top_left, drawn),
            Image::new(self.handle.clone()),
        );
        vec![frame.into_geometry()]
    }
}
