/// ICED GUI for the power menu popup
///
/// Architecture:
/// - `initialize` validates the compiled-in config and returns an `AppHandle`
/// - `AppHandle::run` opens the window and blocks in the iced event loop
/// - Every click or close request is forwarded to the `Session`, which decides
///   the effect; the window is closed once the session terminates
use crate::config::{ConfigError, PopupConfig};
use crate::layout::Geometry;
use crate::result_file::ResultFile;
use crate::session::{Outcome, PopupEvent, Session};
use iced::{
    alignment, event, executor, window,
    widget::{Button, Column, Container, Text},
    Application, Command, Element, Event, Length, Settings, Subscription, Theme,
};

/// Button label text size, sized to fit the button height
const LABEL_SIZE: f32 = 14.0;

#[derive(Debug, Clone)]
pub enum Message {
    ActionSelected(usize),
    CloseRequested,
}

/// Everything the popup needs to run, produced by [`initialize`]
pub struct AppHandle {
    session: Session<ResultFile>,
    geometry: Geometry,
    title: String,
}

/// Validate the config and prepare a popup session
///
/// Fails before any window exists if the action list is empty.
pub fn initialize(config: PopupConfig) -> Result<AppHandle, ConfigError> {
    let actions = config.validate()?;
    tracing::debug!(
        "Popup {}x{} for {} actions, result file {}",
        config.geometry.width,
        config.geometry.height(actions.len()),
        actions.len(),
        config.result_path.display()
    );

    Ok(AppHandle {
        session: Session::new(actions, ResultFile::new(config.result_path)),
        geometry: config.geometry,
        title: config.title,
    })
}

/// Window settings for a popup with `rows` buttons
pub fn window_settings(geometry: &Geometry, rows: usize) -> window::Settings {
    window::Settings {
        size: geometry.window_size(rows),
        position: window::Position::Centered,
        resizable: false,
        decorations: true,
        level: window::Level::AlwaysOnTop,
        // Close requests go through the session like clicks do
        exit_on_close_request: false,
        #[cfg(target_os = "windows")]
        platform_specific: window::settings::PlatformSpecific {
            skip_taskbar: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppHandle {
    /// Open the popup and block until it terminates
    pub fn run(self) -> iced::Result {
        let window_config = window_settings(&self.geometry, self.session.actions().len());

        let mut settings = Settings::with_flags(self);
        settings.window = window_config;

        let result = PowerMenu::run(settings);
        tracing::debug!("Iced returned: {:?}", result);
        result
    }
}

pub struct PowerMenu {
    session: Session<ResultFile>,
    geometry: Geometry,
    title: String,
}

impl PowerMenu {
    fn handle(&mut self, event: PopupEvent) -> Command<Message> {
        match self.session.dispatch(event) {
            Some(Outcome::Selected { label, recorded }) => {
                tracing::info!("Selected '{}' (recorded: {})", label, recorded);
                window::close(window::Id::MAIN)
            }
            Some(Outcome::Dismissed) => {
                tracing::info!("Popup closed without a selection");
                window::close(window::Id::MAIN)
            }
            None => Command::none(),
        }
    }
}

impl Application for PowerMenu {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppHandle;

    fn new(handle: AppHandle) -> (Self, Command<Message>) {
        let mut app = PowerMenu {
            session: handle.session,
            geometry: handle.geometry,
            title: handle.title,
        };
        app.session.mark_displayed();

        // Take focus right away so the popup is usable without a click
        (app, window::gain_focus(window::Id::MAIN))
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status| match event {
            Event::Window(_, window::Event::CloseRequested) => Some(Message::CloseRequested),
            _ => None,
        })
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ActionSelected(index) => self.handle(PopupEvent::ButtonClicked(index)),
            Message::CloseRequested => self.handle(PopupEvent::WindowClosed),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let geometry = &self.geometry;
        let mut buttons = Column::new()
            .spacing(geometry.spacing)
            .padding(geometry.padding)
            .width(Length::Fill);

        for (i, label) in self.session.actions().iter().enumerate() {
            buttons = buttons.push(
                Button::new(
                    Text::new(label)
                        .size(LABEL_SIZE)
                        .width(Length::Fill)
                        .horizontal_alignment(alignment::Horizontal::Center)
                        .vertical_alignment(alignment::Vertical::Center),
                )
                .on_press(Message::ActionSelected(i))
                .width(Length::Fill)
                .height(Length::Fixed(geometry.button_height))
                .padding([4, 8]),
            );
        }

        Container::new(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
