//! # Application Controller
//!
//! Owns the event loop. Key presses go through the [`CommandRegistry`],
//! which consults the legality flags currently shown by the terminal view,
//! and the resulting [`CalcEvent`]s are handed to the [`CalcController`].
//! After each handled key the terminal view is redrawn.

use crate::calc::{
    commands::{CalcEvent, CommandContext, CommandRegistry},
    controllers::CalcController,
    io::{EventStream, RenderStream},
    models::{CalcModel, RegisterModel},
    natural::BigNatural,
    views::TerminalCalcView,
};
use crate::config::Settings;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type TerminalCalcController<RS> =
    CalcController<RegisterModel<BigNatural>, TerminalCalcView<RS>>;

/// Terminal calculator application
pub struct AppController<ES: EventStream, RS: RenderStream> {
    calculator: TerminalCalcController<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the application with injected I/O streams
    pub fn with_io_streams(
        settings: Settings,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        tracing::debug!(
            "Starting with top={}, bottom={}, group_digits={}",
            settings.top,
            settings.bottom,
            settings.group_digits
        );

        let model = RegisterModel::with_values(settings.top, settings.bottom);
        let view =
            TerminalCalcView::new(render_stream)?.with_digit_grouping(settings.group_digits);

        Ok(Self {
            calculator: CalcController::new(model, view),
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
        })
    }

    /// Run until quit is requested or the event stream is exhausted
    pub fn run(&mut self) -> Result<()> {
        let initialized = self.calculator.view_mut().initialize();
        let result = initialized.and_then(|()| self.event_loop());

        // Restore the terminal even when setup or the loop failed
        let cleanup = self.calculator.view_mut().cleanup();
        result.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        self.calculator.view_mut().render()?;

        while !self.should_quit && !self.event_stream.is_exhausted() {
            if !self.event_stream.poll(POLL_INTERVAL)? {
                continue;
            }
            match self.event_stream.read()? {
                Event::Key(key_event) => {
                    tracing::debug!("Received key event: {:?}", key_event);
                    self.process_key_event(key_event)?;
                }
                Event::Resize(width, height) => {
                    let view = self.calculator.view_mut();
                    view.update_size(width, height);
                    view.render()?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Handle one key press: map it, apply it, redraw
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        let context = CommandContext::new(self.calculator.view().legality());
        let events = self.command_registry.process_event(key_event, &context)?;
        if events.is_empty() {
            return Ok(());
        }

        for event in events {
            self.apply_calc_event(event);
        }

        if !self.should_quit {
            self.calculator.view_mut().render()?;
        }
        Ok(())
    }

    fn apply_calc_event(&mut self, event: CalcEvent) {
        if event == CalcEvent::Quit {
            self.should_quit = true;
            return;
        }

        match self.calculator.process_event(event) {
            Ok(()) => self.calculator.view_mut().clear_status_message(),
            Err(error) => {
                tracing::warn!("{} rejected: {}", event.name(), error);
                self.calculator.view_mut().set_status_message(error.to_string());
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The calculator's current top register
    pub fn top(&self) -> &BigNatural {
        self.calculator.model().top()
    }

    /// The calculator's current bottom register
    pub fn bottom(&self) -> &BigNatural {
        self.calculator.model().bottom()
    }

    pub fn view(&self) -> &TerminalCalcView<RS> {
        self.calculator.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::io::{MockEventStream, MockRenderStream};
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn app(keys: &str) -> AppController<MockEventStream, MockRenderStream> {
        AppController::with_io_streams(
            Settings::default(),
            MockEventStream::from_keys(keys),
            MockRenderStream::new(),
        )
        .unwrap()
    }

    #[test]
    fn app_controller_should_start_from_settings() {
        let settings = Settings {
            top: BigNatural::from(4u64),
            bottom: BigNatural::from(2u64),
            group_digits: false,
        };
        let app = AppController::with_io_streams(
            settings,
            MockEventStream::default(),
            MockRenderStream::new(),
        )
        .unwrap();

        assert_eq!(app.top(), &BigNatural::from(4u64));
        assert_eq!(app.bottom(), &BigNatural::from(2u64));
        assert!(app.view().legality().power);
        assert!(!app.should_quit());
    }

    #[test]
    fn process_key_event_should_ignore_key_release() {
        let mut app = app("");
        let release = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        app.process_key_event(release).unwrap();

        assert_eq!(app.bottom(), &BigNatural::zero());
    }

    #[test]
    fn run_should_stop_on_quit() {
        let mut app = app("12q34");

        app.run().unwrap();

        assert!(app.should_quit());
        assert_eq!(app.bottom(), &BigNatural::from(12u64));
    }

    #[test]
    fn run_should_stop_when_events_run_out() {
        let mut app = app("9\n");

        app.run().unwrap();

        assert!(!app.should_quit());
        assert_eq!(app.top(), &BigNatural::from(9u64));
        assert_eq!(app.bottom(), &BigNatural::from(9u64));
    }
}
