//! # Mock I/O Implementations
//!
//! Scripted input and recorded output for driving the calculator without a
//! terminal.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Attribute;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Event stream replaying a fixed queue of events
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// One plain key press per character, `\n` mapped to Enter
    pub fn from_keys(keys: &str) -> Self {
        let events = keys
            .chars()
            .map(|ch| {
                let code = match ch {
                    '\n' => KeyCode::Enter,
                    '\t' => KeyCode::Tab,
                    other => KeyCode::Char(other),
                };
                Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
            })
            .collect();
        Self::new(events)
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Recorded render command
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    ClearLine,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    SetAttribute(Attribute),
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug, Default)]
struct RenderState {
    commands: Vec<RenderCommand>,
    screen: String,
}

/// Shared handle on everything a [`MockRenderStream`] received
///
/// Stays readable after the stream itself has been moved into a view.
#[derive(Debug, Clone, Default)]
pub struct RenderLog(Arc<Mutex<RenderState>>);

impl RenderLog {
    fn lock(&self) -> MutexGuard<'_, RenderState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.lock().commands.push(command);
    }

    pub fn commands(&self) -> Vec<RenderCommand> {
        self.lock().commands.clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().commands.contains(command)
    }

    /// Text written since the last screen clear, one line per cursor move
    pub fn screen_text(&self) -> String {
        self.lock().screen.clone()
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.commands.clear();
        state.screen.clear();
    }
}

/// Render stream that records instead of drawing
#[derive(Debug)]
pub struct MockRenderStream {
    log: RenderLog,
    terminal_size: TerminalSize,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
    fail_alternate_screen: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            log: RenderLog::default(),
            terminal_size: size,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
            fail_alternate_screen: false,
        }
    }

    /// Make every `enter_alternate_screen` call fail
    pub fn with_failing_alternate_screen(mut self) -> Self {
        self.fail_alternate_screen = true;
        self
    }

    /// Handle on the recorded output
    pub fn log(&self) -> RenderLog {
        self.log.clone()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut state = self.log.lock();
        state.screen.push_str(&String::from_utf8_lossy(buf));
        state.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.log.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut state = self.log.lock();
        state.commands.push(RenderCommand::ClearScreen);
        state.screen.clear();
        Ok(())
    }

    fn clear_line(&mut self) -> Result<()> {
        self.log.record(RenderCommand::ClearLine);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut state = self.log.lock();
        state.commands.push(RenderCommand::MoveCursor(x, y));
        if !state.screen.is_empty() {
            state.screen.push('\n');
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.log.record(RenderCommand::HideCursor);
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.log.record(RenderCommand::ShowCursor);
        self.cursor_visible = true;
        Ok(())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        self.log.record(RenderCommand::SetAttribute(attribute));
        Ok(())
    }

    fn size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        if self.fail_alternate_screen {
            anyhow::bail!("Alternate screen unavailable");
        }
        self.log.record(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.log.record(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.log.record(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.log.record(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_event_stream_should_replay_keys_in_order() {
        let mut stream = MockEventStream::from_keys("1+\n");

        assert!(stream.poll(Duration::from_millis(0)).unwrap());
        let codes: Vec<KeyCode> = std::iter::from_fn(|| match stream.read() {
            Ok(Event::Key(key)) => Some(key.code),
            _ => None,
        })
        .collect();

        assert_eq!(
            codes,
            vec![KeyCode::Char('1'), KeyCode::Char('+'), KeyCode::Enter]
        );
        assert!(stream.is_exhausted());
        assert!(!stream.poll(Duration::from_millis(0)).unwrap());
    }

    #[test]
    fn mock_render_stream_should_record_commands() {
        let mut stream = MockRenderStream::new();
        let log = stream.log();

        stream.clear_screen().unwrap();
        stream.move_cursor(10, 20).unwrap();
        stream.set_attribute(Attribute::Dim).unwrap();
        stream.write_all(b"42").unwrap();
        stream.flush().unwrap();

        assert_eq!(
            log.commands(),
            vec![
                RenderCommand::ClearScreen,
                RenderCommand::MoveCursor(10, 20),
                RenderCommand::SetAttribute(Attribute::Dim),
                RenderCommand::Write(b"42".to_vec()),
                RenderCommand::Flush,
            ]
        );
        assert_eq!(log.screen_text(), "42");
    }

    #[test]
    fn mock_render_stream_should_track_terminal_state() {
        let mut stream = MockRenderStream::with_size((120, 40));

        assert_eq!(stream.size().unwrap(), (120, 40));
        assert!(stream.is_cursor_visible());

        stream.hide_cursor().unwrap();
        stream.enable_raw_mode().unwrap();
        stream.enter_alternate_screen().unwrap();

        assert!(!stream.is_cursor_visible());
        assert!(stream.is_raw_mode());
        assert!(stream.is_alternate_screen());
    }
}
