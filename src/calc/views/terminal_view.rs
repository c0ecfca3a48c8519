//! # Terminal View
//!
//! Full-screen calculator display drawn through a [`RenderStream`].
//!
//! ```text
//!  nncalc
//!
//!   top                                   1024
//!   bottom                                  10
//!
//!  [0-9] digit  [c] clear  [s] swap  [Enter] enter  [q] quit
//!  [+] add  [-] sub  [*] mul  [/] div  [^] pow  [r] root
//!                                                  (status line)
//! ```
//!
//! Update calls only store state; nothing reaches the terminal until
//! [`TerminalCalcView::render`] runs, so one synchronization produces one
//! redraw.

use super::{CalcView, Legality};
use crate::calc::io::{RenderStream, TerminalSize};
use crate::calc::natural::NaturalNumber;
use anyhow::Result;
use crossterm::style::Attribute;
use std::io::Write;

const TITLE: &str = " nncalc";
const TOP_LABEL: &str = "  top     ";
const BOTTOM_LABEL: &str = "  bottom  ";
const ELLIPSIS: char = '…';

const TITLE_ROW: u16 = 0;
const TOP_ROW: u16 = 2;
const BOTTOM_ROW: u16 = 3;
const ENTRY_KEYS_ROW: u16 = 5;
const OPERATION_KEYS_ROW: u16 = 6;

/// Which legality flag, if any, enables a legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Always,
    Subtract,
    Divide,
    Power,
    Root,
}

const ENTRY_KEYS: &[(&str, Gate)] = &[
    ("[0-9] digit", Gate::Always),
    ("[c] clear", Gate::Always),
    ("[s] swap", Gate::Always),
    ("[Enter] enter", Gate::Always),
    ("[q] quit", Gate::Always),
];

const OPERATION_KEYS: &[(&str, Gate)] = &[
    ("[+] add", Gate::Always),
    ("[-] sub", Gate::Subtract),
    ("[*] mul", Gate::Always),
    ("[/] div", Gate::Divide),
    ("[^] pow", Gate::Power),
    ("[r] root", Gate::Root),
];

/// Calculator view rendering to a terminal
pub struct TerminalCalcView<RS: RenderStream> {
    render_stream: RS,
    terminal_size: TerminalSize,
    top: String,
    bottom: String,
    legality: Legality,
    group_digits: bool,
    status_message: Option<String>,
}

impl<RS: RenderStream> TerminalCalcView<RS> {
    /// Create a view drawing to `render_stream`, sized from the stream
    pub fn new(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.size()?;
        Ok(Self {
            render_stream,
            terminal_size,
            top: String::new(),
            bottom: String::new(),
            legality: Legality::default(),
            group_digits: false,
            status_message: None,
        })
    }

    /// Separate register digits in groups of three
    pub fn with_digit_grouping(mut self, group_digits: bool) -> Self {
        self.group_digits = group_digits;
        self
    }

    /// Prepare the terminal: raw mode, alternate screen, hidden cursor
    pub fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        Ok(())
    }

    /// Restore the terminal to its state before [`Self::initialize`]
    ///
    /// Every step is attempted; the first failure is reported.
    pub fn cleanup(&mut self) -> Result<()> {
        let cursor = self.render_stream.show_cursor();
        let screen = self.render_stream.leave_alternate_screen();
        let raw_mode = self.render_stream.disable_raw_mode();
        cursor.and(screen).and(raw_mode)
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Flags from the last synchronization
    pub fn legality(&self) -> Legality {
        self.legality
    }

    /// Top register text as last pushed, ungrouped
    pub fn top_text(&self) -> &str {
        &self.top
    }

    /// Bottom register text as last pushed, ungrouped
    pub fn bottom_text(&self) -> &str {
        &self.bottom
    }

    /// Redraw the whole screen from the stored state
    pub fn render(&mut self) -> Result<()> {
        let (width, height) = self.terminal_size;
        tracing::trace!("render: {}x{}", width, height);

        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        self.render_stream.move_cursor(0, TITLE_ROW)?;
        self.render_stream.set_attribute(Attribute::Bold)?;
        write!(self.render_stream, "{TITLE}")?;
        self.render_stream.set_attribute(Attribute::Reset)?;

        let value_width = usize::from(width).saturating_sub(TOP_LABEL.len() + 1);
        let top = fit_register(&self.display_text(&self.top), value_width);
        let bottom = fit_register(&self.display_text(&self.bottom), value_width);
        self.render_register(TOP_ROW, TOP_LABEL, &top)?;
        self.render_register(BOTTOM_ROW, BOTTOM_LABEL, &bottom)?;

        self.render_keys(ENTRY_KEYS_ROW, ENTRY_KEYS)?;
        self.render_keys(OPERATION_KEYS_ROW, OPERATION_KEYS)?;

        if let Some(message) = self.status_message.clone() {
            let row = height.saturating_sub(1).max(OPERATION_KEYS_ROW + 1);
            self.render_stream.move_cursor(0, row)?;
            self.render_stream.set_attribute(Attribute::Reverse)?;
            write!(self.render_stream, " {message} ")?;
            self.render_stream.set_attribute(Attribute::Reset)?;
            self.render_stream.clear_line()?;
        }

        self.render_stream.flush()?;
        Ok(())
    }

    fn display_text(&self, text: &str) -> String {
        if self.group_digits {
            group_digits(text)
        } else {
            text.to_string()
        }
    }

    fn render_register(&mut self, row: u16, label: &str, value: &str) -> Result<()> {
        self.render_stream.move_cursor(0, row)?;
        write!(self.render_stream, "{label}{value}")?;
        self.render_stream.clear_line()?;
        Ok(())
    }

    fn render_keys(&mut self, row: u16, keys: &[(&str, Gate)]) -> Result<()> {
        self.render_stream.move_cursor(0, row)?;
        for (label, gate) in keys {
            let enabled = self.is_enabled(*gate);
            write!(self.render_stream, " ")?;
            if !enabled {
                self.render_stream.set_attribute(Attribute::Dim)?;
                self.render_stream.set_attribute(Attribute::CrossedOut)?;
            }
            write!(self.render_stream, "{label}")?;
            if !enabled {
                self.render_stream.set_attribute(Attribute::Reset)?;
            }
            write!(self.render_stream, " ")?;
        }
        self.render_stream.clear_line()?;
        Ok(())
    }

    fn is_enabled(&self, gate: Gate) -> bool {
        match gate {
            Gate::Always => true,
            Gate::Subtract => self.legality.subtract,
            Gate::Divide => self.legality.divide,
            Gate::Power => self.legality.power,
            Gate::Root => self.legality.root,
        }
    }
}

impl<N: NaturalNumber, RS: RenderStream> CalcView<N> for TerminalCalcView<RS> {
    fn update_top_display(&mut self, value: &N) {
        self.top = value.to_string();
    }

    fn update_bottom_display(&mut self, value: &N) {
        self.bottom = value.to_string();
    }

    fn update_subtract_allowed(&mut self, allowed: bool) {
        self.legality.subtract = allowed;
    }

    fn update_divide_allowed(&mut self, allowed: bool) {
        self.legality.divide = allowed;
    }

    fn update_root_allowed(&mut self, allowed: bool) {
        self.legality.root = allowed;
    }

    fn update_power_allowed(&mut self, allowed: bool) {
        self.legality.power = allowed;
    }
}

/// Right-align `text` in `width` columns, keeping the least significant
/// digits when it does not fit
fn fit_register(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:>width$}");
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("{ELLIPSIS}{tail}")
}

/// Insert `,` between groups of three digits, counting from the right
fn group_digits(text: &str) -> String {
    let digits: Vec<char> = text.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::io::{MockRenderStream, RenderCommand};
    use crate::calc::natural::BigNatural;

    fn view_with_log(
        size: TerminalSize,
    ) -> (TerminalCalcView<MockRenderStream>, crate::calc::io::RenderLog) {
        let stream = MockRenderStream::with_size(size);
        let log = stream.log();
        (TerminalCalcView::new(stream).unwrap(), log)
    }

    #[test]
    fn fit_register_should_right_align_short_values() {
        assert_eq!(fit_register("42", 5), "   42");
    }

    #[test]
    fn fit_register_should_keep_least_significant_digits() {
        assert_eq!(fit_register("123456789", 5), "…6789");
        assert_eq!(fit_register("123", 0), "");
    }

    #[test]
    fn group_digits_should_separate_thousands() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn terminal_view_should_take_size_from_stream() {
        let (view, _) = view_with_log((100, 30));
        assert_eq!(view.terminal_size(), (100, 30));
    }

    #[test]
    fn render_should_draw_both_registers() {
        let (mut view, log) = view_with_log((80, 24));
        CalcView::<BigNatural>::update_top_display(&mut view, &BigNatural::from(1024u64));
        CalcView::<BigNatural>::update_bottom_display(&mut view, &BigNatural::from(7u64));

        view.render().unwrap();

        let screen = log.screen_text();
        let top_line = screen.lines().find(|l| l.starts_with(TOP_LABEL)).unwrap();
        let bottom_line = screen
            .lines()
            .find(|l| l.starts_with(BOTTOM_LABEL))
            .unwrap();
        assert!(top_line.trim_end().ends_with("1024"));
        assert!(bottom_line.trim_end().ends_with('7'));
    }

    #[test]
    fn render_should_dim_disabled_operations() {
        let (mut view, log) = view_with_log((80, 24));
        CalcView::<BigNatural>::update_divide_allowed(&mut view, false);

        view.render().unwrap();

        assert!(log.has_command(&RenderCommand::SetAttribute(Attribute::Dim)));
    }

    #[test]
    fn render_should_not_dim_when_everything_is_allowed() {
        let (mut view, log) = view_with_log((80, 24));
        CalcView::<BigNatural>::update_subtract_allowed(&mut view, true);
        CalcView::<BigNatural>::update_divide_allowed(&mut view, true);
        CalcView::<BigNatural>::update_root_allowed(&mut view, true);
        CalcView::<BigNatural>::update_power_allowed(&mut view, true);

        view.render().unwrap();

        assert_eq!(view.legality(), Legality::all());
        assert!(!log.has_command(&RenderCommand::SetAttribute(Attribute::Dim)));
    }

    #[test]
    fn render_should_show_status_message() {
        let (mut view, log) = view_with_log((80, 24));
        view.set_status_message("invalid operation");

        view.render().unwrap();

        assert!(log.screen_text().contains("invalid operation"));
        assert!(log.has_command(&RenderCommand::MoveCursor(0, 23)));
    }

    #[test]
    fn render_should_group_digits_when_enabled() {
        let stream = MockRenderStream::new();
        let log = stream.log();
        let mut view = TerminalCalcView::new(stream)
            .unwrap()
            .with_digit_grouping(true);
        CalcView::<BigNatural>::update_top_display(&mut view, &BigNatural::from(1000u64));
        CalcView::<BigNatural>::update_bottom_display(&mut view, &BigNatural::from(1234567u64));

        view.render().unwrap();

        assert!(log.screen_text().contains("1,000"));
        assert!(log.screen_text().contains("1,234,567"));
        assert_eq!(view.top_text(), "1000");
        assert_eq!(view.bottom_text(), "1234567");
    }

    #[test]
    fn initialize_and_cleanup_should_toggle_terminal_modes() {
        let (mut view, log) = view_with_log((80, 24));

        view.initialize().unwrap();
        view.cleanup().unwrap();

        let commands = log.commands();
        assert_eq!(commands[0], RenderCommand::EnableRawMode);
        assert_eq!(commands[1], RenderCommand::EnterAlternateScreen);
        assert!(commands.contains(&RenderCommand::LeaveAlternateScreen));
        assert_eq!(commands.last(), Some(&RenderCommand::DisableRawMode));
    }

    #[test]
    fn cleanup_should_disable_raw_mode_after_partial_initialize() {
        let stream = MockRenderStream::new().with_failing_alternate_screen();
        let log = stream.log();
        let mut view = TerminalCalcView::new(stream).unwrap();

        assert!(view.initialize().is_err());
        view.cleanup().unwrap();

        assert_eq!(
            log.commands(),
            vec![
                RenderCommand::EnableRawMode,
                RenderCommand::ShowCursor,
                RenderCommand::LeaveAlternateScreen,
                RenderCommand::DisableRawMode,
            ]
        );
    }
}
