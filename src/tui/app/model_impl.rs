//! `Model` trait implementation for the course page TUI.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `CoursePageApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::CoursePageApp;
use crate::page::FormFocus;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for CoursePageApp {
    fn init() -> (Self, Option<Cmd>) {
        let (width, height) = crate::tui::get_initial_terminal_size();
        let model = crate::tui::get_launch_context()
            .map_or_else(Self::unconfigured, Self::from_context)
            .with_dimensions(width, height);

        // The first loads start when `AppMsg::Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_gallery());
        output.push_str(&self.render_breakdown());
        output.push_str(&self.render_sort_bar());
        output.push_str(&self.render_body());
        output.push_str(&self.render_notice());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl CoursePageApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        let form = self.page.form();
        if !form.is_open() {
            return InputContext::ReviewList;
        }
        match form.focus() {
            FormFocus::Stars(_) => InputContext::FormStars,
            FormFocus::Content => InputContext::FormContent,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap and padded with spaces to clear stale cells after a resize.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates one row to `width` visible columns.
///
/// ANSI escape sequences are copied through without counting towards the
/// width, and a reset is appended when a styled row is cut.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible = 0_usize;
    let mut in_escape = false;
    let mut styled = false;
    let mut truncated = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            styled = true;
            output.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            truncated = true;
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
    }

    if styled && truncated {
        output.push_str("\x1b[0m");
    }
    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    output
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unicode_width::UnicodeWidthStr;

    use super::pad_or_truncate_line;

    #[rstest]
    #[case::pads("abc", 5, "abc  ")]
    #[case::cuts("abcdef", 4, "abcd")]
    #[case::wide("你好", 3, "你 ")]
    fn plain_rows_fit_width(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        let row = pad_or_truncate_line(line, width);

        assert_eq!(row, expected);
        assert_eq!(row.width(), width);
    }

    #[test]
    fn styled_rows_keep_escapes_and_reset_when_cut() {
        let row = pad_or_truncate_line("\x1b[31mabcdef\x1b[0m", 3);

        assert_eq!(row, "\x1b[31mabc\x1b[0m");
    }
}
