//! Lifecycle and window handlers for the course page TUI.
//!
//! This module handles startup, terminal resize events, and high-level
//! lifecycle messages such as quit and help toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::CoursePageApp;
use crate::page::ReviewListController;
use crate::tui::messages::AppMsg;

impl CoursePageApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.adjust_scroll_to_cursor();
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Builds the command that emits the startup message.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Handles the synthetic startup message by loading the first page of
    /// reviews, then the course header.
    ///
    /// Subsequent `Initialized` messages are ignored.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }
        self.has_initialized = true;
        self.reload_with_summary(ReviewListController::begin_load)
    }
}
