//! Terminal user interface for a course's review page.
//!
//! The page is a bubbletea-rs program following the Model-View-Update
//! pattern:
//!
//! - **Model**: [`app::CoursePageApp`] owns a [`crate::page::CoursePage`]
//! - **View**: components render strings from borrowed state
//! - **Update**: key presses and request completions arrive as
//!   [`messages::AppMsg`] values
//!
//! Requests run as commands; their results come back as messages and are
//! applied through the page's `finish_*` methods, so the single-flight
//! guard on the review list holds across the asynchronous boundary.
//!
//! # Launching
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, call [`set_launch_context`] with the gateway and page
//! settings before starting the program.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod storage;

pub use app::CoursePageApp;
pub use storage::{LaunchContext, set_initial_terminal_size, set_launch_context};
pub(crate) use storage::{get_initial_terminal_size, get_launch_context};
