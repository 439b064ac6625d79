//! Input handling for the TUI application.
//!
//! Key events are translated into application messages according to which
//! part of the page has focus.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Part of the page that receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Review list, gallery and sort controls.
    ReviewList,
    /// A star row in the open review form.
    FormStars,
    /// The review text in the open review form.
    FormContent,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::ReviewList => map_review_list_key(key),
        InputContext::FormStars => map_form_stars_key(key),
        InputContext::FormContent => map_form_content_key(key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_review_list_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('n') => Some(AppMsg::LoadMore),
        KeyCode::Char('s') => Some(AppMsg::CycleSort),
        KeyCode::Char('r') => Some(AppMsg::Reload),
        KeyCode::Char('<' | ',') | KeyCode::Left => Some(AppMsg::GalleryPrevious),
        KeyCode::Char('>' | '.') | KeyCode::Right => Some(AppMsg::GalleryNext),
        KeyCode::Char('w') => Some(AppMsg::OpenForm),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Esc => Some(AppMsg::DismissNotice),
        _ => None,
    }
}

fn map_form_stars_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if let Some(shared) = map_form_shared_key(key) {
        return Some(shared);
    }
    match key.key {
        KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::HoverLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::HoverRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::CommitStar),
        KeyCode::Char(digit @ '1'..='5') => digit
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(AppMsg::QuickSelect),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_form_content_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if let Some(shared) = map_form_shared_key(key) {
        return Some(shared);
    }
    match key.key {
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Enter => Some(AppMsg::InsertChar('\n')),
        KeyCode::Char(character) if !has_control(key) => Some(AppMsg::InsertChar(character)),
        _ => None,
    }
}

/// Keys with the same meaning anywhere in the form.
fn map_form_shared_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('s') if has_control(key) => Some(AppMsg::Submit),
        KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::Esc => Some(AppMsg::CloseForm),
        _ => None,
    }
}

const fn has_control(key: &bubbletea_rs::event::KeyMsg) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn ctrl(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), "Quit")]
    #[case::down(KeyCode::Char('j'), "CursorDown")]
    #[case::more(KeyCode::Char('n'), "LoadMore")]
    #[case::sort(KeyCode::Char('s'), "CycleSort")]
    #[case::reload(KeyCode::Char('r'), "Reload")]
    #[case::gallery_next(KeyCode::Char('>'), "GalleryNext")]
    #[case::gallery_previous(KeyCode::Char('<'), "GalleryPrevious")]
    #[case::write(KeyCode::Char('w'), "OpenForm")]
    fn review_list_keys(#[case] code: KeyCode, #[case] expected: &str) {
        let message = map_key_to_message_with_context(&key(code), InputContext::ReviewList)
            .expect("key should map");

        assert_eq!(format!("{message:?}"), expected);
    }

    #[rstest]
    #[case::one('1', 1)]
    #[case::five('5', 5)]
    fn digits_quick_select_in_star_rows(#[case] digit: char, #[case] expected: u8) {
        let message =
            map_key_to_message_with_context(&key(KeyCode::Char(digit)), InputContext::FormStars);

        assert!(matches!(message, Some(AppMsg::QuickSelect(value)) if value == expected));
    }

    #[test]
    fn digits_outside_range_are_ignored_in_star_rows() {
        let message =
            map_key_to_message_with_context(&key(KeyCode::Char('6')), InputContext::FormStars);

        assert!(message.is_none());
    }

    #[test]
    fn content_context_types_letters_that_are_shortcuts_elsewhere() {
        let message =
            map_key_to_message_with_context(&key(KeyCode::Char('q')), InputContext::FormContent);

        assert!(matches!(message, Some(AppMsg::InsertChar('q'))));
    }

    #[rstest]
    #[case::stars(InputContext::FormStars)]
    #[case::content(InputContext::FormContent)]
    fn control_s_submits_from_any_form_field(#[case] context: InputContext) {
        let message = map_key_to_message_with_context(&ctrl(KeyCode::Char('s')), context);

        assert!(matches!(message, Some(AppMsg::Submit)));
    }

    #[rstest]
    #[case::stars(InputContext::FormStars)]
    #[case::content(InputContext::FormContent)]
    fn escape_closes_form(#[case] context: InputContext) {
        let message = map_key_to_message_with_context(&key(KeyCode::Esc), context);

        assert!(matches!(message, Some(AppMsg::CloseForm)));
    }
}
