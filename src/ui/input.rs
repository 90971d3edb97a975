//! 输入事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::storage::Store;

/// 根据当前模式和按键获取对应的 Action
///
/// 表单打开时所有学习快捷键都失效，按键只用于输入
pub fn get_action(mode: AppMode, key: KeyEvent, new_card_key: char) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        AppMode::Studying => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(' ') => Some(Action::Flip),
            KeyCode::Right => Some(Action::NextCard),
            KeyCode::Left => Some(Action::PreviousCard),
            KeyCode::Delete => Some(Action::DeleteCard),
            KeyCode::Char(c) if c == new_card_key => Some(Action::StartNewCard),
            _ => None,
        },
        AppMode::CreatingCard => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 鼠标左键点击命中上一帧记录的可点击区域
pub fn get_mouse_action(
    mode: AppMode,
    hit_areas: &[(Rect, Action)],
    mouse: MouseEvent,
) -> Option<Action> {
    if mode != AppMode::Studying {
        return None;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let pos = Position::new(mouse.column, mouse.row);
    hit_areas
        .iter()
        .find(|(area, _)| area.contains(pos))
        .map(|(_, action)| *action)
}

/// 处理终端事件，返回是否退出
pub fn handle_event<S: Store>(app: &mut App<S>, event: Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            get_action(app.mode, key, app.new_card_key)
        }
        Event::Mouse(mouse) => get_mouse_action(app.mode, &app.hit_areas, mouse),
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_study_keys() {
        let mode = AppMode::Studying;
        assert_eq!(get_action(mode, press(KeyCode::Char(' ')), 'n'), Some(Action::Flip));
        assert_eq!(get_action(mode, press(KeyCode::Right), 'n'), Some(Action::NextCard));
        assert_eq!(get_action(mode, press(KeyCode::Left), 'n'), Some(Action::PreviousCard));
        assert_eq!(get_action(mode, press(KeyCode::Delete), 'n'), Some(Action::DeleteCard));
        assert_eq!(get_action(mode, press(KeyCode::Char('n')), 'n'), Some(Action::StartNewCard));
        assert_eq!(get_action(mode, press(KeyCode::Char('q')), 'n'), Some(Action::Quit));
        assert_eq!(get_action(mode, press(KeyCode::Char('x')), 'n'), None);
    }

    #[test]
    fn test_custom_new_card_key() {
        let mode = AppMode::Studying;
        assert_eq!(get_action(mode, press(KeyCode::Char('n')), 'a'), None);
        assert_eq!(get_action(mode, press(KeyCode::Char('a')), 'a'), Some(Action::StartNewCard));
    }

    #[test]
    fn test_study_keys_suppressed_while_typing() {
        let mode = AppMode::CreatingCard;
        assert_eq!(get_action(mode, press(KeyCode::Char(' ')), 'n'), Some(Action::Input(' ')));
        assert_eq!(get_action(mode, press(KeyCode::Char('n')), 'n'), Some(Action::Input('n')));
        assert_eq!(get_action(mode, press(KeyCode::Char('q')), 'n'), Some(Action::Input('q')));
        assert_eq!(get_action(mode, press(KeyCode::Right), 'n'), None);
        assert_eq!(get_action(mode, press(KeyCode::Left), 'n'), None);
        assert_eq!(get_action(mode, press(KeyCode::Delete), 'n'), None);
        assert_eq!(get_action(mode, press(KeyCode::Esc), 'n'), Some(Action::Cancel));
        assert_eq!(get_action(mode, press(KeyCode::Enter), 'n'), Some(Action::Submit));
        assert_eq!(get_action(mode, press(KeyCode::Tab), 'n'), Some(Action::SwitchField));
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(get_action(AppMode::Studying, key, 'n'), Some(Action::Quit));
        assert_eq!(get_action(AppMode::CreatingCard, key, 'n'), Some(Action::Quit));
    }

    #[test]
    fn test_mouse_hits() {
        let areas = vec![
            (Rect::new(0, 0, 10, 5), Action::Flip),
            (Rect::new(0, 5, 5, 3), Action::PreviousCard),
        ];
        assert_eq!(get_mouse_action(AppMode::Studying, &areas, click(3, 2)), Some(Action::Flip));
        assert_eq!(
            get_mouse_action(AppMode::Studying, &areas, click(1, 6)),
            Some(Action::PreviousCard)
        );
        assert_eq!(get_mouse_action(AppMode::Studying, &areas, click(20, 20)), None);
        assert_eq!(get_mouse_action(AppMode::CreatingCard, &areas, click(3, 2)), None);

        let mut scroll = click(3, 2);
        scroll.kind = MouseEventKind::ScrollDown;
        assert_eq!(get_mouse_action(AppMode::Studying, &areas, scroll), None);
    }
}
