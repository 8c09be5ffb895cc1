use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Turn(Direction),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(Command::Turn(Direction::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::Turn(Direction::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::Turn(Direction::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::Turn(Direction::Right))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('l'), KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Up, KeyModifiers::SHIFT, None)]
    #[case(KeyCode::Enter, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] r: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), r);
    }
}
