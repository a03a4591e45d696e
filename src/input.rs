use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::game::Engine;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector for this direction; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Starts a fresh episode from Idle or GameOver.
    Start,
    /// Abandons the current episode and returns to Idle.
    Stop,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates a terminal key press into a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => {
            GameInput::Direction(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => {
            GameInput::Direction(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => {
            GameInput::Direction(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => {
            GameInput::Direction(Direction::Right)
        }
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Start,
        KeyCode::Esc => GameInput::Stop,
        KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Routes host input events into the engine.
///
/// Direction intents only reach the snake's pending-heading slot; the
/// reversal guard itself lives in [`crate::snake::Snake::set_pending_heading`].
#[derive(Debug, Default, Clone, Copy)]
pub struct InputRouter;

impl InputRouter {
    /// Applies `input` to `engine`. Returns `false` when the host should exit.
    pub fn route<R: rand::Rng>(self, engine: &mut Engine<R>, input: GameInput) -> bool {
        trace!(?input, "routing input");
        match input {
            GameInput::Direction(direction) => engine.set_direction(direction),
            GameInput::Start => {
                if !engine.phase().is_running() {
                    engine.start();
                }
            }
            GameInput::Stop => engine.stop(),
            GameInput::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use crate::config::EngineConfig;
    use crate::game::{Engine, GamePhase};

    use super::{Direction, GameInput, InputRouter, direction_change_is_valid, map_key};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrows_and_letters_map_to_directions() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('j'))),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(map_key(press(KeyCode::Enter)), Some(GameInput::Start));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Stop));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_and_key_release_is_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(GameInput::Quit));

        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn router_starts_stops_and_quits() {
        let mut engine =
            Engine::with_seed(EngineConfig::default(), 9).expect("default config is valid");
        let router = InputRouter;

        assert!(router.route(&mut engine, GameInput::Start));
        assert_eq!(engine.phase(), GamePhase::Running);

        assert!(router.route(&mut engine, GameInput::Stop));
        assert_eq!(engine.phase(), GamePhase::Idle);

        assert!(!router.route(&mut engine, GameInput::Quit));
    }

    #[test]
    fn start_while_running_does_not_reset_the_episode() {
        let mut engine =
            Engine::with_seed(EngineConfig::default(), 9).expect("default config is valid");
        let router = InputRouter;

        router.route(&mut engine, GameInput::Start);
        engine.tick();
        router.route(&mut engine, GameInput::Start);

        assert_eq!(engine.snapshot().tick_count, 1);
    }
}
