#![forbid(unsafe_code)]

//! Interactive event loop.
//!
//! Polls the keyboard with a short timeout, applies the resulting
//! [`Action`] to the session, advances the session by the wall time since
//! the previous frame, and redraws. The terminal is restored when the loop
//! exits, whether normally or through an I/O error.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sortvis_core::{AlgorithmId, Comparison, LaneId};

use crate::render;
use crate::terminal::TerminalSession;

const FRAME: Duration = Duration::from_millis(16);
const SPEED_STEP: u32 = 5;
const SIZE_STEP: usize = 10;

/// A user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Pause,
    Reset,
    CycleDistribution,
    Faster,
    Slower,
    Smaller,
    Larger,
    NextAlgorithm(LaneId),
    ToggleSound,
    Quit,
}

/// Map a key press to an action.
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Start),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('d') => Some(Action::CycleDistribution),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Faster),
        KeyCode::Char('-') => Some(Action::Slower),
        KeyCode::Char('[') => Some(Action::Smaller),
        KeyCode::Char(']') => Some(Action::Larger),
        KeyCode::Char('a') => Some(Action::NextAlgorithm(LaneId::A)),
        KeyCode::Char('b') => Some(Action::NextAlgorithm(LaneId::B)),
        KeyCode::Char('s') => Some(Action::ToggleSound),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Apply `action` to `session`. Returns `false` when the loop should exit.
pub fn apply(session: &mut Comparison, action: Action) -> bool {
    tracing::debug!(?action, "key action");
    match action {
        Action::Start => session.start(),
        Action::Pause => session.pause(),
        Action::Reset => session.reset(),
        Action::CycleDistribution => {
            let next = session.config().distribution.next();
            session.set_distribution(next);
        }
        Action::Faster => {
            let speed = session.config().speed.saturating_add(SPEED_STEP);
            session.set_speed(speed);
        }
        Action::Slower => {
            let speed = session.config().speed.saturating_sub(SPEED_STEP);
            session.set_speed(speed);
        }
        Action::Smaller => {
            let size = session.config().size.saturating_sub(SIZE_STEP);
            session.set_size(size);
        }
        Action::Larger => {
            let size = session.config().size.saturating_add(SIZE_STEP);
            session.set_size(size);
        }
        Action::NextAlgorithm(lane) => {
            let next = next_algorithm(session.lane(lane).algorithm());
            session.set_algorithm(lane, next);
        }
        Action::ToggleSound => {
            let enabled = session.sound_active();
            session.set_sound(!enabled);
        }
        Action::Quit => return false,
    }
    true
}

/// The id after `id` in [`AlgorithmId::ALL`], wrapping at the end.
fn next_algorithm(id: AlgorithmId) -> AlgorithmId {
    let idx = AlgorithmId::ALL.iter().position(|a| *a == id).unwrap_or(0);
    AlgorithmId::ALL[(idx + 1) % AlgorithmId::ALL.len()]
}

/// Run the interactive front end until the user quits.
pub fn run(mut session: Comparison) -> io::Result<()> {
    let terminal = TerminalSession::new()?;
    let mut stdout = io::stdout();
    let mut last = Instant::now();

    loop {
        let (width, height) = terminal.size()?;
        render::draw(&mut stdout, &session, width, height)?;
        stdout.flush()?;

        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key)
            && !apply(&mut session, action)
        {
            break;
        }

        let now = Instant::now();
        session.tick(now.duration_since(last));
        last = now;
    }

    tracing::info!("quit requested");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_core::{Distribution, Status, VisualizerConfig};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> Comparison {
        Comparison::new(VisualizerConfig {
            sound_enabled: false,
            ..VisualizerConfig::default()
        })
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(action_for(press(KeyCode::Char(' '))), Some(Action::Start));
        assert_eq!(action_for(press(KeyCode::Enter)), Some(Action::Start));
        assert_eq!(action_for(press(KeyCode::Char('p'))), Some(Action::Pause));
        assert_eq!(action_for(press(KeyCode::Char('+'))), Some(Action::Faster));
        assert_eq!(action_for(press(KeyCode::Char('['))), Some(Action::Smaller));
        assert_eq!(action_for(press(KeyCode::Char(']'))), Some(Action::Larger));
        assert_eq!(
            action_for(press(KeyCode::Char('b'))),
            Some(Action::NextAlgorithm(LaneId::B))
        );
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl('c')), Some(Action::Quit));
        assert_eq!(action_for(ctrl('r')), None);
    }

    #[test]
    fn speed_actions_clamp() {
        let mut s = session();
        for _ in 0..30 {
            apply(&mut s, Action::Faster);
        }
        assert_eq!(s.config().speed, 100);
        for _ in 0..30 {
            apply(&mut s, Action::Slower);
        }
        assert_eq!(s.config().speed, 1);
    }

    #[test]
    fn distribution_cycles_and_resets() {
        let mut s = session();
        apply(&mut s, Action::Start);
        assert_eq!(s.status(), Status::Running);
        apply(&mut s, Action::CycleDistribution);
        assert_eq!(s.config().distribution, Distribution::Ascending);
        assert_eq!(s.status(), Status::Idle);
    }

    #[test]
    fn size_steps_regenerate_and_reset() {
        let mut s = session();
        apply(&mut s, Action::Start);
        apply(&mut s, Action::Larger);
        assert_eq!(s.config().size, 40);
        assert_eq!(s.initial().len(), 40);
        assert_eq!(s.lane(LaneId::A).step().values().len(), 40);
        assert_eq!(s.status(), Status::Idle);

        apply(&mut s, Action::Start);
        apply(&mut s, Action::Smaller);
        assert_eq!(s.config().size, 30);
        assert_eq!(s.status(), Status::Idle);
    }

    #[test]
    fn size_steps_clamp() {
        let mut s = session();
        for _ in 0..30 {
            apply(&mut s, Action::Larger);
        }
        assert_eq!(s.config().size, 200);
        for _ in 0..30 {
            apply(&mut s, Action::Smaller);
        }
        assert_eq!(s.config().size, 10);
    }

    #[test]
    fn algorithm_keys_advance_one_lane_and_reset() {
        let mut s = session();
        apply(&mut s, Action::Start);
        s.tick(Duration::from_millis(50));
        apply(&mut s, Action::NextAlgorithm(LaneId::A));
        assert_eq!(s.lane(LaneId::A).algorithm(), AlgorithmId::Selection);
        assert_eq!(s.lane(LaneId::B).algorithm(), AlgorithmId::Quick);
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.lane(LaneId::A).metrics().comparisons, 0);

        apply(&mut s, Action::Start);
        apply(&mut s, Action::NextAlgorithm(LaneId::B));
        assert_eq!(s.lane(LaneId::B).algorithm(), AlgorithmId::Heap);
        assert_eq!(s.status(), Status::Idle);
    }

    #[test]
    fn algorithm_cycle_wraps() {
        let last = AlgorithmId::ALL[AlgorithmId::ALL.len() - 1];
        assert_eq!(next_algorithm(last), AlgorithmId::ALL[0]);
    }

    #[test]
    fn sound_toggles() {
        let mut s = session();
        assert!(!s.sound_active());
        apply(&mut s, Action::ToggleSound);
        assert!(s.sound_active());
        apply(&mut s, Action::ToggleSound);
        assert!(!s.sound_active());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut s = session();
        assert!(apply(&mut s, Action::Pause));
        assert!(!apply(&mut s, Action::Quit));
    }
}
