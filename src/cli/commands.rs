//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use super::palette;
use super::script::{ScriptCommand, Session};
use crate::color::Color;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::{GridAction, ReplayTracker, StepKind, UndoTracker};
use crate::stores::DrawStyle;

type SharedAction = Arc<GridAction>;

/// Outcome of running a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Final colours, row by row
    pub colors: Vec<Vec<Color>>,
    pub undo_count: usize,
    pub redo_count: usize,
    /// Actions recorded for replay
    pub recorded: usize,
    /// Whether replaying on a fresh grid reproduced `colors`
    pub replay_matches: Option<bool>,
}

/// A grid together with the trackers recording what happens to it
struct PaintSession {
    grid: Grid,
    undo: UndoTracker<SharedAction>,
    replay: ReplayTracker<SharedAction>,
}

impl PaintSession {
    fn new(session: &Session) -> Self {
        let caps = &session.capacities;
        Self {
            grid: Grid::with_capacities(session.style, session.width, session.height, caps),
            undo: UndoTracker::with_capacity(caps.undo_levels),
            replay: ReplayTracker::with_capacity(caps.replay_actions),
        }
    }

    fn record(&mut self, action: GridAction) -> Result<()> {
        if action.is_empty() {
            debug!("stroke changed nothing, not recorded");
            return Ok(());
        }
        let action = Arc::new(action);
        self.undo.add_action(Arc::clone(&action));
        self.replay.add_action(action, false)
    }

    fn execute(&mut self, command: &ScriptCommand) -> Result<()> {
        match command {
            ScriptCommand::Paint { x, y, layer } => {
                let layer = palette::find(layer)?;
                let action = GridAction::stroke(&mut self.grid, *x, *y, &layer, StepKind::Add)?;
                self.record(action)
            }
            ScriptCommand::Erase { x, y, layer } => {
                let layer = palette::find(layer)?;
                let action = GridAction::stroke(&mut self.grid, *x, *y, &layer, StepKind::Erase)?;
                self.record(action)
            }
            ScriptCommand::Special => {
                let action = GridAction::special(&mut self.grid);
                self.record(action)
            }
            ScriptCommand::Undo => match self.undo.undo(&mut self.grid) {
                Some(action) => self.replay.add_action(Arc::clone(action), true),
                None => {
                    debug!("nothing to undo");
                    Ok(())
                }
            },
            ScriptCommand::Redo => match self.undo.redo(&mut self.grid) {
                Some(action) => self.replay.add_action(Arc::clone(action), false),
                None => {
                    debug!("nothing to redo");
                    Ok(())
                }
            },
            ScriptCommand::Brush { delta } => {
                for _ in 0..delta.unsigned_abs() {
                    if *delta > 0 {
                        self.grid.increase_brush_size();
                    } else {
                        self.grid.decrease_brush_size();
                    }
                }
                Ok(())
            }
        }
    }

    /// Drain the replay log onto a fresh grid of the same shape
    fn replay_on_fresh_grid(&mut self, session: &Session) -> Grid {
        let mut fresh = Grid::with_capacities(
            session.style,
            session.width,
            session.height,
            &session.capacities,
        );
        self.replay.start_replay();
        let mut played = 0;
        while !self.replay.play_next_action(&mut fresh) {
            played += 1;
        }
        info!("Replayed {} actions", played);
        fresh
    }
}

/// Run every command of `session`, optionally replaying it afterwards.
pub fn run_session(session: &Session, replay: bool) -> Result<SessionReport> {
    let mut state = PaintSession::new(session);
    for command in &session.commands {
        state.execute(command)?;
    }

    let colors = state.grid.render(session.timestamp);
    let undo_count = state.undo.undo_count();
    let redo_count = state.undo.redo_count();
    let recorded = state.replay.len();

    let replay_matches = if replay {
        let fresh = state.replay_on_fresh_grid(session);
        Some(fresh.render(session.timestamp) == colors)
    } else {
        None
    };

    Ok(SessionReport {
        colors,
        undo_count,
        redo_count,
        recorded,
        replay_matches,
    })
}

/// Load a session file, apply overrides and print the result.
pub fn run(
    path: &Path,
    style: Option<DrawStyle>,
    width: Option<usize>,
    height: Option<usize>,
    replay: bool,
) -> Result<()> {
    info!("Running session: {}", path.display());

    let mut session = Session::load(path)?;
    if let Some(style) = style {
        session.style = style;
    }
    if let Some(width) = width {
        session.width = width;
    }
    if let Some(height) = height {
        session.height = height;
    }
    session.validate()?;

    let report = run_session(&session, replay)?;

    println!(
        "Grid {}x{} ({} style)",
        session.width, session.height, session.style
    );
    println!("{:-<60}", "");
    for row in &report.colors {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("{}", cells.join(" "));
    }
    println!("{:-<60}", "");
    println!(
        "Undo stack: {} | Redo stack: {} | Recorded: {}",
        report.undo_count, report.redo_count, report.recorded
    );
    if let Some(matches) = report.replay_matches {
        println!(
            "Replay: {}",
            if matches { "matches" } else { "differs" }
        );
    }

    Ok(())
}

/// Print the built-in layers.
pub fn list_layers() -> Result<()> {
    println!("Built-in layers:");
    for layer in palette::palette() {
        println!("  {}: {}", layer.index(), layer.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(style: DrawStyle, commands: Vec<ScriptCommand>) -> Session {
        Session {
            style,
            width: 3,
            height: 3,
            timestamp: 0,
            capacities: Default::default(),
            commands,
        }
    }

    fn paint(x: usize, y: usize, layer: &str) -> ScriptCommand {
        ScriptCommand::Paint {
            x,
            y,
            layer: layer.to_string(),
        }
    }

    #[test]
    fn test_undo_restores_blank_grid() {
        let report = run_session(
            &session(DrawStyle::Set, vec![paint(1, 1, "red"), ScriptCommand::Undo]),
            false,
        )
        .unwrap();

        assert!(report.colors.iter().flatten().all(|&c| c == Color::WHITE));
        assert_eq!(report.undo_count, 0);
        assert_eq!(report.redo_count, 1);
        assert_eq!(report.recorded, 2);
    }

    #[test]
    fn test_replay_matches_for_set() {
        let report = run_session(
            &session(
                DrawStyle::Set,
                vec![
                    paint(0, 0, "blue"),
                    ScriptCommand::Special,
                    paint(2, 2, "green"),
                    ScriptCommand::Undo,
                    ScriptCommand::Redo,
                ],
            ),
            true,
        )
        .unwrap();

        assert_eq!(report.recorded, 5);
        assert_eq!(report.replay_matches, Some(true));
    }

    #[test]
    fn test_unknown_layer_fails() {
        let err = run_session(&session(DrawStyle::Add, vec![paint(0, 0, "mauve")]), false)
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_LAYER");
    }
}
