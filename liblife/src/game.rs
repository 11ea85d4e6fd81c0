/*  Copyright 2026 the Lifeterm Developers.
 *
 *  This file is part of liblife.
 *
 *  liblife is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  liblife is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with liblife.  If not, see <http://www.gnu.org/licenses/>. */

use crate::board::{Board, BoardBuilder};
use crate::error::LifeResult;
use crate::position::{Direction, Position};

/// Discrete user commands, already decoded from whatever input device produced them.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Command {
    Move(Direction),
    ToggleAlive,
    Start,
    Pause, // pauses while running, resumes while paused
    Restart,
    Quit,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum GameState {
    Editing,
    Running,
    Paused,
}

/// What happened as a result of a command or tick.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Outcome {
    Changed, // board or state changed; redraw
    Ignored, // nothing changed
    Quit,
}

/// The simulation controller. It owns the current Board and the edit-mode selection, and moves
/// between `Editing`, `Running` and `Paused`.
///
/// Only one cell is ever selected, and only while `Editing`: starting a run clears the flag, and
/// every Board produced by `Board::update` comes without a selection.
#[derive(Debug, Clone)]
pub struct Game {
    board:      Board,
    selected:   Position,
    state:      GameState,
    generation: usize, // updates applied since the run started
}

impl Game {
    /// Creates a Game in the `Editing` state with a fresh `width` x `height` Board.
    ///
    /// # Errors
    ///
    /// - if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> LifeResult<Game> {
        let board = BoardBuilder::new().width(width).height(height).build()?;
        Ok(Game {
            board,
            selected: Position::new(0, 0),
            state: GameState::Editing,
            generation: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Position of the edit cursor. Meaningful only while `Editing`.
    pub fn selected(&self) -> Position {
        self.selected
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Applies a user command according to the current state. Commands that make no sense in the
    /// current state are ignored.
    pub fn handle(&mut self, cmd: Command) -> Outcome {
        use self::Command::*;
        use self::GameState::*;

        match (self.state, cmd) {
            (_, Quit) => {
                info!("Quit requested at generation {}", self.generation);
                Outcome::Quit
            }
            (Editing, Move(dir)) => self.move_selection(dir),
            (Editing, ToggleAlive) => self.toggle_selected(),
            (Editing, Start) => self.start(),
            (Running, Pause) => {
                self.state = Paused;
                info!("Paused at generation {}", self.generation);
                Outcome::Changed
            }
            (Paused, Pause) => {
                // don't make the user wait a whole interval for the first step after resuming
                self.state = Running;
                info!("Resumed at generation {}", self.generation);
                self.advance();
                Outcome::Changed
            }
            (Running, Restart) | (Paused, Restart) => self.restart(),
            (state, cmd) => {
                debug!("Ignoring {:?} while {:?}", cmd, state);
                Outcome::Ignored
            }
        }
    }

    /// Called once per tick interval. Advances one generation while `Running`.
    pub fn tick(&mut self) -> Outcome {
        if self.state == GameState::Running {
            self.advance();
            Outcome::Changed
        } else {
            Outcome::Ignored
        }
    }

    fn advance(&mut self) {
        self.board = self.board.update();
        self.generation += 1;
        trace!("generation {}: population {}", self.generation, self.board.population());
    }

    /// Moves the edit cursor one cell. Unlike neighbour counting, this never wraps: moving off the
    /// board is a no-op.
    fn move_selection(&mut self, dir: Direction) -> Outcome {
        let target = self.selected.step(dir);
        if !self.board.is_inside(target) {
            debug!("Not moving selection from {} to {}: outside the board", self.selected, target);
            return Outcome::Ignored;
        }
        self.set_selected_flag(self.selected, false);
        self.selected = target;
        self.set_selected_flag(self.selected, true);
        Outcome::Changed
    }

    fn toggle_selected(&mut self) -> Outcome {
        let mut c = self.board.get_cell(self.selected);
        let alive = c.toggle();
        self.board.set_cell(self.selected, c);
        debug!("Cell at {} is now {}", self.selected, if alive { "alive" } else { "dead" });
        Outcome::Changed
    }

    fn start(&mut self) -> Outcome {
        self.set_selected_flag(self.selected, false);
        self.state = GameState::Running;
        self.generation = 0;
        info!(
            "Starting {}x{} board with {} alive cells",
            self.board.width(),
            self.board.height(),
            self.board.population()
        );
        Outcome::Changed
    }

    fn restart(&mut self) -> Outcome {
        info!("Restarting after {} generations", self.generation);
        self.board = Board::new(self.board.width(), self.board.height());
        self.selected = Position::new(0, 0);
        self.state = GameState::Editing;
        self.generation = 0;
        Outcome::Changed
    }

    fn set_selected_flag(&mut self, p: Position, selected: bool) {
        let mut c = self.board.get_cell(p);
        c.set_selected(selected);
        self.board.set_cell(p, c);
    }
}
