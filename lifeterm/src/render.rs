/*  Copyright 2026 the Lifeterm Developers.
 *
 *  This file is part of lifeterm.
 *
 *  lifeterm is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  lifeterm is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with lifeterm.  If not, see
 *  <http://www.gnu.org/licenses/>. */

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use life::{Cell, Game, GameState};

use crate::config::VideoSettings;
use crate::constants::RUN_HEADER_RULE;

const EDIT_INSTRUCTIONS: &[&str] = &[
    "Press <ARROW> keys to move through the board",
    "Press <SPACEBAR> key to toggle cells ALIVE/DEAD",
    "Press <ENTER> key to start the game",
    "Press <q> to quit the game",
];

const RUN_INSTRUCTIONS: &[&str] = &[
    "Press <p> to pause the game",
    "Press <r> to restart the game",
    "Press <q> to quit the game",
];

const PAUSED_INSTRUCTIONS: &[&str] = &[
    "Press <p> to resume the game",
    "Press <r> to restart the game",
    "Press <q> to quit the game",
];

const PAUSED_BANNER: &str = "GAME PAUSED";

/// Draws whole frames of the game onto a terminal-like writer.
pub struct Renderer<W: Write> {
    out:   W,
    video: VideoSettings,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, video: VideoSettings) -> Self {
        Renderer { out, video }
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Clears the screen and draws the current state of `game`, followed by `notice` if given.
    pub fn draw(&mut self, game: &Game, notice: Option<&str>) -> crossterm::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        let state = game.state();
        if state != GameState::Editing {
            self.line(&format!("iteration: {}", game.generation()))?;
            self.line(RUN_HEADER_RULE)?;
        }

        for row in game.board().rows() {
            for cell in row {
                self.cell(cell)?;
            }
            self.line("")?;
        }

        self.line(&"-".repeat(game.width() * 2))?;
        let instructions = match state {
            GameState::Editing => EDIT_INSTRUCTIONS,
            GameState::Running => RUN_INSTRUCTIONS,
            GameState::Paused => PAUSED_INSTRUCTIONS,
        };
        for text in instructions {
            self.line(text)?;
        }

        if state == GameState::Paused {
            self.emphasized(PAUSED_BANNER)?;
            self.line("")?;
        }

        if let Some(notice) = notice {
            self.line(notice)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn cell(&mut self, cell: &Cell) -> crossterm::Result<()> {
        let glyph = if cell.is_alive() {
            self.video.alive_glyph
        } else {
            self.video.dead_glyph
        };

        if cell.is_selected() {
            if self.video.color {
                self.emphasized(&glyph.to_string())?;
            } else {
                let selected_glyph = self.video.selected_glyph;
                queue!(self.out, Print(selected_glyph))?;
            }
        } else {
            queue!(self.out, Print(glyph))?;
        }
        queue!(self.out, Print(' '))?;
        Ok(())
    }

    /// Red and blinking when color is enabled; plain otherwise.
    fn emphasized(&mut self, text: &str) -> crossterm::Result<()> {
        if self.video.color {
            queue!(
                self.out,
                SetForegroundColor(Color::Red),
                SetAttribute(Attribute::SlowBlink),
                Print(text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        } else {
            queue!(self.out, Print(text))?;
        }
        Ok(())
    }

    // raw mode does not turn "\n" into "\r\n"
    fn line(&mut self, text: &str) -> crossterm::Result<()> {
        queue!(self.out, Print(text), Print("\r\n"))?;
        Ok(())
    }
}
