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
use std::time::Duration;

use life::{Game, Outcome};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::input::{self, Input};
use crate::render::Renderer;

/// Drives one game: waits for either user input or the next tick, handles whichever comes first,
/// and redraws. All Board mutation happens here, one event at a time.
pub struct Session<W: Write> {
    game:          Game,
    renderer:      Renderer<W>,
    tick_interval: Duration,
    notice:        Option<String>, // shown under the board until the game next changes
}

impl<W: Write> Session<W> {
    pub fn new(game: Game, renderer: Renderer<W>, tick_interval: Duration) -> Self {
        Session {
            game,
            renderer,
            tick_interval,
            notice: None,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    /// Runs until the user quits or the input channel closes.
    pub async fn run(&mut self, input_rx: &mut UnboundedReceiver<Input>) -> anyhow::Result<()> {
        let mut ticker = time::interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.redraw()?;
        loop {
            tokio::select! {
                opt_input = input_rx.recv() => {
                    match opt_input {
                        None => {
                            info!("Input channel closed; quitting");
                            return Ok(());
                        }
                        Some(Input::Unrecognized(bytes)) => {
                            let notice = format!("Unrecognized key, skipping it: {}", input::describe(&bytes));
                            info!("{}", notice);
                            self.notice = Some(notice);
                            self.redraw()?;
                        }
                        Some(Input::Command(cmd)) => {
                            let was_running = self.game.is_running();
                            match self.game.handle(cmd) {
                                Outcome::Quit => return Ok(()),
                                Outcome::Changed => {
                                    if self.game.is_running() && !was_running {
                                        // next step is a full interval after starting or resuming
                                        ticker.reset();
                                    }
                                    self.notice = None;
                                    self.redraw()?;
                                }
                                Outcome::Ignored => {}
                            }
                        }
                    }
                }
                _ = ticker.tick() => {
                    if self.game.tick() == Outcome::Changed {
                        self.notice = None;
                        self.redraw()?;
                    }
                }
            }
        }
    }

    fn redraw(&mut self) -> crossterm::Result<()> {
        self.renderer.draw(&self.game, self.notice.as_deref())
    }
}
