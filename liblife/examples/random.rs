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

//! Runs a random soup on a wrapping board and prints each generation in plaintext form.
//!
//! Usage: `cargo run --example random [generations]`

use std::{env, thread, time};

use life::{Board, Position};
use rand::distributions::{Bernoulli, Distribution};

const RANDOM_DENSITY: f64 = 0.3;

fn main() {
    let generations: usize = env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("generations must be a number"))
        .unwrap_or(200);

    let mut board = Board::new(64, 32);
    let mut rng = rand::thread_rng();
    let d = Bernoulli::new(RANDOM_DENSITY).unwrap();

    for y in 0..board.height() as isize {
        for x in 0..board.width() as isize {
            let p = Position::new(x, y);
            let mut c = board.get_cell(p);
            c.set_selected(false);
            c.set_alive(d.sample(&mut rng));
            board.set_cell(p, c);
        }
    }

    let step_time = time::Duration::from_millis(50);
    for gen in 0..generations {
        println!("\x1b[H\x1b[2J{}", board);
        println!("Gen: {}  Population: {}", gen, board.population());
        board = board.update();
        thread::sleep(step_time);
    }
}
