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

use std::{fmt, slice, str::FromStr};

use crate::cell::Cell;
use crate::error::{LifeError, LifeResult};
use crate::position::Position;

/// Plaintext (`.cells`) character for an alive cell.
pub const ALIVE_CHAR: char = 'O';
/// Plaintext (`.cells`) character for a dead cell.
pub const DEAD_CHAR: char = '.';
const COMMENT_CHAR: char = '!';

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;

/// Builder paradigm to create `Board` structs with checked dimensions.
///
/// # Examples
///
/// ```
/// let board = life::BoardBuilder::new()
///                 .width(32)     // optionally override width
///                 .height(16)    // optionally override height
///                 .build()
///                 .unwrap();
/// assert_eq!(board.width(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    width:  usize,
    height: usize,
}

impl BoardBuilder {
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            width:  DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Update the total number of columns for this Board
    pub fn width(mut self, new_width: usize) -> BoardBuilder {
        self.width = new_width;
        self
    }

    /// Update the total number of rows for this Board
    pub fn height(mut self, new_height: usize) -> BoardBuilder {
        self.height = new_height;
        self
    }

    /// Creates the Board: every cell dead and the cell at (0,0) selected.
    ///
    /// # Errors
    ///
    /// - if `width` or `height` is zero.
    /// - if either dimension does not fit in an `isize` coordinate, or the cell count overflows.
    pub fn build(&self) -> LifeResult<Board> {
        if !Board::dimensions_fit(self.width, self.height) {
            return Err(LifeError::InvalidDimensions {
                width:  self.width,
                height: self.height,
            });
        }
        Ok(Board::new(self.width, self.height))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}

/// A finite rectangle of cells whose edges wrap around, both horizontally and vertically.
///
/// Every position in `[0, width) x [0, height)` has exactly one `Cell`, stored row-major. A Board
/// is never advanced in place: `update` hands back the next generation as a new Board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width:  usize,
    height: usize,
    cells:  Vec<Cell>, // index = y * width + x
}

impl Board {
    /// Creates a Board with every cell dead and the cell at (0,0) selected.
    ///
    /// # Panics
    ///
    /// This function will panic if `width` or `height` are zero, or if the board is too large to
    /// address. Use `BoardBuilder` to get an error instead.
    pub fn new(width: usize, height: usize) -> Self {
        let mut board = Board::blank(width, height);
        board.cells[0].set_selected(true);
        board
    }

    fn dimensions_fit(width: usize, height: usize) -> bool {
        width != 0
            && height != 0
            && width <= isize::MAX as usize
            && height <= isize::MAX as usize
            && width.checked_mul(height).is_some()
    }

    /// All dead, nothing selected.
    fn blank(width: usize, height: usize) -> Self {
        assert!(
            Board::dimensions_fit(width, height),
            "Invalid board dimensions {}x{}",
            width,
            height
        );

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Position::new(x as isize, y as isize), false));
            }
        }
        Board { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Determines whether `p` lies on the board. No wrapping is applied.
    pub fn is_inside(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index_of(&self, p: Position) -> Option<usize> {
        if self.is_inside(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Returns the cell at `p`, or `None` if `p` is outside the board.
    pub fn cell(&self, p: Position) -> Option<Cell> {
        self.index_of(p).map(|idx| self.cells[idx])
    }

    /// Returns a copy of the cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the board.
    pub fn get_cell(&self, p: Position) -> Cell {
        match self.cell(p) {
            Some(c) => c,
            None => panic!(
                "Tried to get cell at {} outside of {}x{} board",
                p, self.width, self.height
            ),
        }
    }

    /// Replaces the cell stored at `p` with `c`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the board, or if `c` belongs to a different position.
    pub fn set_cell(&mut self, p: Position, c: Cell) {
        let idx = match self.index_of(p) {
            Some(idx) => idx,
            None => panic!(
                "Tried to set cell at {} outside of {}x{} board",
                p, self.width, self.height
            ),
        };
        assert_eq!(c.position(), p, "cell for {} stored at {}", c.position(), p);
        self.cells[idx] = c;
    }

    /// Maps any position onto the board, treating it as a torus: each axis wraps independently.
    pub fn wrap(&self, p: Position) -> Position {
        Position::new(
            p.x.rem_euclid(self.width as isize),
            p.y.rem_euclid(self.height as isize),
        )
    }

    /// Counts the alive cells in the wrapped Moore neighbourhood of `c`. The result is in `0..=8`.
    ///
    /// On boards less than 3 cells wide or tall, several offsets wrap onto the same cell (or back
    /// onto `c`); each distinct neighbouring cell is counted once, and `c` never counts itself.
    pub fn neighbours_count(&self, c: &Cell) -> usize {
        let home = self.wrap(c.position());
        let mut wrapped: Vec<Position> = home
            .neighbours()
            .iter()
            .map(|&n| self.wrap(n))
            .collect();

        if self.width < 3 || self.height < 3 {
            wrapped.retain(|&n| n != home);
            wrapped.sort();
            wrapped.dedup();
        }

        wrapped.iter().filter(|&&n| self.get_cell(n).is_alive()).count()
    }

    /// Computes the next generation (B3/S23) into a new Board. Neighbour counts are read only from
    /// `self`, so the order cells are visited in cannot affect the result. No cell of the new
    /// Board is selected.
    pub fn update(&self) -> Board {
        let cells: Vec<Cell> = self
            .cells
            .iter()
            .map(|c| Cell::new(c.position(), next_state(c.is_alive(), self.neighbours_count(c))))
            .collect();

        let next = Board {
            width: self.width,
            height: self.height,
            cells,
        };
        trace!("update: population {} -> {}", self.population(), next.population());
        next
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Position of the selected cell, if there is one.
    pub fn selected(&self) -> Option<Position> {
        self.cells.iter().find(|c| c.is_selected()).map(|c| c.position())
    }

    /// All cells, row by row.
    pub fn cells(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Rows of cells from top (y = 0) to bottom.
    pub fn rows(&self) -> slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }
}

#[inline]
fn next_state(alive: bool, neighbours: usize) -> bool {
    match (alive, neighbours) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,
    }
}

/// Writes the board in plaintext (`.cells`) form: one line per row, `O` for alive and `.` for dead.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let mut s = String::with_capacity(self.width);
            for c in row {
                s.push(if c.is_alive() { ALIVE_CHAR } else { DEAD_CHAR });
            }
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

/// Parses plaintext (`.cells`) patterns. Lines starting with `!` are comments. The board is as wide
/// as the longest row; shorter rows are padded with dead cells. Nothing is selected.
impl FromStr for Board {
    type Err = LifeError;

    fn from_str(s: &str) -> LifeResult<Board> {
        let mut rows: Vec<&str> = s
            .lines()
            .filter(|line| !line.starts_with(COMMENT_CHAR))
            .map(|line| line.trim_end())
            .collect();
        while rows.last().map_or(false, |row| row.is_empty()) {
            rows.pop();
        }

        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidData {
                reason: "pattern contains no cells".to_owned(),
            });
        }

        let mut board = Board::blank(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let p = Position::new(x as isize, y as isize);
                match ch {
                    ALIVE_CHAR => {
                        let mut c = board.get_cell(p);
                        c.set_alive(true);
                        board.set_cell(p, c);
                    }
                    DEAD_CHAR => {}
                    _ => {
                        return Err(LifeError::InvalidData {
                            reason: format!("unexpected character {:?} at {}", ch, p),
                        });
                    }
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board(pattern: &str) -> Board {
        pattern.parse().unwrap()
    }

    fn with_alive(width: usize, height: usize, alive: &[(isize, isize)]) -> Board {
        let mut b = Board::blank(width, height);
        for &(x, y) in alive {
            let p = Position::new(x, y);
            let mut c = b.get_cell(p);
            c.set_alive(true);
            b.set_cell(p, c);
        }
        b
    }

    #[test]
    fn new_board_is_dense_dead_and_selects_origin() {
        let b = Board::new(4, 3);
        assert_eq!(b.cells().count(), 12);
        assert_eq!(b.population(), 0);
        assert_eq!(b.selected(), Some(Position::new(0, 0)));
        for y in 0..3 {
            for x in 0..4 {
                let p = Position::new(x, y);
                assert_eq!(b.get_cell(p).position(), p);
            }
        }
    }

    #[test]
    fn builder_rejects_zero_dimensions() {
        assert_eq!(
            BoardBuilder::new().width(0).height(5).build().unwrap_err(),
            LifeError::InvalidDimensions { width: 0, height: 5 }
        );
        assert_eq!(
            BoardBuilder::new().width(5).height(0).build().unwrap_err(),
            LifeError::InvalidDimensions { width: 5, height: 0 }
        );
        let b = BoardBuilder::new().width(7).height(2).build().unwrap();
        assert_eq!((b.width(), b.height()), (7, 2));
    }

    #[test]
    fn builder_rejects_unaddressable_dimensions() {
        assert_eq!(
            BoardBuilder::new().width(usize::MAX).height(2).build().unwrap_err(),
            LifeError::InvalidDimensions { width: usize::MAX, height: 2 }
        );
        let too_wide = isize::MAX as usize + 1;
        assert_eq!(
            BoardBuilder::new().width(too_wide).height(1).build().unwrap_err(),
            LifeError::InvalidDimensions { width: too_wide, height: 1 }
        );
        let side = 1usize << (usize::BITS / 2);
        assert!(BoardBuilder::new().width(side).height(side).build().is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid board dimensions")]
    fn new_board_with_overflowing_area_panics() {
        let _ = Board::new(usize::MAX, 2);
    }

    #[test]
    #[should_panic]
    fn new_board_with_zero_width_panics() {
        let _ = Board::new(0, 3);
    }

    #[test]
    fn is_inside_does_not_wrap() {
        let b = Board::new(3, 2);
        assert!(b.is_inside(Position::new(0, 0)));
        assert!(b.is_inside(Position::new(2, 1)));
        assert!(!b.is_inside(Position::new(3, 0)));
        assert!(!b.is_inside(Position::new(0, 2)));
        assert!(!b.is_inside(Position::new(-1, 0)));
        assert_eq!(b.cell(Position::new(-1, 0)), None);
    }

    #[test]
    #[should_panic(expected = "outside of 3x2 board")]
    fn get_cell_outside_panics() {
        let b = Board::new(3, 2);
        b.get_cell(Position::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "outside of 3x2 board")]
    fn set_cell_outside_panics() {
        let mut b = Board::new(3, 2);
        let p = Position::new(0, -1);
        b.set_cell(p, Cell::new(p, true));
    }

    #[test]
    #[should_panic]
    fn set_cell_cannot_move_a_cell() {
        let mut b = Board::new(3, 2);
        b.set_cell(Position::new(1, 1), Cell::new(Position::new(0, 0), true));
    }

    #[test]
    fn wrap_each_edge_to_the_opposite_one() {
        let b = Board::new(5, 4);
        assert_eq!(b.wrap(Position::new(0, 2).west()), Position::new(4, 2));
        assert_eq!(b.wrap(Position::new(4, 2).east()), Position::new(0, 2));
        assert_eq!(b.wrap(Position::new(3, 0).north()), Position::new(3, 3));
        assert_eq!(b.wrap(Position::new(3, 3).south()), Position::new(3, 0));
        assert_eq!(b.wrap(Position::new(-1, -1)), Position::new(4, 3));
        assert_eq!(b.wrap(Position::new(5, 4)), Position::new(0, 0));
    }

    #[test]
    fn neighbours_count_wraps_horizontally() {
        let b = with_alive(4, 3, &[(3, 1)]);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(0, 1))), 1);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(2, 1))), 1);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(3, 1))), 0);
    }

    #[test]
    fn neighbours_count_wraps_vertically() {
        let b = with_alive(3, 5, &[(1, 4)]);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(1, 0))), 1);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(0, 0))), 1);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(1, 2))), 0);
    }

    #[test]
    fn neighbours_count_wraps_corners_on_both_axes() {
        let b = with_alive(4, 4, &[(3, 3)]);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(0, 0))), 1);
        let b = with_alive(4, 4, &[(0, 0)]);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(3, 3))), 1);
    }

    #[test]
    fn neighbours_count_full_board_is_eight() {
        let mut alive = vec![];
        for y in 0..3 {
            for x in 0..3 {
                alive.push((x, y));
            }
        }
        let b = with_alive(3, 3, &alive);
        for c in b.cells() {
            assert_eq!(b.neighbours_count(c), 8);
        }
    }

    #[test]
    fn neighbours_count_on_tiny_boards_counts_distinct_cells() {
        let b = with_alive(1, 1, &[(0, 0)]);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(0, 0))), 0);

        let b = with_alive(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        for c in b.cells() {
            assert_eq!(b.neighbours_count(c), 3);
        }

        let b = with_alive(1, 4, &[(0, 0), (0, 2)]);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(0, 1))), 2);
        assert_eq!(b.neighbours_count(&b.get_cell(Position::new(0, 3))), 2);
    }

    #[test]
    fn dead_board_stays_dead() {
        let b = Board::new(8, 6);
        let next = b.update();
        assert_eq!(next.population(), 0);
        assert_eq!(next.update().population(), 0);
    }

    #[test]
    fn birth_needs_exactly_three() {
        // centre cell (2,2) has 3, 2 and 4 alive neighbours respectively
        let three = with_alive(5, 5, &[(1, 1), (2, 1), (3, 1)]);
        assert!(three.update().get_cell(Position::new(2, 2)).is_alive());

        let two = with_alive(5, 5, &[(1, 1), (3, 1)]);
        assert!(!two.update().get_cell(Position::new(2, 2)).is_alive());

        let four = with_alive(5, 5, &[(1, 1), (2, 1), (3, 1), (1, 3)]);
        assert!(!four.update().get_cell(Position::new(2, 2)).is_alive());
    }

    #[test]
    fn survival_needs_two_or_three() {
        let centre = (3, 3);
        let ring = [(2, 2), (3, 2), (4, 2), (4, 3), (4, 4), (3, 4), (2, 4), (2, 3)];
        for n in 0..=8 {
            let mut alive = vec![centre];
            alive.extend_from_slice(&ring[..n]);
            let b = with_alive(7, 7, &alive);
            let c = b.get_cell(Position::new(3, 3));
            assert_eq!(b.neighbours_count(&c), n);
            let survives = b.update().get_cell(Position::new(3, 3)).is_alive();
            assert_eq!(survives, n == 2 || n == 3, "with {} neighbours", n);
        }
    }

    #[test]
    fn block_is_a_still_life_on_any_board_size() {
        for &(w, h) in &[(2, 2), (2, 3), (3, 3), (4, 4), (10, 7)] {
            let b = with_alive(w, h, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
            assert_eq!(b.update(), b, "{}x{} board", w, h);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = board(
            ".....\n\
             .....\n\
             .OOO.\n\
             .....\n\
             .....\n",
        );
        let vertical = board(
            ".....\n\
             ..O..\n\
             ..O..\n\
             ..O..\n\
             .....\n",
        );
        let next = horizontal.update();
        assert_eq!(next, vertical);
        assert_eq!(next.update(), horizontal);
    }

    #[test]
    fn glider_travels_across_the_wrapping_edges() {
        let start = board(
            ".O....\n\
             ..O...\n\
             OOO...\n\
             ......\n\
             ......\n\
             ......\n",
        );
        let shifted = board(
            "......\n\
             ..O...\n\
             ...O..\n\
             .OOO..\n\
             ......\n\
             ......\n",
        );

        let mut b = start.clone();
        for _ in 0..4 {
            b = b.update();
        }
        assert_eq!(b, shifted);

        // six diagonal steps bring it all the way around a 6x6 torus
        for _ in 4..24 {
            b = b.update();
            assert_eq!(b.population(), 5);
        }
        assert_eq!(b, start);
    }

    #[test]
    fn update_leaves_the_source_board_untouched() {
        let b = board(".O.\n.O.\n.O.\n");
        let before = b.clone();
        let _ = b.update();
        assert_eq!(b, before);
    }

    #[test]
    fn update_clears_selection() {
        let mut b = Board::new(4, 4);
        let p = Position::new(1, 1);
        let mut c = b.get_cell(p);
        c.set_alive(true);
        b.set_cell(p, c);
        assert!(b.selected().is_some());
        assert_eq!(b.update().selected(), None);
    }

    #[test]
    fn plaintext_display_and_parse_agree() {
        let text = "!Name: glider\n.O.\n..O\nOOO\n";
        let b = board(text);
        assert_eq!((b.width(), b.height()), (3, 3));
        assert_eq!(b.population(), 5);
        assert_eq!(b.selected(), None);
        assert_eq!(b.to_string(), ".O.\n..O\nOOO\n");
    }

    #[test]
    fn plaintext_pads_ragged_rows() {
        let b = board("O\n...O\n\n");
        assert_eq!((b.width(), b.height()), (4, 2));
        assert_eq!(b.to_string(), "O...\n...O\n");
    }

    #[test]
    fn plaintext_rejects_bad_input() {
        assert_eq!(
            "".parse::<Board>().unwrap_err(),
            LifeError::InvalidData {
                reason: "pattern contains no cells".to_owned()
            }
        );
        assert_eq!(
            ".O\n.x\n".parse::<Board>().unwrap_err(),
            LifeError::InvalidData {
                reason: "unexpected character 'x' at (1,1)".to_owned()
            }
        );
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (1usize..9, 1usize..9)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), proptest::collection::vec(any::<bool>(), w * h)))
            .prop_map(|(w, h, bits)| {
                let mut b = Board::blank(w, h);
                for (idx, alive) in bits.into_iter().enumerate() {
                    b.cells[idx].set_alive(alive);
                }
                b
            })
    }

    proptest! {
        #[test]
        fn neighbours_count_is_at_most_eight(b in arb_board()) {
            for c in b.cells() {
                prop_assert!(b.neighbours_count(c) <= 8);
            }
        }

        #[test]
        fn update_keeps_dimensions_and_positions(b in arb_board()) {
            let next = b.update();
            prop_assert_eq!((next.width(), next.height()), (b.width(), b.height()));
            for (old, new) in b.cells().zip(next.cells()) {
                prop_assert_eq!(old.position(), new.position());
                prop_assert!(!new.is_selected());
            }
        }
    }
}
