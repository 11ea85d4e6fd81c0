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

use std::io::{self, Read};
use std::thread;

use life::{Command, Direction};
use tokio::sync::mpsc::UnboundedSender;

pub const CTRL_C_CHAR: u8      = 3;
pub const ENTER_CHAR: u8       = 10;
pub const RETURN_CHAR: u8      = 13; // what Enter sends once the terminal is in raw mode
pub const ESCAPE_CHAR: u8      = 27;
pub const SPACEBAR_CHAR: u8    = 32;
pub const CSI_CHAR: u8         = b'[';
pub const ARROW_UP_CHAR: u8    = b'A';
pub const ARROW_DOWN_CHAR: u8  = b'B';
pub const ARROW_RIGHT_CHAR: u8 = b'C';
pub const ARROW_LEFT_CHAR: u8  = b'D';
pub const PAUSE_CHAR: u8       = b'p';
pub const RESTART_CHAR: u8     = b'r';
pub const QUIT_CHAR: u8        = b'q';

/// Something the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Unrecognized(Vec<u8>), // every byte of the unrecognized key
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeStage {
    Ground,
    Escape, // got ESC
    Csi,    // got ESC [
}

/// Turns raw terminal bytes into `Input`s, one byte at a time. Arrow keys arrive as the
/// three-byte sequence `ESC [ A..D`.
#[derive(Debug)]
pub struct Decoder {
    stage: DecodeStage,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Decoder {
            stage: DecodeStage::Ground,
        }
    }

    /// Returns `None` while in the middle of an escape sequence.
    pub fn feed(&mut self, byte: u8) -> Option<Input> {
        match self.stage {
            DecodeStage::Ground => match byte {
                ESCAPE_CHAR => {
                    self.stage = DecodeStage::Escape;
                    None
                }
                SPACEBAR_CHAR => Some(Input::Command(Command::ToggleAlive)),
                ENTER_CHAR | RETURN_CHAR => Some(Input::Command(Command::Start)),
                PAUSE_CHAR => Some(Input::Command(Command::Pause)),
                RESTART_CHAR => Some(Input::Command(Command::Restart)),
                QUIT_CHAR | CTRL_C_CHAR => Some(Input::Command(Command::Quit)),
                _ => Some(Input::Unrecognized(vec![byte])),
            },
            DecodeStage::Escape => {
                if byte == CSI_CHAR {
                    self.stage = DecodeStage::Csi;
                    return None;
                }
                // a lone ESC: the key after it still counts, and is reported with the ESC if unknown
                self.stage = DecodeStage::Ground;
                match self.feed(byte) {
                    Some(Input::Unrecognized(_)) => Some(Input::Unrecognized(vec![ESCAPE_CHAR, byte])),
                    other => other,
                }
            }
            DecodeStage::Csi => {
                self.stage = DecodeStage::Ground;
                if byte.is_ascii_control() {
                    // never part of a cursor key sequence
                    return self.feed(byte);
                }
                let dir = match byte {
                    ARROW_UP_CHAR => Direction::North,
                    ARROW_DOWN_CHAR => Direction::South,
                    ARROW_RIGHT_CHAR => Direction::East,
                    ARROW_LEFT_CHAR => Direction::West,
                    _ => return Some(Input::Unrecognized(vec![ESCAPE_CHAR, CSI_CHAR, byte])),
                };
                Some(Input::Command(Command::Move(dir)))
            }
        }
    }
}

/// Human-readable form of raw key bytes, e.g. `'x' (120)` or `(27) '[' (91) 'Z' (90)`.
pub fn describe(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() {
                format!("'{}' ({})", b as char, b)
            } else {
                format!("({})", b)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spawns a thread that blocks on `reader` one byte at a time and forwards decoded input to `tx`.
/// The thread exits when the reader hits EOF or fails, or when the receiving side goes away. It is
/// not joined; at exit the process simply abandons it.
pub fn spawn_reader<R>(mut reader: R, tx: UnboundedSender<Input>) -> io::Result<thread::JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new().name("input".to_owned()).spawn(move || {
        let mut decoder = Decoder::new();
        let mut buf = [0u8; 1];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => {
                    info!("Input closed");
                    break;
                }
                Ok(_) => {
                    if let Some(input) = decoder.feed(buf[0]) {
                        trace!("Decoded {:?}", input);
                        if tx.send(input).is_err() {
                            debug!("Input receiver dropped; stopping reader");
                            break;
                        }
                    }
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn decode_all(bytes: &[u8]) -> Vec<Input> {
        let mut decoder = Decoder::new();
        bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
    }

    #[test]
    fn arrow_keys_decode_to_moves() {
        assert_eq!(
            decode_all(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![
                Input::Command(Command::Move(Direction::North)),
                Input::Command(Command::Move(Direction::South)),
                Input::Command(Command::Move(Direction::East)),
                Input::Command(Command::Move(Direction::West)),
            ]
        );
    }

    #[test]
    fn escape_prefix_is_pending() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed(ESCAPE_CHAR), None);
        assert_eq!(decoder.feed(CSI_CHAR), None);
        assert_eq!(
            decoder.feed(ARROW_LEFT_CHAR),
            Some(Input::Command(Command::Move(Direction::West)))
        );
    }

    #[test]
    fn single_byte_commands() {
        assert_eq!(
            decode_all(b" \r\npr"),
            vec![
                Input::Command(Command::ToggleAlive),
                Input::Command(Command::Start),
                Input::Command(Command::Start),
                Input::Command(Command::Pause),
                Input::Command(Command::Restart),
            ]
        );
        assert_eq!(decode_all(b"q"), vec![Input::Command(Command::Quit)]);
        assert_eq!(decode_all(&[CTRL_C_CHAR]), vec![Input::Command(Command::Quit)]);
    }

    #[test]
    fn unknown_bytes_are_reported_whole() {
        assert_eq!(decode_all(b"x"), vec![Input::Unrecognized(vec![b'x'])]);
        assert_eq!(decode_all(b"\x1bx"), vec![Input::Unrecognized(vec![ESCAPE_CHAR, b'x'])]);
        assert_eq!(
            decode_all(b"\x1b[Z"),
            vec![Input::Unrecognized(vec![ESCAPE_CHAR, CSI_CHAR, b'Z'])]
        );
    }

    #[test]
    fn decoder_recovers_after_a_bad_sequence() {
        assert_eq!(
            decode_all(b"\x1b[Z\x1b[A"),
            vec![
                Input::Unrecognized(vec![ESCAPE_CHAR, CSI_CHAR, b'Z']),
                Input::Command(Command::Move(Direction::North)),
            ]
        );
    }

    #[test]
    fn keys_after_a_lone_escape_still_work() {
        assert_eq!(decode_all(b"\x1bq"), vec![Input::Command(Command::Quit)]);
        assert_eq!(decode_all(&[ESCAPE_CHAR, CTRL_C_CHAR]), vec![Input::Command(Command::Quit)]);
        assert_eq!(decode_all(b"\x1b "), vec![Input::Command(Command::ToggleAlive)]);
        assert_eq!(
            decode_all(b"\x1b\x1b[A"),
            vec![Input::Command(Command::Move(Direction::North))]
        );
    }

    #[test]
    fn control_keys_break_out_of_a_cursor_sequence() {
        assert_eq!(decode_all(&[ESCAPE_CHAR, CSI_CHAR, CTRL_C_CHAR]), vec![Input::Command(Command::Quit)]);
        assert_eq!(
            decode_all(b"\x1b[\x1b[B"),
            vec![Input::Command(Command::Move(Direction::South))]
        );
        assert_eq!(decode_all(b"\x1b[\r"), vec![Input::Command(Command::Start)]);
    }

    #[test]
    fn describe_shows_printable_and_raw_bytes() {
        assert_eq!(describe(b"x"), "'x' (120)");
        assert_eq!(describe(&[ESCAPE_CHAR, CSI_CHAR, b'Z']), "(27) '[' (91) 'Z' (90)");
    }

    #[test]
    fn reader_forwards_decoded_input_until_eof() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_reader(io::Cursor::new(b" \x1b[Cq".to_vec()), tx).unwrap();
        handle.join().unwrap();

        assert_eq!(rx.try_recv().unwrap(), Input::Command(Command::ToggleAlive));
        assert_eq!(rx.try_recv().unwrap(), Input::Command(Command::Move(Direction::East)));
        assert_eq!(rx.try_recv().unwrap(), Input::Command(Command::Quit));
        // sender dropped at EOF
        assert!(rx.try_recv().is_err());
    }
}
