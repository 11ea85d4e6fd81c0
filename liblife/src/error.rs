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

custom_error! {pub LifeError
    InvalidDimensions {width: usize, height: usize} = "LifeError->InvalidDimensions->{width}x{height}",
    InvalidData {reason: String} = "LifeError->InvalidData->{reason}"
}

pub type LifeResult<T> = ::std::result::Result<T, LifeError>;

impl PartialEq for LifeError {
    fn eq(&self, other: &LifeError) -> bool {
        use LifeError::*;
        match *self {
            InvalidDimensions {
                width: self_width,
                height: self_height,
            } => {
                if let InvalidDimensions {
                    width: other_width,
                    height: other_height,
                } = *other
                {
                    self_width == other_width && self_height == other_height
                } else {
                    false
                }
            }
            InvalidData {
                reason: ref self_reason,
            } => {
                if let InvalidData {
                    reason: ref other_reason,
                } = *other
                {
                    self_reason == other_reason
                } else {
                    false
                }
            }
        }
    }
}
