// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::model::MAX_RATING;

/// Formats a rating as a fixed-width row of filled and empty stars.
///
/// Ratings above [`MAX_RATING`] are shown as the maximum.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_rating(3), "★★★☆☆");
/// ```
pub(crate) fn format_rating(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_partial_rating() {
        assert_eq!(format_rating(3), "★★★☆☆");
    }

    #[test]
    fn clamps_out_of_range_rating() {
        assert_eq!(format_rating(0), "☆☆☆☆☆");
        assert_eq!(format_rating(8), "★★★★★");
    }
}
