//! Row layout and hit testing.
//!
//! Positions `max_rating` square star cells in a row inside a container,
//! honoring the justification, and resolves a pointer position back to a
//! 1-based star position. Layout math is the inverse of hit testing; the
//! tests hold them against each other.

use stardial_schema::Justification;

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Geometry of a laid-out star row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRowLayout {
    /// Left edge of the first cell.
    origin_x: f32,
    /// Top edge of the row.
    origin_y: f32,
    /// Side length of one square cell.
    cell: f32,
    /// Gap between adjacent cells.
    gap: f32,
    /// Number of cells.
    count: u32,
}

impl StarRowLayout {
    /// Lays out `count` cells of `cell` pixels inside `container`.
    ///
    /// `Justification::None` behaves as left, which is what hosts render
    /// when no alignment was ever chosen.
    #[must_use]
    pub fn new(
        container: Rect,
        count: u32,
        cell: f32,
        gap: f32,
        justification: Justification,
    ) -> Self {
        let row_width = Self::row_width(count, cell, gap);
        let origin_x = match justification {
            Justification::None | Justification::Left => container.x,
            Justification::Center => container.x + (container.width - row_width) * 0.5,
            Justification::Right => container.x + container.width - row_width,
        };

        Self {
            origin_x,
            origin_y: container.y,
            cell,
            gap,
            count,
        }
    }

    /// Returns the total width of a row of `count` cells.
    #[must_use]
    pub fn row_width(count: u32, cell: f32, gap: f32) -> f32 {
        if count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = count as f32;
        count * cell + (count - 1.0) * gap
    }

    /// Returns the bounds of the cell at 1-based `position`.
    ///
    /// Positions outside `1..=count` yield [`Rect::ZERO`]; the widget never
    /// asks for one.
    #[must_use]
    pub fn cell_rect(&self, position: u32) -> Rect {
        if position == 0 || position > self.count {
            return Rect::ZERO;
        }
        #[allow(clippy::cast_precision_loss)]
        let offset = (position - 1) as f32 * (self.cell + self.gap);
        Rect::new(self.origin_x + offset, self.origin_y, self.cell, self.cell)
    }

    /// Resolves a pointer position to the 1-based star under it.
    ///
    /// Returns `None` outside the row and inside the gaps between cells;
    /// a gap click must not activate either neighbor.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<u32> {
        if y < self.origin_y || y >= self.origin_y + self.cell {
            return None;
        }

        let stride = self.cell + self.gap;
        let offset = x - self.origin_x;
        if offset < 0.0 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let slot = (offset / stride) as u32;
        if slot >= self.count {
            return None;
        }
        // Inside the slot, past the cell is gap.
        #[allow(clippy::cast_precision_loss)]
        let within = offset - slot as f32 * stride;
        if within < self.cell {
            Some(slot + 1)
        } else {
            None
        }
    }

    /// Returns the number of cells in the row.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Rect = Rect::new(100.0, 50.0, 400.0, 40.0);

    fn layout(justification: Justification) -> StarRowLayout {
        StarRowLayout::new(CONTAINER, 5, 32.0, 4.0, justification)
    }

    #[test]
    fn test_left_and_none_share_an_origin() {
        let left = layout(Justification::Left);
        let none = layout(Justification::None);
        assert_eq!(left.cell_rect(1), none.cell_rect(1));
        assert!((left.cell_rect(1).x - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_center_and_right_alignment() {
        // Row width: 5 * 32 + 4 * 4 = 176.
        let center = layout(Justification::Center);
        assert!((center.cell_rect(1).x - (100.0 + (400.0 - 176.0) * 0.5)).abs() < 0.001);

        let right = layout(Justification::Right);
        assert!((right.cell_rect(5).right() - CONTAINER.right()).abs() < 0.001);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let row = layout(Justification::Left);
        for position in 1..5 {
            assert!(row.cell_rect(position).right() < row.cell_rect(position + 1).x);
        }
    }

    #[test]
    fn test_hit_test_matches_cells() {
        let row = layout(Justification::Center);
        for position in 1..=5 {
            let cell = row.cell_rect(position);
            let (cx, cy) = (cell.x + cell.width * 0.5, cell.y + cell.height * 0.5);
            assert_eq!(row.hit_test(cx, cy), Some(position));
        }
    }

    #[test]
    fn test_hit_test_misses_gaps_and_outside() {
        let row = layout(Justification::Left);

        // Just past the first cell's right edge lies the gap.
        let first = row.cell_rect(1);
        assert_eq!(row.hit_test(first.right() + 1.0, first.y + 1.0), None);

        // Above, below, left of, and past the row.
        assert_eq!(row.hit_test(first.x + 1.0, first.y - 1.0), None);
        assert_eq!(row.hit_test(first.x + 1.0, first.bottom() + 1.0), None);
        assert_eq!(row.hit_test(first.x - 1.0, first.y + 1.0), None);
        assert_eq!(row.hit_test(row.cell_rect(5).right() + 1.0, first.y + 1.0), None);
    }

    #[test]
    fn test_empty_row() {
        let row = StarRowLayout::new(CONTAINER, 0, 32.0, 4.0, Justification::Left);
        assert_eq!(row.cell_rect(1), Rect::ZERO);
        assert_eq!(row.hit_test(110.0, 60.0), None);
        assert!((StarRowLayout::row_width(0, 32.0, 4.0)).abs() < f32::EPSILON);
    }
}
