// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

// x is the column, y is the row. (0, 0) is the top-left square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    #[inline(always)]
    pub fn new(x: i8, y: i8) -> Pos {
        Pos { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline(always)]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    #[inline(always)]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    #[inline(always)]
    pub fn axis(self) -> Option<Axis> {
        match self {
            Direction::Left | Direction::Right => Some(Axis::Across),
            Direction::Up | Direction::Down => Some(Axis::Down),
            Direction::None => None,
        }
    }
}

// A placement axis. Words are always read forward (rightward or downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Axis {
    Across,
    Down,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Across, Axis::Down];

    #[inline(always)]
    pub fn forward(self) -> Direction {
        match self {
            Axis::Across => Direction::Right,
            Axis::Down => Direction::Down,
        }
    }

    #[inline(always)]
    pub fn backward(self) -> Direction {
        self.forward().reverse()
    }

    #[inline(always)]
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Across => Axis::Down,
            Axis::Down => Axis::Across,
        }
    }
}

impl Dim {
    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn at(&self, pos: Pos) -> usize {
        self.at_row_col(pos.y, pos.x)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.cols && pos.y < self.rows
    }

    // None past an edge, and for Direction::None.
    #[inline(always)]
    pub fn step(&self, pos: Pos, direction: Direction) -> Option<Pos> {
        if direction == Direction::None {
            return None;
        }
        let (dx, dy) = direction.delta();
        let next = Pos::new(pos.x + dx, pos.y + dy);
        if self.contains(next) { Some(next) } else { None }
    }

    // row-major, same order as the cells are stored.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |y| (0..cols).map(move |x| Pos::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            assert_ne!(d.reverse(), d);
        }
        assert_eq!(Direction::None.reverse(), Direction::None);
    }

    #[test]
    fn axes_pair_up() {
        for axis in Axis::BOTH {
            assert_eq!(axis.forward().axis(), Some(axis));
            assert_eq!(axis.backward(), axis.forward().reverse());
            assert_eq!(axis.perpendicular().perpendicular(), axis);
            assert_ne!(axis.perpendicular(), axis);
        }
        assert_eq!(Direction::None.axis(), None);
    }

    #[test]
    fn step_stops_at_edges() {
        let dim = Dim { rows: 3, cols: 4 };
        assert_eq!(dim.step(Pos::new(0, 0), Direction::Up), None);
        assert_eq!(dim.step(Pos::new(0, 0), Direction::Left), None);
        assert_eq!(dim.step(Pos::new(3, 2), Direction::Right), None);
        assert_eq!(dim.step(Pos::new(3, 2), Direction::Down), None);
        assert_eq!(dim.step(Pos::new(1, 1), Direction::None), None);
        assert_eq!(
            dim.step(Pos::new(1, 1), Direction::Right),
            Some(Pos::new(2, 1))
        );
        assert_eq!(dim.positions().count(), 12);
        assert_eq!(dim.at(Pos::new(3, 2)), 11);
    }
}
