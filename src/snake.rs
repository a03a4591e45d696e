use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::{Direction, direction_change_is_valid};

/// Ordered snake body plus committed and pending headings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    pending_heading: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided heading.
    #[must_use]
    pub fn new(start: Cell, heading: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            heading,
            pending_heading: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Panics when `segments` is empty.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_segments(segments: Vec<Cell>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake body needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            heading,
            pending_heading: None,
        }
    }

    /// Buffers a heading for the next tick; last write wins.
    ///
    /// A direct reversal of the committed heading is dropped without
    /// touching an already buffered heading.
    pub fn set_pending_heading(&mut self, heading: Direction) {
        if !direction_change_is_valid(self.heading, heading) {
            return;
        }
        self.pending_heading = Some(heading);
    }

    /// Commits the buffered heading, if any.
    pub fn promote_pending(&mut self) {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
    }

    /// Returns the head position one step along the committed heading.
    #[must_use]
    pub fn peek_next_head(&self) -> Cell {
        self.head().offset(self.heading)
    }

    /// Prepends `new_head`; the tail is dropped unless `grew` is set.
    pub fn step(&mut self, new_head: Cell, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        // `new`, `from_segments` and `step` never leave the body empty.
        self.body[0]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> + Clone {
        self.body.iter()
    }
}
