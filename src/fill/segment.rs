//! Work stack of pending horizontal runs for the scanline fill.

/// Vertical direction the next expansion of a segment looks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards `y + 1`.
    Up,
    /// Towards `y - 1`.
    Down,
}

impl Direction {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Row one step from `y` in this direction, if it is inside `[0, height)`.
    #[inline]
    pub fn step(self, y: usize, height: usize) -> Option<usize> {
        match self {
            Direction::Up => (y + 1 < height).then_some(y + 1),
            Direction::Down => y.checked_sub(1),
        }
    }
}

/// Inclusive run `[left, right]` on row `y` still to be expanded.
///
/// `prev_left..=prev_right` is the run this one was discovered from; in
/// direction `dir` only the cells outside it need scanning again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub y: usize,
    pub left: usize,
    pub right: usize,
    pub prev_left: usize,
    pub prev_right: usize,
    pub dir: Direction,
}

/// LIFO stack of segments.
///
/// Segments are addressed by index into a `Vec`, so growth never leaves a
/// stale position behind. Capacity grows by half of itself when full.
#[derive(Debug, Default)]
pub struct SegmentStack {
    segments: Vec<Segment>,
    growths: usize,
}

const MIN_CAPACITY: usize = 16;

impl SegmentStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity.max(MIN_CAPACITY)),
            growths: 0,
        }
    }

    /// Stack sized for a fill over a `width x height` mask.
    pub fn for_grid(width: usize, height: usize) -> Self {
        Self::with_capacity(2 * width.max(height))
    }

    pub fn push(&mut self, segment: Segment) {
        let capacity = self.segments.capacity();
        if self.segments.len() == capacity {
            let grown = (capacity * 3 / 2).max(MIN_CAPACITY);
            self.segments.reserve_exact(grown - self.segments.len());
            self.growths += 1;
            log::trace!("segment stack grew from {} to {} entries", capacity, self.segments.capacity());
        }
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.segments.capacity()
    }

    /// Number of times the stack had to grow.
    pub fn growths(&self) -> usize {
        self.growths
    }
}
