//! Carousel index state and touch-swipe gesture tracking.

/// Bounded image index over the current kit's gallery. All transitions
/// return a new value so the component can store it in a `use_state` handle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Advance one image, wrapping past the end.
    pub fn next(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..*self
        }
    }

    /// Go back one image, wrapping before the start.
    pub fn previous(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..*self
        }
    }

    /// Jump straight to an index (thumbnail or dot click). Out-of-range
    /// input is clamped to the last image.
    pub fn jump_to(&self, index: usize) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            index: index.min(self.len - 1),
            ..*self
        }
    }
}

/// Minimum horizontal distance, in CSS pixels, for a touch to count as a swipe.
pub const MIN_SWIPE_DISTANCE: i32 = 50;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SwipeOutcome {
    /// Finger moved left past the threshold: show the next image.
    Next,
    /// Finger moved right past the threshold: show the previous image.
    Previous,
    /// Movement too small, or a coordinate was never recorded.
    None,
}

/// Tracks one in-progress touch gesture. Coordinates are `Option` so that
/// "never touched" is distinct from a touch at `x == 0`: a swipe starting
/// at the left screen edge is a valid gesture.
#[derive(Default, Debug)]
pub struct SwipeTracker {
    start_x: Option<i32>,
    last_x: Option<i32>,
}

impl SwipeTracker {
    /// Touch-start: record the origin and forget any previous movement.
    pub fn begin(&mut self, x: i32) {
        self.last_x = None;
        self.start_x = Some(x);
    }

    /// Touch-move: keep the latest horizontal position.
    pub fn track(&mut self, x: i32) {
        self.last_x = Some(x);
    }

    /// Touch-end: classify the gesture. Both coordinates are cleared
    /// regardless of the outcome so the next gesture starts fresh.
    pub fn finish(&mut self) -> SwipeOutcome {
        let outcome = match (self.start_x, self.last_x) {
            (Some(start), Some(last)) => {
                let distance = start - last;
                if distance > MIN_SWIPE_DISTANCE {
                    SwipeOutcome::Next
                } else if distance < -MIN_SWIPE_DISTANCE {
                    SwipeOutcome::Previous
                } else {
                    SwipeOutcome::None
                }
            }
            _ => SwipeOutcome::None,
        };
        self.start_x = None;
        self.last_x = None;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_past_the_end() {
        let c = Carousel::new(5).jump_to(4);
        assert_eq!(c.next().index(), 0);
    }

    #[test]
    fn previous_wraps_before_the_start() {
        let c = Carousel::new(5);
        assert_eq!(c.previous().index(), 4);
    }

    #[test]
    fn next_then_previous_is_identity_for_every_index() {
        let len = 5;
        for i in 0..len {
            let c = Carousel::new(len).jump_to(i);
            assert_eq!(c.next().previous().index(), i);
            assert_eq!(c.previous().next().index(), i);
        }
    }

    #[test]
    fn jump_clamps_out_of_range_index() {
        let c = Carousel::new(3);
        assert_eq!(c.jump_to(99).index(), 2);
    }

    #[test]
    fn empty_gallery_never_panics() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.previous().index(), 0);
        assert_eq!(c.jump_to(3).index(), 0);
    }

    #[test]
    fn left_swipe_past_threshold_advances() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200);
        swipe.track(120);
        assert_eq!(swipe.finish(), SwipeOutcome::Next);
    }

    #[test]
    fn right_swipe_past_threshold_goes_back() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100);
        swipe.track(180);
        assert_eq!(swipe.finish(), SwipeOutcome::Previous);
    }

    #[test]
    fn movement_at_the_threshold_is_not_a_swipe() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100);
        swipe.track(100 - MIN_SWIPE_DISTANCE);
        assert_eq!(swipe.finish(), SwipeOutcome::None);
    }

    #[test]
    fn swipe_starting_at_x_zero_is_still_a_gesture() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(0);
        swipe.track(80);
        assert_eq!(swipe.finish(), SwipeOutcome::Previous);
    }

    #[test]
    fn missing_move_event_is_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(150);
        assert_eq!(swipe.finish(), SwipeOutcome::None);
    }

    #[test]
    fn coordinates_reset_after_every_gesture() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200);
        swipe.track(100);
        swipe.finish();
        // A lone touch-end right after must not reuse the old coordinates.
        assert_eq!(swipe.finish(), SwipeOutcome::None);
    }

    #[test]
    fn touch_start_clears_stale_move_coordinate() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200);
        swipe.track(100);
        swipe.begin(300);
        assert_eq!(swipe.finish(), SwipeOutcome::None);
    }
}
