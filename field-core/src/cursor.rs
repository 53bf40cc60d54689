use glam::Vec2;

/// Last known pointer location.
///
/// While the pointer is outside the window the cursor is parked at a
/// far-away sentinel instead of being cleared. With a large attraction
/// radius the sentinel can still be within range of some dots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub pos: Vec2,
    sentinel: Vec2,
}

impl Cursor {
    /// Creates a cursor parked at `sentinel`.
    pub fn away(sentinel: Vec2) -> Self {
        Self {
            pos: sentinel,
            sentinel,
        }
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Parks the cursor back at the sentinel.
    pub fn leave(&mut self) {
        self.pos = self.sentinel;
    }

    pub fn is_away(&self) -> bool {
        self.pos == self.sentinel
    }
}
