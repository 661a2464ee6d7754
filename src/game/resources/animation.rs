//! Piece movement animation queue
//!
//! Logical moves are committed instantly; this queue only moves the rendered
//! position of each piece toward the visual position of its destination, a
//! fixed fraction of the remaining distance per frame. Entries are dropped
//! once the rendered position matches the target at the configured number of
//! decimal digits. Nothing here reads or writes the board.
//!
//! # Interpolation
//!
//! ```text
//! rendered = rendered + (target - rendered) * fraction   (per axis, per tick)
//! ```
//!
//! The step count to converge depends on distance only logarithmically, so a
//! long slide and a one-square step finish at a similar pace.

use std::collections::HashMap;

use tracing::debug;

use crate::game::types::{PieceId, Position};

/// Default fraction of the remaining distance covered per tick
pub const DEFAULT_LERP_FACTOR: f32 = 0.1;

/// Default number of decimal digits compared when testing for arrival
pub const DEFAULT_PRECISION_DIGITS: u32 = 5;

/// Rendered coordinates in scene units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualPosition {
    pub x: f64,
    pub y: f64,
}

impl VisualPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps board cells to scene coordinates
///
/// Rows run along +x from `origin_x`, columns run along -y from `origin_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            origin_x: -4.0,
            origin_y: 3.0,
        }
    }
}

impl BoardLayout {
    pub fn to_visual(&self, position: Position) -> VisualPosition {
        VisualPosition::new(
            f64::from(self.origin_x) + f64::from(position.row),
            f64::from(self.origin_y) - f64::from(position.column),
        )
    }
}

/// Pending piece animations plus the last rendered position of every piece
#[derive(Debug, Clone)]
pub struct AnimationQueue {
    targets: HashMap<PieceId, VisualPosition>,
    rendered: HashMap<PieceId, VisualPosition>,
    precision_digits: u32,
}

impl Default for AnimationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION_DIGITS)
    }
}

impl AnimationQueue {
    pub fn new(precision_digits: u32) -> Self {
        Self {
            targets: HashMap::new(),
            rendered: HashMap::new(),
            precision_digits,
        }
    }

    /// Snap a piece to a rendered position without animating it
    pub fn place(&mut self, piece: PieceId, position: VisualPosition) {
        self.targets.remove(&piece);
        self.rendered.insert(piece, position);
    }

    /// Animate `piece` toward `target`, replacing any pending target
    ///
    /// A piece with no known rendered position starts at its target.
    pub fn enqueue(&mut self, piece: PieceId, target: VisualPosition) {
        self.rendered.entry(piece).or_insert(target);
        self.targets.insert(piece, target);
    }

    /// Drop every trace of a piece, e.g. after it was captured
    pub fn forget(&mut self, piece: PieceId) {
        self.targets.remove(&piece);
        self.rendered.remove(&piece);
    }

    /// Advance every entry by `fraction` of its remaining distance
    ///
    /// Returns the pieces that arrived on this tick.
    pub fn tick(&mut self, fraction: f32) -> Vec<PieceId> {
        let fraction = f64::from(fraction.clamp(0.0, 1.0));
        let digits = self.precision_digits;
        let mut arrived = Vec::new();

        for (&piece, &target) in &self.targets {
            let current = self.rendered.entry(piece).or_insert(target);
            let previous = *current;
            current.x = lerp(current.x, target.x, fraction);
            current.y = lerp(current.y, target.y, fraction);

            // No representable progress left
            let stalled = fraction > 0.0 && *current == previous;
            if stalled
                || (round_to(current.x, digits) == round_to(target.x, digits)
                    && round_to(current.y, digits) == round_to(target.y, digits))
            {
                *current = target;
                arrived.push(piece);
            }
        }

        for piece in &arrived {
            self.targets.remove(piece);
            debug!("[ANIMATION] Piece {} reached its target", piece);
        }
        arrived
    }

    pub fn rendered_position(&self, piece: PieceId) -> Option<VisualPosition> {
        self.rendered.get(&piece).copied()
    }

    pub fn target_of(&self, piece: PieceId) -> Option<VisualPosition> {
        self.targets.get(&piece).copied()
    }

    pub fn is_animating(&self, piece: PieceId) -> bool {
        self.targets.contains_key(&piece)
    }

    /// Number of pending animations
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_maps_rows_and_columns() {
        let layout = BoardLayout::default();
        assert_eq!(layout.to_visual(Position::new(0, 0)), VisualPosition::new(-4.0, 3.0));
        assert_eq!(layout.to_visual(Position::new(7, 7)), VisualPosition::new(3.0, -4.0));
        assert_eq!(layout.to_visual(Position::new(3, 4)), VisualPosition::new(-1.0, -1.0));
    }

    #[test]
    fn test_entry_converges_and_is_removed() {
        //! x goes from 0.0 to 1.0 in a bounded number of ticks, then leaves the queue
        let mut queue = AnimationQueue::default();
        let piece = PieceId(1);
        queue.place(piece, VisualPosition::new(0.0, 0.0));
        queue.enqueue(piece, VisualPosition::new(1.0, 0.0));
        assert!(queue.is_animating(piece));

        let mut ticks = 0;
        while queue.is_animating(piece) {
            queue.tick(DEFAULT_LERP_FACTOR);
            ticks += 1;
            assert!(ticks < 200, "Animation failed to converge");
        }

        assert!(ticks > 10, "Interpolation should take several frames, took {}", ticks);
        assert!(queue.is_empty());
        assert_eq!(queue.rendered_position(piece), Some(VisualPosition::new(1.0, 0.0)));
    }

    #[test]
    fn test_converges_far_from_origin() {
        //! Scene coordinates around 100 still settle on the target
        let layout = BoardLayout {
            origin_x: 100.0,
            origin_y: 100.0,
        };
        let mut queue = AnimationQueue::default();
        let piece = PieceId(5);
        queue.place(piece, layout.to_visual(Position::new(0, 0)));
        queue.enqueue(piece, layout.to_visual(Position::new(3, 0)));

        let mut ticks = 0;
        while queue.is_animating(piece) {
            queue.tick(DEFAULT_LERP_FACTOR);
            ticks += 1;
            assert!(ticks < 500, "Animation stalled at {:?}", queue.rendered_position(piece));
        }
        assert_eq!(queue.rendered_position(piece), Some(VisualPosition::new(103.0, 100.0)));
    }

    #[test]
    fn test_zero_fraction_never_arrives() {
        let mut queue = AnimationQueue::default();
        let piece = PieceId(6);
        queue.place(piece, VisualPosition::new(0.0, 0.0));
        queue.enqueue(piece, VisualPosition::new(1.0, 0.0));

        assert!(queue.tick(0.0).is_empty());
        assert!(queue.is_animating(piece));
    }

    #[test]
    fn test_first_tick_moves_a_tenth() {
        let mut queue = AnimationQueue::default();
        let piece = PieceId(7);
        queue.place(piece, VisualPosition::new(0.0, 2.0));
        queue.enqueue(piece, VisualPosition::new(1.0, 0.0));

        queue.tick(0.1);
        let rendered = queue.rendered_position(piece).unwrap();
        assert!((rendered.x - 0.1).abs() < 1e-6);
        assert!((rendered.y - 1.8).abs() < 1e-6, "Axes interpolate independently");
    }

    #[test]
    fn test_enqueue_overwrites_target() {
        let mut queue = AnimationQueue::default();
        let piece = PieceId(2);
        queue.place(piece, VisualPosition::new(0.0, 0.0));
        queue.enqueue(piece, VisualPosition::new(1.0, 1.0));
        queue.enqueue(piece, VisualPosition::new(-2.0, 0.5));

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.target_of(piece), Some(VisualPosition::new(-2.0, 0.5)));
    }

    #[test]
    fn test_full_fraction_arrives_immediately() {
        let mut queue = AnimationQueue::default();
        let piece = PieceId(3);
        queue.place(piece, VisualPosition::new(5.0, 5.0));
        queue.enqueue(piece, VisualPosition::new(0.0, 0.0));

        assert_eq!(queue.tick(1.0), vec![piece]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_forget_drops_piece() {
        let mut queue = AnimationQueue::default();
        let piece = PieceId(4);
        queue.enqueue(piece, VisualPosition::new(1.0, 1.0));
        queue.forget(piece);
        assert!(queue.is_empty());
        assert_eq!(queue.rendered_position(piece), None);
    }
}
