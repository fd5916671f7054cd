#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in arena pixels. `(x, y)` is the top-left corner and
/// y grows downward, matching the frame buffer layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn position(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }

    /// Hard clamp into `[0, width - w] x [0, height - h]`. No push-out, no wrap.
    pub fn clamped_to(self, width: f32, height: f32) -> Self {
        Self {
            x: clamp_axis(self.x, width - self.w),
            y: clamp_axis(self.y, height - self.h),
            ..self
        }
    }
}

/// Strict half-open overlap test. Rectangles that only share an edge do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn edge_sharing_rects_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
        assert!(!overlaps(&a, &corner));
    }

    #[test]
    fn overlap_is_symmetric() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(10.0, 0.0, 10.0, 10.0),
            Rect::new(2.0, 3.0, 1.0, 1.0),
            Rect::new(-5.0, -5.0, 30.0, 30.0),
            Rect::new(9.5, 9.5, 0.5, 0.5),
            Rect::new(100.0, 100.0, 4.0, 4.0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn contained_rect_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn clamp_keeps_rect_inside_bounds() {
        let left_top = Rect::new(-4.0, -9.0, 24.0, 24.0).clamped_to(320.0, 240.0);
        assert_eq!(left_top.position(), Vec2::new(0.0, 0.0));

        let right_bottom = Rect::new(400.0, 239.0, 24.0, 24.0).clamped_to(320.0, 240.0);
        assert_eq!(right_bottom.position(), Vec2::new(296.0, 216.0));

        let inside = Rect::new(10.0, 20.0, 24.0, 24.0).clamped_to(320.0, 240.0);
        assert_eq!(inside.position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn translated_moves_origin_only() {
        let moved = Rect::new(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(10.0, -2.0));
        assert_eq!(moved, Rect::new(11.0, 0.0, 3.0, 4.0));
    }
}
