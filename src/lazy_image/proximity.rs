/// An axis-aligned rectangle in page (scroll-content) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Grows the rectangle by `margin` on every side
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Returns the overlapping part of both rectangles.
    ///
    /// Rectangles sharing only an edge produce a zero-area intersection, which
    /// still counts as intersecting.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (left <= right && top <= bottom).then(|| Rect::new(left, top, right - left, bottom - top))
    }

    /// Same rectangle moved by the given offset
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// How close to the viewport a region must come to be considered "near".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityConfig {
    margin_px: u32,
    visible_fraction: f64,
}
impl ProximityConfig {
    pub const DEFAULT_MARGIN_PX: u32 = 50;
    pub const DEFAULT_VISIBLE_FRACTION: f64 = 0.01;

    /// `visible_fraction` is clamped into `[0, 1]`; NaN falls back to the default.
    pub fn new(margin_px: u32, visible_fraction: f64) -> Self {
        let visible_fraction = if visible_fraction.is_nan() {
            Self::DEFAULT_VISIBLE_FRACTION
        } else {
            visible_fraction.clamp(0.0, 1.0)
        };
        Self {
            margin_px,
            visible_fraction,
        }
    }

    pub fn margin_px(&self) -> u32 {
        self.margin_px
    }

    pub fn visible_fraction(&self) -> f64 {
        self.visible_fraction
    }

    /// Decides whether `region` is near `viewport`.
    ///
    /// The viewport is grown by the margin, then the share of the region
    /// falling inside it must reach the visible fraction. A zero-area region
    /// that touches the grown viewport counts as fully visible.
    pub fn is_near(&self, region: &Rect, viewport: &Rect) -> bool {
        let root = viewport.expand(self.margin_px as f64);
        let Some(overlap) = region.intersection(&root) else {
            return false;
        };
        let ratio = if region.area() > 0.0 {
            overlap.area() / region.area()
        } else {
            1.0
        };
        ratio >= self.visible_fraction
    }
}
impl Default for ProximityConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARGIN_PX, Self::DEFAULT_VISIBLE_FRACTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn region_inside_viewport_is_near() {
        let config = ProximityConfig::default();
        assert!(config.is_near(&Rect::new(10.0, 10.0, 100.0, 100.0), &viewport()));
    }

    #[test]
    fn region_within_margin_is_near() {
        let config = ProximityConfig::default();
        // Starts 40px below the fold, inside the 50px margin
        assert!(config.is_near(&Rect::new(0.0, 640.0, 200.0, 200.0), &viewport()));
    }

    #[test]
    fn region_beyond_margin_is_not_near() {
        let config = ProximityConfig::default();
        assert!(!config.is_near(&Rect::new(0.0, 700.0, 200.0, 200.0), &viewport()));
    }

    #[test]
    fn visible_fraction_is_enforced() {
        let config = ProximityConfig::new(0, 0.5);
        // 100 of 400 rows visible
        let region = Rect::new(0.0, 500.0, 100.0, 400.0);
        assert!(!config.is_near(&region, &viewport()));
        let region = Rect::new(0.0, 300.0, 100.0, 400.0);
        assert!(config.is_near(&region, &viewport()));
    }

    #[test]
    fn zero_area_region_touching_edge_is_near() {
        let config = ProximityConfig::new(0, 0.01);
        assert!(config.is_near(&Rect::new(0.0, 600.0, 0.0, 0.0), &viewport()));
        assert!(!config.is_near(&Rect::new(0.0, 601.0, 0.0, 0.0), &viewport()));
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(ProximityConfig::new(0, 3.0).visible_fraction(), 1.0);
        assert_eq!(ProximityConfig::new(0, -1.0).visible_fraction(), 0.0);
        assert_eq!(
            ProximityConfig::new(0, f64::NAN).visible_fraction(),
            ProximityConfig::DEFAULT_VISIBLE_FRACTION
        );
    }
}
