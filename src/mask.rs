//! Per-pixel collision masks, the shape-accurate alternative to bounding rectangles.
//!
//! A mask is positioned by its top-left corner in integer screen pixels. Entities carry
//! their center, so [`CollisionMask::top_left`] converts between the two. Rotation follows
//! the presentation library's sprite rotation: counter-clockwise on screen, with the
//! bounding box growing to fit the rotated shape.

use glam::{vec2, IVec2, Vec2};
use image::RgbaImage;

// absorbs float noise so that e.g. a 90 degree turn does not grow the box by a pixel
const SIZE_EPSILON: f32 = 1e-3;

pub trait PointInPolyQuery where Self: Copy {
    fn is_in_poly(self, poly: &[Self]) -> bool;
}

impl PointInPolyQuery for Vec2 {
    fn is_in_poly(self, poly: &[Vec2]) -> bool {
        if poly.len() < 3 {
            return false;
        }
        let p = self;
        let mut inside = false;
        let mut j = poly.len() - 1;
        for i in 0..poly.len() {
            let (a, b) = (poly[i], poly[j]);
            if (a.y > p.y) != (b.y > p.y) {
                let crossing_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < crossing_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>
}

impl CollisionMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize]
        }
    }

    pub fn from_fn(width: u32, height: u32, is_set: impl Fn(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(is_set(x, y));
            }
        }
        Self { width, height, bits }
    }

    pub fn filled(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    /// A pixel is solid when its alpha is above `alpha_threshold`.
    pub fn from_image(image: &RgbaImage, alpha_threshold: u8) -> Self {
        Self::from_fn(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y).0[3] > alpha_threshold
        })
    }

    /// Rasterizes a polygon given around its own origin; a pixel is solid when its center
    /// lies inside the scaled polygon (even-odd rule).
    pub fn from_outline(points: &[(f32, f32)], scale: f32) -> Self {
        let poly: Vec<Vec2> = points
            .iter()
            .map(|&(x, y)| vec2(x, y) * scale)
            .collect();
        if poly.is_empty() {
            return Self::new(0, 0);
        }
        let min = poly.iter().fold(Vec2::splat(f32::MAX), |acc, p| acc.min(*p)).floor();
        let max = poly.iter().fold(Vec2::splat(f32::MIN), |acc, p| acc.max(*p)).ceil();
        let size = max - min;
        Self::from_fn(size.x as u32, size.y as u32, |x, y| {
            (min + vec2(x as f32 + 0.5, y as f32 + 0.5)).is_in_poly(&poly)
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .map(move |(ix, _)| (ix as u32 % width, ix as u32 / width))
    }

    /// Top-left pixel of this mask when its center sits at `center`.
    pub fn top_left(&self, center: Vec2) -> IVec2 {
        (center - self.size() / 2.0).floor().as_ivec2()
    }

    pub fn rotated(&self, degrees: f32) -> Self {
        let radians = degrees.to_radians();
        let (sin, cos) = (snap(radians.sin()), snap(radians.cos()));
        let (w, h) = (self.width as f32, self.height as f32);
        let new_width = (w * cos.abs() + h * sin.abs() - SIZE_EPSILON).ceil().max(0.0) as u32;
        let new_height = (w * sin.abs() + h * cos.abs() - SIZE_EPSILON).ceil().max(0.0) as u32;

        let src_half = vec2(w, h) / 2.0;
        let dst_half = vec2(new_width as f32, new_height as f32) / 2.0;
        Self::from_fn(new_width, new_height, |x, y| {
            let d = vec2(x as f32 + 0.5, y as f32 + 0.5) - dst_half;
            let s = vec2(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + src_half;
            self.get(s.x.floor() as i32, s.y.floor() as i32)
        })
    }

    /// `offset` is the other mask's top-left minus this mask's top-left.
    pub fn overlaps(&self, other: &CollisionMask, offset: IVec2) -> bool {
        let x_start = offset.x.max(0);
        let y_start = offset.y.max(0);
        let x_end = (offset.x + other.width as i32).min(self.width as i32);
        let y_end = (offset.y + other.height as i32).min(self.height as i32);
        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return true;
                }
            }
        }
        false
    }
}

fn snap(value: f32) -> f32 {
    let rounded = value.round();
    if (rounded - value).abs() < 1e-6 { rounded } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;
    use image::Rgba;

    #[test]
    fn outline_square_fills_its_box() {
        let mask = CollisionMask::from_outline(&[(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)], 1.0);
        assert_eq!((mask.width(), mask.height()), (4, 4));
        assert_eq!(mask.count(), 16);
    }

    #[test]
    fn outline_scale_grows_the_mask() {
        let mask = CollisionMask::from_outline(&[(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)], 3.0);
        assert_eq!((mask.width(), mask.height()), (12, 12));
    }

    #[test]
    fn triangle_outline_leaves_corners_empty() {
        let mask = CollisionMask::from_outline(&[(0.0, -10.0), (10.0, 10.0), (-10.0, 10.0)], 1.0);
        assert!(!mask.get(0, 0));
        assert!(!mask.get(19, 0));
        assert!(mask.get(10, 19));
        assert!(mask.count() < 400);
    }

    #[test]
    fn image_alpha_threshold_decides_solidity() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 127]));
        image.put_pixel(1, 0, Rgba([255, 0, 0, 128]));
        let mask = CollisionMask::from_image(&image, 127);
        assert!(!mask.get(0, 0));
        assert!(mask.get(1, 0));
    }

    #[test]
    fn quarter_turn_swaps_dimensions() {
        let bar = CollisionMask::filled(6, 2);
        let turned = bar.rotated(90.0);
        assert_eq!((turned.width(), turned.height()), (2, 6));
        assert_eq!(turned.count(), 12);
    }

    #[test]
    fn rotation_is_counter_clockwise_on_screen() {
        // a single pixel at the top middle ends up at the left middle
        let mask = CollisionMask::from_fn(3, 3, |x, y| (x, y) == (1, 0));
        let turned = mask.rotated(90.0);
        assert!(turned.get(0, 1));
        assert_eq!(turned.count(), 1);

        let turned_back = mask.rotated(-90.0);
        assert!(turned_back.get(2, 1));
    }

    #[test]
    fn half_turn_mirrors_both_axes() {
        let mask = CollisionMask::from_fn(4, 3, |x, y| (x, y) == (0, 0));
        let turned = mask.rotated(180.0);
        assert_eq!((turned.width(), turned.height()), (4, 3));
        assert!(turned.get(3, 2));
    }

    #[test]
    fn diagonal_turn_expands_the_box() {
        let square = CollisionMask::filled(10, 10);
        let turned = square.rotated(45.0);
        assert_eq!((turned.width(), turned.height()), (15, 15));
        assert!(turned.get(7, 7));
        assert!(!turned.get(0, 0));
    }

    #[test]
    fn zero_turn_is_identity() {
        let mask = CollisionMask::from_outline(crate::constants::ASTEROID_OUTLINE, 1.0);
        assert_eq!(mask.rotated(0.0), mask);
        assert_eq!(mask.rotated(360.0), mask);
    }

    #[test]
    fn overlap_needs_shared_solid_pixels() {
        let a = CollisionMask::filled(4, 4);
        let b = CollisionMask::filled(4, 4);
        assert!(a.overlaps(&b, ivec2(3, 3)));
        assert!(b.overlaps(&a, ivec2(-3, -3)));
        assert!(!a.overlaps(&b, ivec2(4, 0)));
        assert!(!a.overlaps(&b, ivec2(0, -4)));
    }

    #[test]
    fn transparent_corners_do_not_collide() {
        // diamond-ish triangles whose boxes overlap but shapes do not
        let a = CollisionMask::from_fn(4, 4, |x, y| x + y < 2);
        let b = CollisionMask::from_fn(4, 4, |x, y| x + y > 4);
        assert!(!a.overlaps(&b, ivec2(0, 0)));
        assert!(a.overlaps(&CollisionMask::filled(1, 1), ivec2(0, 0)));
    }

    #[test]
    fn top_left_centers_the_mask() {
        let mask = CollisionMask::filled(10, 6);
        assert_eq!(mask.top_left(vec2(100.0, 50.0)), ivec2(95, 47));
        assert_eq!(mask.top_left(vec2(0.2, 0.0)), ivec2(-5, -3));
    }

    #[test]
    fn pixels_lists_solid_coordinates() {
        let mask = CollisionMask::from_fn(3, 2, |x, y| (x, y) == (2, 1) || (x, y) == (0, 0));
        let pixels: Vec<_> = mask.pixels().collect();
        assert_eq!(pixels, vec![(0, 0), (2, 1)]);
    }
}
