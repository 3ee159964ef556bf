//! Character canvas with a depth buffer

use glam::{Mat4, Vec3};

/// What occupies a canvas cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Empty,
    Water,
    Tile,
    Obstacle,
    Player,
}

impl Glyph {
    pub fn ch(self) -> char {
        match self {
            Glyph::Empty => ' ',
            Glyph::Water => '~',
            Glyph::Tile => '#',
            Glyph::Obstacle => 'O',
            Glyph::Player => '@',
        }
    }
}

pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Glyph>,
    /// NDC depth per cell; smaller is nearer
    depth: Vec<f32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let mut canvas = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            depth: Vec::new(),
        };
        canvas.resize(width, height);
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![Glyph::Empty; width * height];
        self.depth = vec![f32::INFINITY; width * height];
    }

    pub fn clear(&mut self) {
        self.cells.fill(Glyph::Empty);
        self.depth.fill(f32::INFINITY);
    }

    pub fn get(&self, col: usize, row: usize) -> Glyph {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col]
        } else {
            Glyph::Empty
        }
    }

    pub fn row(&self, row: usize) -> &[Glyph] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Project `world` through `view_proj` and keep the glyph if it is the
    /// nearest one in its cell. Returns false when clipped or hidden.
    pub fn plot(&mut self, view_proj: &Mat4, world: Vec3, glyph: Glyph) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let ndc = view_proj.project_point3(world);
        if !ndc.is_finite()
            || ndc.x.abs() > 1.0
            || ndc.y.abs() > 1.0
            || ndc.z < -1.0
            || ndc.z > 1.0
        {
            return false;
        }

        let col = ((ndc.x + 1.0) * 0.5 * (self.width - 1) as f32).round() as usize;
        let row = ((1.0 - ndc.y) * 0.5 * (self.height - 1) as f32).round() as usize;
        let idx = row * self.width + col;
        if ndc.z >= self.depth[idx] {
            return false;
        }
        self.depth[idx] = ndc.z;
        self.cells[idx] = glyph;
        true
    }

    pub fn count(&self, glyph: Glyph) -> usize {
        self.cells.iter().filter(|&&g| g == glyph).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_projection_hits_center() {
        let mut canvas = Canvas::new(11, 5);
        assert!(canvas.plot(&Mat4::IDENTITY, Vec3::ZERO, Glyph::Tile));
        assert_eq!(canvas.get(5, 2), Glyph::Tile);

        // Top-left corner of NDC
        assert!(canvas.plot(&Mat4::IDENTITY, Vec3::new(-1.0, 1.0, 0.0), Glyph::Water));
        assert_eq!(canvas.get(0, 0), Glyph::Water);
    }

    #[test]
    fn test_nearest_glyph_kept() {
        let mut canvas = Canvas::new(3, 3);
        assert!(canvas.plot(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, 0.5), Glyph::Tile));
        assert!(canvas.plot(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, -0.5), Glyph::Player));
        assert!(!canvas.plot(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, 0.0), Glyph::Water));
        assert_eq!(canvas.get(1, 1), Glyph::Player);
    }

    #[test]
    fn test_clipped_points_rejected() {
        let mut canvas = Canvas::new(4, 4);
        assert!(!canvas.plot(&Mat4::IDENTITY, Vec3::new(1.5, 0.0, 0.0), Glyph::Tile));
        assert!(!canvas.plot(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, 2.0), Glyph::Tile));
        assert_eq!(canvas.count(Glyph::Tile), 0);

        let mut empty = Canvas::new(0, 0);
        assert!(!empty.plot(&Mat4::IDENTITY, Vec3::ZERO, Glyph::Tile));
    }

    #[test]
    fn test_clear_resets_depth() {
        let mut canvas = Canvas::new(3, 3);
        canvas.plot(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, -0.9), Glyph::Player);
        canvas.clear();
        assert_eq!(canvas.get(1, 1), Glyph::Empty);
        assert!(canvas.plot(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, 0.9), Glyph::Tile));
    }
}
