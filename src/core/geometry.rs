use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f32 {
        (self.x1 - self.x0).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).max(0.0)
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            x0: self.x0 * factor,
            y0: self.y0 * factor,
            x1: self.x1 * factor,
            y1: self.y1 * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn computes_union() {
        let a = BBox::new(0.0, 10.0, 5.0, 20.0);
        let b = BBox::new(6.0, 11.0, 10.0, 19.0);
        assert_eq!(a.union(&b), BBox::new(0.0, 10.0, 10.0, 20.0));
    }

    #[test]
    fn scales_uniformly() {
        let a = BBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.scaled(2.0), BBox::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a.scaled(1.0), a);
    }
}
