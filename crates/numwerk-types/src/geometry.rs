use serde::{Deserialize, Serialize};

/// Axis-aligned extents of a document's geometry, in document length units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Extents from min/max corner points, as host range boxes report them.
    pub fn from_corners(min: [f64; 3], max: [f64; 3]) -> Self {
        Self {
            length: max[0] - min[0],
            width: max[1] - min[1],
            height: max[2] - min[2],
        }
    }

    pub fn extents(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }
}

/// Shape classification driving stock-dimension reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    /// Turned part; dimensions report diameter × length.
    Round,
    /// Sheet-metal part; dimensions come from the flat pattern plus thickness.
    SheetMetal { thickness: f64 },
    /// Anything else; plain sorted extents.
    Generic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_from_corners() {
        let bbox = BoundingBox::from_corners([1.0, 2.0, 3.0], [4.0, 4.0, 3.5]);
        assert_eq!(bbox.extents(), [3.0, 2.0, 0.5]);
    }
}
