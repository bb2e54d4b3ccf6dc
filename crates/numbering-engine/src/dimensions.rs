use numwerk_types::{BoundingBox, ShapeKind};

/// Conversion from host database lengths (centimeters) to the millimeter
/// figures used in stock strings. The host's unit settings are not consulted.
const UNIT_FACTOR: f64 = 10.0;

/// Access to the flattened representation of a sheet-metal part.
pub trait FlatPatternSource {
    /// Bounding box of the flat pattern, unfolding on demand.
    ///
    /// `None` when no flat pattern exists and none can be produced; the
    /// caller treats that as "no stock string", not as an error.
    fn flat_pattern_box(&mut self) -> Option<BoundingBox>;
}

/// Reduce a bounding box to a human-readable stock dimension string.
///
/// Extents are scaled to millimeters, floored and sorted ascending as
/// `d0 ≤ d1 ≤ d2`.
///
/// - `Round` reports `Ø{d1}x{length}` where the length is whichever of the
///   remaining extents lies further from the diameter-like middle extent.
/// - `SheetMetal` re-measures the flat pattern, replaces the smallest extent
///   with the scaled thickness and reports `{d2}x{d1}x{thickness}`. Without
///   a flat pattern the result is the empty string.
/// - `Generic` reports `{d2}x{d1}x{d0}`.
pub fn stock_dimensions(
    bbox: BoundingBox,
    shape: ShapeKind,
    flat: &mut dyn FlatPatternSource,
) -> String {
    let [d0, d1, d2] = scaled_sorted(bbox);

    match shape {
        ShapeKind::Round => {
            if (d0 - d1).abs() < (d2 - d1).abs() {
                format!("Ø{d1}x{d2}")
            } else {
                format!("Ø{d1}x{d0}")
            }
        }
        ShapeKind::SheetMetal { thickness } => {
            let Some(flat_box) = flat.flat_pattern_box() else {
                return String::new();
            };
            let [_, d1, d2] = scaled_sorted(flat_box);
            format!("{}x{}x{}", d2, d1, thickness * UNIT_FACTOR)
        }
        ShapeKind::Generic => format!("{d2}x{d1}x{d0}"),
    }
}

fn scaled_sorted(bbox: BoundingBox) -> [i64; 3] {
    let mut dims = bbox
        .extents()
        .map(|extent| (extent * UNIT_FACTOR).floor() as i64);
    dims.sort();
    dims
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoFlatPattern;

    impl FlatPatternSource for NoFlatPattern {
        fn flat_pattern_box(&mut self) -> Option<BoundingBox> {
            None
        }
    }

    struct FlatPattern(BoundingBox);

    impl FlatPatternSource for FlatPattern {
        fn flat_pattern_box(&mut self) -> Option<BoundingBox> {
            Some(self.0)
        }
    }

    #[test]
    fn generic_reports_sorted_extents_descending() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0);
        let dims = stock_dimensions(bbox, ShapeKind::Generic, &mut NoFlatPattern);
        assert_eq!(dims, "30x20x10");
    }

    #[test]
    fn generic_floors_fractional_extents() {
        let bbox = BoundingBox::new(1.29, 0.51, 2.76);
        let dims = stock_dimensions(bbox, ShapeKind::Generic, &mut NoFlatPattern);
        assert_eq!(dims, "27x12x5");
    }

    #[test]
    fn round_picks_the_farther_extent_as_length() {
        // scaled and sorted: (7, 15, 32); |7-15| < |32-15| → length is 32
        let bbox = BoundingBox::new(3.2, 1.5, 0.7);
        let dims = stock_dimensions(bbox, ShapeKind::Round, &mut NoFlatPattern);
        assert_eq!(dims, "Ø15x32");
    }

    #[test]
    fn round_reports_short_stock_for_disc_shapes() {
        // scaled and sorted: (5, 90, 100); |5-90| > |100-90| → length is 5
        let bbox = BoundingBox::new(10.0, 9.0, 0.5);
        let dims = stock_dimensions(bbox, ShapeKind::Round, &mut NoFlatPattern);
        assert_eq!(dims, "Ø90x5");
    }

    #[test]
    fn sheet_metal_measures_the_flat_pattern() {
        let folded = BoundingBox::new(5.0, 3.0, 1.0);
        let mut flat = FlatPattern(BoundingBox::new(12.0, 8.0, 0.2));
        let shape = ShapeKind::SheetMetal { thickness: 0.2 };
        assert_eq!(stock_dimensions(folded, shape, &mut flat), "120x80x2");
    }

    #[test]
    fn sheet_metal_keeps_fractional_thickness() {
        let folded = BoundingBox::new(5.0, 3.0, 1.0);
        let mut flat = FlatPattern(BoundingBox::new(12.0, 8.0, 0.15));
        let shape = ShapeKind::SheetMetal { thickness: 0.15 };
        assert_eq!(stock_dimensions(folded, shape, &mut flat), "120x80x1.5");
    }

    #[test]
    fn sheet_metal_without_flat_pattern_is_empty() {
        let folded = BoundingBox::new(5.0, 3.0, 1.0);
        let shape = ShapeKind::SheetMetal { thickness: 0.2 };
        assert_eq!(stock_dimensions(folded, shape, &mut NoFlatPattern), "");
    }
}
