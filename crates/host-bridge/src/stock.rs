//! Stock-dimension upkeep for manufactured parts.

use classify_engine::{SaveSession, SessionError};
use numbering_engine::stock_dimensions;
use numwerk_types::{properties, PropertyValue, ShapeKind};

use crate::dispatch::DispatchError;
use crate::host::{HostDocument, PartGeometry};

/// Compute the stock string for a part from its current geometry.
///
/// The round flag wins over sheet-metal detection: a turned part is reported
/// as diameter × length even when the host models it as sheet metal.
pub fn part_stock_dimensions(geometry: &mut dyn PartGeometry, is_round: bool) -> String {
    let bbox = geometry.bounding_box();
    let shape = if is_round {
        ShapeKind::Round
    } else if let Some(thickness) = geometry.sheet_thickness() {
        ShapeKind::SheetMetal { thickness }
    } else {
        ShapeKind::Generic
    };
    stock_dimensions(bbox, shape, geometry.as_flat_pattern())
}

/// Refresh a session's stock preview from the document geometry.
pub fn recalc_session_stock(
    session: &mut SaveSession,
    geometry: &mut dyn PartGeometry,
) -> Result<(), SessionError> {
    let dimensions = part_stock_dimensions(geometry, session.is_round());
    session.set_stock_dimensions(dimensions)
}

/// Host "before save" upkeep for part documents.
///
/// Ensures the three stock-tracking properties exist (defaults: empty stock
/// string, refresh enabled, not round) and, when the refresh flag is set,
/// recomputes the stock string from current geometry and writes it back.
pub fn refresh_stock(doc: &mut dyn HostDocument) -> Result<(), DispatchError> {
    if doc.property(properties::STOCK_DIMENSIONS).is_none() {
        doc.set_property(properties::STOCK_DIMENSIONS, PropertyValue::text(""))?;
    }

    let refresh = match doc.property(properties::REFRESH_STOCK) {
        Some(value) => value.as_bool().unwrap_or(false),
        None => {
            doc.set_property(properties::REFRESH_STOCK, PropertyValue::bool(true))?;
            true
        }
    };
    let is_round = match doc.property(properties::IS_ROUND) {
        Some(value) => value.as_bool().unwrap_or(false),
        None => {
            doc.set_property(properties::IS_ROUND, PropertyValue::bool(false))?;
            false
        }
    };

    if !refresh {
        return Ok(());
    }
    let Some(geometry) = doc.geometry() else {
        return Ok(());
    };
    let dimensions = part_stock_dimensions(geometry, is_round);
    doc.set_property(properties::STOCK_DIMENSIONS, PropertyValue::text(dimensions))?;
    Ok(())
}
