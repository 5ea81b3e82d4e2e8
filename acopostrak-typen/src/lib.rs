//! Geometrische Grundtypen für das Zeichnen von ACOPOStrak-Strecken.

pub mod angle;
pub mod bounds;
pub mod rounding;
pub mod vector;
