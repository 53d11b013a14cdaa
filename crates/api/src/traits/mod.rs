//! Capability traits the generic group law is written against

pub mod coordinate;
pub mod field;

pub use coordinate::Coordinate;
pub use field::FieldModel;
