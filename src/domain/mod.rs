// Domain layer: categories, entities, the raw page schema and the transport port.

pub mod category;
pub mod document;
pub mod model;
pub mod ports;
