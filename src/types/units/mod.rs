mod quantity;
mod tables;

pub use uom::si::f64::{Length, Mass};

pub use uom::si::{
    length::{centimeter, decimeter, inch, meter, millimeter},
    mass::{gram, kilogram, milligram, ounce, pound},
};

pub use quantity::Quantity;
pub use tables::{ConversionTable, LENGTH_TABLE, WEIGHT_TABLE};
