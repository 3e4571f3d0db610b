//! Implementation of the crate traits for `geo_types` points. Longitude is stored as `x` and latitude as `y`.

mod coord;
mod point;
