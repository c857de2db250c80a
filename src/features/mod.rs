pub mod offices;
pub mod ongkir;
pub mod tracking;
