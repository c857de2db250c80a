mod ongkir_dto;

pub use ongkir_dto::{CheckOngkirForm, ShippingQuoteDto};
