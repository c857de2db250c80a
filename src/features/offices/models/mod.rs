mod branch_office;

pub use branch_office::{BranchOffice, Coordinates};
