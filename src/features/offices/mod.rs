//! PCP office directory feature.
//!
//! Loads the province -> branch -> office tree from the PCP API, flattens it
//! into `BranchOffice` records and keeps the result together with the derived
//! province/branch name lists.
//!
//! ## Components
//!
//! | Item | Purpose |
//! |------|---------|
//! | `transform_to_branch_offices` | Tree -> flat list, derived address and coordinates |
//! | `OfficeDirectoryService` | Directory state: initialize, refetch, fetch by region |
//! | `OfficeFilter` | Search term + province/branch selection over loaded offices |
//! | `map_service` | Located offices, pseudo-map markers, Google Maps links |

pub mod dtos;
pub mod models;
pub mod services;

pub use dtos::OfficeFilter;
pub use models::{BranchOffice, Coordinates};
pub use services::{transform_to_branch_offices, DirectoryState, OfficeDirectoryService};
