mod directory_service;
pub mod map_service;
pub mod transformer;

pub use directory_service::{DirectoryState, OfficeDirectoryService};
pub use transformer::transform_to_branch_offices;
