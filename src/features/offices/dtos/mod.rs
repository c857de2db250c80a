mod office_filter;

pub use office_filter::OfficeFilter;
