//! Facility tools: keyword/location search and single-facility lookup.

pub mod get;
pub mod search;

pub use get::{GetFacilityParams, GetFacilityTool};
pub use search::{SearchFacilitiesParams, SearchFacilitiesTool};
