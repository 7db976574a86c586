//! Facility detail tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::super::{BackendRequest, ToolDefinition, check_path_segment, path_segment};
use crate::domains::tools::ToolError;
use crate::core::backend::QueryParams;

/// Parameters for facility lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFacilityParams {
    /// The unique facility identifier (e.g. 'equinix-da1' or numeric ID).
    pub facility_id: String,
}

/// Get detailed information about one facility.
pub struct GetFacilityTool;

impl ToolDefinition for GetFacilityTool {
    const NAME: &'static str = "get_facility";
    const TITLE: &'static str = "Get Facility Details";
    const DESCRIPTION: &'static str = "Get detailed information about a specific data center facility: name, address, coordinates, provider, power capacity (MW), certifications, connectivity, and nearby infrastructure.";

    type Params = GetFacilityParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        check_path_segment("facility_id", &params.facility_id)
    }

    fn request(params: &Self::Params) -> BackendRequest {
        let path = format!("/api/v1/facilities/{}", path_segment(&params.facility_id));
        let audit = QueryParams::new().with("facility_id", params.facility_id.as_str());

        BackendRequest::new(path, QueryParams::new()).with_audit(audit)
    }
}
