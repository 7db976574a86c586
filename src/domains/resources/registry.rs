//! Resource Registry - central registration of all resources.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{ResourceDefinition, ServerInfoResource, ToolCatalogResource};
use super::service::ResourceEntry;

fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        render: R::render,
    }
}

/// Get all registered resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ServerInfoResource>(),
        build_resource::<ToolCatalogResource>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![ServerInfoResource::URI, ToolCatalogResource::URI]
}
