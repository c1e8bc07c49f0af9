//! Versioned API request specs
//!
//! Every request kind is a free constructor function in [`requests`]
//! that fixes the supported protocol-version range and fills the
//! parameter map once. There is no request-type hierarchy; a request is
//! a value.

use crate::error::RequestError;
use crate::params::ParameterMap;
use crate::version::ProtocolVersion;
use nsc_xml::expand;

/// A fully prepared, immutable API request.
///
/// Holds the inclusive `[min, max]` version range the request is valid
/// for, one template per protocol revision that changed its document
/// shape, and the parameter mapping the template is rendered against.
///
/// The session collaborator uses [`first_supported_version`] /
/// [`last_supported_version`] (or [`ensure_supported`]) to refuse
/// submission outside the range; rendering itself does not gate.
///
/// [`first_supported_version`]: RequestSpec::first_supported_version
/// [`last_supported_version`]: RequestSpec::last_supported_version
/// [`ensure_supported`]: RequestSpec::ensure_supported
#[derive(Debug)]
pub struct RequestSpec {
    name: &'static str,
    min_version: ProtocolVersion,
    max_version: ProtocolVersion,
    /// Ascending by version; the first entry carries the base template.
    templates: Vec<(ProtocolVersion, &'static str)>,
    params: ParameterMap,
}

impl RequestSpec {
    /// Build a spec whose document shape is the same across its whole
    /// version range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`; the range is a construction invariant.
    pub fn new(
        name: &'static str,
        min: ProtocolVersion,
        max: ProtocolVersion,
        template: &'static str,
        params: ParameterMap,
    ) -> Self {
        Self::with_templates(name, min, max, vec![(min, template)], params)
    }

    /// Build a spec with one template per protocol revision that changed
    /// its shape. Entries must be ascending and start at `min`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or the template table is empty.
    pub fn with_templates(
        name: &'static str,
        min: ProtocolVersion,
        max: ProtocolVersion,
        templates: Vec<(ProtocolVersion, &'static str)>,
        params: ParameterMap,
    ) -> Self {
        assert!(min <= max, "request version range is inverted");
        assert!(!templates.is_empty(), "request needs at least one template");
        Self {
            name,
            min_version: min,
            max_version: max,
            templates,
            params,
        }
    }

    /// The request element name, for diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Oldest protocol version this request is valid for
    pub fn first_supported_version(&self) -> ProtocolVersion {
        self.min_version
    }

    /// Newest protocol version this request is valid for
    pub fn last_supported_version(&self) -> ProtocolVersion {
        self.max_version
    }

    pub fn supports(&self, version: ProtocolVersion) -> bool {
        self.min_version <= version && version <= self.max_version
    }

    /// Check the negotiated session version against the declared range.
    ///
    /// The session collaborator calls this before submitting.
    pub fn ensure_supported(&self, negotiated: ProtocolVersion) -> Result<(), RequestError> {
        if self.supports(negotiated) {
            Ok(())
        } else {
            Err(RequestError::VersionUnsupported {
                request: self.name,
                requested: negotiated,
                min: self.min_version,
                max: self.max_version,
            })
        }
    }

    /// Read access to the parameter mapping
    pub fn params(&self) -> &ParameterMap {
        &self.params
    }

    /// Render the final request document for the negotiated version.
    ///
    /// Selects the newest template not exceeding `negotiated`, invokes
    /// any content generators in the mapping, and expands the template.
    /// Parameters absent from the mapping (an unsupplied sync-id)
    /// expand to the empty string.
    pub fn build_xml(&self, negotiated: ProtocolVersion) -> String {
        let template = self
            .templates
            .iter()
            .rev()
            .find(|(version, _)| *version <= negotiated)
            .map(|(_, template)| *template)
            .unwrap_or(self.templates[0].1);
        expand(template, &self.params.resolve())
    }
}

/// Free constructors, one per request kind.
pub mod requests {
    use super::*;
    use crate::generators::{HostRangeGenerator, ReportFilterGenerator};

    const ENGINE_LISTING: &str =
        "<EngineListingRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\"/>";
    const ENGINE_ACTIVITY: &str =
        "<EngineActivityRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\" engine-id=\"${engine-id}\"/>";
    const SCAN_ACTIVITY: &str =
        "<ScanActivityRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\"/>";
    const SCAN_STATUS: &str =
        "<ScanStatusRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\" scan-id=\"${scan-id}\"/>";
    const SCAN_STOP: &str =
        "<ScanStopRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\" scan-id=\"${scan-id}\"/>";
    const SITE_LISTING: &str =
        "<SiteListingRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\"/>";
    const SITE_SCAN_1_0: &str =
        "<SiteScanRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\" site-id=\"${site-id}\"/>";
    const SITE_SCAN_1_1: &str =
        "<SiteScanRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\" site-id=\"${site-id}\" engine-id=\"${engine-id}\"/>";
    const SITE_DEVICE_LISTING: &str =
        "<SiteDeviceListingRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\" site-id=\"${site-id}\"/>";
    const ASSET_GROUP_LISTING: &str =
        "<AssetGroupListingRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\"/>";
    const SITE_SAVE: &str = concat!(
        "<SiteSaveRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\">",
        "<Site id=\"${site-id}\" name=\"${site-name}\" description=\"${site-description}\">",
        "<Hosts>${hosts}</Hosts>",
        "</Site>",
        "</SiteSaveRequest>"
    );
    const REPORT_GENERATE: &str = concat!(
        "<ReportGenerateRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\" report-id=\"${report-id}\">",
        "<Filters>${filters}</Filters>",
        "</ReportGenerateRequest>"
    );
    const DISCOVERY_CONNECTION_LISTING: &str =
        "<DiscoveryConnectionListingRequest session-id=\"${session-id}\" sync-id=\"${sync-id}\"/>";

    /// Common base mapping: the server-issued session token plus the
    /// caller's correlation token when one was supplied.
    fn base_params(session_id: &str, sync_id: Option<&str>) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.set_scalar("session-id", session_id);
        if let Some(sync) = sync_id {
            params.set_escaped("sync-id", sync);
        }
        params
    }

    /// List every scan engine paired with the console. 1.1 onwards.
    pub fn engine_listing(session_id: &str, sync_id: Option<&str>) -> RequestSpec {
        RequestSpec::new(
            "EngineListingRequest",
            ProtocolVersion::V1_1,
            ProtocolVersion::V1_2,
            ENGINE_LISTING,
            base_params(session_id, sync_id),
        )
    }

    /// List the scans currently running on one engine. 1.1 onwards.
    pub fn engine_activity(session_id: &str, sync_id: Option<&str>, engine_id: i32) -> RequestSpec {
        let mut params = base_params(session_id, sync_id);
        params.set_scalar("engine-id", engine_id.to_string());
        RequestSpec::new(
            "EngineActivityRequest",
            ProtocolVersion::V1_1,
            ProtocolVersion::V1_2,
            ENGINE_ACTIVITY,
            params,
        )
    }

    /// List all scans currently in progress on the console.
    pub fn scan_activity(session_id: &str, sync_id: Option<&str>) -> RequestSpec {
        RequestSpec::new(
            "ScanActivityRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_2,
            SCAN_ACTIVITY,
            base_params(session_id, sync_id),
        )
    }

    /// Poll the status of one scan.
    pub fn scan_status(session_id: &str, sync_id: Option<&str>, scan_id: i32) -> RequestSpec {
        let mut params = base_params(session_id, sync_id);
        params.set_scalar("scan-id", scan_id.to_string());
        RequestSpec::new(
            "ScanStatusRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_2,
            SCAN_STATUS,
            params,
        )
    }

    /// Stop a running scan.
    pub fn scan_stop(session_id: &str, sync_id: Option<&str>, scan_id: i32) -> RequestSpec {
        let mut params = base_params(session_id, sync_id);
        params.set_scalar("scan-id", scan_id.to_string());
        RequestSpec::new(
            "ScanStopRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_2,
            SCAN_STOP,
            params,
        )
    }

    /// List every site configured on the console.
    pub fn site_listing(session_id: &str, sync_id: Option<&str>) -> RequestSpec {
        RequestSpec::new(
            "SiteListingRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_2,
            SITE_LISTING,
            base_params(session_id, sync_id),
        )
    }

    /// Start a scan of one site. From 1.1 the caller may pin the scan
    /// to a specific engine; earlier consoles always choose their own.
    pub fn site_scan(
        session_id: &str,
        sync_id: Option<&str>,
        site_id: i32,
        engine_id: Option<i32>,
    ) -> RequestSpec {
        let mut params = base_params(session_id, sync_id);
        params.set_scalar("site-id", site_id.to_string());
        if let Some(engine) = engine_id {
            params.set_scalar("engine-id", engine.to_string());
        }
        RequestSpec::with_templates(
            "SiteScanRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_2,
            vec![
                (ProtocolVersion::V1_0, SITE_SCAN_1_0),
                (ProtocolVersion::V1_1, SITE_SCAN_1_1),
            ],
            params,
        )
    }

    /// List the devices of one site. Superseded by asset filtering in
    /// 1.2, so this request tops out at 1.1.
    pub fn site_device_listing(
        session_id: &str,
        sync_id: Option<&str>,
        site_id: i32,
    ) -> RequestSpec {
        let mut params = base_params(session_id, sync_id);
        params.set_scalar("site-id", site_id.to_string());
        RequestSpec::new(
            "SiteDeviceListingRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_1,
            SITE_DEVICE_LISTING,
            params,
        )
    }

    /// List every asset group visible to the session.
    pub fn asset_group_listing(session_id: &str, sync_id: Option<&str>) -> RequestSpec {
        RequestSpec::new(
            "AssetGroupListingRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_2,
            ASSET_GROUP_LISTING,
            base_params(session_id, sync_id),
        )
    }

    /// Create or update a site. Pass `site_id = -1` to create. Name and
    /// description are caller-supplied text and are escaped here; the
    /// host list renders through its generator.
    pub fn site_save(
        session_id: &str,
        sync_id: Option<&str>,
        site_id: i32,
        name: &str,
        description: &str,
        hosts: HostRangeGenerator,
    ) -> RequestSpec {
        let mut params = base_params(session_id, sync_id);
        params.set_scalar("site-id", site_id.to_string());
        params.set_escaped("site-name", name);
        params.set_escaped("site-description", description);
        params.set_generator("hosts", Box::new(hosts));
        RequestSpec::new(
            "SiteSaveRequest",
            ProtocolVersion::V1_0,
            ProtocolVersion::V1_2,
            SITE_SAVE,
            params,
        )
    }

    /// Generate a report from an existing report configuration,
    /// restricted by the supplied filters. 1.1 onwards.
    pub fn report_generate(
        session_id: &str,
        sync_id: Option<&str>,
        report_id: i32,
        filters: ReportFilterGenerator,
    ) -> RequestSpec {
        let mut params = base_params(session_id, sync_id);
        params.set_scalar("report-id", report_id.to_string());
        params.set_generator("filters", Box::new(filters));
        RequestSpec::new(
            "ReportGenerateRequest",
            ProtocolVersion::V1_1,
            ProtocolVersion::V1_2,
            REPORT_GENERATE,
            params,
        )
    }

    /// List discovery connections. Introduced in 1.2.
    pub fn discovery_connection_listing(
        session_id: &str,
        sync_id: Option<&str>,
    ) -> RequestSpec {
        RequestSpec::new(
            "DiscoveryConnectionListingRequest",
            ProtocolVersion::V1_2,
            ProtocolVersion::V1_2,
            DISCOVERY_CONNECTION_LISTING,
            base_params(session_id, sync_id),
        )
    }
}
