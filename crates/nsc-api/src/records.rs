//! Domain records built from response elements
//!
//! Each record binds one element at construction, pulls its declared
//! attributes through [`AttributeExtractor`], and for nested shapes
//! walks the element's immediate children by tag name. Construction is
//! atomic: the first extraction failure aborts the record, so callers
//! never see a half-populated value. Records own their data outright -
//! nothing borrows from the response document after construction.

use crate::attributes::AttributeExtractor;
use crate::error::ApiError;
use crate::response::ApiResponse;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use sxd_document::dom::{ChildOfElement, Element};
use tracing::debug;

/// Timestamp layout used by the console, e.g. `20081008T105838495`.
const WIRE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S%3f";

fn parse_wire_time(raw: Option<&str>) -> Result<Option<NaiveDateTime>, ApiError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDateTime::parse_from_str(raw, WIRE_TIME_FORMAT)
            .map(Some)
            .map_err(|e| ApiError::InvalidTimestamp {
                value: raw.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// Health of a paired scan engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineStatus {
    Active,
    PendingAuth,
    Incompatible,
    NotResponding,
    Unknown,
}

impl EngineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineStatus::Active => "active",
            EngineStatus::PendingAuth => "pending-auth",
            EngineStatus::Incompatible => "incompatible",
            EngineStatus::NotResponding => "not-responding",
            EngineStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for EngineStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EngineStatus::Active),
            "pending-auth" => Ok(EngineStatus::PendingAuth),
            "incompatible" => Ok(EngineStatus::Incompatible),
            "not-responding" => Ok(EngineStatus::NotResponding),
            "unknown" => Ok(EngineStatus::Unknown),
            other => Err(ApiError::UnknownStatus {
                kind: "engine",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Running,
    Finished,
    Stopped,
    Error,
    Dispatched,
    Paused,
    Aborted,
    Unknown,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Running => "running",
            ScanStatus::Finished => "finished",
            ScanStatus::Stopped => "stopped",
            ScanStatus::Error => "error",
            ScanStatus::Dispatched => "dispatched",
            ScanStatus::Paused => "paused",
            ScanStatus::Aborted => "aborted",
            ScanStatus::Unknown => "unknown",
        }
    }

    /// Whether the scan has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanStatus::Finished | ScanStatus::Stopped | ScanStatus::Error | ScanStatus::Aborted
        )
    }
}

impl FromStr for ScanStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(ScanStatus::Running),
            "finished" => Ok(ScanStatus::Finished),
            "stopped" => Ok(ScanStatus::Stopped),
            "error" => Ok(ScanStatus::Error),
            "dispatched" => Ok(ScanStatus::Dispatched),
            "paused" => Ok(ScanStatus::Paused),
            "aborted" => Ok(ScanStatus::Aborted),
            "unknown" => Ok(ScanStatus::Unknown),
            other => Err(ApiError::UnknownStatus {
                kind: "scan",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one scan engine paired with the console
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub port: i32,
    pub status: EngineStatus,
    pub scope: Option<String>,
}

impl EngineSummary {
    pub fn from_element(element: Element<'_>) -> Result<Self, ApiError> {
        let attrs = AttributeExtractor::bind(element);
        Ok(Self {
            id: attrs.get_int("id")?,
            name: attrs.get_str("name")?.to_string(),
            address: attrs.get_str("address")?.to_string(),
            port: attrs.get_int("port")?,
            status: attrs.get_str("status")?.parse()?,
            scope: attrs.get_opt_str("scope").map(str::to_string),
        })
    }

    /// Build every engine summary of a listing response, in document
    /// order.
    pub fn collect(response: &ApiResponse) -> Result<Vec<Self>, ApiError> {
        let engines: Vec<Self> = response
            .grab_elements("//EngineSummary")?
            .into_iter()
            .map(Self::from_element)
            .collect::<Result<_, _>>()?;
        debug!(count = engines.len(), "collected engine summaries");
        Ok(engines)
    }
}

/// Task tallies of a scan, from its `<tasks>` child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub pending: i64,
    pub active: i64,
    pub completed: i64,
}

/// Node tallies of a scan, from its `<nodes>` child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeCounts {
    pub live: i64,
    pub dead: i64,
    pub filtered: i64,
    pub unresolved: i64,
    pub other: i64,
}

/// One `<vulnerabilities>` bucket of a scan summary: a count per
/// status, optionally split by severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityTally {
    pub status: String,
    pub severity: Option<i32>,
    pub count: i64,
}

/// Summary of one scan, as carried by scan activity/status responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    pub scan_id: i32,
    pub site_id: i32,
    pub engine_id: Option<i32>,
    pub status: ScanStatus,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub tasks: Option<TaskCounts>,
    pub nodes: Option<NodeCounts>,
    pub vulnerabilities: Vec<VulnerabilityTally>,
}

impl ScanSummary {
    pub fn from_element(element: Element<'_>) -> Result<Self, ApiError> {
        let attrs = AttributeExtractor::bind(element);
        let mut summary = Self {
            scan_id: attrs.get_int("scan-id")?,
            site_id: attrs.get_int("site-id")?,
            engine_id: attrs.get_opt_int("engine-id")?,
            status: attrs.get_str("status")?.parse()?,
            start_time: parse_wire_time(attrs.get_opt_str("startTime"))?,
            end_time: parse_wire_time(attrs.get_opt_str("endTime"))?,
            tasks: None,
            nodes: None,
            vulnerabilities: Vec::new(),
        };

        for child in element.children() {
            if let ChildOfElement::Element(child) = child {
                let nested = AttributeExtractor::bind(child);
                match child.name().local_part() {
                    "tasks" => {
                        summary.tasks = Some(TaskCounts {
                            pending: nested.get_long("pending")?,
                            active: nested.get_long("active")?,
                            completed: nested.get_long("completed")?,
                        });
                    }
                    "nodes" => {
                        summary.nodes = Some(NodeCounts {
                            live: nested.get_long("live")?,
                            dead: nested.get_long("dead")?,
                            filtered: nested.get_long("filtered")?,
                            unresolved: nested.get_long("unresolved")?,
                            other: nested.get_long("other")?,
                        });
                    }
                    "vulnerabilities" => {
                        summary.vulnerabilities.push(VulnerabilityTally {
                            status: nested.get_str("status")?.to_string(),
                            severity: nested.get_opt_int("severity")?,
                            count: nested.get_long("count")?,
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(summary)
    }

    /// Build every scan summary of an activity/status response, in
    /// document order.
    pub fn collect(response: &ApiResponse) -> Result<Vec<Self>, ApiError> {
        response
            .grab_elements("//ScanSummary")?
            .into_iter()
            .map(Self::from_element)
            .collect()
    }
}

/// Summary of one asset group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetGroupSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub risk_score: f64,
}

impl AssetGroupSummary {
    pub fn from_element(element: Element<'_>) -> Result<Self, ApiError> {
        let attrs = AttributeExtractor::bind(element);
        Ok(Self {
            id: attrs.get_int("id")?,
            name: attrs.get_str("name")?.to_string(),
            description: attrs.get_opt_str("description").map(str::to_string),
            risk_score: attrs.get_float("riskscore")?,
        })
    }

    pub fn collect(response: &ApiResponse) -> Result<Vec<Self>, ApiError> {
        response
            .grab_elements("//AssetGroupSummary")?
            .into_iter()
            .map(Self::from_element)
            .collect()
    }
}

/// Summary of one site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub risk_factor: f64,
    pub risk_score: f64,
}

impl SiteSummary {
    pub fn from_element(element: Element<'_>) -> Result<Self, ApiError> {
        let attrs = AttributeExtractor::bind(element);
        Ok(Self {
            id: attrs.get_int("id")?,
            name: attrs.get_str("name")?.to_string(),
            description: attrs.get_opt_str("description").map(str::to_string),
            risk_factor: attrs.get_float("riskfactor")?,
            risk_score: attrs.get_float("riskscore")?,
        })
    }

    pub fn collect(response: &ApiResponse) -> Result<Vec<Self>, ApiError> {
        response
            .grab_elements("//SiteSummary")?
            .into_iter()
            .map(Self::from_element)
            .collect()
    }
}

/// One configured discovery connection (1.2 onwards)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryConnectionSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub port: i32,
    pub protocol: String,
    pub user_name: Option<String>,
}

impl DiscoveryConnectionSummary {
    pub fn from_element(element: Element<'_>) -> Result<Self, ApiError> {
        let attrs = AttributeExtractor::bind(element);
        Ok(Self {
            id: attrs.get_int("id")?,
            name: attrs.get_str("name")?.to_string(),
            address: attrs.get_str("address")?.to_string(),
            port: attrs.get_int("port")?,
            protocol: attrs.get_str("protocol")?.to_string(),
            user_name: attrs.get_opt_str("user-name").map(str::to_string),
        })
    }

    pub fn collect(response: &ApiResponse) -> Result<Vec<Self>, ApiError> {
        response
            .grab_elements("//DiscoveryConnectionSummary")?
            .into_iter()
            .map(Self::from_element)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn parse(xml: &str, expression: &str) -> ApiResponse {
        let response = ApiResponse::parse(xml, "").unwrap();
        assert!(
            response.grab_bool(expression).unwrap(),
            "fixture is missing {expression}"
        );
        response
    }

    #[test]
    fn test_engine_summary_from_element() {
        let response = parse(
            r#"<EngineListingResponse success="1">
                <EngineSummary id="2" name="Local scan engine" address="127.0.0.1"
                               port="40814" status="active"/>
                <EngineSummary id="5" name="DMZ engine" address="10.1.0.7"
                               port="40814" status="not-responding" scope="global"/>
            </EngineListingResponse>"#,
            "//EngineSummary",
        );

        let engines = EngineSummary::collect(&response).unwrap();
        assert_eq!(engines.len(), 2);
        assert_eq!(engines[0].id, 2);
        assert_eq!(engines[0].status, EngineStatus::Active);
        assert_eq!(engines[0].scope, None);
        assert_eq!(engines[1].status, EngineStatus::NotResponding);
        assert_eq!(engines[1].scope.as_deref(), Some("global"));
    }

    #[test]
    fn test_scan_summary_with_nested_sections() {
        let response = parse(
            r#"<ScanStatusResponse success="1">
                <ScanSummary scan-id="71" site-id="4" engine-id="2" status="running"
                             startTime="20081008T105838495">
                    <tasks pending="12" active="3" completed="85"/>
                    <nodes live="40" dead="215" filtered="0" unresolved="1" other="0"/>
                    <vulnerabilities status="vuln-exploit" severity="8" count="3"/>
                    <vulnerabilities status="vuln-version" severity="5" count="7"/>
                    <vulnerabilities status="not-vuln" count="254"/>
                </ScanSummary>
            </ScanStatusResponse>"#,
            "//ScanSummary",
        );

        let scans = ScanSummary::collect(&response).unwrap();
        assert_eq!(scans.len(), 1);
        let scan = &scans[0];

        assert_eq!(scan.scan_id, 71);
        assert_eq!(scan.site_id, 4);
        assert_eq!(scan.engine_id, Some(2));
        assert_eq!(scan.status, ScanStatus::Running);
        assert!(!scan.status.is_terminal());

        let start = scan.start_time.unwrap();
        assert_eq!(start.date(), NaiveDate::from_ymd_opt(2008, 10, 8).unwrap());
        assert_eq!(start.time().hour(), 10);
        assert_eq!(scan.end_time, None);

        assert_eq!(
            scan.tasks,
            Some(TaskCounts {
                pending: 12,
                active: 3,
                completed: 85
            })
        );
        assert_eq!(scan.nodes.unwrap().dead, 215);

        assert_eq!(scan.vulnerabilities.len(), 3);
        assert_eq!(scan.vulnerabilities[0].status, "vuln-exploit");
        assert_eq!(scan.vulnerabilities[0].severity, Some(8));
        assert_eq!(scan.vulnerabilities[2].severity, None);
        assert_eq!(scan.vulnerabilities[2].count, 254);
    }

    #[test]
    fn test_asset_group_record_scenario() {
        let response = parse(
            r#"<AssetGroupListingResponse success="1">
                <AssetGroupSummary id="14" name="Default" riskscore="23.5"/>
            </AssetGroupListingResponse>"#,
            "//AssetGroupSummary",
        );

        let groups = AssetGroupSummary::collect(&response).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, 14);
        assert_eq!(groups[0].name, "Default");
        assert_eq!(groups[0].risk_score, 23.5);
        assert_eq!(groups[0].description, None);
    }

    #[test]
    fn test_construction_is_atomic() {
        let response = parse(
            r#"<ScanStatusResponse success="1">
                <ScanSummary scan-id="71" site-id="4" status="running">
                    <tasks pending="12" active="oops" completed="85"/>
                </ScanSummary>
            </ScanStatusResponse>"#,
            "//ScanSummary",
        );

        // A bad nested count aborts the whole record.
        let err = ScanSummary::collect(&response).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("active"));
        assert!(message.contains("oops"));
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let response = parse(
            r#"<r><ScanSummary scan-id="1" site-id="1" status="melting"/></r>"#,
            "//ScanSummary",
        );
        assert!(matches!(
            ScanSummary::collect(&response),
            Err(ApiError::UnknownStatus { kind: "scan", .. })
        ));
    }

    #[test]
    fn test_bad_timestamp_is_an_error() {
        let response = parse(
            r#"<r><ScanSummary scan-id="1" site-id="1" status="running" startTime="today"/></r>"#,
            "//ScanSummary",
        );
        assert!(matches!(
            ScanSummary::collect(&response),
            Err(ApiError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_discovery_connection_summary() {
        let response = parse(
            r#"<DiscoveryConnectionListingResponse success="1">
                <DiscoveryConnectionSummary id="3" name="vCenter" address="10.2.0.4"
                                            port="443" protocol="https" user-name="svc-disc"/>
            </DiscoveryConnectionListingResponse>"#,
            "//DiscoveryConnectionSummary",
        );

        let connections = DiscoveryConnectionSummary::collect(&response).unwrap();
        assert_eq!(connections[0].protocol, "https");
        assert_eq!(connections[0].user_name.as_deref(), Some("svc-disc"));
    }
}
