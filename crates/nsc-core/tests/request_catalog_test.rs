//! Request catalog tests
//!
//! Pins the declared version range of every request kind and the full
//! rendered document for the structurally interesting ones.

use nsc_core::{requests, HostRangeGenerator, ProtocolVersion, ReportFilterGenerator};
use pretty_assertions::assert_eq;

const SESSION: &str = "0123456789ABCDEF";

#[test]
fn declared_version_ranges() {
    let cases = [
        (requests::engine_listing(SESSION, None), "1.1", "1.2"),
        (requests::engine_activity(SESSION, None, 2), "1.1", "1.2"),
        (requests::scan_activity(SESSION, None), "1.0", "1.2"),
        (requests::scan_status(SESSION, None, 71), "1.0", "1.2"),
        (requests::scan_stop(SESSION, None, 71), "1.0", "1.2"),
        (requests::site_listing(SESSION, None), "1.0", "1.2"),
        (requests::site_scan(SESSION, None, 4, None), "1.0", "1.2"),
        (requests::site_device_listing(SESSION, None, 4), "1.0", "1.1"),
        (requests::asset_group_listing(SESSION, None), "1.0", "1.2"),
        (
            requests::report_generate(SESSION, None, 3, ReportFilterGenerator::new()),
            "1.1",
            "1.2",
        ),
        (
            requests::discovery_connection_listing(SESSION, None),
            "1.2",
            "1.2",
        ),
    ];

    for (spec, min, max) in cases {
        assert_eq!(
            spec.first_supported_version().as_str(),
            min,
            "min for {}",
            spec.name()
        );
        assert_eq!(
            spec.last_supported_version().as_str(),
            max,
            "max for {}",
            spec.name()
        );
    }
}

#[test]
fn site_save_renders_nested_sections() {
    let hosts = HostRangeGenerator::new()
        .host("mail.example.com")
        .range("10.0.0.1", "10.0.0.254");
    let spec = requests::site_save(SESSION, Some("save-1"), -1, "DMZ & Lab", "perimeter", hosts);

    let xml = spec.build_xml(ProtocolVersion::V1_2);
    assert_eq!(
        xml,
        format!(
            concat!(
                "<SiteSaveRequest session-id=\"{}\" sync-id=\"save-1\">",
                "<Site id=\"-1\" name=\"DMZ &amp; Lab\" description=\"perimeter\">",
                "<Hosts><host>mail.example.com</host>",
                "<range from=\"10.0.0.1\" to=\"10.0.0.254\"/></Hosts>",
                "</Site>",
                "</SiteSaveRequest>"
            ),
            SESSION
        )
    );
}

#[test]
fn report_generate_renders_filters() {
    let filters = ReportFilterGenerator::new()
        .filter("site", "4")
        .filter("device", "118");
    let spec = requests::report_generate(SESSION, None, 12, filters);

    let xml = spec.build_xml(ProtocolVersion::V1_1);
    assert_eq!(
        xml,
        format!(
            concat!(
                "<ReportGenerateRequest session-id=\"{}\" sync-id=\"\" report-id=\"12\">",
                "<Filters><filter type=\"site\" id=\"4\"/>",
                "<filter type=\"device\" id=\"118\"/></Filters>",
                "</ReportGenerateRequest>"
            ),
            SESSION
        )
    );
}

#[test]
fn untrusted_sync_id_is_escaped() {
    let spec = requests::scan_activity(SESSION, Some("job<7>&\"x\""));
    let xml = spec.build_xml(ProtocolVersion::V1_2);
    assert!(xml.contains("sync-id=\"job&lt;7&gt;&amp;&quot;x&quot;\""));
}
