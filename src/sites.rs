/// Monitoring site registry for the Delhi air quality dashboard.
///
/// Defines the canonical list of CPCB monitoring sites whose O3 / NO2
/// readings and forecasts feed the dashboard. Site ids match the ids the
/// forecast model returns ("1.0", "2.0", ...). All other modules should
/// look sites up here rather than hardcoding names or coordinates.

// ---------------------------------------------------------------------------
// Site metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitoring site.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringSite {
    /// Id as emitted by the forecast model, e.g. "1.0".
    pub id: &'static str,
    /// Station name shown on dashboard cards and in alert text.
    pub name: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Administrative district the site belongs to.
    pub region: &'static str,
}

/// All monitored sites, in forecast model order.
pub static SITE_REGISTRY: &[MonitoringSite] = &[
    MonitoringSite {
        id: "1.0",
        name: "GT Karnal Road Industrial Area, Delhi",
        latitude: 28.69536,
        longitude: 77.18168,
        region: "North West Delhi",
    },
    MonitoringSite {
        id: "2.0",
        name: "Dwarka, New Delhi",
        latitude: 28.5718,
        longitude: 77.07125,
        region: "New Delhi",
    },
    MonitoringSite {
        id: "3.0",
        name: "Defence Colony, Delhi",
        latitude: 28.58278,
        longitude: 77.23441,
        region: "South East Delhi",
    },
    MonitoringSite {
        id: "4.0",
        name: "Narela Industrial Complex, Delhi",
        latitude: 28.82286,
        longitude: 77.10197,
        region: "North Delhi",
    },
    MonitoringSite {
        id: "5.0",
        name: "Govindpuri, Delhi",
        latitude: 28.53077,
        longitude: 77.27123,
        region: "South East Delhi",
    },
    MonitoringSite {
        id: "6.0",
        name: "Rohini, Delhi",
        latitude: 28.72954,
        longitude: 77.09601,
        region: "North West Delhi",
    },
    MonitoringSite {
        id: "7.0",
        name: "Karawal Nagar, Delhi",
        latitude: 28.71052,
        longitude: 77.24951,
        region: "North East Delhi",
    },
];

/// Looks up a site by id. Returns `None` if not found.
pub fn find_site(site_id: &str) -> Option<&'static MonitoringSite> {
    SITE_REGISTRY.iter().find(|s| s.id == site_id)
}

/// Display name for a site, falling back to the id itself for unknown ids
/// so cards and alert text are never blank.
pub fn site_name(site_id: &str) -> String {
    find_site(site_id)
        .map(|s| s.name.to_string())
        .unwrap_or_else(|| site_id.to_string())
}

/// `(latitude, longitude)` for a site, if registered.
pub fn site_coordinates(site_id: &str) -> Option<(f64, f64)> {
    find_site(site_id).map(|s| (s.latitude, s.longitude))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
