//! Overpass QL query construction.

use std::fmt::Write as _;

use jurimap_core::Coordinate;

/// Builds the combined spatial query for one category.
///
/// For every tag predicate, both point features (`node`) and area features
/// (`way`) are matched within `radius_km` of `origin`; area features report
/// their center point. The server-side `[timeout:]` must stay below the
/// client's request timeout, and `max_results` caps the response size.
///
/// Output is deterministic for identical input.
#[must_use]
pub fn build_query(
    origin: Coordinate,
    radius_km: f64,
    tags: &[String],
    server_timeout_secs: u64,
    max_results: u32,
) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let radius_m = (radius_km * 1000.0).round() as u64;
    let lat = origin.latitude;
    let lon = origin.longitude;

    let mut query = format!("[out:json][timeout:{server_timeout_secs}];\n(\n");
    for tag in tags {
        let _ = writeln!(query, "  node[{tag}](around:{radius_m},{lat},{lon});");
        let _ = writeln!(query, "  way[{tag}](around:{radius_m},{lat},{lon});");
    }
    let _ = write!(query, ");\nout body center {max_results};");
    query
}
