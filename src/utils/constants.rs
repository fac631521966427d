/// Kilometers per degree of latitude at the equator. Cell sizes are
/// converted with this fixed factor, so cells narrow in true ground
/// distance as latitude increases.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Join key column in metric tables
pub const NODE_COLUMN: &str = "Node";

/// dBase attribute carrying the persistent cell identifier in grid shapefiles
pub const CELL_ID_FIELD: &str = "cell_id";

/// Sentinel written for positions that fall outside every grid cell
pub const OUTSIDE_GRID_LABEL: &str = "outside grid domain";

/// Required columns in the samples CSV
pub const SAMPLE_COLUMNS: [&str; 3] = ["lon", "lat", "total_p"];

/// Required columns in the particle tracks CSV
pub const PARTICLE_COLUMNS: [&str; 5] = [
    "particleID",
    "release_lon",
    "release_lat",
    "settlement_lon",
    "settlement_lat",
];

/// Default file name for the centroids CSV written next to the grid
pub const RELEASE_LOCS_FILE: &str = "release_locs.csv";

/// Geographic bounds of valid coordinates
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
