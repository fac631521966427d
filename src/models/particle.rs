use serde::{Deserialize, Serialize};

/// Release and settlement endpoints for one tracked particle, as
/// extracted upstream from the particle-tracking model output.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticleTrack {
    #[serde(rename = "particleID")]
    pub particle_id: u32,
    pub release_lon: f64,
    pub release_lat: f64,
    pub settlement_lon: f64,
    pub settlement_lat: f64,
}

/// Grid-cell assignment for one particle. Positions outside every cell
/// carry the "outside grid domain" sentinel rather than an empty field.
#[derive(Debug, Clone, Serialize)]
pub struct ParticleAssignment {
    #[serde(rename = "particleID")]
    pub particle_id: u32,
    #[serde(rename = "Release_poly")]
    pub release_poly: String,
    #[serde(rename = "Settlement_poly")]
    pub settlement_poly: String,
}
