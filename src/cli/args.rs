use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispersal-processor")]
#[command(about = "Larval-dispersal analysis toolkit for ocean grids and connectivity metrics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an ocean-only grid over a bounding box and write cell polygons and centroids
    BuildGrid {
        #[arg(long, allow_hyphen_values = true)]
        min_lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        max_lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        min_lon: f64,

        #[arg(long, allow_hyphen_values = true)]
        max_lon: f64,

        #[arg(short, long, help = "Cell size in kilometers (e.g. 30 for a 30x30 km grid)")]
        cell_size_km: f64,

        #[arg(long, help = "Land mask shapefile (.shp); omit for open water")]
        land_mask: Option<PathBuf>,

        #[arg(short, long, help = "Output grid shapefile path")]
        output_grid: PathBuf,

        #[arg(
            long,
            help = "Output centroids CSV path [default: release_locs.csv next to the grid]"
        )]
        output_centroids: Option<PathBuf>,
    },

    /// Join network metrics and structure locations onto the grid and score cells
    Aggregate {
        #[arg(long, help = "In-degree CSV (Node, In_Degree)")]
        in_degree: PathBuf,

        #[arg(long, help = "Out-degree CSV (Node, Out_Degree)")]
        out_degree: PathBuf,

        #[arg(long, help = "Betweenness CSV (Node, Betweenness)")]
        betweenness: PathBuf,

        #[arg(long, help = "Food availability CSV (Node, Food_Availability)")]
        food_availability: PathBuf,

        #[arg(long, help = "Self-recruitment CSV (Node, Self_Recruitment)")]
        self_recruitment: PathBuf,

        #[arg(long, help = "Community assignments CSV (Node, Community)")]
        community: PathBuf,

        #[arg(long, help = "Structure locations shapefile")]
        structures: PathBuf,

        #[arg(short, long, help = "Grid shapefile")]
        grid: PathBuf,

        #[arg(short, long, help = "Output analysis CSV path")]
        output_file: PathBuf,
    },

    /// Average point samples of phytoplankton carbon into grid cells
    MapSamples {
        #[arg(short, long, help = "Samples CSV (lon, lat, total_p[, date])")]
        samples: PathBuf,

        #[arg(short, long, help = "Grid shapefile")]
        grid: PathBuf,

        #[arg(long, help = "Inclusive start date (YYYY-MM-DD)")]
        start: Option<NaiveDate>,

        #[arg(long, help = "Inclusive end date (YYYY-MM-DD)")]
        end: Option<NaiveDate>,

        #[arg(short, long, help = "Output CSV path (Polygon_ID, Average_P)")]
        output_file: PathBuf,
    },

    /// Assign particle release and settlement positions to grid cells
    AssignParticles {
        #[arg(short, long, help = "Particle tracks CSV")]
        particles: PathBuf,

        #[arg(short, long, help = "Grid shapefile")]
        grid: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV path (particleID, Release_poly, Settlement_poly)"
        )]
        output_file: PathBuf,
    },
}
