use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::grid::{GridBuilder, LandMask};
use crate::models::{BoundingBox, MetricTables};
use crate::processors::{MetricsAggregator, SampleMapper, SettlementAssigner};
use crate::readers::{self, MetricReader, SampleFilter};
use crate::utils::constants::RELEASE_LOCS_FILE;
use crate::utils::progress::ProgressReporter;
use crate::writers;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::BuildGrid {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            cell_size_km,
            land_mask,
            output_grid,
            output_centroids,
        } => {
            println!("Building ocean grid...");
            println!(
                "Bounding box: ({}, {}) to ({}, {}), cell size {} km",
                min_lat, min_lon, max_lat, max_lon, cell_size_km
            );

            let bounds = BoundingBox::new(min_lat, max_lat, min_lon, max_lon)?;
            let mask = match land_mask {
                Some(path) => {
                    println!("Land mask: {}", path.display());
                    LandMask::from_shapefile(&path)?
                }
                None => LandMask::empty(),
            };

            let builder = GridBuilder::new(bounds, cell_size_km)?;
            let progress = ProgressReporter::new(
                builder.lattice_size() as u64,
                "Clipping grid cells against the land mask...",
                false,
            );
            let cells = builder.build(&mask, Some(&progress))?;
            progress.finish_with_message(&format!("{} ocean cells", cells.len()));

            writers::write_grid(&cells, &output_grid)?;
            let centroids_path = output_centroids
                .unwrap_or_else(|| output_grid.with_file_name(RELEASE_LOCS_FILE));
            writers::write_centroids(&cells, &centroids_path)?;

            println!("Shapefile saved: {}", output_grid.display());
            println!("Release locations saved: {}", centroids_path.display());
        }

        Commands::Aggregate {
            in_degree,
            out_degree,
            betweenness,
            food_availability,
            self_recruitment,
            community,
            structures,
            grid,
            output_file,
        } => {
            println!("Aggregating cell metrics...");

            let reader = MetricReader::new();
            let tables = MetricTables {
                in_degree: reader.read_table(&in_degree, "in")?,
                out_degree: reader.read_table(&out_degree, "out")?,
                betweenness: reader.read_table(&betweenness, "node_betw")?,
                food_availability: reader.read_table(&food_availability, "food_av")?,
                self_recruitment: reader.read_table(&self_recruitment, "sr")?,
                community: reader.read_table(&community, "community")?,
            };

            let cells = readers::read_grid(&grid)?;
            let structure_points = readers::read_points(&structures)?;
            println!(
                "Grid: {} cells, {} structure locations",
                cells.len(),
                structure_points.len()
            );

            let progress = ProgressReporter::new_spinner("Joining metrics onto grid...", false);
            let rows = MetricsAggregator::new().aggregate(&cells, &structure_points, &tables)?;
            progress.finish_with_message(&format!("{} rows", rows.len()));

            writers::write_rows(&rows, &output_file)?;
            println!("Analysis CSV saved: {}", output_file.display());
        }

        Commands::MapSamples {
            samples,
            grid,
            start,
            end,
            output_file,
        } => {
            println!("Mapping samples onto grid cells...");

            let filter = SampleFilter::new(start, end);
            let sample_points = readers::read_samples(&samples, &filter)?;
            let cells = readers::read_grid(&grid)?;
            println!(
                "{} samples within range, {} grid cells",
                sample_points.len(),
                cells.len()
            );

            let averages = SampleMapper::new().map_to_cells(&cells, &sample_points)?;
            writers::write_rows(&averages, &output_file)?;
            println!("CSV saved: {}", output_file.display());
        }

        Commands::AssignParticles {
            particles,
            grid,
            output_file,
        } => {
            println!("Assigning particles to grid cells...");

            let tracks = readers::read_particle_tracks(&particles)?;
            let cells = readers::read_grid(&grid)?;
            println!("{} particles, {} grid cells", tracks.len(), cells.len());

            let assignments = SettlementAssigner::new().assign(&cells, &tracks)?;
            writers::write_rows(&assignments, &output_file)?;
            println!("CSV saved: {}", output_file.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}
