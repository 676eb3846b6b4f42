use crate::core::composition::resolver::resolve_composition;
use crate::core::models::record::{Dataset, GeneratedRecord};
use crate::engine::config::{ConfigError, GenerationConfig};
use crate::engine::error::EngineError;
use crate::engine::grid::FractionGrid;
use crate::engine::permutation::{Permuter, UniformPermuter, permuted_sequence};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

/// Sweeps the composition grid with a permuter seeded from `config.seed`.
pub fn run(config: &GenerationConfig, reporter: &ProgressReporter) -> Result<Dataset, EngineError> {
    let mut permuter = UniformPermuter::from_seed(config.seed);
    run_with(config, &mut permuter, reporter)
}

/// Sweeps every admissible grid point in enumeration order, producing one record each.
///
/// Indices start at 1 and follow the enumeration order; the first failing grid point
/// aborts the sweep.
#[instrument(skip_all, name = "generation_workflow", fields(n_bins = config.n_bins, protein_length = config.protein_length))]
pub fn run_with(
    config: &GenerationConfig,
    permuter: &mut impl Permuter,
    reporter: &ProgressReporter,
) -> Result<Dataset, EngineError> {
    config.validate()?;

    let grid = FractionGrid::new(config.n_bins);
    let total_points = grid
        .admissible_count()
        .ok_or_else(|| ConfigError::InvalidParameter {
            name: "n_bins",
            reason: "grid size overflows".to_string(),
        })?;
    info!(
        "Generating {} sequences of {} residues over a {}x{} fraction grid.",
        total_points,
        config.protein_length,
        config.n_bins + 1,
        config.n_bins + 1
    );
    reporter.report(Progress::SweepStart {
        total_points: total_points as u64,
    });

    let mut dataset = Dataset::new();
    let mut next_idx = 1;

    for point in grid.admissible_points() {
        let composition =
            resolve_composition(point.f_positive, point.f_negative, config.protein_length)
                .map_err(|source| EngineError::Composition {
                    f_positive: point.f_positive,
                    f_negative: point.f_negative,
                    source,
                })?;
        let sequence = permuted_sequence(composition.to_residues(), &mut *permuter);

        debug!(
            idx = next_idx,
            f_positive = point.f_positive,
            f_negative = point.f_negative,
            "Generated sequence."
        );
        dataset.push(GeneratedRecord {
            idx: next_idx,
            f_positive: point.f_positive,
            f_negative: point.f_negative,
            sequence,
        });
        reporter.report(Progress::PointGenerated { idx: next_idx });
        next_idx += 1;
    }

    reporter.report(Progress::SweepFinish);
    info!("Generation complete. {} records collected.", dataset.len());
    Ok(dataset)
}
