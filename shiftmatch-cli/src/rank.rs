//! Rank command implementation for the `shiftmatch` CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use shiftmatch_core::{AvailabilityIndex, ShiftPattern};
use shiftmatch_ranker::{Ranked, Ranker, RankerConfig};
use shiftmatch_scorer::{PriorityScorer, PriorityWeights};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_RANK_HIGH_WEIGHT, ARG_RANK_LIMIT, ARG_RANK_NORMAL_WEIGHT, ARG_RANK_REQUEST, CliError,
    ENV_RANK_REQUEST,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank workers against a shift pattern, or shift patterns \
                 against a worker. The request is a JSON file tagged by \
                 `mode`; weights and the result limit can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Rank availability against shift patterns"
)]
#[ortho_config(prefix = "SHIFTMATCH")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing a rank request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Weight credited for a high-priority match (default 1.0).
    #[arg(long = ARG_RANK_HIGH_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) high_weight: Option<f32>,
    /// Weight credited for a normal-priority match (default 0.7).
    #[arg(long = ARG_RANK_NORMAL_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) normal_weight: Option<f32>,
    /// Keep only the best `n` entries.
    #[arg(long = ARG_RANK_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Validated priority weights.
    pub(crate) weights: PriorityWeights,
    /// Maximum number of ranked entries to print.
    pub(crate) limit: Option<usize>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_RANK_REQUEST)
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUEST,
            env: ENV_RANK_REQUEST,
        })?;

        let defaults = PriorityWeights::default();
        let weights = PriorityWeights::new(
            args.high_weight.unwrap_or(defaults.high_weight),
            args.normal_weight.unwrap_or(defaults.normal_weight),
        )
        .validate()?;

        Ok(Self {
            request_path,
            weights,
            limit: args.limit,
        })
    }
}

/// A worker's identifier and declared availability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct WorkerEntry {
    pub(crate) id: String,
    pub(crate) availability: AvailabilityIndex,
}

/// A shift pattern's identifier and required slots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct PatternEntry {
    pub(crate) id: String,
    pub(crate) slots: ShiftPattern,
}

/// JSON rank request, tagged by `mode`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub(crate) enum RankRequest {
    /// Rank many workers against one pattern.
    WorkersForPattern {
        pattern: ShiftPattern,
        workers: Vec<WorkerEntry>,
    },
    /// Rank many patterns for one worker.
    PatternsForWorker {
        availability: AvailabilityIndex,
        patterns: Vec<PatternEntry>,
    },
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    rank_to_writer(&config, writer)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load the configured request, rank it and write the JSON response.
pub(super) fn rank_to_writer(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let request = load_rank_request(&config.request_path)?;
    let ranked = execute_rank(config, request)?;
    write_rank_response(writer, &ranked)
}

pub(super) fn execute_rank(
    config: &RankConfig,
    request: RankRequest,
) -> Result<Vec<Ranked<String>>, CliError> {
    let scorer = PriorityScorer::new(config.weights)?;
    let ranker = Ranker::with_config(
        scorer,
        RankerConfig {
            limit: config.limit,
        },
    );
    let ranked = match request {
        RankRequest::WorkersForPattern { pattern, workers } => {
            let workers: Vec<(String, AvailabilityIndex)> = workers
                .into_iter()
                .map(|worker| (worker.id, worker.availability))
                .collect();
            ranker.rank_workers_for_pattern(&workers, &pattern)
        }
        RankRequest::PatternsForWorker {
            availability,
            patterns,
        } => {
            let patterns: Vec<(String, ShiftPattern)> = patterns
                .into_iter()
                .map(|pattern| (pattern.id, pattern.slots))
                .collect();
            ranker.rank_patterns_for_worker(&availability, &patterns)
        }
    };
    Ok(ranked)
}

/// Loads a JSON-encoded [`RankRequest`] from disk.
pub(super) fn load_rank_request(path: &Utf8Path) -> Result<RankRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRankRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRankRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_rank_response(writer: &mut dyn Write, ranked: &[Ranked<String>]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseRankResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRankOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteRankOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
