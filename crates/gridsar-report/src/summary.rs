//! Single-pass aggregation of a run's action log.
//!
//! One streaming pass over the parsed rows (with a three-row lookahead
//! for sustained-action detection) computes everything the summary row
//! carries: distinct action pairs per actor, shelter-presence flags at
//! the quarter boundaries, movement-gated idle ratios, per-quarter
//! message counts, and the sustained joint/individual action lists.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use gridsar_types::SHELTER_TILES;

use crate::error::ReportError;
use crate::parse::{HeaderMap, LogRow, split_fields};

/// Human action names counting as joint actions.
const JOINT_ACTIONS: [&str; 3] = [
    "RemoveObjectTogether",
    "CarryObjectTogether",
    "DropObjectTogether",
];

/// Human action names counting as individual actions.
const SOLO_ACTIONS: [&str; 3] = ["RemoveObject", "CarryObject", "Drop"];

/// Ticks per quarter window.
const QUARTER_TICKS: u64 = 1200;

/// Additional consecutive repetitions required for a pair to count as
/// sustained (four identical rows in total).
const SUSTAIN_REPEATS: usize = 3;

/// The aggregated result of one run.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    /// Final completeness fraction, verbatim from the log.
    pub completeness: String,
    /// Final score, verbatim from the log.
    pub score: String,
    /// Total tick count, verbatim from the log.
    pub no_ticks: String,
    /// Distinct (action, target) pairs of the autonomous agent.
    pub agent_actions: usize,
    /// Distinct (action, target) pairs of the human agent.
    pub human_actions: usize,
    /// Shelter presence at ticks 1200, 2400, 3600.
    pub shelter: [bool; 3],
    /// Normalized idle ratios per quarter, rounded to 2 decimals.
    pub idle: [f64; 4],
    /// Messages the human sent, per quarter.
    pub human_messages: [u64; 4],
    /// Messages the agent sent, per quarter.
    pub agent_messages: [u64; 4],
    /// Sustained joint actions counted per quarter.
    pub joint_per_quarter: [usize; 4],
    /// Sustained individual actions counted per quarter.
    pub solo_per_quarter: [usize; 4],
    /// The sustained joint (action, target) pairs, in discovery order.
    pub joint_pairs: Vec<(String, String)>,
    /// The sustained individual (action, target) pairs, in discovery order.
    pub solo_pairs: Vec<(String, String)>,
}

/// Parse and aggregate the action log at `path`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be read, or
/// [`ReportError::Parse`] on the first malformed row -- a bad row fails
/// the whole summarization rather than skewing the aggregates.
pub fn summarize_log(path: &Path) -> Result<SummaryRow, ReportError> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines().enumerate();

    let (_, header_line) = lines.next().ok_or_else(|| ReportError::Parse {
        line: 1,
        message: "log file is empty".to_owned(),
    })?;
    let header = HeaderMap::new(split_fields(header_line));

    let mut rows: Vec<LogRow> = Vec::new();
    let mut last_fields: Vec<String> = Vec::new();
    let mut last_line = 1;
    for (index, line) in lines {
        let line_nr = index.saturating_add(1);
        let fields = split_fields(line);
        if fields.len() != header.len() {
            return Err(ReportError::Parse {
                line: line_nr,
                message: format!(
                    "row has {} fields, header has {}",
                    fields.len(),
                    header.len()
                ),
            });
        }
        rows.push(LogRow::from_fields(&fields, line_nr)?);
        last_fields = fields;
        last_line = line_nr;
    }
    if rows.is_empty() {
        return Err(ReportError::Parse {
            line: 1,
            message: "log contains no data rows".to_owned(),
        });
    }
    debug!(rows = rows.len(), "action log parsed");

    let record = header.record(&last_fields);
    let completeness = named(&record, "completeness", last_line)?;
    let score = named(&record, "score", last_line)?;
    let no_ticks = named(&record, "tick_nr", last_line)?;
    let total_ticks: u64 = no_ticks.parse().map_err(|err| ReportError::Parse {
        line: last_line,
        message: format!("tick_nr is not numeric ({err}): {no_ticks:?}"),
    })?;

    Ok(aggregate(&rows, completeness, score, no_ticks, total_ticks))
}

/// The aggregation pass proper.
fn aggregate(
    rows: &[LogRow],
    completeness: String,
    score: String,
    no_ticks: String,
    total_ticks: u64,
) -> SummaryRow {
    let shelter_tiles: BTreeSet<String> = SHELTER_TILES.iter().map(ToString::to_string).collect();

    let mut movement_started = false;
    let mut unique_agent: BTreeSet<(String, String)> = BTreeSet::new();
    let mut unique_human: BTreeSet<(String, String)> = BTreeSet::new();
    let mut joint_pairs: Vec<(String, String)> = Vec::new();
    let mut solo_pairs: Vec<(String, String)> = Vec::new();
    let mut joint_per_quarter = [0_usize; 4];
    let mut solo_per_quarter = [0_usize; 4];
    let mut shelter = [true; 3];
    let mut idle_counts = [0_u64; 4];
    let mut human_messages = [0_u64; 4];
    let mut agent_messages = [0_u64; 4];

    for (index, row) in rows.iter().enumerate() {
        // The idle gate opens on the first human movement, counting that
        // same row.
        if !movement_started && row.human_action.contains("Move") {
            movement_started = true;
        }

        if !row.agent_action.is_empty() {
            unique_agent.insert((row.agent_action.clone(), row.agent_target.clone()));
        }
        if !row.human_action.is_empty() {
            unique_human.insert((row.human_action.clone(), row.human_target.clone()));
        }

        let pair = (row.human_action.clone(), row.human_target.clone());
        if JOINT_ACTIONS.contains(&row.human_action.as_str())
            && !joint_pairs.contains(&pair)
            && is_sustained(rows, index)
        {
            bump_count(&mut joint_per_quarter, quarter(row.tick));
            joint_pairs.push(pair.clone());
        }
        if SOLO_ACTIONS.contains(&row.human_action.as_str())
            && !solo_pairs.contains(&pair)
            && is_sustained(rows, index)
        {
            bump_count(&mut solo_per_quarter, quarter(row.tick));
            solo_pairs.push(pair);
        }

        for (flag, boundary) in shelter.iter_mut().zip([1200_u64, 2400, 3600]) {
            if row.tick == boundary && !shelter_tiles.contains(&row.human_target) {
                *flag = false;
            }
        }

        if movement_started && (row.agent_action.is_empty() || row.agent_action == "Idle") {
            bump_sum(&mut idle_counts, quarter(row.tick), 1);
        }

        bump_sum(&mut human_messages, quarter(row.tick), row.human_messages);
        bump_sum(&mut agent_messages, quarter(row.tick), row.agent_messages);
    }

    let final_window = total_ticks.saturating_sub(QUARTER_TICKS.saturating_mul(3));
    let idle = {
        let [q1, q2, q3, q4] = idle_counts;
        [
            ratio(q1, QUARTER_TICKS),
            ratio(q2, QUARTER_TICKS),
            ratio(q3, QUARTER_TICKS),
            ratio(q4, final_window),
        ]
    };

    SummaryRow {
        completeness,
        score,
        no_ticks,
        agent_actions: unique_agent.len(),
        human_actions: unique_human.len(),
        shelter,
        idle,
        human_messages,
        agent_messages,
        joint_per_quarter,
        solo_per_quarter,
        joint_pairs,
        solo_pairs,
    }
}

/// Whether the (action, target) pair at `index` repeats on the next
/// [`SUSTAIN_REPEATS`] rows.
fn is_sustained(rows: &[LogRow], index: usize) -> bool {
    let Some(first) = rows.get(index) else {
        return false;
    };
    (1..=SUSTAIN_REPEATS).all(|offset| {
        index
            .checked_add(offset)
            .and_then(|next_index| rows.get(next_index))
            .is_some_and(|next| {
                next.human_action == first.human_action && next.human_target == first.human_target
            })
    })
}

/// Quarter window index for a tick (boundaries inclusive).
const fn quarter(tick: u64) -> usize {
    if tick <= 1200 {
        0
    } else if tick <= 2400 {
        1
    } else if tick <= 3600 {
        2
    } else {
        3
    }
}

fn bump_count(slots: &mut [usize; 4], quarter: usize) {
    if let Some(slot) = slots.get_mut(quarter) {
        *slot = slot.saturating_add(1);
    }
}

fn bump_sum(slots: &mut [u64; 4], quarter: usize, by: u64) {
    if let Some(slot) = slots.get_mut(quarter) {
        *slot = slot.saturating_add(by);
    }
}

/// Idle ratio for one window, rounded to two decimals; an empty window
/// (a run ending at or before tick 3600) reports 0.
#[allow(clippy::cast_precision_loss)]
fn ratio(count: u64, window: u64) -> f64 {
    if window == 0 {
        return 0.0;
    }
    let raw = count as f64 / window as f64;
    (raw * 100.0).round() / 100.0
}

fn named(
    record: &std::collections::BTreeMap<&str, &str>,
    name: &str,
    line: usize,
) -> Result<String, ReportError> {
    record
        .get(name)
        .map(|value| (*value).to_owned())
        .ok_or_else(|| ReportError::Parse {
            line,
            message: format!("missing column {name:?} in final row"),
        })
}
