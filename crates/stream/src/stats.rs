//! Path statistics: path types and their edge betweenness

use crate::Result;
use mindstream_core::PathType;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Column headers used by the tabular outputs
pub const HEADERS: [&str; 3] = [
    "Path Structure",
    "Path Type",
    "Sum of Edge Betweenness Centralities",
];

/// Round to a number of decimal places.
///
/// Precisions past the range of `f64` leave the value unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if precision > f64::MAX_10_EXP as u32 {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// One shortest path of a stream graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathStat {
    pub path: Vec<String>,
    pub path_type: PathType,
    /// Sum of the base-graph edge betweenness along the path
    pub betweenness: f64,
}

impl PathStat {
    pub fn structure(&self) -> String {
        self.path.join(" -> ")
    }
}

/// Betweenness aggregated over all paths of one type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeSummary {
    pub path_type: PathType,
    pub paths: usize,
    /// Share of all paths that have this type
    pub frequency: f64,
    pub total_betweenness: f64,
    pub mean_betweenness: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathStats {
    pub rows: Vec<PathStat>,
    pub precision: u32,
}

impl PathStats {
    pub fn new(precision: u32) -> Self {
        Self {
            rows: Vec::new(),
            precision,
        }
    }

    /// Record a path, rounding its betweenness
    pub fn push(&mut self, path: Vec<String>, path_type: PathType, betweenness: f64) {
        self.rows.push(PathStat {
            path,
            path_type,
            betweenness: round_to(betweenness, self.precision),
        });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Type betweenness centrality: path counts and betweenness per path type
    pub fn type_summary(&self) -> Vec<TypeSummary> {
        let total = self.rows.len();

        PathType::ALL
            .iter()
            .filter_map(|&path_type| {
                let matching: Vec<&PathStat> =
                    self.rows.iter().filter(|r| r.path_type == path_type).collect();
                if matching.is_empty() {
                    return None;
                }

                let sum: f64 = matching.iter().map(|r| r.betweenness).sum();
                Some(TypeSummary {
                    path_type,
                    paths: matching.len(),
                    frequency: round_to(matching.len() as f64 / total as f64, self.precision),
                    total_betweenness: round_to(sum, self.precision),
                    mean_betweenness: round_to(sum / matching.len() as f64, self.precision),
                })
            })
            .collect()
    }

    /// Plain-text table of all paths
    pub fn to_table(&self) -> String {
        let cells: Vec<[String; 3]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.structure(),
                    r.path_type.to_string(),
                    format!("{:.*}", self.precision as usize, r.betweenness),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |row: [&str; 3]| {
            format!(
                "{:<w0$}  {:<w1$}  {:>w2$}",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            )
        };

        let mut out = vec![line(HEADERS)];
        out.push("-".repeat(widths.iter().sum::<usize>() + 4));
        for row in &cells {
            out.push(line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
        }
        out.join("\n")
    }

    /// Write all paths as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(HEADERS)?;
        for row in &self.rows {
            csv.write_record([
                row.structure(),
                row.path_type.to_string(),
                row.betweenness.to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}
