//! # Histograms
//!
//! Structured histogram results. The statistics modules return a
//! [`Histogram`] instead of drawing anything; callers decide how to render
//! it (text bars via `Display`, JSON via serde, or a TSV table).
//!
//! Binning follows the usual equal-width convention: `bins` bins spanning
//! `[min, max]` of the data, every bin half-open except the last, which
//! includes `max`. A constant distribution is centered in `[v - 0.5, v + 0.5]`.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::db::PqpError;

/// Default bar width used by the `Display` implementation
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Equal-width histogram with labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Plot title
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Whether the count axis is log-scaled
    pub log_y: bool,
    edges: Vec<f64>,
    counts: Vec<u64>,
}

#[derive(Serialize)]
struct BinRecord {
    bin_start: f64,
    bin_end: f64,
    count: u64,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self, PqpError> {
        if bins == 0 {
            return Err(PqpError::InvalidBins);
        }
        if values.is_empty() {
            return Err(PqpError::EmptyDistribution("values"));
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0u64; bins];
        for &value in values {
            counts[bin_index(&edges, value)] += 1;
        }

        Ok(Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            log_y: false,
            edges,
            counts,
        })
    }

    /// Set the plot title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the axis labels
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Use a logarithmic count axis
    pub fn log_scale(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Bin edges (`bins() + 1` entries)
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Count per bin
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of binned values
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Write the bin table as tab-separated values with a header row
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<(), PqpError> {
        let mut tsv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        for (bounds, &count) in self.edges.windows(2).zip(&self.counts) {
            tsv.serialize(BinRecord {
                bin_start: bounds[0],
                bin_end: bounds[1],
                count,
            })?;
        }
        tsv.flush()?;
        Ok(())
    }

    /// Render as a text bar chart with bars at most `bar_width` characters long
    pub fn render(&self, bar_width: usize) -> String {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        let scale = |count: u64| -> usize {
            if max == 0 || count == 0 {
                return 0;
            }
            let fraction = if self.log_y {
                (1.0 + count as f64).ln() / (1.0 + max as f64).ln()
            } else {
                count as f64 / max as f64
            };
            ((fraction * bar_width as f64).round() as usize).max(1)
        };

        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&self.title);
            out.push('\n');
        }
        if !self.x_label.is_empty() || !self.y_label.is_empty() {
            let scale_note = if self.log_y { " (log scale)" } else { "" };
            out.push_str(&format!(
                "x: {} | y: {}{}\n",
                self.x_label, self.y_label, scale_note
            ));
        }

        let last = self.counts.len().saturating_sub(1);
        for (i, (bounds, &count)) in self.edges.windows(2).zip(&self.counts).enumerate() {
            let close = if i == last { ']' } else { ')' };
            out.push_str(&format!(
                "[{:>9.2}, {:>9.2}{} {:<width$} {}\n",
                bounds[0],
                bounds[1],
                close,
                "#".repeat(scale(count)),
                count,
                width = bar_width
            ));
        }
        out
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_BAR_WIDTH))
    }
}

/// Bin of `value`; the last bin is closed on the right
fn bin_index(edges: &[f64], value: f64) -> usize {
    let bins = edges.len() - 1;
    let lo = edges[0];
    let hi = edges[bins];

    let mut index = (((value - lo) / (hi - lo)) * bins as f64).floor() as usize;
    if index >= bins {
        return bins - 1;
    }
    // Floating point rounding can land one bin off near an edge.
    if value < edges[index] && index > 0 {
        index -= 1;
    } else if value >= edges[index + 1] && index + 1 < bins {
        index += 1;
    }
    index
}
