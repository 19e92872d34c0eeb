//! Textual weight dumps.
//!
//! Two formats are written:
//! - records, one `w{n}{j}{i} = {value}` line per weight in nested
//!   (layer pair, source, destination) order;
//! - rows, one comma-separated line of destination weights per source node,
//!   which is the pretrained-weight block of the network config file.
//!
//! Values use Rust's shortest round-trip float formatting, so reading a dump
//! back and writing it again reproduces it byte for byte.
//!
//! Record labels concatenate the indices without separators, so they stop
//! being unique once a layer has ten or more nodes (`w0111` is both
//! `(0, 1, 11)` and `(0, 11, 1)`). A weight is identified by its line
//! position, never by its label alone.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{NetworkError, Result};
use crate::math::tensor::WeightTensor;
use crate::network::topology::Topology;

pub fn format_weight(value: f64) -> String {
    format!("{value:?}")
}

pub fn record_label(pair: usize, source: usize, dest: usize) -> String {
    format!("w{pair}{source}{dest}")
}

pub fn write_records<W: Write>(weights: &WeightTensor, mut out: W) -> std::io::Result<()> {
    for (n, j, row) in weights.rows() {
        for (i, &w) in row.iter().enumerate() {
            writeln!(out, "{} = {}", record_label(n, j, i), format_weight(w))?;
        }
    }
    out.flush()
}

pub fn records_to_string(weights: &WeightTensor) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_records(weights, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn save_records(weights: &WeightTensor, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_records(weights, BufWriter::new(file))?;
    Ok(())
}

/// Reads a record dump for `topology`. Records must appear in nested order
/// and their labels must match their position.
pub fn parse_records(text: &str, topology: &Topology) -> Result<WeightTensor> {
    let mut values = Vec::with_capacity(topology.weight_count());
    let mut expected_labels = (0..topology.pair_count()).flat_map(|n| {
        (0..topology.width(n))
            .flat_map(move |j| (0..topology.width(n + 1)).map(move |i| record_label(n, j, i)))
    });

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (label, value) = line
            .split_once('=')
            .ok_or_else(|| NetworkError::parse(line_no, "expected `label = value`"))?;
        let label = label.trim();
        match expected_labels.next() {
            Some(expected) if expected == label => {}
            Some(expected) => {
                return Err(NetworkError::parse(line_no, format!("expected record {expected}, found {label}")))
            }
            None => return Err(NetworkError::parse(line_no, "more records than the topology has weights")),
        }
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|e| NetworkError::parse(line_no, format!("bad weight value: {e}")))?;
        values.push(value);
    }

    WeightTensor::from_flat(topology, values)
}

/// Writes one comma-separated line of destination weights per source node.
pub fn write_rows<W: Write>(weights: &WeightTensor, mut out: W) -> std::io::Result<()> {
    for (_, _, row) in weights.rows() {
        let line: Vec<String> = row.iter().map(|&w| format_weight(w)).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    out.flush()
}
