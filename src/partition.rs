// partition.rs
// Component partitioner: groups bonded pieces into compounds by breadth-first traversal

use std::collections::{HashMap, VecDeque};

use crate::piece::{PieceId, PlacedIon};

/// A connected group of bonded pieces with at least one cation and one anion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compound {
    /// Member ids in traversal order
    pub members: Vec<PieceId>,
    pub cation_count: usize,
    pub anion_count: usize,
}

fn index_by_id(pieces: &[PlacedIon]) -> HashMap<PieceId, usize> {
    pieces.iter().enumerate().map(|(i, p)| (p.id, i)).collect()
}

fn collect_component(
    pieces: &[PlacedIon],
    index_of: &HashMap<PieceId, usize>,
    start: usize,
    visited: &mut [bool],
) -> Vec<usize> {
    let mut queue = VecDeque::new();
    let mut group = Vec::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(idx) = queue.pop_front() {
        group.push(idx);
        for partner in pieces[idx].partners() {
            if let Some(&next) = index_of.get(&partner) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    group
}

/// Every bonded component as store indices. Starts follow store order and
/// neighbours follow bond order, so the output is deterministic.
pub fn bonded_components(pieces: &[PlacedIon]) -> Vec<Vec<usize>> {
    let index_of = index_by_id(pieces);
    let mut visited = vec![false; pieces.len()];
    let mut groups = Vec::new();
    for start in 0..pieces.len() {
        if visited[start] || !pieces[start].is_bonded() {
            continue;
        }
        groups.push(collect_component(pieces, &index_of, start, &mut visited));
    }
    groups
}

/// Store indices of the component containing piece `start`, including an
/// unbonded piece on its own.
pub fn component_of(pieces: &[PlacedIon], start: usize) -> Vec<usize> {
    if start >= pieces.len() {
        return Vec::new();
    }
    let index_of = index_by_id(pieces);
    let mut visited = vec![false; pieces.len()];
    collect_component(pieces, &index_of, start, &mut visited)
}

/// Candidate compounds in discovery order. Same-polarity components and
/// unbonded pieces are left out.
pub fn partition(pieces: &[PlacedIon]) -> Vec<Compound> {
    bonded_components(pieces)
        .into_iter()
        .filter_map(|group| {
            let cation_count = group.iter().filter(|&&i| pieces[i].is_cation()).count();
            let anion_count = group.len() - cation_count;
            if cation_count == 0 || anion_count == 0 {
                return None;
            }
            Some(Compound {
                members: group.iter().map(|&i| pieces[i].id).collect(),
                cation_count,
                anion_count,
            })
        })
        .collect()
}

/// Number of bonded components of any composition.
pub fn component_count(pieces: &[PlacedIon]) -> usize {
    bonded_components(pieces).len()
}
