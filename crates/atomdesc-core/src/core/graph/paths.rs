use crate::core::models::molecule::Molecule;
use std::collections::VecDeque;

/// Computes the number of bonds on the shortest path from `source` to every
/// atom of the molecule.
///
/// Atoms in a different connected fragment are `None`. All atoms, hydrogens
/// included, are traversed.
pub fn single_source_distances(molecule: &Molecule, source: usize) -> Vec<Option<u32>> {
    let n = molecule.atom_count();
    let mut dist = vec![None; n];
    if source >= n {
        return dist;
    }

    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);
    while let Some(current) = queue.pop_front() {
        let next = dist[current].map_or(0, |d| d + 1);
        for neighbor in molecule.neighbors(current) {
            if dist[neighbor.atom].is_none() {
                dist[neighbor.atom] = Some(next);
                queue.push_back(neighbor.atom);
            }
        }
    }
    dist
}

/// All-pairs topological distance matrix, built one BFS per atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathMatrix {
    size: usize,
    distances: Vec<Option<u32>>,
}

impl ShortestPathMatrix {
    pub fn compute(molecule: &Molecule) -> Self {
        let size = molecule.atom_count();
        let mut distances = Vec::with_capacity(size * size);
        for source in 0..size {
            distances.extend(single_source_distances(molecule, source));
        }
        Self { size, distances }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between two atoms; `None` if unreachable or out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<u32> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.distances[from * self.size + to]
    }

    pub fn row(&self, from: usize) -> &[Option<u32>] {
        if from >= self.size {
            return &[];
        }
        &self.distances[from * self.size..(from + 1) * self.size]
    }
}
