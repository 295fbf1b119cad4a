// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Domino chain feasibility.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Reports whether every tile can be laid in one unbroken row, where
/// touching halves carry the same number of pips. Tiles may be flipped.
///
/// Tiles form a multigraph on pip values, one edge per tile. A full chain
/// is an Eulerian path through that graph: all edges in a single connected
/// component, with at most two pip values of odd degree.
pub fn can_chain(tiles: &[[u8; 2]]) -> bool {
    if tiles.is_empty() {
        return true;
    }

    let mut degree: BTreeMap<u8, usize> = BTreeMap::new();
    let mut neighbors: BTreeMap<u8, Vec<u8>> = BTreeMap::new();
    for &[a, b] in tiles {
        *degree.entry(a).or_default() += 1;
        *degree.entry(b).or_default() += 1;
        neighbors.entry(a).or_default().push(b);
        neighbors.entry(b).or_default().push(a);
    }

    let odd = degree.values().filter(|&&count| count % 2 == 1).count();
    if odd > 2 {
        return false;
    }

    let start = tiles[0][0];
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pip) = queue.pop_front() {
        if let Some(adjacent) = neighbors.get(&pip) {
            for &next in adjacent {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    degree.keys().all(|pip| visited.contains(pip))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_tile_sets_chain_trivially() {
        assert!(can_chain(&[]));
        assert!(can_chain(&[[4, 2]]));
        assert!(can_chain(&[[6, 6]]));
    }

    #[test]
    fn double_extends_a_matching_tile() {
        assert!(can_chain(&[[0, 1], [1, 1]]));
    }

    #[test]
    fn chain_that_needs_the_first_tile_flipped() {
        assert!(can_chain(&[[1, 2], [1, 1]]));
    }

    #[test]
    fn stranded_double_breaks_the_chain() {
        assert!(!can_chain(&[[1, 1], [2, 2], [1, 5], [5, 6], [6, 3]]));
    }

    #[test]
    fn cycle_with_one_spur_chains() {
        assert!(can_chain(&[[1, 3], [2, 3], [1, 4], [2, 4], [5, 1]]));
    }

    #[test]
    fn four_odd_pips_cannot_chain() {
        assert!(!can_chain(&[
            [0, 0],
            [0, 1],
            [1, 1],
            [0, 2],
            [1, 2],
            [0, 3],
            [1, 3],
            [2, 3],
            [3, 3],
        ]));
    }
}
