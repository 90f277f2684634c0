//! The minimization engines
//!
//! Pipeline: star-closure to all prime implicants, cascaded sharp to the
//! essential primes, dominance reduction over the remaining primes, then
//! a recursive best-cost branching search over what is left. Everything
//! here is pure and deterministic: cube sets are `BTreeSet`s, so every
//! iteration walks cubes in canonical order.

use super::{Cover, Minimizable};
use crate::cube::Cube;
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::debug;

/// Generate all prime implicants of a cover by iterated star products
///
/// Each round stars every unordered pair of the previous generation and
/// drops any cube covered by a distinct cube, until a fixpoint. The set
/// stays finite (bounded by 3^n distinct cubes), and each surviving star
/// product strictly generalizes some position, so the loop terminates.
pub(crate) fn prime_implicants(cover: &Cover) -> BTreeSet<Cube> {
    let mut set: BTreeSet<Cube> = cover.cubes().cloned().collect();
    loop {
        let prev = set.clone();
        for (a, b) in prev.iter().tuple_combinations::<(_, _)>() {
            let product = a.star(b);
            if !product.is_null() {
                set.insert(product);
            }
        }
        set = drop_covered(set);
        if set == prev {
            break;
        }
    }
    set
}

/// Remove every cube covered by a distinct cube in the set
fn drop_covered(set: BTreeSet<Cube>) -> BTreeSet<Cube> {
    let cubes: Vec<Cube> = set.into_iter().collect();
    let covered: Vec<bool> = (0..cubes.len())
        .map(|b| (0..cubes.len()).any(|a| a != b && cubes[a].covers(&cubes[b])))
        .collect();
    cubes
        .into_iter()
        .zip(covered)
        .filter(|(_, dropped)| !dropped)
        .map(|(cube, _)| cube)
        .collect()
}

/// Identify the essential primes: those covering a minterm no other
/// prime covers
///
/// For each prime, cascade-sharp it against every other prime, flattening
/// the per-step result sets and discarding null cubes. A non-null
/// remainder means some minterm of the prime survives all subtractions.
pub(crate) fn essential_primes(primes: &BTreeSet<Cube>) -> BTreeSet<Cube> {
    let mut essentials = BTreeSet::new();
    for p in primes {
        let mut remainder = vec![p.clone()];
        for q in primes.iter().filter(|&q| q != p) {
            remainder = remainder
                .iter()
                .flat_map(|r| r.sharp(q))
                .filter(|c| !c.is_null())
                .collect();
            if remainder.is_empty() {
                break;
            }
        }
        if !remainder.is_empty() {
            essentials.insert(p.clone());
        }
    }
    essentials
}

/// Dominance reduction: drop any option whose still-needed minterms are
/// covered by a strictly cheaper option
///
/// The containment test is restricted to `need`: minterms already covered
/// by the essentials are irrelevant, so a dominator only has to cover the
/// dominated cube's *needed* share.
pub(crate) fn reduce_dominated(
    options: BTreeSet<Cube>,
    need: &BTreeSet<u64>,
) -> BTreeSet<Cube> {
    let cubes: Vec<Cube> = options.into_iter().collect();
    let minterms: Vec<BTreeSet<u64>> = cubes.iter().map(|c| c.minterms()).collect();
    let needed: Vec<BTreeSet<u64>> = minterms
        .iter()
        .map(|m| m.intersection(need).copied().collect())
        .collect();

    let dominated: Vec<bool> = (0..cubes.len())
        .map(|a| {
            (0..cubes.len()).any(|b| {
                a != b && cubes[a].cost() > cubes[b].cost() && needed[a].is_subset(&minterms[b])
            })
        })
        .collect();

    cubes
        .into_iter()
        .zip(dominated)
        .filter(|(_, dropped)| !dropped)
        .map(|(cube, _)| cube)
        .collect()
}

/// Greedy outer loop of the branching search
///
/// Probes each option in canonical order; once the recursive probe
/// concludes that including the option beats excluding it, the option is
/// committed, its minterms leave `need`, and the search continues over
/// the rest.
pub(crate) fn branch(
    mut need: BTreeSet<u64>,
    mut options: BTreeSet<Cube>,
) -> BTreeSet<Cube> {
    let mut chosen = BTreeSet::new();
    let snapshot: Vec<Cube> = options.iter().cloned().collect();
    for p in snapshot {
        let decision = branch_helper(&need, &options, &p);
        if decision.contains(&p) {
            for m in p.minterms() {
                need.remove(&m);
            }
            options.remove(&p);
            chosen.insert(p);
        }
    }
    chosen
}

/// Recursive best-cost probe for a single pivot cube
///
/// Explores both including and excluding the pivot over the options that
/// still intersect `need`. The exclude branch wins only on strictly lower
/// cover cost, and only when it still covers `need`; ties keep the pivot.
fn branch_helper(
    need: &BTreeSet<u64>,
    options: &BTreeSet<Cube>,
    p: &Cube,
) -> BTreeSet<Cube> {
    let live: BTreeSet<Cube> = options
        .iter()
        .filter(|o| o.minterms().iter().any(|m| need.contains(m)))
        .cloned()
        .collect();
    if live.is_empty() {
        return BTreeSet::new();
    }
    let mut rest = live.clone();
    rest.remove(p);

    let mut with_p = match rest.iter().next().cloned() {
        Some(pivot) => {
            let pm = p.minterms();
            let reduced: BTreeSet<u64> = need.difference(&pm).copied().collect();
            branch_helper(&reduced, &rest, &pivot)
        }
        None => BTreeSet::new(),
    };
    with_p.insert(p.clone());

    let without_p = match rest.iter().next().cloned() {
        Some(pivot) => branch_helper(need, &rest, &pivot),
        None => BTreeSet::new(),
    };

    let covered: BTreeSet<u64> = without_p.iter().flat_map(|c| c.minterms()).collect();
    if set_cost(&without_p) < set_cost(&with_p) && need.is_subset(&covered) {
        without_p
    } else {
        with_p
    }
}

/// Cover cost of a bare cube set: cube count plus summed literal counts
fn set_cost(cubes: &BTreeSet<Cube>) -> usize {
    cubes.len() + cubes.iter().map(Cube::cost).sum::<usize>()
}

/// Full minimization: primes, essentials, dominance reduction, branch
pub(crate) fn minimise_cover(cover: &Cover) -> Cover {
    let primes = prime_implicants(cover);
    let essentials = essential_primes(&primes);
    debug!(
        cubes = cover.len(),
        primes = primes.len(),
        essentials = essentials.len(),
        "prime generation complete"
    );

    let options: BTreeSet<Cube> = primes.difference(&essentials).cloned().collect();
    let mut need = cover.on_set();
    for e in &essentials {
        for m in e.minterms() {
            need.remove(&m);
        }
    }

    let options = reduce_dominated(options, &need);
    debug!(
        options = options.len(),
        uncovered = need.len(),
        "dominance reduction complete"
    );
    let chosen = branch(need, options);

    let mut result = essentials;
    result.extend(chosen);
    Cover::from_cubes(cover.arity(), result)
}

impl Minimizable for Cover {
    fn minimize(&self) -> Self {
        minimise_cover(self)
    }
}
