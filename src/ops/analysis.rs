//! Comparative analysis over a set of shapes.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::core::{AnyShape, ShapeKind};
use crate::ops::measure::{measure_all, Measurement};

/// The shape holding an extreme value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub name: String,
    pub kind: ShapeKind,
    pub value: f64,
}

/// How many shapes of one kind, and their share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindShare {
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub count: usize,
    pub largest_volume: Extreme,
    pub smallest_volume: Extreme,
    pub largest_surface_area: Extreme,
    pub smallest_surface_area: Extreme,
    /// Highest V/SA
    pub most_efficient: Extreme,
    pub least_efficient: Extreme,
    pub average_volume: f64,
    pub average_surface_area: f64,
    pub total_volume: f64,
    pub total_surface_area: f64,
    pub distribution: BTreeMap<ShapeKind, KindShare>,
}

impl Analysis {
    /// Analyze a set of shapes. Returns `None` for an empty set.
    ///
    /// On ties the earlier shape wins.
    pub fn of(shapes: &[Arc<AnyShape>]) -> Option<Analysis> {
        let measured = measure_all(shapes);
        let count = measured.len();

        let largest_volume = pick(&measured, |m| m.volume, Pick::Max)?;
        let smallest_volume = pick(&measured, |m| m.volume, Pick::Min)?;
        let largest_surface_area = pick(&measured, |m| m.surface_area, Pick::Max)?;
        let smallest_surface_area = pick(&measured, |m| m.surface_area, Pick::Min)?;
        let most_efficient = pick(&measured, |m| m.efficiency, Pick::Max)?;
        let least_efficient = pick(&measured, |m| m.efficiency, Pick::Min)?;

        let total_volume: f64 = measured.iter().map(|m| m.volume).sum();
        let total_surface_area: f64 = measured.iter().map(|m| m.surface_area).sum();

        let mut counts: BTreeMap<ShapeKind, usize> = BTreeMap::new();
        for m in &measured {
            *counts.entry(m.kind).or_default() += 1;
        }
        let distribution = counts
            .into_iter()
            .map(|(kind, n)| {
                let share = KindShare {
                    count: n,
                    percent: 100.0 * n as f64 / count as f64,
                };
                (kind, share)
            })
            .collect();

        Some(Analysis {
            count,
            largest_volume,
            smallest_volume,
            largest_surface_area,
            smallest_surface_area,
            most_efficient,
            least_efficient,
            average_volume: total_volume / count as f64,
            average_surface_area: total_surface_area / count as f64,
            total_volume,
            total_surface_area,
            distribution,
        })
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Pick {
    Max,
    Min,
}

fn pick(
    measured: &[Measurement],
    value: impl Fn(&Measurement) -> f64,
    which: Pick,
) -> Option<Extreme> {
    let mut best: Option<&Measurement> = None;
    for m in measured {
        let better = match best {
            None => true,
            Some(b) => match which {
                Pick::Max => value(m).total_cmp(&value(b)).is_gt(),
                Pick::Min => value(m).total_cmp(&value(b)).is_lt(),
            },
        };
        if better {
            best = Some(m);
        }
    }

    best.map(|m| Extreme {
        name: m.name.clone(),
        kind: m.kind,
        value: value(m),
    })
}
