//! Reduction chain search between two diameters.

use hc_core::DiameterId;

use crate::error::CatalogResult;
use crate::provider::ReferenceData;
use crate::records::Reduction;

/// Cheapest way (in hops) to go from `inlet` to `outlet` through reduction
/// fittings, ordered inlet to outlet.
///
/// A direct row wins outright. Otherwise every chain whose internal
/// diameters move strictly toward the target is enumerated depth-first in
/// catalog order; the first chain with the fewest hops is returned. An
/// empty vector means no chain exists (or both ends are the same diameter).
pub fn best_reduction<'a, R>(
    data: &'a R,
    inlet: DiameterId,
    outlet: DiameterId,
) -> CatalogResult<Vec<&'a Reduction>>
where
    R: ReferenceData + ?Sized,
{
    if inlet == outlet {
        return Ok(Vec::new());
    }
    if let Some(direct) = data.direct_reduction(inlet, outlet) {
        return Ok(vec![direct]);
    }

    let from = data.require_diameter(inlet)?.internal_diameter;
    let to = data.require_diameter(outlet)?.internal_diameter;
    let search = ChainSearch {
        data,
        target: outlet,
        target_size: to,
        reduce: from > to,
    };

    let mut best: Option<Vec<&Reduction>> = None;
    let mut trail = Vec::new();
    search.walk(inlet, from, &mut trail, &mut best)?;

    match &best {
        Some(chain) => tracing::debug!(
            inlet = inlet.0,
            outlet = outlet.0,
            hops = chain.len(),
            "reduction chain found"
        ),
        None => tracing::debug!(inlet = inlet.0, outlet = outlet.0, "no reduction chain"),
    }
    Ok(best.unwrap_or_default())
}

struct ChainSearch<'a, R: ?Sized> {
    data: &'a R,
    target: DiameterId,
    target_size: f64,
    reduce: bool,
}

impl<'a, R: ReferenceData + ?Sized> ChainSearch<'a, R> {
    fn moves_toward(&self, current: f64, next: f64) -> bool {
        if self.reduce {
            next < current && next >= self.target_size
        } else {
            next > current && next <= self.target_size
        }
    }

    // Strict monotonicity bounds the depth by the number of distinct sizes.
    fn walk(
        &self,
        at: DiameterId,
        size: f64,
        trail: &mut Vec<&'a Reduction>,
        best: &mut Option<Vec<&'a Reduction>>,
    ) -> CatalogResult<()> {
        for row in self.data.reductions_from(at) {
            if best
                .as_ref()
                .is_some_and(|b| trail.len() + 1 >= b.len())
            {
                return Ok(());
            }
            let Some(next) = self.data.diameter(row.outlet_diameter_id) else {
                continue;
            };
            if !self.moves_toward(size, next.internal_diameter) {
                continue;
            }
            trail.push(row);
            if row.outlet_diameter_id == self.target {
                *best = Some(trail.clone());
            } else {
                self.walk(row.outlet_diameter_id, next.internal_diameter, trail, best)?;
            }
            trail.pop();
        }
        Ok(())
    }
}
