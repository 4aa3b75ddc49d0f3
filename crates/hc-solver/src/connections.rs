//! Equivalent length contributed by fittings, material transitions,
//! reductions and branch connections.

use hc_catalog::{Fixture, MaterialConnection, ReferenceData, best_reduction};
use hc_core::{DiameterId, FittingId, MaterialId, format_decimal};
use tracing::warn;

use crate::error::SolverResult;

/// The parts of a path the resolver looks at.
#[derive(Clone, Copy, Debug)]
pub struct SegmentRef<'a> {
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub fittings_ids: &'a [FittingId],
    pub extra_equivalent_length: f64,
}

/// Accumulated equivalent length and one trace line per contributor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentConnections {
    pub equivalent_length: f64,
    pub connection_names: Vec<String>,
}

impl SegmentConnections {
    fn with_extra(extra: f64) -> Self {
        Self {
            equivalent_length: extra,
            connection_names: vec![format!("Extra length: {} m", format_decimal(extra))],
        }
    }

    fn add(&mut self, name: &str, length: f64) {
        self.equivalent_length += length;
        self.connection_names
            .push(format!("{name}: {} m", format_decimal(length)));
    }

    fn add_reduction_chain<R>(
        &mut self,
        data: &R,
        inlet: DiameterId,
        outlet: DiameterId,
    ) -> SolverResult<()>
    where
        R: ReferenceData + ?Sized,
    {
        let chain = best_reduction(data, inlet, outlet)?;
        if chain.is_empty() && inlet != outlet {
            warn!(%inlet, %outlet, "no reduction chain between diameters");
        }
        for reduction in chain {
            self.add(&reduction.name, reduction.equivalent_length);
        }
        Ok(())
    }

    fn add_fitting<R>(&mut self, data: &R, fitting: FittingId, diameter: DiameterId)
    where
        R: ReferenceData + ?Sized,
    {
        match data.fitting_diameter(fitting, diameter) {
            Some(row) => {
                let name = data
                    .fitting(fitting)
                    .map_or_else(|| format!("Fitting {fitting}"), |f| f.name.clone());
                self.add(&name, row.equivalent_length);
            }
            None => warn!(%fitting, %diameter, "fitting has no equivalent length for diameter"),
        }
    }
}

/// Resolve one path against its predecessor (if any) and its fan-out, the
/// number of paths starting at its end.
pub fn resolve_connections<R>(
    data: &R,
    this: &SegmentRef<'_>,
    predecessor: Option<&SegmentRef<'_>>,
    fan_out: usize,
) -> SolverResult<SegmentConnections>
where
    R: ReferenceData + ?Sized,
{
    let mut out = SegmentConnections::with_extra(this.extra_equivalent_length);
    let material = data.require_material(this.material_id)?;

    if let Some(prev) = predecessor {
        if prev.material_id != this.material_id {
            let rows = data.material_connections(prev.material_id, this.material_id);
            match pick_material_connection(&rows, prev.diameter_id, this.diameter_id) {
                // A zero-length row neither lists nor bridges.
                Some(conn) if conn.equivalent_length == 0.0 => {}
                Some(conn) => {
                    out.add(&conn.name, conn.equivalent_length);
                    if conn.inlet_diameter_id != prev.diameter_id {
                        out.add_reduction_chain(data, prev.diameter_id, conn.inlet_diameter_id)?;
                    }
                    if conn.outlet_diameter_id != this.diameter_id {
                        out.add_reduction_chain(data, conn.outlet_diameter_id, this.diameter_id)?;
                    }
                }
                None => warn!(
                    inlet = %prev.material_id,
                    outlet = %this.material_id,
                    "no material connection between materials"
                ),
            }
        } else if prev.diameter_id != this.diameter_id {
            out.add_reduction_chain(data, prev.diameter_id, this.diameter_id)?;
        }
    }

    for &fitting in this.fittings_ids {
        out.add_fitting(data, fitting, this.diameter_id);
    }

    if let Some(fitting) = material.outlet_connection(fan_out) {
        out.add_fitting(data, fitting, this.diameter_id);
    }

    Ok(out)
}

/// Exact diameter match, then inlet match, then outlet match, then the first
/// row.
fn pick_material_connection<'a>(
    rows: &[&'a MaterialConnection],
    inlet: DiameterId,
    outlet: DiameterId,
) -> Option<&'a MaterialConnection> {
    rows.iter()
        .find(|c| c.inlet_diameter_id == inlet && c.outlet_diameter_id == outlet)
        .or_else(|| rows.iter().find(|c| c.inlet_diameter_id == inlet))
        .or_else(|| rows.iter().find(|c| c.outlet_diameter_id == outlet))
        .or_else(|| rows.first())
        .copied()
}

/// Equivalent length of the fixture's own inlet: extra length, its fittings
/// at the inlet diameter and its listed reductions.
pub fn fixture_connections<R>(data: &R, fixture: &Fixture) -> SolverResult<SegmentConnections>
where
    R: ReferenceData + ?Sized,
{
    let mut out = SegmentConnections::with_extra(fixture.extra_equivalent_length);
    match fixture.inlet_diameter_id {
        Some(diameter) => {
            for &fitting in &fixture.fittings_ids {
                out.add_fitting(data, fitting, diameter);
            }
        }
        None if !fixture.fittings_ids.is_empty() => {
            warn!(fixture = %fixture.id, "fixture fittings ignored without an inlet diameter");
        }
        None => {}
    }
    for &id in &fixture.reductions_ids {
        let reduction = data.require_reduction(id)?;
        out.add(&reduction.name, reduction.equivalent_length);
    }
    Ok(out)
}
