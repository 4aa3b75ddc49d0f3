//! Tree construction from labelled segments, with graph errors mapped onto
//! the calculation's input taxonomy.

use hc_graph::{GraphError, PathTree, PathTreeBuilder};

use crate::error::SolverError;

/// Build the path tree for `(start, end)` pairs in declaration order.
pub fn build_tree<'a, I>(source_label: &str, segments: I) -> Result<PathTree, SolverError>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut builder = PathTreeBuilder::new(source_label);
    let mut starts = Vec::new();
    for (start, end) in segments {
        builder.add_segment(start, end);
        starts.push(start.to_string());
    }
    builder.build().map_err(|err| topology_error(err, &starts))
}

fn topology_error(err: GraphError, starts: &[String]) -> SolverError {
    match err {
        GraphError::Empty => SolverError::NoInitialData,
        GraphError::NoSource { label } => SolverError::NoReservoir { label },
        GraphError::MultipleSources { label, count } => {
            SolverError::MoreThanOneReservoir { label, count }
        }
        GraphError::DanglingPath { start, .. } => SolverError::PathNotLeadingToReservoir { start },
        GraphError::Cycle { path } => SolverError::PathNotLeadingToReservoir {
            start: starts.get(path.slot()).cloned().unwrap_or_default(),
        },
        other => SolverError::Topology(other),
    }
}
