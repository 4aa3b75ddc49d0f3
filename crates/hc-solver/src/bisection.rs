//! Bracketed root search shared by the standpipe solvers.

use crate::error::SolverResult;

/// Result of an iterative solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveOutcome {
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Bisection on a function that is positive at `lo` and non-positive at
/// `hi`.
#[derive(Clone, Copy, Debug)]
pub struct Bisection {
    pub max_iterations: usize,
    /// Stop when |f(x)| falls below this.
    pub abs_tol: f64,
    /// Stop when the bracket is narrower than this fraction of `hi`.
    pub rel_width: f64,
}

impl Bisection {
    /// The last evaluation is always at the returned value, so any state the
    /// closure leaves behind matches the outcome.
    pub fn solve<F>(&self, mut lo: f64, mut hi: f64, mut f: F) -> SolverResult<SolveOutcome>
    where
        F: FnMut(f64) -> SolverResult<f64>,
    {
        let mut mid = 0.5 * (lo + hi);
        for i in 1..=self.max_iterations {
            mid = 0.5 * (lo + hi);
            let r = f(mid)?;
            if r.abs() < self.abs_tol || (hi - lo) <= self.rel_width * hi.abs() {
                return Ok(SolveOutcome {
                    value: mid,
                    iterations: i,
                    converged: true,
                });
            }
            if r > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(SolveOutcome {
            value: mid,
            iterations: self.max_iterations,
            converged: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_square_root() {
        let b = Bisection {
            max_iterations: 100,
            abs_tol: 1e-12,
            rel_width: 1e-15,
        };
        let out = b.solve(0.0, 2.0, |x| Ok(2.0 - x * x)).unwrap();
        assert!(out.converged);
        assert!((out.value - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn reports_exhaustion() {
        let b = Bisection {
            max_iterations: 3,
            abs_tol: 0.0,
            rel_width: 0.0,
        };
        let out = b.solve(0.0, 1.0, |x| Ok(0.3 - x)).unwrap();
        assert!(!out.converged);
        assert_eq!(out.iterations, 3);
    }

    #[test]
    fn errors_propagate() {
        let b = Bisection {
            max_iterations: 3,
            abs_tol: 0.0,
            rel_width: 0.0,
        };
        let err = b
            .solve(0.0, 1.0, |_| Err(crate::SolverError::NoActiveFixture))
            .unwrap_err();
        assert_eq!(err, crate::SolverError::NoActiveFixture);
    }

    proptest::proptest! {
        #[test]
        fn converges_on_any_decreasing_line(root in 0.01f64..99.0, slope in 0.1f64..50.0) {
            let b = Bisection {
                max_iterations: 200,
                abs_tol: 1e-9,
                rel_width: 1e-14,
            };
            let out = b.solve(0.0, 100.0, |x| Ok(slope * (root - x))).unwrap();
            proptest::prop_assert!(out.converged);
            proptest::prop_assert!((out.value - root).abs() < 1e-6);
        }
    }
}
