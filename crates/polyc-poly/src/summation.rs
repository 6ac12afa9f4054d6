//! Compensated floating point accumulation.
//!
//! Series with hundreds of alternating terms lose most of their digits to
//! cancellation under naive summation. Neumaier's variant of Kahan
//! summation carries the lost low-order bits in a separate term.

/// Running sum with a Neumaier compensation term.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    /// Adds a term to the running sum.
    ///
    /// Once the sum is infinite or NaN it propagates unchanged, as plain
    /// IEEE addition would.
    pub(crate) fn add(&mut self, term: f64) {
        let t = self.sum + term;
        if t.is_finite() {
            if self.sum.abs() >= term.abs() {
                self.compensation += (self.sum - t) + term;
            } else {
                self.compensation += (term - t) + self.sum;
            }
        }
        self.sum = t;
    }

    /// Returns the compensated total.
    pub(crate) fn total(&self) -> f64 {
        if self.sum.is_finite() {
            self.sum + self.compensation
        } else {
            self.sum
        }
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for term in iter {
            self.add(term);
        }
    }
}
