/// A point of the 2D composition grid, kept as integer bin indices so that
/// admissibility is decided exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub positive_bin: usize,
    pub negative_bin: usize,
    pub f_positive: f64,
    pub f_negative: f64,
}

impl GridPoint {
    pub fn f_neutral(&self) -> f64 {
        1.0 - (self.f_positive + self.f_negative)
    }
}

/// Evenly spaced values `k / n_bins` for `k = 0..=n_bins`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionGrid {
    n_bins: usize,
}

impl FractionGrid {
    /// `n_bins` must be positive; the engine config enforces this.
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins }
    }

    pub fn value(&self, bin: usize) -> f64 {
        bin as f64 / self.n_bins as f64
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.n_bins).map(|k| self.value(k))
    }

    pub fn is_admissible(&self, positive_bin: usize, negative_bin: usize) -> bool {
        positive_bin + negative_bin <= self.n_bins
    }

    /// Pairs with `f_positive + f_negative <= 1`, positive fraction in the outer loop,
    /// negative fraction in the inner loop, both ascending.
    pub fn admissible_points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (0..=self.n_bins).flat_map(move |positive_bin| {
            (0..=self.n_bins)
                .filter(move |&negative_bin| self.is_admissible(positive_bin, negative_bin))
                .map(move |negative_bin| GridPoint {
                    positive_bin,
                    negative_bin,
                    f_positive: self.value(positive_bin),
                    f_negative: self.value(negative_bin),
                })
        })
    }

    /// Number of admissible points, `(n_bins + 1)(n_bins + 2) / 2`, or `None` if that
    /// overflows `usize`.
    pub fn admissible_count(&self) -> Option<usize> {
        let per_axis = self.n_bins.checked_add(1)?;
        let (halved, whole) = if per_axis % 2 == 0 {
            (per_axis / 2, per_axis.checked_add(1)?)
        } else {
            (per_axis / 2 + 1, per_axis)
        };
        halved.checked_mul(whole)
    }
}
