// File: crates/graphic-core/src/scale.rs
// Summary: Linear, square-root and calendar scales mapping data domains to pixel ranges.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Domain value to pixel output. `range` reports the configured output bounds.
pub trait Scale {
    fn apply(&self, v: f64) -> f64;
    fn range(&self) -> (f64, f64);
}

/// Continuous linear mapping of `[d0, d1]` onto `[r0, r1]`.
/// A collapsed domain maps everything to the start of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Like `new`, but rejects non-finite domains up front.
    pub fn checked(axis: &'static str, domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(Error::InvalidDomain { axis, min: domain.0, max: domain.1 });
        }
        Ok(Self::new(domain, range))
    }

    #[inline]
    fn span(&self) -> f64 {
        self.domain.1 - self.domain.0
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let rspan = self.range.1 - self.range.0;
        if rspan.abs() < 1e-12 {
            return self.domain.0;
        }
        self.domain.0 + (px - self.range.0) / rspan * self.span()
    }
}

impl Scale for LinearScale {
    #[inline]
    fn apply(&self, v: f64) -> f64 {
        let span = self.span();
        if span.abs() < 1e-12 {
            return self.range.0;
        }
        self.range.0 + (v - self.domain.0) / span * (self.range.1 - self.range.0)
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Square-root scale, used to size circles so area tracks magnitude.
/// Negative inputs keep their sign: `sqrt(|v|) * signum(v)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    inner: LinearScale,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let inner = LinearScale::new((signed_sqrt(domain.0), signed_sqrt(domain.1)), range);
        Self { inner }
    }
}

impl Scale for SqrtScale {
    #[inline]
    fn apply(&self, v: f64) -> f64 {
        self.inner.apply(signed_sqrt(v))
    }

    fn range(&self) -> (f64, f64) {
        self.inner.range
    }
}

#[inline]
fn signed_sqrt(v: f64) -> f64 {
    v.abs().sqrt().copysign(v)
}

/// Calendar scale: dates are measured in days since the Unix epoch and mapped linearly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidDomain {
                axis: "time",
                min: day_number(start),
                max: day_number(end),
            });
        }
        let inner = LinearScale::new((day_number(start), day_number(end)), range);
        Ok(Self { start, end, inner })
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f64 {
        self.inner.apply(day_number(date))
    }

    /// January 1st of every year inside the domain (inclusive).
    pub fn year_ticks(&self) -> Vec<NaiveDate> {
        let first = if self.start.ordinal() == 1 { self.start.year() } else { self.start.year() + 1 };
        (first..=self.end.year())
            .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .filter(|d| *d >= self.start && *d <= self.end)
            .collect()
    }
}

impl Scale for TimeScale {
    /// `v` is a day number as returned by [`day_number`].
    fn apply(&self, v: f64) -> f64 {
        self.inner.apply(v)
    }

    fn range(&self) -> (f64, f64) {
        self.inner.range
    }
}

/// Days since 1970-01-01.
pub fn day_number(date: NaiveDate) -> f64 {
    // 719_163 = days from 0001-01-01 (CE day 1) to 1970-01-01
    (date.num_days_from_ce() - 719_163) as f64
}
