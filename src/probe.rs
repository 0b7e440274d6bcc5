//! Probe strategies for open addressing.
//!
//! A probe strategy is a small state machine. The table calls `reset` at the
//! start of every lookup or placement, then `increment(capacity)` once per
//! step; the returned offset is added to the home bucket modulo capacity.
//! For the walk to terminate and reach every slot, the home bucket together
//! with the offsets produced after a `reset` must cover every residue modulo
//! `capacity` within `capacity` steps. The table only checks this
//! indirectly: a placement that walks a full cycle without finding a free
//! slot panics.

/// Resettable generator of probe offsets.
pub trait ProbeStrategy {
    /// Re-arm the internal step counter.
    fn reset(&mut self);
    /// Advance one step and return the offset from the home bucket.
    fn increment(&mut self, capacity: usize) -> usize;
}

impl<P: ProbeStrategy + ?Sized> ProbeStrategy for &mut P {
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn increment(&mut self, capacity: usize) -> usize {
        (**self).increment(capacity)
    }
}

impl<P: ProbeStrategy + ?Sized> ProbeStrategy for Box<P> {
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn increment(&mut self, capacity: usize) -> usize {
        (**self).increment(capacity)
    }
}

pub(crate) fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Offsets `a·x + b` for `x = 1, 2, ...`.
///
/// Covers every slot exactly when `gcd(a, capacity) == 1`; the first step
/// after each reset asserts this against the capacity in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearProbe {
    a: usize,
    b: usize,
    x: usize,
}

impl LinearProbe {
    pub fn new(a: usize, b: usize) -> Self {
        assert!(a > 0, "linear probe stride must be non-zero");
        Self { a, b, x: 0 }
    }

    pub fn stride(&self) -> usize {
        self.a
    }
}

impl Default for LinearProbe {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl ProbeStrategy for LinearProbe {
    fn reset(&mut self) {
        self.x = 0;
    }

    fn increment(&mut self, capacity: usize) -> usize {
        if self.x == 0 {
            assert!(
                gcd(self.a, capacity) == 1,
                "linear probe stride {} is not coprime to capacity {}",
                self.a,
                capacity
            );
        }
        self.x += 1;
        self.a.wrapping_mul(self.x).wrapping_add(self.b)
    }
}

/// Offsets `a·x² + b·x + c` for `x = 1, 2, ...`.
///
/// Coverage depends on the coefficients and capacity; e.g. `a = b = 1`,
/// `c = 0` produces twice the triangular numbers, which does not cover a
/// power-of-two table, while `QuadraticProbe::triangular()` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadraticProbe {
    a: usize,
    b: usize,
    c: usize,
    x: usize,
    // divide a·x² + b·x by two before adding c
    halve: bool,
}

impl QuadraticProbe {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            a,
            b,
            c,
            x: 0,
            halve: false,
        }
    }

    /// Triangular-number probing, `(x² + x) / 2`, which visits every slot
    /// of a table whose capacity is a power of two.
    pub fn triangular() -> Self {
        Self {
            halve: true,
            ..Self::new(1, 1, 0)
        }
    }
}

impl ProbeStrategy for QuadraticProbe {
    fn reset(&mut self) {
        self.x = 0;
    }

    fn increment(&mut self, _capacity: usize) -> usize {
        self.x += 1;
        let x = self.x;
        let poly = self
            .a
            .wrapping_mul(x)
            .wrapping_mul(x)
            .wrapping_add(self.b.wrapping_mul(x));
        let poly = if self.halve { poly / 2 } else { poly };
        poly.wrapping_add(self.c)
    }
}
