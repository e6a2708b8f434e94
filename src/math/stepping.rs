//! Floating-point loop ranges with accumulated steps
//!
//! Several drawing loops advance a float by a fixed step and compare against a
//! fractional bound. The step is accumulated (not multiplied) so the exact
//! number of iterations, and with it the random draw count, stays fixed.

/// Iterator over `start, start + step, ...` while below (or up to) `end`
#[derive(Debug, Clone)]
pub struct Steps {
    next: f64,
    end: f64,
    step: f64,
    inclusive: bool,
}

impl Iterator for Steps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let in_range = if self.inclusive {
            self.next <= self.end
        } else {
            self.next < self.end
        };
        if !in_range || self.step <= 0.0 {
            return None;
        }
        let value = self.next;
        self.next += self.step;
        Some(value)
    }
}

/// Values from `start` while strictly below `end`
pub const fn range(start: f64, end: f64, step: f64) -> Steps {
    Steps {
        next: start,
        end,
        step,
        inclusive: false,
    }
}

/// Values from `start` while less than or equal to `end`
pub const fn range_inclusive(start: f64, end: f64, step: f64) -> Steps {
    Steps {
        next: start,
        end,
        step,
        inclusive: true,
    }
}

/// Unit steps from `start` while strictly below `end`
pub const fn units(start: f64, end: f64) -> Steps {
    range(start, end, 1.0)
}
