/// Linear domain→pixel mapping for spectrum rendering
///
/// Pure coordinate math shared by the SVG exporter and anything else that
/// lays out peaks outside egui_plot. No clamping: a value outside the
/// declared domain maps outside the pixel range and it is the caller's
/// job to cull or accept off-canvas output.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    /// domain_min == domain_max would divide by zero; rejected up front
    #[error("degenerate domain: min and max are both {0}")]
    DegenerateDomain(f64),
    #[error("non-finite domain bound: {0}")]
    NonFiniteBound(f64),
}

/// A linear interpolation from a data domain onto a pixel range.
/// With `reversed` set, `domain_max` maps to `pixel_min` — the display
/// convention for NMR ppm and IR wavenumber axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    pixel_min: f64,
    pixel_max: f64,
    reversed: bool,
}

impl LinearScale {
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        pixel_min: f64,
        pixel_max: f64,
        reversed: bool,
    ) -> Result<Self, ScaleError> {
        for &bound in &[domain_min, domain_max] {
            if !bound.is_finite() {
                return Err(ScaleError::NonFiniteBound(bound));
            }
        }
        if domain_min == domain_max {
            return Err(ScaleError::DegenerateDomain(domain_min));
        }
        Ok(Self {
            domain_min,
            domain_max,
            pixel_min,
            pixel_max,
            reversed,
        })
    }

    /// Map a domain value into pixel space
    pub fn map(&self, value: f64) -> f64 {
        let frac = (value - self.domain_min) / (self.domain_max - self.domain_min);
        let frac = if self.reversed { 1.0 - frac } else { frac };
        self.pixel_min + frac * (self.pixel_max - self.pixel_min)
    }

    /// Map a pixel coordinate back into the domain
    pub fn invert(&self, pixel: f64) -> f64 {
        let frac = (pixel - self.pixel_min) / (self.pixel_max - self.pixel_min);
        let frac = if self.reversed { 1.0 - frac } else { frac };
        self.domain_min + frac * (self.domain_max - self.domain_min)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_endpoints_map_to_pixel_bounds() {
        let s = LinearScale::new(0.0, 200.0, 40.0, 760.0, false).unwrap();
        assert!((s.map(0.0) - 40.0).abs() < EPS);
        assert!((s.map(200.0) - 760.0).abs() < EPS);
    }

    #[test]
    fn test_reversed_endpoints_swap() {
        // ppm convention: domain max on the left edge
        let s = LinearScale::new(0.0, 12.0, 40.0, 760.0, true).unwrap();
        assert!((s.map(12.0) - 40.0).abs() < EPS);
        assert!((s.map(0.0) - 760.0).abs() < EPS);
    }

    #[test]
    fn test_monotonic() {
        let fwd = LinearScale::new(0.0, 100.0, 0.0, 500.0, false).unwrap();
        let rev = LinearScale::new(0.0, 100.0, 0.0, 500.0, true).unwrap();
        let mut prev_f = f64::NEG_INFINITY;
        let mut prev_r = f64::INFINITY;
        for i in 0..=100 {
            let v = i as f64;
            let pf = fwd.map(v);
            let pr = rev.map(v);
            assert!(pf > prev_f, "Forward mapping must increase");
            assert!(pr < prev_r, "Reversed mapping must decrease");
            prev_f = pf;
            prev_r = pr;
        }
    }

    #[test]
    fn test_no_clamping_off_canvas() {
        let s = LinearScale::new(0.0, 100.0, 0.0, 100.0, false).unwrap();
        assert!(s.map(150.0) > 100.0, "Out-of-domain values map off-range");
        assert!(s.map(-10.0) < 0.0);
    }

    #[test]
    fn test_invert_round_trip() {
        let s = LinearScale::new(400.0, 4000.0, 50.0, 950.0, true).unwrap();
        for v in [400.0, 1500.0, 2900.5, 4000.0] {
            assert!((s.invert(s.map(v)) - v).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_domain_rejected() {
        let err = LinearScale::new(5.0, 5.0, 0.0, 100.0, false).unwrap_err();
        assert_eq!(err, ScaleError::DegenerateDomain(5.0));
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0, false).is_err());
        assert!(LinearScale::new(0.0, f64::INFINITY, 0.0, 100.0, false).is_err());
    }
}
