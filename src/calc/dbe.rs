/// Double Bond Equivalents from a molecular formula
///
/// DBE = C + 1 − H/2 + N/2 − X/2. Oxygen and sulfur do not enter the
/// formula. Fractional values (odd H or N counts) are valid and shown
/// as-is; they usually signal a radical or a miscounted formula.

/// Element counts for the DBE calculator. Inputs are clamped to
/// non-negative values by the DragValue widgets, not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaCounts {
    pub carbon: u32,
    pub hydrogen: u32,
    pub nitrogen: u32,
    pub oxygen: u32,
    pub halogen: u32,
}

impl Default for FormulaCounts {
    fn default() -> Self {
        // Benzene — the canonical DBE = 4 example
        Self {
            carbon: 6,
            hydrogen: 6,
            nitrogen: 0,
            oxygen: 0,
            halogen: 0,
        }
    }
}

impl FormulaCounts {
    /// Render as a Hill-ish formula string for the panel header
    pub fn formula(&self) -> String {
        let mut out = String::new();
        let mut push = |symbol: &str, count: u32| {
            if count == 1 {
                out.push_str(symbol);
            } else if count > 1 {
                out.push_str(&format!("{}{}", symbol, count));
            }
        };
        push("C", self.carbon);
        push("H", self.hydrogen);
        push("N", self.nitrogen);
        push("O", self.oxygen);
        push("X", self.halogen);
        if out.is_empty() {
            out.push('—');
        }
        out
    }
}

/// Compute Double Bond Equivalents
pub fn dbe(counts: FormulaCounts) -> f64 {
    counts.carbon as f64 + 1.0 - counts.hydrogen as f64 / 2.0 + counts.nitrogen as f64 / 2.0
        - counts.halogen as f64 / 2.0
}

/// Structural hint for a DBE value. Discrete lookup, half-integer aware.
pub fn structural_hint(value: f64) -> &'static str {
    if value < 0.0 {
        return "Impossible formula — more H than the skeleton can carry";
    }
    // Half-integers come from odd H or N counts
    if (value * 2.0).fract().abs() > 1e-9 || (value * 2.0) as i64 % 2 == 1 {
        return "Fractional DBE — odd-electron species or check the N count (nitrogen rule)";
    }
    match value as i64 {
        0 => "Saturated and acyclic — no rings or π bonds",
        1 => "One ring or one double bond",
        2 => "Two of: rings, double bonds; or one triple bond",
        3 => "Three degrees — e.g. a ring plus two double bonds",
        4 => "Four degrees — likely contains a benzene ring",
        5..=7 => "Aromatic ring plus additional unsaturation",
        _ => "Highly unsaturated — fused aromatic system likely",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(c: u32, h: u32, n: u32, o: u32, x: u32) -> FormulaCounts {
        FormulaCounts {
            carbon: c,
            hydrogen: h,
            nitrogen: n,
            oxygen: o,
            halogen: x,
        }
    }

    #[test]
    fn test_benzene_is_four() {
        assert_eq!(dbe(counts(6, 6, 0, 0, 0)), 4.0);
        assert!(structural_hint(4.0).contains("benzene"));
    }

    #[test]
    fn test_methane_is_zero() {
        assert_eq!(dbe(counts(1, 4, 0, 0, 0)), 0.0);
    }

    #[test]
    fn test_acetonitrile_fragment_is_fractional() {
        // C2H3N — odd H with one N gives 1.5
        assert_eq!(dbe(counts(2, 3, 1, 0, 0)), 1.5);
        assert!(structural_hint(1.5).contains("Fractional"));
    }

    #[test]
    fn test_oxygen_does_not_affect_dbe() {
        assert_eq!(dbe(counts(2, 6, 0, 0, 0)), dbe(counts(2, 6, 0, 2, 0)));
    }

    #[test]
    fn test_halogen_counts_like_hydrogen() {
        // Chlorobenzene C6H5Cl still has DBE 4
        assert_eq!(dbe(counts(6, 5, 0, 0, 1)), 4.0);
    }

    #[test]
    fn test_formula_string() {
        assert_eq!(counts(6, 6, 0, 0, 0).formula(), "C6H6");
        assert_eq!(counts(1, 4, 0, 0, 0).formula(), "CH4");
        assert_eq!(counts(0, 0, 0, 0, 0).formula(), "—");
    }
}
