use super::Poly;
use std::fmt;

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alternate (`{:#}`) prints the polynomial in standard form
        if f.alternate() {
            return self.fmt_full(f);
        }
        // at least one coefficient per side
        let num = f.precision().unwrap_or(3).max(1);
        self.fmt_truncated(f, num)
    }
}

impl Poly {
    /// First and last `num` coefficients of the stored vector.
    fn fmt_truncated(&self, f: &mut fmt::Formatter<'_>, num: usize) -> fmt::Result {
        let coeffs = self.coeffs();
        let len = coeffs.len();
        write!(f, "Poly<{len}>[")?;

        if len <= num * 2 {
            for (i, c) in coeffs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{c}")?;
            }
        } else {
            for (i, c) in coeffs[..num].iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{c}")?;
            }
            write!(f, ", …")?;
            for c in &coeffs[len - num..] {
                write!(f, ", {c}")?;
            }
        }
        write!(f, "]")
    }

    fn fmt_full(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, &c) in self.coeffs().iter().enumerate() {
            if c == 0 {
                continue;
            }
            if first {
                if c < 0 {
                    write!(f, "-")?;
                }
            } else if c < 0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let abs = c.unsigned_abs();
            match (i, abs) {
                (0, _) => write!(f, "{abs}")?,
                (1, 1) => write!(f, "x")?,
                (1, _) => write!(f, "{abs}*x")?,
                (_, 1) => write!(f, "x^{i}")?,
                _ => write!(f, "{abs}*x^{i}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Poly;

    #[test]
    fn truncated_form_elides_middle() {
        let p = Poly::from([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(format!("{p}"), "Poly<8>[1, 2, 3, …, 6, 7, 8]");
        assert_eq!(format!("{p:.1}"), "Poly<8>[1, …, 8]");
        assert_eq!(format!("{}", Poly::from([4, 5])), "Poly<2>[4, 5]");
    }

    #[test]
    fn zero_precision_keeps_one_per_side() {
        let p = Poly::from([1, 2, 3]);
        assert_eq!(format!("{p:.0}"), "Poly<3>[1, …, 3]");
        assert_eq!(format!("{:.0}", Poly::from([4, 5])), "Poly<2>[4, 5]");
        assert_eq!(format!("{:.0}", Poly::zero()), "Poly<0>[]");
    }

    #[test]
    fn full_form_uses_signed_terms() {
        assert_eq!(format!("{:#}", Poly::from([-1, 0, 1, 3])), "-1 + x^2 + 3*x^3");
        assert_eq!(format!("{:#}", Poly::from([0, -2, -1])), "-2*x - x^2");
        assert_eq!(format!("{:#}", Poly::zero()), "0");
    }
}
