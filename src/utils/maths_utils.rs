use anyhow::{Result, bail};

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance. Zero for empty or single-element input.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Evaluate a polynomial with ascending coefficients: c0 + c1*x + c2*x^2 + ...
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

// Relative tolerance below which an orthogonalized column counts as aliased
const ALIAS_REL_TOL: f64 = 1e-8;

/// Ordinary least squares fit of `y` on the given regressor columns.
pub struct LstsqFit {
    /// One coefficient per input column. Aliased columns get 0.0.
    pub coeffs: Vec<f64>,
    /// Which columns survived the collinearity check, in input order.
    pub kept: Vec<bool>,
    /// Squared norm of each column's orthogonalized basis vector (0.0 when aliased).
    pub basis_norm2: Vec<f64>,
    /// Residual sum of squares of the fit.
    pub ssr: f64,
    /// Observations minus kept regressors.
    pub dof: usize,
}

/// Least squares via in-order modified Gram-Schmidt.
///
/// Columns that are (numerically) linear combinations of earlier columns are
/// dropped from the basis and get a zero coefficient, the way R reports
/// aliased coefficients in a rank-deficient fit. Constant or perfectly
/// trending regressor sets therefore solve deterministically instead of
/// hitting a singular normal-equations matrix.
pub fn lstsq(columns: &[Vec<f64>], y: &[f64]) -> Result<LstsqFit> {
    let n = y.len();
    if columns.is_empty() {
        bail!("least squares needs at least one regressor column");
    }
    if columns.iter().any(|c| c.len() != n) {
        bail!("regressor columns and response must have equal length");
    }
    if n == 0 {
        bail!("least squares needs at least one observation");
    }

    let p = columns.len();
    let mut kept = vec![false; p];
    let mut basis: Vec<Vec<f64>> = Vec::new(); // orthogonal, unnormalized
    let mut basis_cols: Vec<usize> = Vec::new();
    let mut basis_norm2 = vec![0.0; p];
    // r[t][j]: coefficient of basis vector t in the expansion of column j
    let mut r: Vec<Vec<f64>> = vec![vec![0.0; p]; p];

    for (j, col) in columns.iter().enumerate() {
        let original_norm2 = dot(col, col);
        let mut u = col.clone();
        for (t, q) in basis.iter().enumerate() {
            let coef = dot(q, &u) / basis_norm2[basis_cols[t]];
            r[basis_cols[t]][j] = coef;
            for (ui, qi) in u.iter_mut().zip(q.iter()) {
                *ui -= coef * qi;
            }
        }
        let residual_norm2 = dot(&u, &u);
        if residual_norm2 <= original_norm2 * ALIAS_REL_TOL * ALIAS_REL_TOL || residual_norm2 == 0.0
        {
            continue; // aliased
        }
        kept[j] = true;
        basis_norm2[j] = residual_norm2;
        r[j][j] = 1.0;
        basis.push(u);
        basis_cols.push(j);
    }

    if basis.is_empty() {
        bail!("all regressor columns are degenerate");
    }

    // Projection coefficients of y onto the orthogonal basis
    let mut proj = vec![0.0; p];
    let mut resid = y.to_vec();
    for (t, q) in basis.iter().enumerate() {
        let j = basis_cols[t];
        let coef = dot(q, &resid) / basis_norm2[j];
        proj[j] = coef;
        for (ri, qi) in resid.iter_mut().zip(q.iter()) {
            *ri -= coef * qi;
        }
    }

    // Back-substitute to express the fit in the original columns
    let mut coeffs = vec![0.0; p];
    for (t, &j) in basis_cols.iter().enumerate().rev() {
        let mut value = proj[j];
        for &l in &basis_cols[t + 1..] {
            value -= r[j][l] * coeffs[l];
        }
        coeffs[j] = value;
    }

    let ssr = dot(&resid, &resid);
    let dof = n.saturating_sub(basis.len());

    Ok(LstsqFit {
        coeffs,
        kept,
        basis_norm2,
        ssr,
        dof,
    })
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_is_recovered() {
        // y = 2 + 3x
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 2.0 + 3.0 * v).collect();
        let ones = vec![1.0; 10];

        let fit = lstsq(&[ones, x], &y).unwrap();
        assert!((fit.coeffs[0] - 2.0).abs() < 1e-9);
        assert!((fit.coeffs[1] - 3.0).abs() < 1e-9);
        assert!(fit.ssr < 1e-12);
        assert_eq!(fit.dof, 8);
    }

    #[test]
    fn collinear_column_is_aliased() {
        let ones = vec![1.0; 8];
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        // x2 = x + 1 is a linear combination of the first two columns
        let x2: Vec<f64> = x.iter().map(|v| v + 1.0).collect();
        let y: Vec<f64> = x.iter().map(|v| 5.0 - 2.0 * v).collect();

        let fit = lstsq(&[ones, x, x2], &y).unwrap();
        assert_eq!(fit.kept, vec![true, true, false]);
        assert_eq!(fit.coeffs[2], 0.0);
        assert!((fit.coeffs[0] - 5.0).abs() < 1e-9);
        assert!((fit.coeffs[1] + 2.0).abs() < 1e-9);
    }

    #[test]
    fn polyval_matches_horner() {
        let c = [1.0, -2.0, 0.5];
        assert!((polyval(&c, 3.0) - (1.0 - 6.0 + 4.5)).abs() < 1e-12);
    }

    #[test]
    fn variance_of_constant_is_zero() {
        assert_eq!(variance(&[4.0; 20]), 0.0);
    }
}
