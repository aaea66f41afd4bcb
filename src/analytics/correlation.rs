use ndarray::{aview1, Array2, ArrayView1};

use crate::models::TableView;

/// Pearson correlations between every pair of numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Square and symmetric; entry `[i, j]` pairs `columns[i]` with `columns[j]`.
    pub values: Array2<f64>
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let row = self.columns.iter().position(|name| name == row)?;
        let column = self.columns.iter().position(|name| name == column)?;
        Some(self.values[[row, column]])
    }
}

/// Computes the correlation matrix over the numeric columns of `view`.
///
/// Each pair only uses rows where both values are finite. Pairs with fewer
/// than two such rows, or where either side is constant, are NaN; this
/// includes the diagonal entry of a constant column.
pub fn correlation_matrix(view: &TableView) -> CorrelationMatrix {
    let columns = view.numeric_columns();
    let size = columns.len();
    let mut values = Array2::from_elem((size, size), f64::NAN);

    for i in 0..size {
        for j in i..size {
            let x = aview1(columns[i].values.as_slice());
            let y = aview1(columns[j].values.as_slice());

            let coefficient = match pearson(x, y) {
                Some(_) if i == j => 1.0,
                Some(coefficient) => coefficient,
                None => f64::NAN
            };

            values[[i, j]] = coefficient;
            values[[j, i]] = coefficient;
        }
    }

    CorrelationMatrix {
        columns: columns.iter().map(|column| column.name.to_string()).collect(),
        values
    }
}

fn pearson(x: ArrayView1<f64>, y: ArrayView1<f64>) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x.iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let (first_x, first_y) = pairs[0];

    if pairs.iter().all(|(a, _)| *a == first_x) || pairs.iter().all(|(_, b)| *b == first_y) {
        return None;
    }

    let count = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / count;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / count;

    let (covariance, variance_x, variance_y) = pairs.iter().fold((0.0, 0.0, 0.0), |(cov, var_x, var_y), (a, b)| {
        let dx = a - mean_x;
        let dy = b - mean_y;
        (cov + dx * dy, var_x + dx * dx, var_y + dy * dy)
    });

    let denominator = variance_x.sqrt() * variance_y.sqrt();

    if denominator == 0.0 {
        return None;
    }

    Some((covariance / denominator).clamp(-1.0, 1.0))
}
