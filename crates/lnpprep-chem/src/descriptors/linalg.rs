//! Small dense symmetric eigensolver used by the Burden and graph-spectrum
//! descriptors. Cyclic Jacobi; molecules are small enough that this is fine.

/// Eigenvalues of a symmetric matrix, ascending.
pub(crate) fn symmetric_eigenvalues(mut m: Vec<Vec<f64>>) -> Vec<f64> {
    let n = m.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![m[0][0]];
    }

    for _sweep in 0..100 {
        let mut off = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                off += m[i][j] * m[i][j];
            }
        }
        if off < 1e-18 {
            break;
        }
        for p in 0..n {
            for q in (p + 1)..n {
                if m[p][q].abs() < 1e-15 {
                    continue;
                }
                let theta = (m[q][q] - m[p][p]) / (2.0 * m[p][q]);
                let t = if theta >= 0.0 {
                    1.0 / (theta + (1.0 + theta * theta).sqrt())
                } else {
                    -1.0 / (-theta + (1.0 + theta * theta).sqrt())
                };
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = t * c;

                for k in 0..n {
                    let mkp = m[k][p];
                    let mkq = m[k][q];
                    m[k][p] = c * mkp - s * mkq;
                    m[k][q] = s * mkp + c * mkq;
                }
                for k in 0..n {
                    let mpk = m[p][k];
                    let mqk = m[q][k];
                    m[p][k] = c * mpk - s * mqk;
                    m[q][k] = s * mpk + c * mqk;
                }
            }
        }
    }

    let mut eig: Vec<f64> = (0..n).map(|i| m[i][i]).collect();
    eig.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    eig
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_matrix() {
        let m = vec![vec![2.0, 0.0], vec![0.0, -1.0]];
        let e = symmetric_eigenvalues(m);
        assert!((e[0] + 1.0).abs() < 1e-9);
        assert!((e[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_path_graph_spectrum() {
        // adjacency of P3: eigenvalues -sqrt(2), 0, sqrt(2)
        let m = vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ];
        let e = symmetric_eigenvalues(m);
        assert!((e[0] + 2f64.sqrt()).abs() < 1e-8);
        assert!(e[1].abs() < 1e-8);
        assert!((e[2] - 2f64.sqrt()).abs() < 1e-8);
    }
}
