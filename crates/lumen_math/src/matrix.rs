//! 4x4 affine transform matrix.
//!
//! Row-major storage; points are column vectors, so `a.right_compose(b)`
//! applies `b` first and `a` second. All operations return new values.

use std::ops::Mul;

use glam::{Mat4, Vec3};

use crate::MathError;

/// A 4x4 transformation matrix. Identity by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    m: [[f32; 4]; 4],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Build a matrix from its rows.
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// The rows of this matrix.
    pub fn rows(&self) -> [[f32; 4]; 4] {
        self.m
    }

    /// Element at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }

    /// Translation along `v`.
    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0][3] = v.x;
        m[1][3] = v.y;
        m[2][3] = v.z;
        Self { m }
    }

    /// Scale by the per-axis factors in `v`.
    pub fn scale(v: Vec3) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0][0] = v.x;
        m[1][1] = v.y;
        m[2][2] = v.z;
        Self { m }
    }

    /// Counter-clockwise rotation of `angle_degrees` about `axis`.
    pub fn rotation(angle_degrees: f32, axis: Vec3) -> Self {
        let u = axis.normalize();
        let ua = [u.x, u.y, u.z];
        let (sin_theta, cos_theta) = angle_degrees.to_radians().sin_cos();

        let mut m = Self::IDENTITY.m;
        for i in 0..3 {
            for j in 0..3 {
                let delta = if i == j { 1.0 } else { 0.0 };
                m[i][j] = ua[i] * ua[j] + cos_theta * (delta - ua[i] * ua[j]);
            }
        }

        m[1][2] -= sin_theta * u.x;
        m[2][1] += sin_theta * u.x;
        m[2][0] -= sin_theta * u.y;
        m[0][2] += sin_theta * u.y;
        m[0][1] -= sin_theta * u.z;
        m[1][0] += sin_theta * u.z;
        Self { m }
    }

    /// World-to-frame matrix for the orthonormal frame (u, v, w) at `p`.
    ///
    /// The basis must already be orthonormal; it is not re-orthonormalized.
    pub fn camera_to_frame(u: Vec3, v: Vec3, w: Vec3, p: Vec3) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0][..3].copy_from_slice(&u.to_array());
        m[1][..3].copy_from_slice(&v.to_array());
        m[2][..3].copy_from_slice(&w.to_array());

        let rotated = Self { m }.transform_vector(p);
        m[0][3] = -rotated.x;
        m[1][3] = -rotated.y;
        m[2][3] = -rotated.z;
        Self { m }
    }

    /// Frame-to-world matrix: columns are u, v, w and the origin `p`.
    ///
    /// The basis must already be orthonormal; it is not re-orthonormalized.
    pub fn frame_to_camera(u: Vec3, v: Vec3, w: Vec3, p: Vec3) -> Self {
        Self::from_rows([
            [u.x, v.x, w.x, p.x],
            [u.y, v.y, w.y, p.y],
            [u.z, v.z, w.z, p.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `t * self`: `t` is applied after this matrix.
    pub fn left_compose(&self, t: &Matrix) -> Matrix {
        t.multiply(self)
    }

    /// `self * t`: `t` is applied before this matrix.
    pub fn right_compose(&self, t: &Matrix) -> Matrix {
        self.multiply(t)
    }

    fn multiply(&self, rhs: &Matrix) -> Matrix {
        let mut out = [[0.0f32; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Matrix { m: out }
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = [[0.0f32; 4]; 4];
        for (i, row) in self.m.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                out[j][i] = *value;
            }
        }
        Matrix { m: out }
    }

    /// Invert via LU decomposition and back-substitution.
    ///
    /// Reference: Press, Flannery, Teukolsky, Vetterling,
    /// _Numerical Recipes in C_, pp 40-45.
    pub fn invert(&self) -> Result<Matrix, MathError> {
        let mut lu = self.m;
        let mut row_perm = [0usize; 4];
        lu_decomposition(&mut lu, &mut row_perm)?;

        let mut result = Self::IDENTITY.m;
        for col in 0..4 {
            lu_back_substitution(&lu, &row_perm, &mut result, col);
        }

        if result.iter().flatten().any(|v| !v.is_finite()) {
            return Err(MathError::SingularMatrix);
        }
        Ok(Matrix { m: result })
    }

    /// Transform a point, including translation and the homogeneous divide.
    ///
    /// Never pass a direction here: a `w` of zero yields infinities.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let z = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let w = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];
        Vec3::new(x / w, y / w, z / w)
    }

    /// Transform a direction or normal. Translation is ignored.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Element-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl From<Matrix> for Mat4 {
    fn from(matrix: Matrix) -> Self {
        // glam stores columns
        Mat4::from_cols_array_2d(&matrix.transpose().m)
    }
}

/// Crout LU decomposition with implicit row scaling and partial pivoting.
///
/// On success `a` holds L (below the diagonal, unit diagonal implied) and U,
/// and `row_perm[j]` records the row swapped into position `j`.
fn lu_decomposition(a: &mut [[f32; 4]; 4], row_perm: &mut [usize; 4]) -> Result<(), MathError> {
    let mut row_scale = [0.0f32; 4];

    for (scale, row) in row_scale.iter_mut().zip(a.iter()) {
        let big = row.iter().fold(0.0f32, |big, v| big.max(v.abs()));
        if big == 0.0 {
            return Err(MathError::SingularMatrix);
        }
        *scale = 1.0 / big;
    }

    for j in 0..4 {
        // Upper triangle U
        for i in 0..j {
            let mut sum = a[i][j];
            for k in 0..i {
                sum -= a[i][k] * a[k][j];
            }
            a[i][j] = sum;
        }

        // Lower triangle L, tracking the largest scaled pivot
        let mut big = 0.0f32;
        let mut imax = j;
        for i in j..4 {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= a[i][k] * a[k][j];
            }
            a[i][j] = sum;

            let scaled = row_scale[i] * sum.abs();
            if scaled >= big {
                big = scaled;
                imax = i;
            }
        }

        if j != imax {
            a.swap(imax, j);
            row_scale[imax] = row_scale[j];
        }
        row_perm[j] = imax;

        if a[j][j] == 0.0 {
            return Err(MathError::SingularMatrix);
        }

        if j != 3 {
            let inv_pivot = 1.0 / a[j][j];
            for row in a.iter_mut().skip(j + 1) {
                row[j] *= inv_pivot;
            }
        }
    }

    Ok(())
}

/// Solve `LU x = b` for column `col` of `b`, in place.
fn lu_back_substitution(lu: &[[f32; 4]; 4], row_perm: &[usize; 4], b: &mut [[f32; 4]; 4], col: usize) {
    // Forward substitution, skipping the leading zeros of b
    let mut first_nonzero: Option<usize> = None;
    for i in 0..4 {
        let ip = row_perm[i];
        let mut sum = b[ip][col];
        b[ip][col] = b[i][col];

        if let Some(start) = first_nonzero {
            for j in start..i {
                sum -= lu[i][j] * b[j][col];
            }
        } else if sum != 0.0 {
            first_nonzero = Some(i);
        }
        b[i][col] = sum;
    }

    for i in (0..4).rev() {
        let mut sum = b[i][col];
        for j in (i + 1)..4 {
            sum -= lu[i][j] * b[j][col];
        }
        b[i][col] = sum / lu[i][i];
    }
}
