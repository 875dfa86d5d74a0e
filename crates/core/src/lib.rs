//! Core units and shared primitives for the astronav workspace.

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert km³/s² to m³/s².
    #[inline]
    pub fn km3_s2_to_m3_s2(v: f64) -> f64 {
        v * 1.0e9
    }

    /// Wrap an angle into `[0, 2π)`.
    #[inline]
    pub fn wrap_two_pi(angle_rad: f64) -> f64 {
        angle_rad.rem_euclid(std::f64::consts::TAU)
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres or m/s depending on context.
    pub type Vector3 = [f64; 3];

    /// Position and velocity stacked as `[x, y, z, vx, vy, vz]`.
    pub type StateVector = [f64; 6];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Right-handed cross product `a × b`.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Position half of a state.
    #[inline]
    pub fn position(state: &StateVector) -> Vector3 {
        [state[0], state[1], state[2]]
    }

    /// Velocity half of a state.
    #[inline]
    pub fn velocity(state: &StateVector) -> Vector3 {
        [state[3], state[4], state[5]]
    }

    /// Stack a position and velocity into one state.
    #[inline]
    pub fn stack(pos: &Vector3, vel: &Vector3) -> StateVector {
        [pos[0], pos[1], pos[2], vel[0], vel[1], vel[2]]
    }
}

/// Row-major 3×3 matrix helpers used by the frame rotations.
pub mod matrix {
    use super::vector::{Vector3, dot};

    /// Row-major 3×3 matrix.
    pub type Matrix3 = [[f64; 3]; 3];

    /// 3×3 identity.
    pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    /// Build a matrix from three row vectors.
    #[inline]
    pub fn from_rows(r0: Vector3, r1: Vector3, r2: Vector3) -> Matrix3 {
        [r0, r1, r2]
    }

    /// Transpose of `m`.
    #[inline]
    pub fn transpose(m: &Matrix3) -> Matrix3 {
        [
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ]
    }

    /// Matrix-vector product `m · v`.
    #[inline]
    pub fn mul_vec(m: &Matrix3, v: &Vector3) -> Vector3 {
        [dot(&m[0], v), dot(&m[1], v), dot(&m[2], v)]
    }

    /// Matrix product `a · b`.
    pub fn mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
        let bt = transpose(b);
        let mut out = [[0.0; 3]; 3];
        for (i, row) in a.iter().enumerate() {
            for (j, col) in bt.iter().enumerate() {
                out[i][j] = dot(row, col);
            }
        }
        out
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(m: &Matrix3) -> f64 {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}
