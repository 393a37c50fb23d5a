//! Property tests for the algebraic laws of `Matrix`.

use densemat::Matrix;
use proptest::prelude::*;

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-10.0f64..10.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data))
}

fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| matrix(r, c))
}

fn same_shape_triple() -> impl Strategy<Value = (Matrix, Matrix, Matrix)> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c), matrix(r, c)))
}

fn chain_triple() -> impl Strategy<Value = (Matrix, Matrix, Matrix)> {
    (1usize..5, 1usize..5, 1usize..5, 1usize..5)
        .prop_flat_map(|(m, n, p, q)| (matrix(m, n), matrix(n, p), matrix(p, q)))
}

proptest! {
    #[test]
    fn new_is_all_zero(r in 1usize..20, c in 1usize..20) {
        let m = Matrix::new(r, c);
        prop_assert_eq!(m.len(), r * c);
        prop_assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn clone_is_equal_and_independent(a in any_matrix()) {
        let mut b = a.clone();
        prop_assert_eq!(&b, &a);

        let original = a[(0, 0)];
        *b.at(0, 0) = original + 1.0;
        prop_assert_eq!(a[(0, 0)], original);
        prop_assert_ne!(&b, &a);
    }

    #[test]
    fn addition_is_associative((a, b, c) in same_shape_triple()) {
        let left = a.plus(&b).plus(&c);
        let right = a.plus(&b.plus(&c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn addition_is_commutative((a, b, _c) in same_shape_triple()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn additive_inverse(a in any_matrix()) {
        let zero = Matrix::new(a.rows(), a.columns());
        prop_assert_eq!(a.plus(&a.scale(-1.0)), zero.clone());
        prop_assert_eq!(&a - &a, zero);
    }

    #[test]
    fn multiplication_is_associative((a, b, c) in chain_triple()) {
        let left = a.multiply(&b).multiply(&c);
        let right = a.multiply(&b.multiply(&c));
        prop_assert_eq!(left.shape(), (a.rows(), c.columns()));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identity_is_neutral(a in any_matrix()) {
        prop_assert_eq!(&Matrix::identity(a.rows()) * &a, a.clone());
        prop_assert_eq!(&a * &Matrix::identity(a.columns()), a);
    }

    #[test]
    fn compound_ops_match_binary_ops((a, b, _c) in same_shape_triple(), s in -5.0f64..5.0) {
        let mut x = a.clone();
        x += &b;
        prop_assert_eq!(&x, &(&a + &b));

        let mut y = a.clone();
        y -= &b;
        prop_assert_eq!(&y, &(&a - &b));

        let mut z = a.clone();
        z *= s;
        prop_assert_eq!(&z, &(&a * s));
    }

    #[test]
    fn shape_mismatch_is_unequal(a in any_matrix()) {
        let wider = Matrix::from_fn(a.rows(), a.columns() + 1, |i, j| {
            if j < a.columns() { a[(i, j)] } else { 0.0 }
        });
        prop_assert_ne!(a, wider);
    }

    #[test]
    fn take_moves_contents(a in any_matrix()) {
        let mut src = a.clone();
        let dst = src.take();
        prop_assert_eq!(dst, a);
        prop_assert_eq!(src.shape(), (0, 0));
    }
}
