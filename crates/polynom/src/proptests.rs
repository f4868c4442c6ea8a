//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Polynomial;

    // Integral coefficients keep every sum and product exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (1-6 coefficients)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=6)
            .prop_map(|coeffs| Polynomial::new(&coeffs).unwrap())
    }

    fn any_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(-1e6f64..1e6f64, 1..=6)
            .prop_map(|coeffs| Polynomial::new(&coeffs).unwrap())
    }

    proptest! {
        // Construction

        #[test]
        fn new_preserves_coefficients(coeffs in proptest::collection::vec(-1e6f64..1e6f64, 1..=16)) {
            let p = Polynomial::new(&coeffs).unwrap();
            prop_assert_eq!(p.coefficients(), coeffs.as_slice());
            prop_assert_eq!(p.degree(), coeffs.len() - 1);
        }

        // Hash consistency

        #[test]
        fn equal_polys_hash_equal(a in any_poly()) {
            let b = Polynomial::new(a.coefficients()).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }

        #[test]
        fn signed_zeros_hash_equal(a in small_poly()) {
            // -0.0 == 0.0, so flipping zero signs keeps the polynomial equal
            let flipped: Vec<f64> = a
                .coefficients()
                .iter()
                .map(|&c| if c == 0.0 { -c } else { c })
                .collect();
            let b = Polynomial::new(&flipped).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }

        // Length rules

        #[test]
        fn add_sub_length(a in small_poly(), b in small_poly()) {
            let len = a.len().max(b.len());
            prop_assert_eq!(a.checked_add(&b).unwrap().len(), len);
            prop_assert_eq!(a.subtract(&b).len(), len);
        }

        #[test]
        fn mul_length(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b).len(), a.len() + b.len() - 1);
        }

        #[test]
        fn padding_breaks_equality(a in small_poly()) {
            let mut padded = a.coefficients().to_vec();
            padded.push(0.0);
            let padded = Polynomial::new(&padded).unwrap();
            prop_assert_ne!(&a, &padded);
        }

        // Operands are never mutated

        #[test]
        fn operands_unchanged(a in any_poly(), b in any_poly()) {
            let a_before = a.coefficients().to_vec();
            let b_before = b.coefficients().to_vec();

            let _ = &a + &b;
            let _ = &a - &b;
            let _ = &a * &b;

            prop_assert_eq!(a.coefficients(), a_before.as_slice());
            prop_assert_eq!(b.coefficients(), b_before.as_slice());
        }

        // Algebraic properties on exact coefficients

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn sub_matches_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn sub_self_is_zero(a in small_poly()) {
            use num_traits::Zero;
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn solve_add(a in small_poly(), b in small_poly(), x in -3i32..=3i32) {
            // (a + b)(x) = a(x) + b(x)
            let x = f64::from(x);
            let sum = &a + &b;
            prop_assert_eq!(sum.solve(x), a.solve(x) + b.solve(x));
        }

        #[test]
        fn solve_mul(a in small_poly(), b in small_poly(), x in -3i32..=3i32) {
            // (a * b)(x) = a(x) * b(x)
            let x = f64::from(x);
            let product = &a * &b;
            prop_assert_eq!(product.solve(x), a.solve(x) * b.solve(x));
        }

        // Formatting

        #[test]
        fn format_is_pure(a in any_poly()) {
            prop_assert_eq!(a.to_string(), a.to_string());
        }
    }
}
