//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::error::PolyError;
    use crate::polynomial::Polynomial;

    // Small integers keep every sum and product exact in f64.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=6).prop_map(|c| Polynomial::new(c, 0.0))
    }

    fn raw_coeffs() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(prop_oneof![Just(0.0), small_coeff()], 0..=8)
    }

    proptest! {
        // Normalization

        #[test]
        fn constructed_top_coefficient_is_nonzero(coeffs in raw_coeffs()) {
            let p = Polynomial::new(coeffs, 0.0);
            prop_assert!(!p.coefficients().is_empty());
            prop_assert!(p.leading_coefficient() != 0.0 || p.coefficients() == [0.0]);
        }

        #[test]
        fn normalization_keeps_prefix(coeffs in raw_coeffs()) {
            let p = Polynomial::new(coeffs.clone(), 0.0);
            let n = p.len().min(coeffs.len());
            prop_assert_eq!(&p.coefficients()[..n], &coeffs[..n]);
        }

        // Ring laws (exact for small integer coefficients)

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.multiply(&b.add(&c).unwrap()).unwrap();
            let right = a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.subtract(&a).unwrap().is_zero());
            prop_assert!(a.add(&-&a).unwrap().is_zero());
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            let product = a.multiply(&b).unwrap();
            if !a.is_zero() && !b.is_zero() {
                prop_assert_eq!(product.degree(), a.degree() + b.degree());
            } else {
                prop_assert!(product.is_zero());
            }
        }

        // Convolution against a direct Cauchy product

        #[test]
        fn multiply_matches_cauchy_product(a in small_poly(), b in small_poly()) {
            let product = a.multiply(&b).unwrap();
            let (ac, bc) = (a.coefficients(), b.coefficients());

            for k in 0..product.len() {
                let expected: f64 = (0..=k)
                    .filter(|&i| i < ac.len() && k - i < bc.len())
                    .map(|i| ac[i] * bc[k - i])
                    .sum();
                prop_assert_eq!(product[k], expected);
            }
        }

        // Evaluation is a homomorphism

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in -3i32..3i32) {
            let x = f64::from(x);
            let product = a.multiply(&b).unwrap();
            let expected = a.solve(x) * b.solve(x);
            prop_assert!((product.solve(x) - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        // Calculus

        #[test]
        fn differentiate_undoes_integrate(a in small_poly(), c in small_coeff()) {
            let back = a.integrate(c).differentiate();
            prop_assert_eq!(back.len(), a.len());
            for (x, y) in back.coefficients().iter().zip(a.coefficients()) {
                prop_assert!((x - y).abs() <= 1e-12 * y.abs().max(1.0));
            }
        }

        #[test]
        fn integrate_restores_constant_term(a in small_poly()) {
            let back = a.differentiate().integrate(a[0]);
            prop_assert_eq!(back.len(), a.len());
            for (x, y) in back.coefficients().iter().zip(a.coefficients()) {
                prop_assert!((x - y).abs() <= 1e-12 * y.abs().max(1.0));
            }
        }

        // Centers and powers

        #[test]
        fn center_mismatch_rejected(a in small_poly(), b in small_poly()) {
            let mut shifted = b;
            shifted.set_center(1.0);
            prop_assert_eq!(
                a.add(&shifted),
                Err(PolyError::CenterMismatch { left: 0.0, right: 1.0 })
            );
        }

        #[test]
        fn power_zero_is_one(a in small_poly(), center in -5i32..5i32) {
            let mut p = a;
            p.set_center(f64::from(center));
            prop_assert_eq!(p.power(0), Polynomial::one());
        }

        #[test]
        fn power_matches_repeated_multiply(a in small_poly(), n in 1u32..4u32) {
            let mut expected = a.clone();
            for _ in 1..n {
                expected = expected.multiply(&a).unwrap();
            }
            prop_assert_eq!(a.power(n), expected);
        }
    }
}
