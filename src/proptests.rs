//! Property-based tests for the arithmetic of [`VeryLongInt`].

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::VeryLongInt;

    // Decimal strings long enough to span many radix digits.
    fn decimal() -> impl Strategy<Value = String> {
        "[0-9]{1,80}"
    }

    fn non_zero_decimal() -> impl Strategy<Value = String> {
        "[1-9][0-9]{0,40}"
    }

    fn canonical(s: &str) -> &str {
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }

    fn pow2(n: u32) -> VeryLongInt {
        let two = VeryLongInt::from(2u8);
        (0..n).fold(VeryLongInt::from(1u8), |acc, _| acc * &two)
    }

    proptest! {
        #[test]
        fn native_round_trip(x in any::<u128>()) {
            let a = VeryLongInt::from(x);
            let s = a.to_string();
            prop_assert_eq!(&s, &x.to_string());
            prop_assert_eq!(VeryLongInt::from(s.as_str()), a.clone());
            prop_assert_eq!(u128::try_from(&a), Ok(x));
        }

        #[test]
        fn decimal_round_trip(s in decimal()) {
            let a = VeryLongInt::from(s.as_str());
            prop_assert!(a.is_valid());
            prop_assert_eq!(a.to_string(), canonical(&s));
        }

        #[test]
        fn matches_native_add_mul(x in any::<u64>(), y in any::<u64>()) {
            let a = VeryLongInt::from(x);
            let b = VeryLongInt::from(y);
            prop_assert_eq!(&a + &b, VeryLongInt::from(x as u128 + y as u128));
            prop_assert_eq!(&a * &b, VeryLongInt::from(x as u128 * y as u128));
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn matches_native_div_rem(x in any::<u128>(), y in 1u128..) {
            let a = VeryLongInt::from(x);
            let b = VeryLongInt::from(y);
            prop_assert_eq!(&a / &b, VeryLongInt::from(x / y));
            prop_assert_eq!(&a % &b, VeryLongInt::from(x % y));
        }

        #[test]
        fn identities(s in decimal()) {
            let a = VeryLongInt::from(s.as_str());
            prop_assert_eq!(&a + VeryLongInt::zero(), a.clone());
            prop_assert_eq!(&a * VeryLongInt::from(1u8), a.clone());
            prop_assert_eq!(&a - &a, VeryLongInt::zero().clone());
            prop_assert_eq!(&a * VeryLongInt::zero(), VeryLongInt::zero().clone());
        }

        #[test]
        fn division_invariant(s in decimal(), t in non_zero_decimal()) {
            let a = VeryLongInt::from(s.as_str());
            let b = VeryLongInt::from(t.as_str());
            let q = &a / &b;
            let r = &a % &b;
            prop_assert!(r < b);
            prop_assert_eq!(q * &b + r, a);
        }

        #[test]
        fn subtraction_inverse(s in decimal(), t in decimal()) {
            let a = VeryLongInt::from(s.as_str());
            let b = VeryLongInt::from(t.as_str());
            let (big, little) = if a >= b { (a, b) } else { (b, a) };
            prop_assert_eq!((&big - &little) + &little, big.clone());
            if big != little {
                prop_assert!(!(&little - &big).is_valid());
            }
        }

        #[test]
        fn comparator_totality(s in decimal(), t in decimal()) {
            let a = VeryLongInt::from(s.as_str());
            let b = VeryLongInt::from(t.as_str());
            let holds = [a < b, a == b, b < a];
            prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
            prop_assert_eq!(a != b, !(a == b));
        }

        #[test]
        fn comparator_matches_native(x in any::<u128>(), y in any::<u128>()) {
            let a = VeryLongInt::from(x);
            let b = VeryLongInt::from(y);
            prop_assert_eq!(a.partial_cmp(&b), Some(x.cmp(&y)));
        }

        #[test]
        fn nan_propagation(s in decimal()) {
            let a = VeryLongInt::from(s.as_str());
            let nan = VeryLongInt::nan();
            for result in [nan + &a, &a + nan, nan - &a, &a - nan, nan * &a, &a * nan,
                           nan / &a, &a / nan, nan % &a, &a % nan, &a / VeryLongInt::zero(),
                           &a % VeryLongInt::zero(), nan << 3u32, nan >> 3u32] {
                prop_assert!(!result.is_valid());
                prop_assert!(!(result == a) && !(result != a));
                prop_assert_eq!(result.to_string(), "NaN");
                prop_assert!(!(result + &a).is_valid());
            }
        }

        #[test]
        fn shift_matches_power_of_two(s in decimal(), n in 0u32..120) {
            let a = VeryLongInt::from(s.as_str());
            let p = pow2(n);
            prop_assert_eq!(&a << n, &a * &p);
            prop_assert_eq!(&a >> n, &a / &p);
        }

        #[test]
        fn bit_len_matches_native(x in 1u128..) {
            prop_assert_eq!(VeryLongInt::from(x).bit_len(), (128 - x.leading_zeros()) as usize);
        }
    }
}
