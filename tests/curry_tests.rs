//! Unit tests for the curry function family.
//!
//! Tests for converting multi-argument functions to curried form.

#![cfg(feature = "compose")]

// =============================================================================
// curry2 tests (2-argument functions)
// =============================================================================

mod curry2_tests {
    use microfp::compose::curry2;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    fn concat(first: &str, second: &str) -> String {
        format!("{first}{second}")
    }

    #[test]
    fn test_curry2_basic() {
        let curried_add = curry2(add);
        assert_eq!(curried_add(5)(3), 8);
    }

    #[test]
    fn test_curry2_partial_application() {
        let curried_add = curry2(add);
        let add_five = curried_add(5);

        assert_eq!(add_five(3), 8);
        assert_eq!(add_five(10), 15);
        assert_eq!(add_five(-5), 0);
    }

    #[test]
    fn test_curry2_with_floats() {
        let curried_divide = curry2(divide);
        let divide_ten_by = curried_divide(10.0);

        assert!((divide_ten_by(2.0) - 5.0).abs() < f64::EPSILON);
        assert!((divide_ten_by(5.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_curry2_with_references() {
        let curried_concat = curry2(concat);
        let hello = curried_concat("Hello, ");

        assert_eq!(hello("World"), "Hello, World");
        assert_eq!(hello("Rust"), "Hello, Rust");
    }

    #[test]
    fn test_curry2_with_capturing_closure() {
        let offset = 100;
        let shifted_multiply = move |first: i32, second: i32| first * second + offset;
        let curried = curry2(shifted_multiply);
        let double = curried(2);

        assert_eq!(double(5), 110);
        assert_eq!(double(100), 300);
    }

    #[test]
    fn test_curry2_owned_first_argument_is_reused() {
        let curried = curry2(|prefix: String, name: &str| format!("{prefix}{name}"));
        let greet = curried(String::from("Hi "));

        assert_eq!(greet("Ada"), "Hi Ada");
        assert_eq!(greet("Alan"), "Hi Alan");
    }
}

// =============================================================================
// curry3 tests (3-argument functions)
// =============================================================================

mod curry3_tests {
    use microfp::compose::curry3;

    fn clamp(low: i32, high: i32, value: i32) -> i32 {
        value.max(low).min(high)
    }

    #[test]
    fn test_curry3_basic() {
        assert_eq!(curry3(clamp)(0)(10)(15), 10);
    }

    #[test]
    fn test_curry3_stages_are_reusable() {
        let curried = curry3(clamp);
        let from_zero = curried(0);
        let percent = from_zero(100);
        let unit = from_zero(1);

        assert_eq!(percent(-5), 0);
        assert_eq!(percent(55), 55);
        assert_eq!(unit(55), 1);
    }
}

// =============================================================================
// curry4 tests (4-argument functions)
// =============================================================================

mod curry4_tests {
    use microfp::compose::curry4;

    fn sum4(first: i32, second: i32, third: i32, fourth: i32) -> i32 {
        first + second + third + fourth
    }

    #[test]
    fn test_curry4_basic() {
        assert_eq!(curry4(sum4)(1)(2)(3)(4), 10);
    }

    #[test]
    fn test_curry4_preserves_argument_order() {
        let joined = curry4(|a: char, b: char, c: char, d: char| [a, b, c, d].iter().collect::<String>());
        assert_eq!(joined('w')('x')('y')('z'), "wxyz");
    }
}

// =============================================================================
// curry5 tests (5-argument functions)
// =============================================================================

mod curry5_tests {
    use microfp::compose::curry5;

    fn weighted(a: i64, b: i64, c: i64, d: i64, e: i64) -> i64 {
        a * 10_000 + b * 1_000 + c * 100 + d * 10 + e
    }

    #[test]
    fn test_curry5_basic() {
        assert_eq!(curry5(weighted)(1)(2)(3)(4)(5), 12_345);
    }
}

// =============================================================================
// curry6 tests (6-argument functions)
// =============================================================================

mod curry6_tests {
    use microfp::compose::curry6;

    #[test]
    fn test_curry6_basic() {
        let product = curry6(|a: u32, b: u32, c: u32, d: u32, e: u32, f: u32| a * b * c * d * e * f);
        let partial = product(1)(2)(3);
        assert_eq!(partial(4)(5)(6), 720);
        assert_eq!(partial(1)(1)(1), 6);
    }
}

// =============================================================================
// curry7 tests (7-argument functions)
// =============================================================================

mod curry7_tests {
    use microfp::compose::curry7;

    #[allow(clippy::too_many_arguments)]
    fn digits(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8) -> String {
        [a, b, c, d, e, f, g].iter().map(u8::to_string).collect()
    }

    #[test]
    fn test_curry7_basic() {
        assert_eq!(curry7(digits)(1)(2)(3)(4)(5)(6)(7), "1234567");
    }
}
