//! Partial application of the first argument, for functions of 2 to 7
//! arguments.
//!
//! `partial_applyN(f, a)` fixes `a` as the first argument of the N-argument
//! function `f` and returns the remaining (N-1)-argument function:
//!
//! ```text
//! partial_applyN(f, a)(b, ..., n) == f(a, b, ..., n)
//! ```
//!
//! The fixed argument is cloned into every call, so the result is `Fn` and
//! may be called repeatedly.

macro_rules! define_partial_apply {
    (
        $(#[$attribute:meta])*
        $arity:literal;
        $($argument:ident: $argument_type:ident),+
    ) => {
        paste::paste! {
            $(#[$attribute])*
            #[inline]
            pub fn [<partial_apply $arity>]<First: Clone, $($argument_type,)+ Output, Function>(
                function: Function,
                first: First,
            ) -> impl Fn($($argument_type),+) -> Output
            where
                Function: Fn(First, $($argument_type),+) -> Output,
            {
                move |$($argument: $argument_type),+| function(first.clone(), $($argument),+)
            }
        }
    };
}

define_partial_apply! {
    /// Fixes the first argument of a 2-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::partial_apply2;
    ///
    /// fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
    ///
    /// let ten_over = partial_apply2(divide, 10.0);
    /// assert!((ten_over(4.0) - 2.5).abs() < f64::EPSILON);
    /// ```
    2; b: B
}

define_partial_apply! {
    /// Fixes the first argument of a 3-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::partial_apply3;
    ///
    /// fn greet(greeting: &str, name: &str, punctuation: &str) -> String {
    ///     format!("{greeting}, {name}{punctuation}")
    /// }
    ///
    /// let hello = partial_apply3(greet, "Hello");
    /// assert_eq!(hello("Alice", "!"), "Hello, Alice!");
    /// assert_eq!(hello("Bob", "?"), "Hello, Bob?");
    /// ```
    3; b: B, c: C
}

define_partial_apply! {
    /// Fixes the first argument of a 4-argument function.
    4; b: B, c: C, d: D
}

define_partial_apply! {
    /// Fixes the first argument of a 5-argument function.
    5; b: B, c: C, d: D, e: E
}

define_partial_apply! {
    /// Fixes the first argument of a 6-argument function.
    6; b: B, c: C, d: D, e: E, f: F
}

define_partial_apply! {
    /// Fixes the first argument of a 7-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::partial_apply7;
    ///
    /// let weighted = |weight: i32, a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| {
    ///     weight * (a + b + c + d + e + f)
    /// };
    /// let doubled = partial_apply7(weighted, 2);
    /// assert_eq!(doubled(1, 1, 1, 1, 1, 1), 12);
    /// ```
    7; b: B, c: C, d: D, e: E, f: F, g: G
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2)]
    #[case(-4, 9)]
    fn test_partial_apply2_fixes_first_argument(#[case] first: i32, #[case] second: i32) {
        let pair = partial_apply2(|a: i32, b: i32| (a, b), first);
        assert_eq!(pair(second), (first, second));
    }

    #[rstest]
    fn test_partial_apply_clones_fixed_argument_per_call() {
        let tagged = partial_apply3(
            |mut prefix: Vec<u8>, value: u8, suffix: u8| {
                prefix.push(value);
                prefix.push(suffix);
                prefix
            },
            vec![0],
        );
        assert_eq!(tagged(1, 2), vec![0, 1, 2]);
        assert_eq!(tagged(3, 4), vec![0, 3, 4]);
    }

    #[rstest]
    fn test_partial_apply_middle_arities() {
        let sum4 = partial_apply4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d, 10);
        let sum5 = partial_apply5(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e, 10);
        let sum6 = partial_apply6(
            |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f,
            10,
        );
        assert_eq!(sum4(1, 2, 3), 16);
        assert_eq!(sum5(1, 2, 3, 4), 20);
        assert_eq!(sum6(1, 2, 3, 4, 5), 25);
    }
}
