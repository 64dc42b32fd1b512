//! Currying for functions of 2 to 7 arguments.
//!
//! `curryN` turns an N-argument function into N nested single-argument
//! functions:
//!
//! ```text
//! curryN(f)(a)(b)...(n) == f(a, b, ..., n)
//! ```
//!
//! The wrapped function is shared through `Rc`, and every intermediate
//! closure is `Fn`, so a partially applied stage can be called any number of
//! times. Every argument except the last is captured and cloned on each call,
//! hence the `Clone` bounds.
//!
//! Only the outermost stage is an `impl Fn`; every later stage is a
//! `Box<dyn Fn>`, since `impl Trait` cannot appear in the return type of an
//! `Fn` bound. Boxed stages own their captures, so argument, output and
//! function types must be `'static`.
//!
//! The arities are generated by `define_curry!` rather than written out by
//! hand: `curried_type!` and `boxed_stage!` build the return type and
//! `curried_body!` the nested closures.

use std::rc::Rc;

/// `boxed_stage!(Output; B, C)` expands to
/// `Box<dyn Fn(B) -> Box<dyn Fn(C) -> Output>>`.
macro_rules! boxed_stage {
    ($output:ident; $last:ident) => {
        Box<dyn Fn($last) -> $output>
    };
    ($output:ident; $next:ident, $($rest:ident),+) => {
        Box<dyn Fn($next) -> boxed_stage!($output; $($rest),+)>
    };
}

/// `curried_type!(Output; A, B, C)` expands to
/// `impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Output>>`.
macro_rules! curried_type {
    ($output:ident; $first:ident, $($rest:ident),+) => {
        impl Fn($first) -> boxed_stage!($output; $($rest),+)
    };
}

/// Builds one closure per argument. `[..]` accumulates the arguments already
/// received; each stage clones them into the next one and boxes it.
macro_rules! curried_body {
    ($function:ident; $output:ident; [$($bound:ident),*]; $last:ident: $last_type:ident) => {
        move |$last: $last_type| $function($($bound.clone(),)* $last)
    };
    (
        $function:ident;
        $output:ident;
        [$($bound:ident),*];
        $next:ident: $next_type:ident,
        $($rest:ident: $rest_type:ident),+
    ) => {
        move |$next: $next_type| -> boxed_stage!($output; $($rest_type),+) {
            let $function = Rc::clone(&$function);
            $(let $bound = $bound.clone();)*
            Box::new(curried_body!($function; $output; [$($bound,)* $next]; $($rest: $rest_type),+))
        }
    };
}

macro_rules! define_curry {
    (
        $(#[$attribute:meta])*
        $arity:literal;
        $($argument:ident: $argument_type:ident),+;
        $last:ident: $last_type:ident
    ) => {
        paste::paste! {
            $(#[$attribute])*
            #[inline]
            pub fn [<curry $arity>]<$($argument_type,)+ $last_type, Output, Function>(
                function: Function,
            ) -> curried_type!(Output; $($argument_type,)+ $last_type)
            where
                $($argument_type: Clone + 'static,)+
                $last_type: 'static,
                Output: 'static,
                Function: Fn($($argument_type,)+ $last_type) -> Output + 'static,
            {
                let function = Rc::new(function);
                curried_body!(function; Output; []; $($argument: $argument_type,)+ $last: $last_type)
            }
        }
    };
}

define_curry! {
    /// Curries a 2-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::curry2;
    ///
    /// fn add(first: i32, second: i32) -> i32 { first + second }
    ///
    /// let curried_add = curry2(add);
    /// let add_five = curried_add(5);
    /// assert_eq!(add_five(3), 8);
    /// assert_eq!(add_five(10), 15);
    /// ```
    2; a: A; b: B
}

define_curry! {
    /// Curries a 3-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::curry3;
    ///
    /// fn volume(width: u32, height: u32, depth: u32) -> u32 { width * height * depth }
    ///
    /// let with_width = curry3(volume)(2);
    /// let with_width_height = with_width(3);
    /// assert_eq!(with_width_height(4), 24);
    /// assert_eq!(with_width(5)(1), 10);
    /// ```
    3; a: A, b: B; c: C
}

define_curry! {
    /// Curries a 4-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::curry4;
    ///
    /// let join = |a: &str, b: &str, c: &str, d: &str| format!("{a}{b}{c}{d}");
    /// assert_eq!(curry4(join)("w")("x")("y")("z"), "wxyz");
    /// ```
    4; a: A, b: B, c: C; d: D
}

define_curry! {
    /// Curries a 5-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::curry5;
    ///
    /// let sum = |a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e;
    /// assert_eq!(curry5(sum)(1)(2)(3)(4)(5), 15);
    /// ```
    5; a: A, b: B, c: C, d: D; e: E
}

define_curry! {
    /// Curries a 6-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::curry6;
    ///
    /// let sum = |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f;
    /// assert_eq!(curry6(sum)(1)(2)(3)(4)(5)(6), 21);
    /// ```
    6; a: A, b: B, c: C, d: D, e: E; f: F
}

define_curry! {
    /// Curries a 7-argument function.
    ///
    /// # Examples
    ///
    /// ```
    /// use microfp::compose::curry7;
    ///
    /// let digits = |a: u32, b: u32, c: u32, d: u32, e: u32, f: u32, g: u32| {
    ///     [a, b, c, d, e, f, g].iter().fold(0, |acc, digit| acc * 10 + digit)
    /// };
    /// assert_eq!(curry7(digits)(1)(2)(3)(4)(5)(6)(7), 1_234_567);
    /// ```
    7; a: A, b: B, c: C, d: D, e: E, f: F; g: G
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[rstest]
    #[case(10, 3, 7)]
    #[case(0, 5, -5)]
    #[case(-2, -2, 0)]
    fn test_curry2_matches_uncurried(#[case] first: i32, #[case] second: i32, #[case] expected: i32) {
        assert_eq!(curry2(subtract)(first)(second), expected);
        assert_eq!(curry2(subtract)(first)(second), subtract(first, second));
    }

    #[rstest]
    fn test_curried_stage_is_reusable() {
        let curried = curry3(|a: String, b: String, c: String| format!("{a}{b}{c}"));
        let prefix = curried("<".to_string())("tag".to_string());
        assert_eq!(prefix(">".to_string()), "<tag>");
        assert_eq!(prefix("/>".to_string()), "<tag/>");
    }

    #[rstest]
    fn test_curry7_argument_order() {
        let ordered = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8| vec![a, b, c, d, e, f, g];
        assert_eq!(curry7(ordered)(1)(2)(3)(4)(5)(6)(7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[rstest]
    fn test_curried_stage_outlives_curried_function() {
        let stage = {
            let curried = curry4(|a: i32, b: i32, c: i32, d: i32| a * 1000 + b * 100 + c * 10 + d);
            curried(1)(2)
        };
        assert_eq!(stage(3)(4), 1234);
        assert_eq!(stage(5)(6), 1256);
    }

    #[rstest]
    fn test_boxed_stages_have_named_types() {
        let stage: Box<dyn Fn(u8) -> Box<dyn Fn(u8) -> u16>> = curry3(|a: u8, b: u8, c: u8| {
            u16::from(a) + u16::from(b) + u16::from(c)
        })(1);
        assert_eq!(stage(2)(3), 6);
    }

    #[rstest]
    fn test_last_argument_need_not_be_clone() {
        struct Token(u32);

        let read = curry2(|offset: u32, token: Token| token.0 + offset);
        assert_eq!(read(1)(Token(41)), 42);
    }
}
