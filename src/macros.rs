#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Regex($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! pred {
    ($p:expr) => {
        $crate::Pattern::Predicate($p)
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:expr
        $(, shape: $shape:expr)?
        , prod: |$m:ident, $range:ident, $opts:ident| $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: $pat,
            shape: { $crate::Shape::empty() $(| $shape)? },
            production: Box::new(
                move |$m: &$crate::Matched<'_>,
                      $range: &$crate::YearRange,
                      $opts: &$crate::Options|
                      -> Result<$crate::DateParts, $crate::NormalizeError> { $body },
            ),
        }
    }};
}
