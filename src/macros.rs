// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! record {
    // Record shorthand: record! { "case_id" => "A100", "pages" => 3 }
    () => {
        $crate::case::Record::new()
    };
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut r = $crate::case::Record::new();
        $(
            r.insert($key, $crate::case::Value::from($val));
        )+
        r
    }};
}
