// src/macros.rs
#[macro_export]
macro_rules! s {
    // s!() → String::new(), s!(x) → String::from(x)
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // join!(a, b, c) → owned a + b + c
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
