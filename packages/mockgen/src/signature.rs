//! Signature Formatter
//!
//! Parameter and result lists of generated methods.

/// Joins `names[i] types[i]` pairs, writing the type only once for
/// consecutive parameters of the same type: `a, b int, c bool`.
pub fn format_params<N, T>(names: &[N], types: &[T]) -> String
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    debug_assert_eq!(names.len(), types.len());

    names
        .iter()
        .zip(types)
        .enumerate()
        .map(|(i, (name, ty))| match types.get(i + 1) {
            Some(next) if next.as_ref() == ty.as_ref() => name.as_ref().to_string(),
            _ => format!("{} {}", name.as_ref(), ty.as_ref()),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The result clause following a parameter list, including its leading
/// space. Empty for no results; parenthesized for more than one.
pub fn format_results<T: AsRef<str>>(types: &[T]) -> String {
    match types {
        [] => String::new(),
        [single] => format!(" {}", single.as_ref()),
        _ => {
            let joined = types
                .iter()
                .map(|t| t.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            format!(" ({})", joined)
        }
    }
}
