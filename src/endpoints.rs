//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/cashcards/{id}', use [format_endpoint].

/// The collection of the authenticated user's cash cards.
pub const CASH_CARDS: &str = "/cashcards";
/// A single cash card.
pub const CASH_CARD: &str = "/cashcards/{id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with the next right brace.
/// For example, in the endpoint path '/cashcards/{id}', '{id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
