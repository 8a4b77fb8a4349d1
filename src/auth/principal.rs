/// The authenticated user a request is made on behalf of.
///
/// Inserted into the request extensions by [basic_auth_guard](crate::basic_auth_guard).
/// Route handlers can use the function argument `Extension(principal): Extension<Principal>`
/// to receive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    name: String,
}

impl Principal {
    /// Create a principal for the user `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The username, which is also the owner of the user's cash cards.
    pub fn name(&self) -> &str {
        &self.name
    }
}
