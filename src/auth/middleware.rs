//! Authentication middleware that checks HTTP Basic credentials and the card owner role.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};

use crate::{
    AppState, Error,
    auth::{CARD_OWNER_ROLE, Principal, UserDirectory},
    stores::CashCardStore,
};

/// The state needed for the auth middleware
#[derive(Debug, Clone)]
pub struct AuthState {
    /// The users that may log in.
    pub user_directory: Arc<UserDirectory>,
}

impl<S> FromRef<AppState<S>> for AuthState
where
    S: CashCardStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            user_directory: state.user_directory.clone(),
        }
    }
}

/// Middleware function that checks for valid HTTP Basic credentials.
///
/// Requests without valid credentials get a 401 response and requests from
/// users without the [CARD_OWNER_ROLE] get a 403 response. Otherwise the
/// [Principal] is placed into the request and the request is executed normally.
///
/// **Note**: Route handlers can use the function argument `Extension(principal): Extension<Principal>` to receive the principal.
pub async fn basic_auth_guard(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = match authorize(&state.user_directory, request.headers()) {
        Ok(principal) => principal,
        Err(error) => return error.into_response(),
    };

    tracing::debug!("Authenticated request from \"{}\"", principal.name());
    request.extensions_mut().insert(principal);

    next.run(request).await
}

fn authorize(user_directory: &UserDirectory, headers: &HeaderMap) -> Result<Principal, Error> {
    let Some(credentials) = headers.typed_get::<Authorization<Basic>>() else {
        tracing::debug!("Missing or malformed Basic authorization header");
        return Err(Error::InvalidCredentials);
    };

    let user = user_directory.authenticate(credentials.username(), credentials.password())?;

    if !user.has_role(CARD_OWNER_ROLE) {
        tracing::info!(
            "User \"{}\" does not have the role {CARD_OWNER_ROLE}",
            user.username
        );
        return Err(Error::Forbidden);
    }

    Ok(Principal::new(&user.username))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Extension, Router,
        http::{StatusCode, header::WWW_AUTHENTICATE},
        middleware,
        routing::get,
    };
    use axum_test::TestServer;

    use crate::{
        CARD_OWNER_ROLE,
        auth::{Principal, UserAccount, UserDirectory, basic_auth_guard, middleware::AuthState},
        password::{PasswordHash, ValidatedPassword},
    };

    const TEST_PROTECTED_ROUTE: &str = "/protected";

    // base64 of "jack1:abc123"
    const JACK_CREDENTIALS: &str = "Basic amFjazE6YWJjMTIz";
    // base64 of "jack1:BAD-PASSWORD"
    const JACK_BAD_PASSWORD: &str = "Basic amFjazE6QkFELVBBU1NXT1JE";
    // base64 of "BAD-USER:abc123"
    const BAD_USER: &str = "Basic QkFELVVTRVI6YWJjMTIz";
    // base64 of "hank-owns-no-cards:qrs456"
    const HANK_CREDENTIALS: &str = "Basic aGFuay1vd25zLW5vLWNhcmRzOnFyczQ1Ng==";

    async fn test_handler(Extension(principal): Extension<Principal>) -> String {
        principal.name().to_owned()
    }

    fn user(username: &str, password: &str, role: &str) -> UserAccount {
        UserAccount {
            username: username.to_owned(),
            password_hash: PasswordHash::new(ValidatedPassword::new_unchecked(password), 4)
                .expect("could not hash test password"),
            roles: vec![role.to_owned()],
        }
    }

    fn get_test_server() -> TestServer {
        let user_directory = UserDirectory::new([
            user("jack1", "abc123", CARD_OWNER_ROLE),
            user("hank-owns-no-cards", "qrs456", "NON-OWNER"),
        ])
        .expect("could not create user directory");
        let state = AuthState {
            user_directory: Arc::new(user_directory),
        };

        let app = Router::new()
            .route(TEST_PROTECTED_ROUTE, get(test_handler))
            .route_layer(middleware::from_fn_with_state(state.clone(), basic_auth_guard))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn valid_credentials_pass_principal_to_handler() {
        let server = get_test_server();

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_header("Authorization", JACK_CREDENTIALS)
            .await;

        response.assert_status_ok();
        response.assert_text("jack1");
    }

    #[tokio::test]
    async fn missing_credentials_get_401_with_challenge() {
        let server = get_test_server();

        let response = server.get(TEST_PROTECTED_ROUTE).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.header(WWW_AUTHENTICATE),
            "Basic realm=\"cashcards\""
        );
    }

    #[tokio::test]
    async fn bad_password_gets_401() {
        let server = get_test_server();

        server
            .get(TEST_PROTECTED_ROUTE)
            .add_header("Authorization", JACK_BAD_PASSWORD)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_user_gets_401() {
        let server = get_test_server();

        server
            .get(TEST_PROTECTED_ROUTE)
            .add_header("Authorization", BAD_USER)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_basic_scheme_gets_401() {
        let server = get_test_server();

        server
            .get(TEST_PROTECTED_ROUTE)
            .add_header("Authorization", "Bearer amFjazE6YWJjMTIz")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn user_without_card_owner_role_gets_403() {
        let server = get_test_server();

        server
            .get(TEST_PROTECTED_ROUTE)
            .add_header("Authorization", HANK_CREDENTIALS)
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}
