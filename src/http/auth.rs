//! Bearer-token authentication.
//!
//! Tokens are issued by an external identity provider; the server only
//! validates them and maps the subject claim to a local user row. The
//! provider's own login flow never touches this codebase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,          // identity-provider subject
    pub name: Option<String>, // display name, when the provider sends one
    pub exp: usize,
}

pub mod extractor {
    use super::Claims;
    use actix_web::{
        dev::Payload, error::ErrorUnauthorized, FromRequest, HttpRequest, Result as ActixResult,
    };
    use futures_util::future::{ready, Ready};
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use std::env;

    /// Extracts and validates a Bearer-JWT, exposing the provider subject.
    #[derive(Debug, Clone)]
    pub struct BearerAuth {
        pub subject: String,
        pub display_name: Option<String>,
    }

    impl BearerAuth {
        /// Display name to record on first sight of this subject.
        pub fn name_or_subject(&self) -> &str {
            self.display_name.as_deref().unwrap_or(&self.subject)
        }
    }

    impl FromRequest for BearerAuth {
        type Error = actix_web::Error;
        type Future = Ready<ActixResult<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let res = (|| {
                // Expect:  Authorization: Bearer <JWT>
                let hdr = req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| ErrorUnauthorized("missing Authorization header"))?;

                let token = hdr
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| ErrorUnauthorized("malformed Authorization header"))?;

                let secret =
                    env::var("JWT_SECRET").map_err(|_| ErrorUnauthorized("server mis-config"))?;
                let data = decode::<Claims>(
                    token,
                    &DecodingKey::from_secret(secret.as_bytes()),
                    &Validation::default(),
                )
                .map_err(|_| ErrorUnauthorized("invalid / expired token"))?;

                Ok(BearerAuth {
                    subject: data.claims.sub,
                    display_name: data.claims.name,
                })
            })();

            ready(res)
        }
    }
}
pub use extractor::BearerAuth;
