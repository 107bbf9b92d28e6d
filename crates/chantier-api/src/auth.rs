//! Login, logout and the denormalized session profile.

use chantier_core::{Role, SessionProfile};
use chantier_store::StorageKey;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::session::SessionEvent;

pub const LOGIN_PATH: &str = "/auth/";

#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Wire shape of the login request.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    mot_de_passe: &'a str,
    action: &'static str,
}

impl<'a> From<&'a LoginCredentials> for LoginRequest<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: &credentials.email,
            mot_de_passe: &credentials.password,
            action: "login",
        }
    }
}

/// `{data:{data:{...}}}` as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub data: LoginEnvelope,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginEnvelope {
    pub data: LoginPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(deserialize_with = "chantier_core::de::string_or_number")]
    pub id_utilisateur: String,
    pub nom: String,
    pub email: String,
    pub role_de_utilisateur: String,
    pub tokens: LoginTokens,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginTokens {
    pub access: String,
}

impl LoginResponse {
    #[must_use]
    pub const fn user(&self) -> &LoginPayload {
        &self.data.data
    }
}

impl ApiClient {
    /// Authenticate against `POST /auth/` and persist the session.
    ///
    /// Writes `userRole`, `userId`, `userName`, `userEmail` and finally
    /// `token`, then returns the full response. Nothing is written when the
    /// request fails; a failed store write removes every session key again.
    ///
    /// # Errors
    ///
    /// Propagates the request error unchanged (no retry), or
    /// [`ApiError::Store`] if the session cannot be persisted.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest::from(credentials);
        let response: LoginResponse = self.post(LOGIN_PATH, Some(&request)).await?;

        let user = response.user();
        if let Err(error) = self.persist_session(user) {
            self.clear_session_keys();
            return Err(error);
        }

        tracing::info!(user_id = %user.id_utilisateur, role = %user.role_de_utilisateur, "logged in");
        self.publish(SessionEvent::LoggedIn {
            user_id: user.id_utilisateur.clone(),
        });
        Ok(response)
    }

    /// The token goes last so a partial write never looks signed in.
    fn persist_session(&self, user: &LoginPayload) -> Result<(), ApiError> {
        let storage = self.storage();
        storage.set(StorageKey::UserRole, &user.role_de_utilisateur)?;
        storage.set(StorageKey::UserId, &user.id_utilisateur)?;
        storage.set(StorageKey::UserName, &user.nom)?;
        storage.set(StorageKey::UserEmail, &user.email)?;
        self.set_token(&user.tokens.access)
    }

    fn clear_session_keys(&self) {
        for key in StorageKey::SESSION {
            if let Err(error) = self.storage().remove(key) {
                tracing::warn!(key = key.as_str(), %error, "failed to roll back session key");
            }
        }
    }

    /// Clear the five session keys. Local only; the backend is not contacted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the store cannot be written.
    pub fn logout(&self) -> Result<(), ApiError> {
        for key in StorageKey::SESSION {
            self.storage().remove(key)?;
        }
        self.publish(SessionEvent::LoggedOut);
        Ok(())
    }

    /// Read the stored session profile back. `None` when signed out.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the store cannot be read.
    pub fn current_session(&self) -> Result<Option<SessionProfile>, ApiError> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };
        let storage = self.storage();
        Ok(Some(SessionProfile {
            token,
            role: storage.get(StorageKey::UserRole)?.map(Role::from),
            user_id: storage.get(StorageKey::UserId)?,
            name: storage.get(StorageKey::UserName)?,
            email: storage.get(StorageKey::UserEmail)?,
        }))
    }
}
