use std::sync::Arc;

use crate::error::{ClientError, extract_error_message};
use crate::token_store::TokenStore;
use crate::types::{
    AuthResponse, CreateNoteBody, DeleteResponse, MeResponse, Note, SigninBody, SignupBody,
    UpdateNoteBody, UpdateProfileBody, User,
};

pub struct QuillboxClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl QuillboxClient {
    /// `tokens` decides where the session lives (file, memory, ...); the
    /// client only reads and writes through it.
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when one is held, send, and normalize any
    /// non-success response into a `ClientError::Api`.
    async fn send(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let req = match self.tokens.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status,
            message: extract_error_message(&body),
        })
    }

    // ── Auth ────────────────────────────────────────

    /// Register a new account. The returned token is persisted in the store.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, ClientError> {
        let body = SignupBody {
            email,
            password,
            name,
        };
        let resp = self
            .send(self.http.post(self.url("/api/auth/signup")).json(&body))
            .await?;
        let auth: AuthResponse = resp.json().await?;
        self.tokens.set(&auth.token);
        Ok(auth.user)
    }

    /// Sign in with existing credentials. The returned token is persisted in
    /// the store.
    pub async fn signin(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let body = SigninBody { email, password };
        let resp = self
            .send(self.http.post(self.url("/api/auth/signin")).json(&body))
            .await?;
        let auth: AuthResponse = resp.json().await?;
        self.tokens.set(&auth.token);
        Ok(auth.user)
    }

    /// Drop the stored session token. Purely local: tokens are stateless, so
    /// there is nothing to revoke server-side.
    pub fn signout(&self) {
        self.tokens.clear();
    }

    /// The user the current token resolves to.
    pub async fn me(&self) -> Result<User, ClientError> {
        let resp = self.send(self.http.get(self.url("/api/auth/me"))).await?;
        let me: MeResponse = resp.json().await?;
        Ok(me.user)
    }

    // ── Notes ───────────────────────────────────────

    /// All of the caller's notes, most recently updated first.
    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let resp = self.send(self.http.get(self.url("/api/notes"))).await?;
        Ok(resp.json().await?)
    }

    pub async fn create_note(&self, title: &str, content: &str) -> Result<Note, ClientError> {
        let body = CreateNoteBody { title, content };
        let resp = self
            .send(self.http.post(self.url("/api/notes")).json(&body))
            .await?;
        Ok(resp.json().await?)
    }

    /// Partial update: `None` fields are left unchanged on the server.
    pub async fn update_note(
        &self,
        id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Note, ClientError> {
        let body = UpdateNoteBody { title, content };
        let resp = self
            .send(
                self.http
                    .put(self.url(&format!("/api/notes/{}", id)))
                    .json(&body),
            )
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete a note, returning the server's confirmation message.
    pub async fn delete_note(&self, id: &str) -> Result<String, ClientError> {
        let resp = self
            .send(self.http.delete(self.url(&format!("/api/notes/{}", id))))
            .await?;
        let deleted: DeleteResponse = resp.json().await?;
        Ok(deleted.message)
    }

    // ── Profile ─────────────────────────────────────

    pub async fn get_profile(&self) -> Result<User, ClientError> {
        let resp = self.send(self.http.get(self.url("/api/profile"))).await?;
        Ok(resp.json().await?)
    }

    pub async fn update_bio(&self, bio: &str) -> Result<User, ClientError> {
        let body = UpdateProfileBody { bio };
        let resp = self
            .send(self.http.put(self.url("/api/profile")).json(&body))
            .await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::MemoryTokenStore;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = QuillboxClient::new(
            "http://localhost:5000/",
            Arc::new(MemoryTokenStore::new()),
        );
        assert_eq!(client.url("/api/notes"), "http://localhost:5000/api/notes");
    }

    #[test]
    fn test_signout_clears_store() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set("tok-1");
        let client = QuillboxClient::new("http://localhost:5000", store.clone());
        client.signout();
        assert_eq!(store.get(), None);
    }
}
