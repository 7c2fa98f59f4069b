use anyhow::{bail, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::info;
use rand::RngCore;

const PASSWORD_FILE: &str = ".encrypted_password";
const KEY_FILE: &str = ".encryption_key";
const NONCE_LEN: usize = 12;

pub const PASSWORD_ENV: &str = "EMAIL_PASSWORD";

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Keeps the inbox password sealed with AES-256-GCM on local disk.
pub struct CredentialStore {
    key_path: PathBuf,
    password_path: PathBuf,
}

impl Default for CredentialStore {
    fn default() -> Self {
        CredentialStore::in_dir(".")
    }
}

impl CredentialStore {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        CredentialStore {
            key_path: dir.as_ref().join(KEY_FILE),
            password_path: dir.as_ref().join(PASSWORD_FILE),
        }
    }

    fn cipher(&self) -> Result<Aes256Gcm> {
        let key_bytes = if self.key_path.exists() {
            fs::read(&self.key_path)?
        } else {
            let mut key_bytes = vec![0u8; 32];
            rand::thread_rng().fill_bytes(&mut key_bytes);
            fs::write(&self.key_path, &key_bytes)?;
            key_bytes
        };
        Aes256Gcm::new_from_slice(&key_bytes)
            .map_err(|e| anyhow::anyhow!("Failed to create cipher from key: {}", e))
    }

    pub fn seal(&self, password: &str) -> Result<String> {
        let cipher = self.cipher()?;
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, password.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to encrypt password: {}", e))?;

        let mut combined = nonce_bytes.to_vec();
        combined.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(&combined))
    }

    pub fn unseal(&self, sealed: &str) -> Result<String> {
        let cipher = self.cipher()?;
        let combined = BASE64
            .decode(sealed.trim())
            .map_err(|e| anyhow::anyhow!("Failed to decode base64: {}", e))?;
        if combined.len() <= NONCE_LEN {
            bail!("Sealed password is too short");
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LEN);
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|e| anyhow::anyhow!("Failed to decrypt password: {}", e))?;

        String::from_utf8(plaintext)
            .map_err(|e| anyhow::anyhow!("Failed to convert decrypted bytes to string: {}", e))
    }

    /// Stored password if one was sealed earlier, otherwise prompt and store it.
    pub fn password(&self) -> Result<String> {
        if self.password_path.exists() {
            let sealed = fs::read_to_string(&self.password_path)?;
            return self.unseal(&sealed);
        }

        let password = rpassword::prompt_password("Enter the inbox password: ")?;
        fs::write(&self.password_path, self.seal(&password)?)?;
        info!("Password sealed into {}", self.password_path.display());
        Ok(password)
    }
}

pub fn get_credentials(login: &str, store: &CredentialStore) -> Result<Credentials> {
    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => password,
        _ => store.password()?,
    };

    Ok(Credentials {
        username: login.to_string(),
        password,
    })
}
