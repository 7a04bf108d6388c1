use crate::config::AppConfig;
use crate::errors::PortalError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, PortalError> {
    let config = &AppConfig::get().argon2;
    hash_password_with(
        password,
        config.memory_cost,
        config.time_cost,
        config.parallelism,
    )
}

/// 使用指定参数哈希密码
pub fn hash_password_with(
    password: &str,
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
) -> Result<String, PortalError> {
    let params = Params::new(memory_cost, time_cost, parallelism, None)
        .map_err(|e| PortalError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PortalError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码，哈希串中自带参数
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with("Secret123", 8 * 1024, 1, 1).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Secret123", &hash));
        assert!(!verify_password("secret123", &hash));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("anything", "not-a-hash"));
        assert!(!verify_password("anything", ""));
    }
}
