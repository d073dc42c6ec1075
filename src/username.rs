use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::FixtureError;

/// 用户名前缀
pub const USERNAME_PREFIX: &str = "user_";
/// 用户名数字后缀的最大值(含)
pub const USERNAME_MAX: u16 = 9999;

/// 随机生成的用户名,形如 `user_<N>`, `0 <= N <= 9999`
///
/// 不保证唯一,多次生成可能重复
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n: u16 = rng.gen_range(0..=USERNAME_MAX);
        let username = Self(format!("{}{}", USERNAME_PREFIX, n));
        log::trace!("generated username {}", username);
        username
    }

    /// 数字后缀N
    pub fn suffix(&self) -> u16 {
        self.0[USERNAME_PREFIX.len()..].parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = match s.strip_prefix(USERNAME_PREFIX) {
            Some(digits) => {
                !digits.is_empty()
                    && digits.len() <= 4
                    && digits.bytes().all(|b| b.is_ascii_digit())
                    && (digits == "0" || !digits.starts_with('0'))
            }
            None => false,
        };
        if !valid {
            log::debug!("rejected username `{}`", s);
            return Err(FixtureError::InvalidUsername(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}
