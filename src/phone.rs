use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::urand::{random_digit, random_digits};
use crate::FixtureError;

/// 手机号的第1位, 固定为1
pub const PHONE_LEADING_DIGIT: char = '1';
/// 手机号第2位的取值范围
pub const PHONE_SECOND_DIGITS: RangeInclusive<u8> = 3..=9;
/// 手机号第2位之后的位数
pub const PHONE_TRAILING_LEN: usize = 9;
/// 手机号总长度
pub const PHONE_LEN: usize = 2 + PHONE_TRAILING_LEN;

/// 随机生成的中国大陆手机号, 满足 `1[3-9]\d{9}`
///
/// 只保证结构, 不保证号段真实存在
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut number = String::with_capacity(PHONE_LEN);
        number.push(PHONE_LEADING_DIGIT);
        number.push(random_digit(rng, PHONE_SECOND_DIGITS));
        number.push_str(&random_digits(rng, PHONE_TRAILING_LEN));
        log::trace!("generated phone number {}", number);
        Self(number)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let valid = bytes.len() == PHONE_LEN
            && bytes[0] == PHONE_LEADING_DIGIT as u8
            && bytes[1].is_ascii_digit()
            && PHONE_SECOND_DIGITS.contains(&(bytes[1] - b'0'))
            && bytes[2..].iter().all(u8::is_ascii_digit);
        if !valid {
            log::debug!("rejected phone number `{}`", s);
            return Err(FixtureError::InvalidPhoneNumber(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}
