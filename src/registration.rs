use rand::Rng;
use serde::Serialize;

use crate::phone::PhoneNumber;
use crate::urand::random_alphanumeric;
use crate::username::Username;
use crate::FixtureError;

/// 随机密码长度
pub const PASSWORD_LEN: usize = 12;

/// 用户注册请求体夹具
///
/// 字段名与注册接口一致: `username`, `password`, `phoneNumber`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFixture {
    pub username: Username,
    pub password: String,
    pub phone_number: PhoneNumber,
}

impl RegistrationFixture {
    /// 依次生成用户名、密码、手机号
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let username = Username::random(rng);
        let password = random_alphanumeric(rng, PASSWORD_LEN);
        let phone_number = PhoneNumber::random(rng);
        Self {
            username,
            password,
            phone_number,
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, FixtureError> {
        match serde_json::to_value(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::error!("Error: {}", err);
                Err(FixtureError::from(err))
            }
        }
    }
}
