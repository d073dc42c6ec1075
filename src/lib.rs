use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

pub mod phone;
pub mod registration;
pub mod urand;
pub mod username;

pub use phone::PhoneNumber;
pub use registration::RegistrationFixture;
pub use username::Username;

///  这里是crush项目测试用的随机数据生成器
/// 简单使用案列
/// ```
/// use crush_fixture_rs::FixtureGenerator;
///
/// let mut generator = FixtureGenerator::from_seed(2024);
/// let username = generator.username();
/// let phone = generator.chinese_phone_number();
/// assert!(username.as_str().starts_with("user_"));
/// assert_eq!(phone.as_str().len(), 11);
///
/// // 相同种子得到相同的数据
/// let mut again = FixtureGenerator::from_seed(2024);
/// assert_eq!(again.username(), username);
/// ```
pub struct FixtureGenerator<R: Rng = StdRng> {
    rng: R,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid username `{0}`")]
    InvalidUsername(String),
    #[error("Invalid phone number `{0}`")]
    InvalidPhoneNumber(String),
    #[error("json serialize error")]
    Serialize(#[from] serde_json::Error),
}

impl FixtureGenerator<StdRng> {
    /// 使用固定种子, 便于测试复现
    pub fn from_seed(seed: u64) -> Self {
        log::debug!("fixture generator seeded with {}", seed);
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        log::debug!("fixture generator seeded from entropy");
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FixtureGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// 生成 `user_<0-9999>` 形式的用户名
    pub fn username(&mut self) -> Username {
        Username::random(&mut self.rng)
    }

    /// 生成 `1[3-9]` 加9位数字的手机号
    pub fn chinese_phone_number(&mut self) -> PhoneNumber {
        PhoneNumber::random(&mut self.rng)
    }

    /// 生成注册请求体
    pub fn registration(&mut self) -> RegistrationFixture {
        RegistrationFixture::random(&mut self.rng)
    }

    pub fn username_string(&mut self) -> String {
        self.username().into()
    }

    pub fn phone_number_string(&mut self) -> String {
        self.chinese_phone_number().into()
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// 使用线程随机数生成用户名
pub fn generate_username() -> String {
    Username::random(&mut rand::thread_rng()).into()
}

/// 使用线程随机数生成中国大陆手机号
pub fn generate_chinese_phone_number() -> String {
    PhoneNumber::random(&mut rand::thread_rng()).into()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_generate_username() {
        init_logger();
        let seen: HashSet<String> = (0..1000).map(|_| generate_username()).collect();
        for username in &seen {
            let n: u16 = username.strip_prefix("user_").unwrap().parse().unwrap();
            assert!(n <= 9999);
            assert!(username.parse::<Username>().is_ok(), "{}", username);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_generate_chinese_phone_number() {
        init_logger();
        let seen: HashSet<String> = (0..1000).map(|_| generate_chinese_phone_number()).collect();
        for number in &seen {
            assert_eq!(number.len(), 11);
            assert!(number.bytes().all(|b| b.is_ascii_digit()));
            assert!(number.starts_with('1'));
            assert!(number.parse::<PhoneNumber>().is_ok(), "{}", number);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_seeded_generators_agree() {
        init_logger();
        let mut a = FixtureGenerator::from_seed(7);
        let mut b = FixtureGenerator::from_seed(7);
        for _ in 0..100 {
            assert_eq!(a.username_string(), b.username_string());
            assert_eq!(a.phone_number_string(), b.phone_number_string());
            assert_eq!(a.registration(), b.registration());
        }
    }

    #[test]
    fn test_injected_minimum_source() {
        let mut generator = FixtureGenerator::new(StepRng::new(0, 0));
        assert_eq!(generator.username_string(), "user_0");
        assert_eq!(generator.phone_number_string(), "13000000000");
    }

    #[test]
    fn test_injected_maximum_source() {
        let mut generator = FixtureGenerator::new(StepRng::new(u64::MAX, 0));
        assert_eq!(generator.username_string(), "user_9999");
        assert_eq!(generator.phone_number_string(), "19999999999");
    }

    #[test]
    fn test_from_entropy_produces_fixtures() {
        let mut generator = FixtureGenerator::from_entropy();
        let registration = generator.registration();
        assert!(registration.to_json().is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = "nobody".parse::<Username>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid username `nobody`");
        let err = "110".parse::<PhoneNumber>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number `110`");
    }
}
