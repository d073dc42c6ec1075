use std::ops::RangeInclusive;

use rand::distributions::Alphanumeric;
use rand::Rng;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// 从给定区间(0-9的子区间)中均匀抽取一位数字
pub fn random_digit<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u8>) -> char {
    DIGITS[rng.gen_range(range) as usize]
}

/// 生成n位随机数字串,每一位独立地从0到9中抽取,按生成顺序拼接
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    (0..n).map(|_| random_digit(rng, 0..=9)).collect()
}

/// 生成n位字母数字串
pub fn random_alphanumeric<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    (0..n).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
