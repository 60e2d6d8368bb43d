use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{DrillError, Result};

/// 整数の絶対値の10進桁を下位桁から順に返すイテレータ。
///
/// 残りの大きさが 0 になった時点で終わるので、0 の桁列は空になる。
#[derive(Debug, Clone)]
pub struct Digits {
    rest: BigUint,
}

impl Digits {
    pub fn of(num: impl Into<BigInt>) -> Self {
        let num: BigInt = num.into();
        Digits {
            rest: num.magnitude().clone(),
        }
    }
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.rest.is_zero() {
            return None;
        }
        let (quot, rem) = self.rest.div_rem(&BigUint::from(10u32));
        self.rest = quot;
        // rem < 10
        rem.to_u8()
    }
}

/// 述語を満たす桁だけを掛け合わせる。満たす桁がなければ 1。
///
/// 符号は無視する。0 は桁を一つも持たないので常に 1 を返す。
pub fn mul_digits(num: impl Into<BigInt>, pred: impl Fn(u8) -> bool) -> BigUint {
    Digits::of(num)
        .filter(|&digit| pred(digit))
        .fold(BigUint::one(), |acc, digit| acc * digit)
}

/// 指定した桁の出現回数を数える関数オブジェクト。状態は対象桁のみ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCounter {
    target: u8,
}

impl DigitCounter {
    pub fn new(target: u32) -> Result<Self> {
        if target > 9 {
            return Err(DrillError::InvalidDigit { digit: target });
        }
        Ok(DigitCounter {
            target: target as u8,
        })
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// num の絶対値のうち対象桁と等しい桁の数
    pub fn count(&self, num: impl Into<BigInt>) -> usize {
        Digits::of(num).filter(|&digit| digit == self.target).count()
    }
}

/// 対象桁 x を数えるカウンタを返す。何度でも呼び出せる。
pub fn get_count(x: u32) -> Result<DigitCounter> {
    DigitCounter::new(x)
}
