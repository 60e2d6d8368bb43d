use num_traits::Num;
use std::iter::FusedIterator;

use crate::error::{DrillError, Result};

/// 加算ごとに丸める小数点以下の桁数
pub const ROUND_PLACES: u32 = 13;

/// frange で使える数値型
pub trait Decimal: Num + PartialOrd + Copy {
    /// 小数点以下 places 桁に丸める。整数はそのまま。
    fn round_places(self, places: u32) -> Self;

    /// 次の値 self + step。表現できなければ None。
    fn checked_step(self, step: Self) -> Option<Self>;
}

impl Decimal for f64 {
    /// 10進で正しく丸める (`{:.N}` は2進の厳密値から丸める)
    fn round_places(self, places: u32) -> f64 {
        if !self.is_finite() {
            return self;
        }
        format!("{:.*}", places as usize, self)
            .parse()
            .unwrap_or(self)
    }

    fn checked_step(self, step: f64) -> Option<f64> {
        Some((self + step).round_places(ROUND_PLACES))
    }
}

impl Decimal for f32 {
    fn round_places(self, places: u32) -> f32 {
        (self as f64).round_places(places) as f32
    }

    fn checked_step(self, step: f32) -> Option<f32> {
        Some((self + step).round_places(ROUND_PLACES))
    }
}

macro_rules! impl_decimal_int {
    ($($t:ty),*) => {
        $(
            impl Decimal for $t {
                #[inline]
                fn round_places(self, _places: u32) -> $t {
                    self
                }

                #[inline]
                fn checked_step(self, step: $t) -> Option<$t> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_decimal_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// start から stop 手前まで step 刻みで値を遅延生成する。
///
/// 1回きり: 使い切ったら同じオブジェクトからは何も出てこない。
/// step > 0 で start >= stop、または step < 0 で start <= stop なら空。
#[derive(Debug, Clone)]
pub struct FRange<T> {
    /// None = 型の範囲を超えたので打ち切り
    current: Option<T>,
    stop: T,
    step: T,
}

impl<T: Decimal> FRange<T> {
    /// 引数の個数で意味が変わる:
    /// `[stop]` / `[start, stop]` / `[start, stop, step]`
    pub fn new(args: &[T]) -> Result<Self> {
        match *args {
            [stop] => Ok(Self::to(stop)),
            [start, stop] => Ok(Self::between(start, stop)),
            [start, stop, step] => Self::with_step(start, stop, step),
            _ => Err(DrillError::ArgumentCount { got: args.len() }),
        }
    }

    /// 0 から stop まで 1 刻み
    pub fn to(stop: T) -> Self {
        Self::between(T::zero(), stop)
    }

    /// start から stop まで 1 刻み
    pub fn between(start: T, stop: T) -> Self {
        FRange {
            current: Some(start),
            stop,
            step: T::one(),
        }
    }

    /// step が正でも負でもない (0 や NaN) なら `ZeroStep`
    pub fn with_step(start: T, stop: T, step: T) -> Result<Self> {
        if !(step > T::zero() || step < T::zero()) {
            return Err(DrillError::ZeroStep);
        }
        Ok(FRange {
            current: Some(start),
            stop,
            step,
        })
    }

    fn in_range(&self, value: T) -> bool {
        if self.step > T::zero() {
            value < self.stop
        } else {
            value > self.stop
        }
    }
}

/// `FRange::new` の関数版
pub fn frange<T: Decimal>(args: &[T]) -> Result<FRange<T>> {
    let range = FRange::new(args)?;
    tracing::debug!(args = args.len(), "frange created");
    Ok(range)
}

impl<T: Decimal> Iterator for FRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.current?;
        if !self.in_range(value) {
            return None;
        }
        self.current = value.checked_step(self.step);
        Some(value)
    }
}

impl<T: Decimal> FusedIterator for FRange<T> {}
