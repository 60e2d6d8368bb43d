use num_bigint::BigInt;
use num_integer::Integer;

use crate::value::Value;

/// コラッツの1ステップ: n が奇数なら 3n+1、偶数なら ⌊n/2⌋
pub fn collatz_step(n: &BigInt) -> BigInt {
    if n.is_odd() {
        n * 3u32 + 1u32
    } else {
        n.div_floor(&BigInt::from(2u32))
    }
}

/// 正の整数だけを残して、それぞれにコラッツの1ステップを適用する。
///
/// 浮動小数 (整数値でも)、真偽値、文字列、0 以下の整数は黙って除外する。
/// 残った要素の相対順序は保たれる。
pub fn collatz_steps(values: &[Value]) -> Vec<BigInt> {
    let result: Vec<BigInt> = values
        .iter()
        .filter_map(Value::as_positive_int)
        .map(collatz_step)
        .collect();
    tracing::trace!(input = values.len(), kept = result.len(), "collatz_steps");
    result
}
