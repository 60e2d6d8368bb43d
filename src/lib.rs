//! 列と数値の小さな変換ドリル集
//!
//! 前半は内包表記スタイルの一括変換 (各要素 +1、コラッツの1ステップ、
//! 交換行列、非ゼロ位置)、後半は高階関数 (桁の積・桁数え)、
//! 前後に巡回できるイテレータ、小数刻みの遅延 range。
//! どれも互いに独立した純粋な変換で、共有状態も I/O もない。

pub mod collatz;
pub mod digits;
pub mod dual_iter;
pub mod error;
pub mod frange;
pub mod matrix;
pub mod value;
pub mod vector;

pub use collatz::{collatz_step, collatz_steps};
pub use digits::{get_count, mul_digits, DigitCounter, Digits};
pub use dual_iter::DualIterator;
pub use error::{DrillError, Result};
pub use frange::{frange, Decimal, FRange, ROUND_PLACES};
pub use matrix::{exchange_matrix, get_nonzero};
pub use value::Value;
pub use vector::vector_plus_one;
