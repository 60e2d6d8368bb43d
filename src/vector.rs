use num_traits::One;
use std::ops::Add;

/// 各要素に 1 を足した新しい列を返す。入力は変更しない。
pub fn vector_plus_one<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + Add<Output = T> + One,
{
    seq.iter().map(|num| num.clone() + T::one()).collect()
}
