use num_traits::{One, Zero};

/// size×size の交換行列 (反対角線だけ 1、他は 0) を作る。
///
/// 行 j・列 i のセルは i == size-1-j のとき 1。size=0 なら空行列。
pub fn exchange_matrix<T>(size: usize) -> Vec<Vec<T>>
where
    T: Zero + One + Clone,
{
    tracing::trace!(size, "exchange_matrix");
    (0..size)
        .map(|j| {
            (0..size)
                .map(|i| if i == size - 1 - j { T::one() } else { T::zero() })
                .collect()
        })
        .collect()
}

/// 0 でないセルの (行, 列) を行優先で列挙する。
/// 行の長さが揃っていなくても各行をその長さだけ走査する。
pub fn get_nonzero<T, R>(matrix: &[R]) -> Vec<(usize, usize)>
where
    T: Zero,
    R: AsRef<[T]>,
{
    matrix
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.as_ref()
                .iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_zero())
                .map(move |(j, _)| (i, j))
        })
        .collect()
}
