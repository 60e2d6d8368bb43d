use crate::error::{DrillError, Result};

/// 固定列を前後どちらにも巡回するイテレータ。
///
/// カーソルは1本だけで、`reverse` は向きだけを切り替える。
/// 反転直後の `advance` は直前の要素を繰り返さず、現在位置から
/// 新しい向きに1つ進んだ要素を返す。端では反対側の端へ折り返す。
#[derive(Debug, Clone)]
pub struct DualIterator<'a, T> {
    sequence: &'a [T],
    /// None = 開始前 (論理的には -1)
    index: Option<usize>,
    reversing: bool,
}

impl<'a, T> DualIterator<'a, T> {
    /// 空の列は拒否する
    pub fn new(sequence: &'a [T]) -> Result<Self> {
        if sequence.is_empty() {
            return Err(DrillError::EmptySequence);
        }
        Ok(DualIterator {
            sequence,
            index: None,
            reversing: false,
        })
    }

    /// 1つ進めて、その位置の要素を返す。無限に巡回する。
    pub fn advance(&mut self) -> &'a T {
        let last = self.sequence.len() - 1;
        let next = match (self.index, self.reversing) {
            (None, false) => 0,
            (Some(i), false) if i >= last => 0,
            (Some(i), false) => i + 1,
            // 開始前 (-1) から戻ると -2 < 0 なので末尾へ
            (None, true) | (Some(0), true) => last,
            (Some(i), true) => i - 1,
        };
        self.index = Some(next);
        &self.sequence[next]
    }

    /// 進む向きを反転する。位置は変えない。
    pub fn reverse(&mut self) {
        self.reversing = !self.reversing;
        tracing::trace!(index = ?self.index, reversing = self.reversing, "dual iterator reversed");
    }

    pub fn is_reversing(&self) -> bool {
        self.reversing
    }

    /// 直前に返した要素の位置。開始前は None。
    pub fn position(&self) -> Option<usize> {
        self.index
    }
}

/// 終わらないイテレータ。`take` などで区切って使う。
impl<'a, T> Iterator for DualIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
