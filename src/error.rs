/// ドリル全体で共通の Result 型
pub type Result<T> = std::result::Result<T, DrillError>;

/// 引数検証のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrillError {
    /// frange の引数が 1〜3 個でない
    #[error("frange expected 1 to 3 arguments, got {got}")]
    ArgumentCount { got: usize },

    /// frange の step が 0
    #[error("frange step size cannot be 0")]
    ZeroStep,

    /// 空の列で DualIterator を作ろうとした
    #[error("dual iterator requires a non-empty sequence")]
    EmptySequence,

    /// 10進の1桁 (0..=9) でない値を対象桁に指定した
    #[error("digit must be in 0..=9, got {digit}")]
    InvalidDigit { digit: u32 },
}
