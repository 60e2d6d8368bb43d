use num_bigint::BigInt;
use num_traits::Signed;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 型の混在した列の1要素。
///
/// `Int` だけが整数として扱われる。`Bool` と整数値の `Float` (例: 2.0) は
/// 整数ではない。
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(BigInt),
    Float(f64),
    Bool(bool),
    Str(String),
    None,
}

impl Value {
    /// 正の整数 (`Int` かつ n > 0) ならその値を返す
    pub fn as_positive_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) if n.is_positive() => Some(n),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(BigInt::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

/// CLI 引数からの変換。失敗しない (解釈できなければ文字列になる)。
impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = match s {
            "None" | "null" => Value::None,
            "True" | "true" => Value::Bool(true),
            "False" | "false" => Value::Bool(false),
            _ => {
                if let Ok(n) = BigInt::from_str(s) {
                    Value::Int(n)
                } else if let Ok(x) = f64::from_str(s) {
                    Value::Float(x)
                } else {
                    Value::Str(strip_quotes(s).to_string())
                }
            }
        };
        Ok(value)
    }
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Debug 表記は整数値でも "2.0" と小数点を残す
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::None => write!(f, "None"),
        }
    }
}
