use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use num_bigint::BigInt;
use seq_drills::*;
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

/// 列と数値の変換ドリル
#[derive(Debug, Parser)]
#[command(name = "seq-drills", version, about)]
struct Cli {
    /// ログを詳しくする (-v: debug, -vv: trace)。未指定なら RUST_LOG (既定 warn)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 各要素に 1 を足す
    PlusOne {
        #[arg(allow_hyphen_values = true)]
        nums: Vec<f64>,
    },
    /// 正の整数だけにコラッツの1ステップを適用する (例: 1 2 3 2.0 True "")
    Collatz {
        #[arg(allow_hyphen_values = true)]
        values: Vec<Value>,
    },
    /// size×size の交換行列
    Exchange { size: usize },
    /// 非ゼロ要素の位置。行はカンマ区切り (例: 1,0,0 0,2,0)
    Nonzero {
        #[arg(allow_hyphen_values = true)]
        rows: Vec<String>,
    },
    /// 条件を満たす桁の積
    MulDigits {
        #[arg(allow_hyphen_values = true)]
        num: BigInt,
        /// この桁と等しい桁だけを掛ける
        #[arg(long)]
        eq: Option<u8>,
        /// この値で割り切れる桁だけを掛ける
        #[arg(long)]
        div_by: Option<u8>,
    },
    /// digit の出現回数を各数について数える
    Count {
        digit: u32,
        #[arg(allow_hyphen_values = true)]
        nums: Vec<BigInt>,
    },
    /// 前後巡回イテレータ。ops は n (次へ) と r (反転) の列 (例: nnnrnnn)
    Cycle {
        ops: String,
        #[arg(required = true, allow_hyphen_values = true)]
        seq: Vec<String>,
    },
    /// 小数刻みの range。引数は stop / start stop / start stop step
    Frange {
        #[arg(allow_hyphen_values = true)]
        args: Vec<f64>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn format_list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn parse_row(row: &str) -> anyhow::Result<Vec<f64>> {
    if row.trim().is_empty() {
        return Ok(Vec::new());
    }
    row.split(',')
        .map(|cell| {
            cell.trim()
                .parse::<f64>()
                .with_context(|| format!("数値を解析できません: {}", cell))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(command = ?cli.command, "start");

    match cli.command {
        Command::PlusOne { nums } => cmd_plus_one(&nums),
        Command::Collatz { values } => cmd_collatz(&values),
        Command::Exchange { size } => cmd_exchange(size),
        Command::Nonzero { rows } => cmd_nonzero(&rows)?,
        Command::MulDigits { num, eq, div_by } => cmd_mul_digits(num, eq, div_by)?,
        Command::Count { digit, nums } => cmd_count(digit, nums)?,
        Command::Cycle { ops, seq } => cmd_cycle(&ops, &seq)?,
        Command::Frange { args } => cmd_frange(&args)?,
    }
    Ok(())
}

fn cmd_plus_one(nums: &[f64]) {
    println!("{}", format_list(vector_plus_one(nums)));
}

fn cmd_collatz(values: &[Value]) {
    println!("{}", format_list(collatz_steps(values)));
}

fn cmd_exchange(size: usize) {
    for row in exchange_matrix::<u8>(size) {
        println!("{}", format_list(row));
    }
}

fn cmd_nonzero(rows: &[String]) -> anyhow::Result<()> {
    let matrix = rows
        .iter()
        .map(|row| parse_row(row))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let positions = get_nonzero(&matrix);
    println!(
        "{}",
        format_list(positions.iter().map(|(i, j)| format!("({}, {})", i, j)))
    );
    Ok(())
}

fn cmd_mul_digits(num: BigInt, eq: Option<u8>, div_by: Option<u8>) -> anyhow::Result<()> {
    let product = match (eq, div_by) {
        (Some(target), None) => mul_digits(num, |digit| digit == target),
        (None, Some(0)) => bail!("--div-by に 0 は指定できません"),
        (None, Some(k)) => mul_digits(num, |digit| digit % k == 0),
        _ => bail!("--eq か --div-by のどちらか一方を指定してください"),
    };
    println!("{}", product);
    Ok(())
}

fn cmd_count(digit: u32, nums: Vec<BigInt>) -> anyhow::Result<()> {
    let counter = get_count(digit)?;
    for num in nums {
        let shown = num.to_string();
        println!("{}: {}", shown, counter.count(num));
    }
    Ok(())
}

fn cmd_cycle(ops: &str, seq: &[String]) -> anyhow::Result<()> {
    let mut it = DualIterator::new(seq)?;
    let mut produced = Vec::new();
    for op in ops.chars() {
        match op {
            'n' => produced.push(it.advance().as_str()),
            'r' => it.reverse(),
            _ => bail!("不明な操作: {} (n か r を指定)", op),
        }
    }
    println!("{}", format_list(produced));
    Ok(())
}

fn cmd_frange(args: &[f64]) -> anyhow::Result<()> {
    let range = frange(args)?;
    println!("{}", format_list(range));
    Ok(())
}
