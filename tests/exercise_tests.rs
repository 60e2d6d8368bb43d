use num_bigint::{BigInt, BigUint};
use seq_drills::*;

fn big(v: &[i64]) -> Vec<BigInt> {
    v.iter().map(|&n| BigInt::from(n)).collect()
}

// ===== 内包表記パート =====

#[test]
fn test_vector_plus_one() {
    assert_eq!(vector_plus_one(&[1, 2, 3]), vec![2, 3, 4]);
    assert_eq!(vector_plus_one(&[0, 0, 0]), vec![1, 1, 1]);
    assert_eq!(vector_plus_one(&[-1, -2, -3, -4, -5]), vec![0, -1, -2, -3, -4]);
    assert_eq!(vector_plus_one::<i64>(&[]), Vec::<i64>::new());
}

#[test]
fn test_collatz_steps() {
    let input: Vec<Value> = vec![1.into(), 2.into(), 3.into(), 4.into()];
    assert_eq!(collatz_steps(&input), big(&[4, 1, 10, 2]));

    let mixed: Vec<Value> = vec![0.into(), "".into(), (-2).into(), 1.5.into(), 2.0.into()];
    assert!(collatz_steps(&mixed).is_empty());

    let negatives: Vec<Value> = (1..=5).map(|n| Value::from(-n)).collect();
    assert!(collatz_steps(&negatives).is_empty());

    assert!(collatz_steps(&[]).is_empty());
}

#[test]
fn test_collatz_keeps_relative_order() {
    let input: Vec<Value> = vec![
        7.into(),
        Value::None,
        6.into(),
        true.into(),
        "5".into(),
        5.into(),
    ];
    assert_eq!(collatz_steps(&input), big(&[22, 3, 16]));
}

#[test]
fn test_exchange_matrix() {
    assert_eq!(exchange_matrix::<i32>(1), vec![vec![1]]);
    assert_eq!(exchange_matrix::<i32>(2), vec![vec![0, 1], vec![1, 0]]);
    assert_eq!(
        exchange_matrix::<i32>(3),
        vec![vec![0, 0, 1], vec![0, 1, 0], vec![1, 0, 0]]
    );
}

#[test]
fn test_exchange_matrix_antidiagonal() {
    let size = 9;
    let m = exchange_matrix::<u8>(size);
    assert_eq!(m.len(), size);
    for (j, row) in m.iter().enumerate() {
        assert_eq!(row.len(), size);
        for (i, &cell) in row.iter().enumerate() {
            assert_eq!(cell == 1, i == size - 1 - j, "cell ({}, {})", j, i);
        }
    }
}

#[test]
fn test_get_nonzero() {
    assert_eq!(
        get_nonzero(&[[1, 0, 0], [0, 2, 0], [0, 0, 3]]),
        vec![(0, 0), (1, 1), (2, 2)]
    );
    assert_eq!(
        get_nonzero(&[[-1, 0, 0], [0, 0, 0], [0, 0, -3]]),
        vec![(0, 0), (2, 2)]
    );
    assert_eq!(get_nonzero(&[[0, 0, 0], [0, 0, 0], [0, 0, 0]]), vec![]);
}

#[test]
fn test_get_nonzero_row_major_order() {
    let m = vec![vec![0, 5, 5], vec![5, 0, 0]];
    assert_eq!(get_nonzero(&m), vec![(0, 1), (0, 2), (1, 0)]);
}

// ===== 高階関数パート =====

#[test]
fn test_mul_digits() {
    let is_two = |d: u8| d == 2;
    let div_by_four = |d: u8| d % 4 == 0;

    assert_eq!(mul_digits(5724892472i64, is_two), BigUint::from(8u32));
    assert_eq!(mul_digits(5724892472i64, div_by_four), BigUint::from(128u32));
    assert_eq!(mul_digits(155794, is_two), BigUint::from(1u32));
    assert_eq!(mul_digits(67945125482222152i64, is_two), BigUint::from(64u32));
    assert_eq!(
        mul_digits(679451254828822152i64, div_by_four),
        BigUint::from(8192u32)
    );
    assert_eq!(
        mul_digits(-494847464544434241i64, div_by_four),
        BigUint::from(8388608u32)
    );
}

#[test]
fn test_mul_digits_large_product() {
    // 9^30 は u64 に収まらない
    let nines = "9".repeat(30).parse::<BigInt>().unwrap();
    assert_eq!(mul_digits(nines, |_| true), BigUint::from(9u32).pow(30));
}

#[test]
fn test_get_count() {
    assert_eq!(get_count(6).unwrap().count(62156), 2);

    let sevens = get_count(7).unwrap();
    assert_eq!(sevens.count(9457845778457077076u64), 7);
    assert_eq!(sevens.count(-945784578457077076i64), 6);

    assert_eq!(get_count(6).unwrap().count(-65062156), 3);
}

#[test]
fn test_get_count_reusable() {
    let sixes = get_count(6).unwrap();
    assert_eq!(sixes.count(62156), 2);
    assert_eq!(sixes.count(-65062156), 3);
    assert_eq!(sixes.count(62156), 2);
    assert_eq!(sixes.target(), 6);
}
