use std::process::{Command, Output};

const HINT: &str = "Используйте --help для получения справки\n";

fn statistics(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_statistics"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .output()
        .expect("Failed to run statistics")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_mean() {
    let output = statistics(&["-o", "mean", "1", "2", "3", "4", "5", "6", "7", "8"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Среднее арифметическое: 4.5000\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_median_odd_count_unsorted_input() {
    let output = statistics(&["--operation", "median", "9", "1", "8", "2", "7", "3", "6", "4", "5"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Медиана: 5.0000\n");
}

#[test]
fn test_median_even_count() {
    let output = statistics(&["-o", "median", "8", "7", "6", "5", "4", "3", "2", "1"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Медиана: 4.5000\n");
}

#[test]
fn test_no_arguments_shows_help_and_succeeds() {
    let output = statistics(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("median"));
}

#[test]
fn test_help_tokens_anywhere() {
    for args in [
        vec!["/?"],
        vec!["-h"],
        vec!["-o", "mean", "1", "2", "--help"],
        vec!["1", "/?", "not-a-number"],
    ] {
        let output = statistics(&args);
        assert_eq!(output.status.code(), Some(0), "args: {args:?}");
        assert!(stdout(&output).contains("Количество операндов: от 8 до 10"));
        assert!(stderr(&output).is_empty());
    }
}

#[test]
fn test_operand_count_out_of_range() {
    let output = statistics(&["-o", "mean", "1", "2", "3", "4", "5", "6", "7"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        format!("Ошибка: неверное количество операндов: 7\nТребуется: от 8 до 10 операндов\n{HINT}")
    );
}

#[test]
fn test_unknown_operation_before_count() {
    let output = statistics(&["-o", "multiply", "1", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        format!("Ошибка: неизвестная операция: multiply\n{HINT}")
    );
}

#[test]
fn test_missing_operation() {
    let output = statistics(&["1", "2", "3", "4", "5", "6", "7", "8"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), format!("Ошибка: не указана операция\n{HINT}"));
}

#[test]
fn test_invalid_operand() {
    let output = statistics(&["-o", "mean", "1", "2", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        format!("Ошибка: неверный формат операнда: x\n{HINT}")
    );
}
