//! Text shown to the user: help, result lines and diagnostics.

use console::style;

use crate::error::{CalcError, ErrorStage};
use crate::evaluator::Evaluation;
use crate::tool::Tool;

/// Significant digits used when operands are echoed in an expression.
const OPERAND_PRECISION: usize = 6;

/// Build the help text for a tool.
///
/// Section headers are styled when stdout supports colour and plain otherwise.
pub fn help_text(tool: &Tool) -> String {
    let header = |title: &str| style(title).cyan().bold().to_string();
    let range = format!("{}-{}", tool.min_operands, tool.max_operands);
    let width = tool
        .operations
        .iter()
        .map(|op| op.name().len())
        .max()
        .unwrap_or(0);

    let mut help = String::new();
    help.push_str(&format!("{}\n", tool.title));
    help.push_str(&format!(
        "{} {} -o <операция> [операнды...]\n\n",
        header("Использование:"),
        tool.program
    ));

    help.push_str(&format!("{}\n", header("Поддерживаемые операции:")));
    for op in tool.operations {
        help.push_str(&format!(
            "  {:<width$} - {} ({range} операндов)\n",
            op.name(),
            op.description()
        ));
    }
    help.push('\n');

    help.push_str(&format!("{}\n", header("Параметры:")));
    help.push_str("  -o, --operation <операция>  операция для вычисления\n");
    help.push_str(&format!(
        "  {}  показать эту справку\n\n",
        tool.help_tokens.join(", ")
    ));

    help.push_str(&format!("{}\n", header("Примеры:")));
    for example in tool.examples {
        help.push_str(&format!("  {example}\n"));
    }
    help.push('\n');

    help.push_str(&format!(
        "Количество операндов: от {} до {}\n",
        tool.min_operands, tool.max_operands
    ));
    help
}

/// Single result line for a successful evaluation.
pub fn result_line(tool: &Tool, evaluation: &Evaluation) -> String {
    let label = evaluation.operation.result_label();
    let value = format!("{:.*}", tool.decimals, evaluation.value);

    match evaluation.operation.symbol() {
        Some(symbol) if tool.echo_expression => {
            let expression = evaluation
                .operands
                .iter()
                .map(|x| format_general(*x, OPERAND_PRECISION))
                .collect::<Vec<_>>()
                .join(&format!(" {symbol} "));
            format!("{label}: {expression} = {value}")
        }
        _ => format!("{label}: {value}"),
    }
}

/// Diagnostic lines written to stderr for a failure.
pub fn diagnostic_lines(tool: &Tool, error: &CalcError) -> Vec<String> {
    match error.stage() {
        ErrorStage::Evaluation => vec![format!("Ошибка выполнения: {error}")],
        ErrorStage::Input => {
            let mut lines = vec![format!("Ошибка: {error}")];
            if let CalcError::InvalidOperandCount { min, max, .. } = error {
                lines.push(format!("Требуется: от {min} до {max} операндов"));
            }
            if tool.help_hint {
                lines.push("Используйте --help для получения справки".to_string());
            }
            lines
        }
    }
}

/// Format a number the way `printf("%g")` does: `precision` significant
/// digits, trailing zeros dropped, scientific notation for very small or
/// very large magnitudes.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;

    fn evaluation(operation: Operation, operands: &[f64], value: f64) -> Evaluation {
        Evaluation {
            operation,
            operands: operands.to_vec(),
            value,
        }
    }

    #[test]
    fn test_multiply_line_echoes_expression() {
        let line = result_line(
            &Tool::MULTIPLICATIVE,
            &evaluation(Operation::Multiply, &[2.0, 3.0, 4.0, 5.0, 6.0], 720.0),
        );
        assert_eq!(line, "Результат умножения: 2 × 3 × 4 × 5 × 6 = 720.000000");
    }

    #[test]
    fn test_divide_line_uses_division_sign() {
        let line = result_line(
            &Tool::MULTIPLICATIVE,
            &evaluation(Operation::Divide, &[100.0, 2.0, 5.0, 2.0, 2.0], 1.25),
        );
        assert_eq!(line, "Результат деления: 100 ÷ 2 ÷ 5 ÷ 2 ÷ 2 = 1.250000");
    }

    #[test]
    fn test_statistics_lines_have_four_decimals() {
        let operands = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let line = result_line(&Tool::STATISTICS, &evaluation(Operation::Mean, &operands, 4.5));
        assert_eq!(line, "Среднее арифметическое: 4.5000");

        let line = result_line(&Tool::STATISTICS, &evaluation(Operation::Median, &operands, 5.0));
        assert_eq!(line, "Медиана: 5.0000");
    }

    #[test]
    fn test_large_results_stay_fixed_point() {
        let line = result_line(
            &Tool::STATISTICS,
            &evaluation(Operation::Mean, &[0.0; 8], 12345678901.5),
        );
        assert_eq!(line, "Среднее арифметическое: 12345678901.5000");
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(2.0, 6), "2");
        assert_eq!(format_general(2.5, 6), "2.5");
        assert_eq!(format_general(-0.125, 6), "-0.125");
        assert_eq!(format_general(100.0, 6), "100");
        assert_eq!(format_general(123456.0, 6), "123456");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(0.0000001, 6), "1e-07");
        assert_eq!(format_general(3.14159265, 6), "3.14159");
        assert_eq!(format_general(999999.7, 6), "1e+06");
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(-0.0, 6), "-0");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
    }

    #[test]
    fn test_input_diagnostics() {
        let error = CalcError::InvalidOperandCount {
            count: 3,
            min: 5,
            max: 7,
        };
        assert_eq!(
            diagnostic_lines(&Tool::MULTIPLICATIVE, &error),
            vec![
                "Ошибка: неверное количество операндов: 3".to_string(),
                "Требуется: от 5 до 7 операндов".to_string(),
            ]
        );
        assert_eq!(
            diagnostic_lines(&Tool::STATISTICS, &CalcError::MissingOperation),
            vec![
                "Ошибка: не указана операция".to_string(),
                "Используйте --help для получения справки".to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluation_diagnostics_have_runtime_prefix() {
        assert_eq!(
            diagnostic_lines(&Tool::MULTIPLICATIVE, &CalcError::DivisionByZero),
            vec!["Ошибка выполнения: Деление на ноль невозможно".to_string()]
        );
    }

    #[test]
    fn test_help_lists_tool_operations() {
        let help = console::strip_ansi_codes(&help_text(&Tool::MULTIPLICATIVE)).to_string();
        assert!(help.starts_with("Мультипликативный калькулятор (вариант 19)\n"));
        assert!(help.contains("  multiply - умножение (5-7 операндов)"));
        assert!(help.contains("  divide   - деление первого операнда на все остальные (5-7 операндов)"));
        assert!(help.contains("calculator -o multiply 2 3 4 5 6"));
        assert!(help.ends_with("Количество операндов: от 5 до 7\n"));

        let help = console::strip_ansi_codes(&help_text(&Tool::STATISTICS)).to_string();
        assert!(help.contains("  mean   - среднее арифметическое (8-10 операндов)"));
        assert!(help.contains("-h, --help, /?"));
        assert!(!help.contains("multiply"));
    }
}
