//! 표준 마디 간격 조회.

use madi_core::{node_labels, DecimalExt, StepTable};

/// 간격 테이블을 위치, 마디 번호, 간격 순으로 나열합니다.
pub fn format_steps(steps: &StepTable<'_>) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:>4} {:>6} {:>8}\n", "POS", "NODE", "GAP"));
    output.push_str(&"-".repeat(20));
    output.push('\n');

    for (position, (gap, label)) in steps.gaps().iter().zip(node_labels()).enumerate() {
        let label = label.to_string();
        let padding = if label.is_ascii() { 6 } else { 4 };
        output.push_str(&format!(
            "{:>4} {:>width$} {:>8}\n",
            position,
            label,
            gap.to_step_string(),
            width = padding
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} gaps", steps.len()));
    output
}

/// 표준 간격 테이블을 출력합니다.
pub fn print_steps() {
    println!("{}", format_steps(&StepTable::standard()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_standard_steps() {
        let text = format_steps(&StepTable::standard());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 49 + 2);
        assert_eq!(lines[2], "   0     24     0.60");
        assert_eq!(lines[26], "  24   시가        0");
        assert_eq!(lines[50], "  48     24     0.65");
        assert!(text.ends_with("Total: 49 gaps"));
    }
}
