//! Small value formatters for stat rows.

/// "120%"
pub fn format_percentage(value: i32) -> String {
    format!("{value}%")
}

/// Signed stat bonus: "+12", "-3". Zero keeps its bare form.
pub fn format_signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
