/// `1234567` → `1,234,567`
pub fn format_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Size in KB with one decimal
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / 1024.0)
}
