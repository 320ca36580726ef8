/// Format integer cents as dollars with two decimals and thousands
/// separators. This is the only place cents are divided by 100; the engine
/// itself never leaves integer arithmetic.
///
/// # Examples
/// ```
/// use engine::format::format_cents;
/// assert_eq!(format_cents(150000), "1,500.00");
/// assert_eq!(format_cents(42), "0.42");
/// assert_eq!(format_cents(-50), "-0.50");
/// ```
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rem = abs % 100;

    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}{}.{:02}", sign, grouped, rem)
}
