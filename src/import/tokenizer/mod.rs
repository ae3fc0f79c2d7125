
/// Splits one line into raw fields.
///
/// Fields may be wrapped in double quotes to carry the delimiter, and a doubled
/// quote inside a quoted field stands for one literal quote. Malformed quoting
/// is never an error: an unterminated quote simply runs to the end of the line.
/// Fields are returned untrimmed.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    fields
}
