use crate::interpreter::source::Position;

/// Renders a message with the source lines around `position`.
///
/// Without source text the message is returned unchanged. Otherwise the
/// previous line, the offending line (marked with `>`), a caret under the
/// offending column and the next line follow the message, each prefixed with
/// its line number.
///
/// # Example
/// ```
/// use arrowlang::{diagnostic::render, interpreter::source::Position};
///
/// let source = "int main {\n    ret x;\n}";
/// let rendered = render("Unknown identifier 'x'.", Position::new(2, 9), Some(source));
///
/// assert_eq!(rendered,
///            "Unknown identifier 'x'.\n   1 | int main {\n>  2 |     ret x;\n     |         ^\n   3 | }");
/// ```
#[must_use]
pub fn render(message: &str, position: Position, source: Option<&str>) -> String {
    let Some(source) = source else {
        return message.to_string();
    };

    let lines: Vec<&str> = source.lines().collect();
    let Some(index) = position.line.checked_sub(1).filter(|index| *index < lines.len()) else {
        return message.to_string();
    };

    let mut rendered = vec![message.to_string()];
    if let Some(previous) = index.checked_sub(1).and_then(|i| lines.get(i)) {
        rendered.push(format!(" {index:>3} | {previous}"));
    }

    rendered.push(format!(">{:>3} | {}", index + 1, lines[index]));
    rendered.push(format!("     | {}^", " ".repeat(position.column.saturating_sub(1))));

    if let Some(next) = lines.get(index + 1) {
        rendered.push(format!(" {:>3} | {next}", index + 2));
    }

    rendered.join("\n")
}
