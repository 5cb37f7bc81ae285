//! Console text parsing

/// Split console text into individual command lines
///
/// Commands are separated by `;` or newlines. Separators inside double
/// quotes don't split. Empty lines are dropped.
pub fn split_commands(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in text.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                current.push(c);
            }
            ';' | '\n' if !quoted => {
                push_line(&mut lines, &mut current);
            }
            '\n' => {
                // An unterminated quote never spans lines
                quoted = false;
                push_line(&mut lines, &mut current);
            }
            _ => current.push(c),
        }
    }
    push_line(&mut lines, &mut current);

    lines
}

fn push_line(lines: &mut Vec<String>, current: &mut String) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
}

/// Tokenize one command line
///
/// Tokens are separated by whitespace. Double quotes group a token and are
/// stripped. `//` outside quotes starts a comment.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let Some(&c) = chars.peek() else {
            break;
        };

        if c == '"' {
            chars.next();
            let mut token = String::new();
            for c in chars.by_ref() {
                if c == '"' {
                    break;
                }
                token.push(c);
            }
            tokens.push(token);
            continue;
        }

        let mut token = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '"' {
                break;
            }
            if c == '/' && token.ends_with('/') {
                token.pop();
                if !token.is_empty() {
                    tokens.push(token);
                }
                return tokens;
            }
            token.push(c);
            chars.next();
        }
        tokens.push(token);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_commands() {
        assert_eq!(split_commands("a 1; b 2\nc"), vec!["a 1", "b 2", "c"]);
        assert_eq!(split_commands("echo \"x;y\"; z"), vec!["echo \"x;y\"", "z"]);
        assert!(split_commands(" ;; \n").is_empty());
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("vid_setmode 800 600"), vec!["vid_setmode", "800", "600"]);
        assert_eq!(tokenize("  name   \"two words\" x"), vec!["name", "two words", "x"]);
        assert_eq!(tokenize("echo \"\""), vec!["echo", ""]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_comments() {
        assert_eq!(tokenize("fullscreen 1 // go big"), vec!["fullscreen", "1"]);
        assert_eq!(tokenize("fullscreen 1// go big"), vec!["fullscreen", "1"]);
        assert_eq!(tokenize("echo \"a // b\""), vec!["echo", "a // b"]);
        assert!(tokenize("// nothing").is_empty());
    }
}
