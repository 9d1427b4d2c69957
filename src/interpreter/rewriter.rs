/// Trigonometric functions whose arguments are read in degrees.
pub const TRIG_FUNCTIONS: &[&str] = &["sin", "cos", "tan"];

/// Postfix marker that tells the evaluator an angle is given in degrees.
pub const DEGREE_MARKER: &str = "deg";

/// A single textual rewrite applied before tokenization.
///
/// Rules are plain functions from text to text so each one can be tested on
/// its own, and the order they run in is visible in [`RULES`].
#[derive(Clone, Copy)]
pub struct RewriteRule {
    /// Short name used in trace logging.
    pub name:  &'static str,
    /// The transformation.
    pub apply: fn(&str) -> String,
}

/// The rewrite pipeline, in application order.
///
/// Later rules must not re-match what earlier rules produced: symbols are
/// normalized first so the trig rule sees plain ASCII names, and percent
/// expansion runs last so it never lands inside an inserted marker.
pub static RULES: &[RewriteRule] = &[RewriteRule { name:  "operator-symbols",
                                                   apply: replace_operator_symbols, },
                                     RewriteRule { name:  "constant-symbols",
                                                   apply: replace_constant_symbols, },
                                     RewriteRule { name:  "trig-degrees",
                                                   apply: wrap_trig_degrees, },
                                     RewriteRule { name:  "percent",
                                                   apply: expand_percent, }];

/// Turns user-facing calculator syntax into evaluator-ready syntax.
///
/// Runs every rule in [`RULES`] in order. This is a total function: input it
/// does not understand passes through unchanged and is rejected later by the
/// lexer or parser.
///
/// # Example
/// ```
/// use calcrs::interpreter::rewriter::rewrite;
///
/// assert_eq!(rewrite("6÷3×2"), "6/3*2");
/// assert_eq!(rewrite("sin(90)"), "sin(90 deg)");
/// assert_eq!(rewrite("200+10%"), "200+10/100");
/// assert_eq!(rewrite("2^π"), "2^pi");
/// ```
#[must_use]
pub fn rewrite(raw: &str) -> String {
    RULES.iter().fold(raw.to_string(), |text, rule| {
                    let next = (rule.apply)(&text);
                    if next != text {
                        log::trace!("rewrite rule {}: {text:?} -> {next:?}", rule.name);
                    }
                    next
                })
}

/// Replaces the division and multiplication signs with `/` and `*`.
#[must_use]
pub fn replace_operator_symbols(text: &str) -> String {
    text.replace('÷', "/").replace('×', "*")
}

/// Replaces the pi and Euler symbols with the identifiers `pi` and `e`.
#[must_use]
pub fn replace_constant_symbols(text: &str) -> String {
    text.replace('π', "pi").replace('ℯ', "e")
}

/// Marks the argument of every flat `sin`, `cos` and `tan` call as degrees.
///
/// A call is flat when its argument reaches the closing parenthesis without
/// opening another one. Flat arguments that already end in the degree marker
/// are left alone, as are calls with nested parentheses.
///
/// # Example
/// ```
/// use calcrs::interpreter::rewriter::wrap_trig_degrees;
///
/// assert_eq!(wrap_trig_degrees("cos(60)+tan(45 deg)"), "cos(60 deg)+tan(45 deg)");
/// assert_eq!(wrap_trig_degrees("sin(sqrt(4))"), "sin(sqrt(4))");
/// ```
#[must_use]
pub fn wrap_trig_degrees(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((name, argument, len)) = match_flat_trig_call(rest) {
            if argument.trim_end().ends_with(DEGREE_MARKER) {
                out.push_str(&rest[..len]);
            } else {
                out.push_str(name);
                out.push('(');
                out.push_str(argument);
                out.push(' ');
                out.push_str(DEGREE_MARKER);
                out.push(')');
            }
            rest = &rest[len..];
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Matches `name(argument)` at the start of `text` for a trig `name` and a
/// non-empty argument free of parentheses.
///
/// Returns the name, the argument and the byte length of the whole call.
fn match_flat_trig_call(text: &str) -> Option<(&'static str, &str, usize)> {
    let name = TRIG_FUNCTIONS.iter()
                             .copied()
                             .find(|name| text.starts_with(name)
                                          && text[name.len()..].starts_with('('))?;
    let body = &text[name.len() + 1..];
    let close = body.find(['(', ')'])?;

    if close == 0 || !body[close..].starts_with(')') {
        return None;
    }

    Some((name, &body[..close], name.len() + 1 + close + 1))
}

/// Expands every `%` to `/100` where it stands.
///
/// Percent therefore binds to the operand immediately before it only:
/// `200+10%` is `200 + 0.1`, not ten percent of 200.
#[must_use]
pub fn expand_percent(text: &str) -> String {
    text.replace('%', "/100")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols() {
        assert_eq!(replace_operator_symbols("8÷2×3"), "8/2*3");
        assert_eq!(replace_operator_symbols("2^3"), "2^3");
    }

    #[test]
    fn constant_symbols() {
        assert_eq!(replace_constant_symbols("2*π+ℯ"), "2*pi+e");
        assert_eq!(replace_constant_symbols("e^2"), "e^2");
    }

    #[test]
    fn trig_arguments_gain_degree_marker() {
        assert_eq!(wrap_trig_degrees("sin(90)"), "sin(90 deg)");
        assert_eq!(wrap_trig_degrees("sin(30)+cos(60)"), "sin(30 deg)+cos(60 deg)");
        assert_eq!(wrap_trig_degrees("tan(45+45)"), "tan(45+45 deg)");
    }

    #[test]
    fn existing_degree_marker_is_kept() {
        assert_eq!(wrap_trig_degrees("sin(90 deg)"), "sin(90 deg)");
        assert_eq!(wrap_trig_degrees("sin(90deg )"), "sin(90deg )");
    }

    #[test]
    fn nested_and_malformed_calls_are_untouched() {
        assert_eq!(wrap_trig_degrees("sin((90))"), "sin((90))");
        assert_eq!(wrap_trig_degrees("cos(2*(3))"), "cos(2*(3))");
        assert_eq!(wrap_trig_degrees("sin()"), "sin()");
        assert_eq!(wrap_trig_degrees("sin(90"), "sin(90");
        assert_eq!(wrap_trig_degrees("sin 90"), "sin 90");
    }

    #[test]
    fn inner_flat_call_is_wrapped_inside_other_call() {
        assert_eq!(wrap_trig_degrees("sqrt(sin(90))"), "sqrt(sin(90 deg))");
    }

    #[test]
    fn non_ascii_text_passes_through() {
        assert_eq!(wrap_trig_degrees("√9 + sin(π)"), "√9 + sin(π deg)");
    }

    #[test]
    fn percent_expands_in_place() {
        assert_eq!(expand_percent("50%"), "50/100");
        assert_eq!(expand_percent("200+10%"), "200+10/100");
        assert_eq!(expand_percent("%"), "/100");
    }

    #[test]
    fn rules_run_in_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(names,
                   vec!["operator-symbols", "constant-symbols", "trig-degrees", "percent"]);
        assert_eq!(rewrite("sin(π)"), "sin(pi deg)");
        assert_eq!(rewrite("cos(50%)"), "cos(50/100 deg)");
        assert_eq!(rewrite("2^3"), "2^3");
    }
}
