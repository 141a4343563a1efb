//! Best-effort typesetting of LaTeX math for terminal display.
//!
//! Only text between `\( \)`, `\[ \]` or `$$ $$` is touched. Inside those
//! regions common commands become Unicode symbols and simple scripts become
//! super/subscript characters. Anything unrecognised is passed through.

/// Turns markup embedded in question text into something readable.
pub trait Typesetter: Send + Sync {
    fn typeset(&self, text: &str) -> String;
}

/// Returns the typesetter to use, or `None` when typesetting is disabled.
pub fn typesetter(enabled: bool) -> Option<Box<dyn Typesetter>> {
    if enabled {
        Some(Box::new(LatexTypesetter))
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LatexTypesetter;

impl Typesetter for LatexTypesetter {
    fn typeset(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some((start, open, close)) = next_opening(rest) {
            let after_open = &rest[start + open.len()..];
            let Some(end) = after_open.find(close) else {
                break;
            };
            out.push_str(&rest[..start]);
            out.push_str(&convert_math(&after_open[..end]));
            rest = &after_open[end + close.len()..];
        }

        out.push_str(rest);
        out
    }
}

const DELIMITERS: [(&str, &str); 3] = [("\\(", "\\)"), ("\\[", "\\]"), ("$$", "$$")];

fn next_opening(text: &str) -> Option<(usize, &'static str, &'static str)> {
    DELIMITERS
        .iter()
        .filter_map(|&(open, close)| text.find(open).map(|pos| (pos, open, close)))
        .min_by_key(|&(pos, _, _)| pos)
}

/// Groups and arguments nested deeper than this are copied through as written.
const MAX_DEPTH: usize = 32;

fn convert_math(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut pos = 0;
    convert_group(&chars, &mut pos, None, 0)
}

/// Copy everything from `pos` to the end of input unchanged.
fn verbatim(chars: &[char], pos: &mut usize) -> String {
    let rest = chars[*pos..].iter().collect();
    *pos = chars.len();
    rest
}

/// Convert until `close` (consumed) or end of input.
fn convert_group(
    chars: &[char],
    pos: &mut usize,
    close: Option<char>,
    depth: usize,
) -> String {
    let mut out = String::new();

    while let Some(&c) = chars.get(*pos) {
        if Some(c) == close {
            *pos += 1;
            return out;
        }
        match c {
            '\\' => out.push_str(&command(chars, pos, depth)),
            '^' | '_' => {
                *pos += 1;
                let arg = argument(chars, pos, depth + 1);
                out.push_str(&script(&arg, c == '^'));
            }
            '{' if depth >= MAX_DEPTH => out.push_str(&verbatim(chars, pos)),
            '{' => {
                *pos += 1;
                out.push_str(&convert_group(chars, pos, Some('}'), depth + 1));
            }
            _ => {
                out.push(c);
                *pos += 1;
            }
        }
    }

    out
}

/// A braced group, a command, or a single character.
fn argument(chars: &[char], pos: &mut usize, depth: usize) -> String {
    if depth >= MAX_DEPTH {
        return verbatim(chars, pos);
    }
    while chars.get(*pos).is_some_and(|c| c.is_whitespace()) {
        *pos += 1;
    }
    match chars.get(*pos) {
        Some('{') => {
            *pos += 1;
            convert_group(chars, pos, Some('}'), depth)
        }
        Some('\\') => command(chars, pos, depth),
        Some(&c) => {
            *pos += 1;
            c.to_string()
        }
        None => String::new(),
    }
}

/// `pos` points at a backslash.
fn command(chars: &[char], pos: &mut usize, depth: usize) -> String {
    *pos += 1;
    let start = *pos;
    while chars.get(*pos).is_some_and(|c| c.is_ascii_alphabetic()) {
        *pos += 1;
    }

    if *pos == start {
        let Some(&symbol) = chars.get(*pos) else {
            return "\\".to_string();
        };
        *pos += 1;
        return match symbol {
            ',' | ';' | ':' | ' ' | '\\' => " ".to_string(),
            '!' => String::new(),
            '{' | '}' | '%' | '$' | '&' | '#' | '_' | '|' => symbol.to_string(),
            _ => format!("\\{}", symbol),
        };
    }

    let name: String = chars[start..*pos].iter().collect();
    match name.as_str() {
        "frac" | "dfrac" | "tfrac" => {
            let numerator = argument(chars, pos, depth + 1);
            let denominator = argument(chars, pos, depth + 1);
            format!("{}/{}", parenthesize(&numerator), parenthesize(&denominator))
        }
        "sqrt" => format!("√{}", parenthesize(&argument(chars, pos, depth + 1))),
        "left" | "right" => {
            if chars.get(*pos) == Some(&'.') {
                *pos += 1;
            }
            String::new()
        }
        "text" | "mathrm" | "mathbf" | "mathit" | "mathsf" | "operatorname" => {
            argument(chars, pos, depth + 1)
        }
        "quad" | "qquad" => " ".to_string(),
        _ => match symbol(&name) {
            Some(symbol) => symbol.to_string(),
            None => unknown_command(chars, pos, &name, depth),
        },
    }
}

/// Keep an unrecognised command and its braced arguments as written.
fn unknown_command(chars: &[char], pos: &mut usize, name: &str, depth: usize) -> String {
    let mut out = format!("\\{}", name);
    while chars.get(*pos) == Some(&'{') && depth + 1 < MAX_DEPTH {
        *pos += 1;
        let arg = convert_group(chars, pos, Some('}'), depth + 1);
        out.push('{');
        out.push_str(&arg);
        out.push('}');
    }
    out
}

fn parenthesize(expr: &str) -> String {
    if expr.chars().count() <= 1 || expr.chars().all(char::is_alphanumeric) {
        expr.to_string()
    } else {
        format!("({})", expr)
    }
}

fn script(arg: &str, superscript: bool) -> String {
    let map: fn(char) -> Option<char> = if superscript {
        superscript_char
    } else {
        subscript_char
    };
    if let Some(mapped) = arg.chars().map(map).collect::<Option<String>>() {
        return mapped;
    }
    let marker = if superscript { '^' } else { '_' };
    if arg.chars().count() == 1 {
        format!("{}{}", marker, arg)
    } else {
        format!("{}({})", marker, arg)
    }
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'n' => 'ⁿ',
        'i' => 'ⁱ',
        'x' => 'ˣ',
        'T' => 'ᵀ',
        '′' => '′',
        _ => return None,
    })
}

fn subscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'x' => 'ₓ',
        _ => return None,
    })
}

fn symbol(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" | "varepsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" => "θ",
        "iota" => "ι",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "pi" => "π",
        "rho" => "ρ",
        "sigma" => "σ",
        "tau" => "τ",
        "upsilon" => "υ",
        "phi" | "varphi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Xi" => "Ξ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        "int" => "∫",
        "iint" => "∬",
        "oint" => "∮",
        "sum" => "∑",
        "prod" => "∏",
        "cdot" => "·",
        "times" => "×",
        "div" => "÷",
        "pm" => "±",
        "mp" => "∓",
        "le" | "leq" => "≤",
        "ge" | "geq" => "≥",
        "ne" | "neq" => "≠",
        "approx" => "≈",
        "equiv" => "≡",
        "sim" => "∼",
        "infty" => "∞",
        "partial" => "∂",
        "nabla" => "∇",
        "to" | "rightarrow" => "→",
        "leftarrow" => "←",
        "Rightarrow" | "implies" => "⇒",
        "Leftrightarrow" | "iff" => "⇔",
        "in" => "∈",
        "notin" => "∉",
        "subset" => "⊂",
        "subseteq" => "⊆",
        "cup" => "∪",
        "cap" => "∩",
        "emptyset" | "varnothing" => "∅",
        "forall" => "∀",
        "exists" => "∃",
        "cdots" => "⋯",
        "ldots" | "dots" => "…",
        "circ" => "∘",
        "angle" => "∠",
        "perp" => "⊥",
        "parallel" => "∥",
        "prime" => "′",
        "sin" => "sin",
        "cos" => "cos",
        "tan" => "tan",
        "log" => "log",
        "ln" => "ln",
        "exp" => "exp",
        "lim" => "lim",
        "max" => "max",
        "min" => "min",
        "det" => "det",
        _ => return None,
    })
}
