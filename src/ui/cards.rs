//! Question card list.

use ratatui::{
    prelude::*,
    widgets::{Block, HighlightSpacing, List, ListItem, ListState, Padding},
};

use crate::render::{CardView, Tone};

const HIGHLIGHT_SYMBOL: &str = "> ";

pub fn render(frame: &mut Frame, area: Rect, cards: &[CardView], selected: Option<usize>) {
    let text_width = (area.width as usize)
        .saturating_sub(HIGHLIGHT_SYMBOL.len() + 2)
        .max(10);

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| card_item(card, text_width))
        .collect();

    let list = List::new(items)
        .block(Block::default().padding(Padding::horizontal(1)))
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_item(card: &CardView, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        card.heading(),
        Style::default().fg(Color::Cyan).bold(),
    ))];

    let badges = badges(card);
    if !badges.spans.is_empty() {
        lines.push(badges);
    }

    let body_style = Style::default().fg(Color::White);
    lines.extend(
        wrap(&card.body, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, body_style))),
    );

    if let Some(answer) = &card.answer {
        lines.push(Line::from(Span::styled(
            answer.toggle_label(),
            Style::default().fg(Color::Blue),
        )));

        if answer.visible {
            let answer_style = Style::default().fg(Color::Green);
            lines.push(Line::from(Span::styled("Answer:", answer_style.bold())));
            lines.extend(
                wrap(&answer.text, width)
                    .into_iter()
                    .map(|line| Line::from(Span::styled(line, answer_style))),
            );
        }
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn badges(card: &CardView) -> Line<'static> {
    let mut spans = Vec::new();

    if let Some(category) = &card.category {
        spans.push(Span::styled(
            format!(" {} ", category),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ));
    }

    if let Some(difficulty) = &card.difficulty {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", difficulty),
            Style::default().fg(Color::Black).bg(tone_color(card.tone)),
        ));
    }

    Line::from(spans)
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Easy => Color::Green,
        Tone::Medium => Color::Yellow,
        Tone::Hard => Color::Red,
        Tone::Neutral => Color::Gray,
    }
}

/// Greedy word wrap on character count. Words longer than `width` are broken
/// across lines.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut len = 0;

        for word in paragraph.split_whitespace().flat_map(|word| pieces(word, width)) {
            let word_len = word.chars().count();
            if len > 0 && len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.push_str(&word);
            len += word_len;
        }

        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pieces(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_keeps_explicit_lines() {
        assert_eq!(wrap("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        assert_eq!(wrap("ab abcdefghij", 4), vec!["ab", "abcd", "efgh", "ij"]);
        assert_eq!(wrap("∫₀^∞e⁻ˣdx", 3), vec!["∫₀^", "∞e⁻", "ˣdx"]);
    }

    #[test]
    fn test_wrap_counts_characters() {
        assert_eq!(wrap("αβγ δεζ", 7), vec!["αβγ δεζ"]);
    }
}
