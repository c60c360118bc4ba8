use std::fmt::Write as _;

use mealswipe_shared::Meal;

use crate::display::SlotView;

pub const SWIPE_HINT: &str = "Swipe left or right to see more options";

/// Lines of description shown on a card before it is cut off.
const DESCRIPTION_LINES: usize = 3;

/// Text rendering of a single meal.
#[derive(Debug, Clone, Copy)]
pub struct MealCard<'a> {
    meal: &'a Meal,
    width: usize,
}

impl<'a> MealCard<'a> {
    pub fn new(meal: &'a Meal) -> Self {
        Self { meal, width: 48 }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(8);
        self
    }

    pub fn accessibility_label(&self) -> String {
        format!("View details for {}", self.meal.name)
    }

    /// Description wrapped to the card width, at most three lines, with an
    /// ellipsis when text was dropped.
    pub fn description_lines(&self) -> Vec<String> {
        let mut lines = wrap(&self.meal.description, self.width);
        if lines.len() > DESCRIPTION_LINES {
            lines.truncate(DESCRIPTION_LINES);
            if let Some(last) = lines.last_mut() {
                while last.chars().count() + 3 > self.width && last.pop().is_some() {}
                last.push_str("...");
            }
        }

        lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.meal.name);
        for line in self.description_lines() {
            let _ = writeln!(out, "  {line}");
        }
        let _ = write!(out, "  [{}] {}", self.meal.cuisine, self.meal.price);

        out
    }
}

/// Greedy word wrap. Words longer than `width` are split across lines.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    let chars: Vec<Vec<char>> = text.split_whitespace().map(|w| w.chars().collect()).collect();
    let pieces = chars.iter().flat_map(|word| word.chunks(width.max(1)));

    for piece in pieces {
        let word: String = piece.iter().collect();
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Render a whole menu: a heading per slot, then the current card or the
/// empty-state placeholder, followed by the swipe hint.
pub fn render_menu(views: &[SlotView<'_>], width: usize) -> String {
    let mut out = String::new();

    for view in views {
        let slot = view.slot();
        let _ = writeln!(out, "== {} ==", slot.title());
        match view {
            SlotView::Meal {
                meal, index, total, ..
            } => {
                let _ = writeln!(out, "{}", MealCard::new(meal).width(width).render());
                let _ = writeln!(out, "  ({}/{})", index + 1, total);
            }
            SlotView::Empty { .. } => {
                let _ = writeln!(out, "  {}", SlotView::placeholder(slot));
            }
        }
        out.push('\n');
    }
    out.push_str(SWIPE_HINT);

    out
}
