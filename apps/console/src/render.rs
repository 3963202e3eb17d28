//! # Screen Renderer
//!
//! Pure projection of [`CatalogState`] and [`ConfigState`] into the text
//! screen. Nothing here mutates state or touches the terminal.
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product Management                                                     │
//! │  Search: [pen      ]  View: list            [+ Add Product]             │
//! │                                                                         │
//! │  ID | Name          | Category   | Price | Stock | Actions              │
//! │  ---+---------------+------------+-------+-------+----------------      │
//! │  7  | Ballpoint Pen | Stationery | ₹15   | 1000  | [Edit] [Delete]      │
//! │                                                                         │
//! │  (First) (Prev)  Page 1 of 1  (Next) (Last)                             │
//! │                                                                         │
//! │  ── Add Product ─────────────── (only while the form is open)           │
//! │  Delete "Backpack" (#9)? [y/N]  (only while a delete is pending)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Disabled buttons are drawn in parentheses, enabled ones in brackets.

use catalog_core::{FormField, PageControls, PageNav, Product, ViewMode};

use crate::state::{CatalogState, ConfigState, FormState};

const TITLE: &str = "Product Management";
const EMPTY_MESSAGE: &str = "No products found";
const CARD_WIDTH: usize = 30;
const FORM_LABEL_WIDTH: usize = 12;

/// Renders the whole screen.
pub fn render_screen(state: &CatalogState, config: &ConfigState) -> String {
    let mut lines = Vec::new();

    lines.extend(render_header(state));
    lines.push(String::new());

    let page = state.current_page();
    match state.view().view_mode {
        ViewMode::List => lines.extend(render_list(&page.items, config)),
        ViewMode::Card => lines.extend(render_cards(&page.items, config)),
    }

    lines.push(String::new());
    lines.push(render_pagination(state.page_controls()));

    if let Some(form) = state.form() {
        lines.push(String::new());
        lines.extend(render_form(form));
    }

    if let Some(id) = state.pending_delete() {
        lines.push(String::new());
        let name = state
            .store()
            .get(id)
            .map(|p| p.name.as_str())
            .unwrap_or("this product");
        lines.push(format!("Delete \"{}\" (#{})? [y/N]", name, id));
    }

    let mut screen = lines.join("\n");
    screen.push('\n');
    screen
}

// =============================================================================
// Header
// =============================================================================

fn render_header(state: &CatalogState) -> Vec<String> {
    let view = state.view();
    let pending = if state.search_pending() {
        "  (searching...)"
    } else {
        ""
    };

    vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        format!(
            "Search: [{}]{}  View: {}  [+ Add Product]",
            view.search_query, pending, view.view_mode
        ),
    ]
}

// =============================================================================
// List View
// =============================================================================

const LIST_HEADERS: [&str; 6] = ["ID", "Name", "Category", "Price", "Stock", "Actions"];
const LIST_ACTIONS: &str = "[Edit] [Delete]";

fn render_list(items: &[Product], config: &ConfigState) -> Vec<String> {
    let rows: Vec<[String; 6]> = items
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.category.clone(),
                config.format_price(p.price),
                p.stock.to_string(),
                LIST_ACTIONS.to_string(),
            ]
        })
        .collect();

    let mut widths = LIST_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![
        table_row(LIST_HEADERS.iter().copied(), &widths),
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    ];

    if rows.is_empty() {
        lines.push(EMPTY_MESSAGE.to_string());
    } else {
        lines.extend(
            rows.iter()
                .map(|row| table_row(row.iter().map(String::as_str), &widths)),
        );
    }

    lines
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

// =============================================================================
// Card View
// =============================================================================

fn render_cards(items: &[Product], config: &ConfigState) -> Vec<String> {
    if items.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    let mut lines = Vec::new();
    for (row_index, row) in items.chunks(config.card_columns.max(1)).enumerate() {
        if row_index > 0 {
            lines.push(String::new());
        }

        let cards: Vec<Vec<String>> = row.iter().map(|p| render_card(p, config)).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let joined = cards
                .iter()
                .map(|card| card.get(line).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(joined.trim_end().to_string());
        }
    }

    lines
}

fn render_card(product: &Product, config: &ConfigState) -> Vec<String> {
    let inner = CARD_WIDTH - 4;
    let border = format!("+{}+", "-".repeat(CARD_WIDTH - 2));
    let body = [
        product.name.clone(),
        product.category.clone(),
        product.description.clone(),
        config.format_price(product.price),
        format!("Stock: {}", product.stock),
        format!("[Edit #{}] [Delete #{}]", product.id, product.id),
    ];

    let mut card = vec![border.clone()];
    card.extend(
        body.iter()
            .map(|text| format!("| {:<inner$} |", truncate(text, inner), inner = inner)),
    );
    card.push(border);
    card
}

/// Cuts `text` to `max` characters, ending in `~` when shortened.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

// =============================================================================
// Pagination
// =============================================================================

fn render_pagination(controls: PageControls) -> String {
    let button = |nav: PageNav, label: &str| {
        if controls.is_enabled(nav) {
            format!("[{}]", label)
        } else {
            format!("({})", label)
        }
    };

    format!(
        "{} {}  Page {} of {}  {} {}",
        button(PageNav::First, "First"),
        button(PageNav::Prev, "Prev"),
        controls.page,
        controls.total_pages,
        button(PageNav::Next, "Next"),
        button(PageNav::Last, "Last"),
    )
}

// =============================================================================
// Form Modal
// =============================================================================

fn render_form(form: &FormState) -> Vec<String> {
    let title = format!("── {} ", form.title());
    let mut lines = vec![format!("{:─<40}", title)];

    for field in FormField::ALL {
        let label = if field.is_required() {
            format!("{} *", field)
        } else {
            field.to_string()
        };
        lines.push(
            format!(
                "{:<width$}{}",
                label,
                form.draft.get(field),
                width = FORM_LABEL_WIDTH
            )
            .trim_end()
            .to_string(),
        );

        if let Some(error) = form.errors.get(field) {
            lines.push(format!(
                "{:<width$}! {}",
                "",
                error,
                width = FORM_LABEL_WIDTH
            ));
        }
    }

    lines.push("[Save] [Cancel]   (set <field> <value>, save, cancel)".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ProductStore;

    fn seeded() -> CatalogState {
        CatalogState::new(ProductStore::seeded().unwrap(), &ConfigState::default())
    }

    fn render(state: &CatalogState) -> String {
        render_screen(state, &ConfigState::default())
    }

    #[test]
    fn test_header() {
        let screen = render(&seeded());
        let mut lines = screen.lines();
        assert_eq!(lines.next(), Some("Product Management"));
        assert!(screen.contains("Search: []  View: list  [+ Add Product]"));
    }

    #[test]
    fn test_list_view() {
        let screen = render(&seeded());
        assert!(screen.contains("ID | Name"));
        assert!(screen.contains("| Actions"));
        assert!(screen.contains("Wireless Mouse"));
        assert!(screen.contains("₹799"));
        assert!(screen.contains("[Edit] [Delete]"));
        assert!(!screen.contains("Desk Lamp"));
        assert!(screen.contains("(First) (Prev)  Page 1 of 2  [Next] [Last]"));
    }

    #[test]
    fn test_list_columns_align() {
        let screen = render(&seeded());
        let rows: Vec<&str> = screen
            .lines()
            .filter(|line| line.contains("[Edit] [Delete]"))
            .collect();
        assert_eq!(rows.len(), 5);

        let pipe_offsets: Vec<usize> = rows
            .iter()
            .map(|row| row.chars().position(|c| c == '|').unwrap())
            .collect();
        assert!(pipe_offsets.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_empty_results() {
        let mut state = seeded();
        state.type_search("zzz");
        state.commit_search();

        let screen = render(&state);
        assert!(screen.contains("No products found"));
        assert!(screen.contains("(First) (Prev)  Page 1 of 1  (Next) (Last)"));

        state.set_view_mode(ViewMode::Card);
        assert!(render(&state).contains("No products found"));
    }

    #[test]
    fn test_pending_search_marker() {
        let mut state = seeded();
        state.type_search("pen");
        let screen = render(&state);
        assert!(screen.contains("Search: [pen]  (searching...)"));
        assert!(screen.contains("Wireless Mouse"));

        state.commit_search();
        let screen = render(&state);
        assert!(!screen.contains("searching"));
        assert!(screen.contains("Ballpoint Pen"));
        assert!(!screen.contains("Wireless Mouse"));
    }

    #[test]
    fn test_card_view() {
        let mut state = seeded();
        state.set_view_mode(ViewMode::Card);
        let screen = render(&state);

        assert!(screen.contains("View: card"));
        assert!(screen.contains("| Ergonomic wireless mouse"));
        assert!(screen.contains("Stock: 120"));
        assert!(screen.contains("[Edit #1] [Delete #1]"));
        assert!(!screen.contains("ID | Name"));

        // Two cards side by side on the first row.
        let top = screen.lines().find(|l| l.starts_with("+--")).unwrap();
        assert_eq!(top.matches('+').count(), 4);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd~");
    }

    #[test]
    fn test_form_with_errors() {
        let mut state = seeded();
        state.open_add();
        state.edit_field(FormField::Price, "abc").unwrap();
        let _ = state.save_form();

        let screen = render(&state);
        assert!(screen.contains("── Add Product"));
        assert!(screen.contains("Name *"));
        assert!(screen.contains("Price *     abc"));
        assert!(screen.contains("! Valid price required"));
        assert!(screen.contains("! Name is required"));
        assert!(screen.contains("! Category is required"));
        assert!(!screen.contains("! Stock"));
    }

    #[test]
    fn test_edit_form_title() {
        let mut state = seeded();
        state.open_edit(5).unwrap();
        let screen = render(&state);
        assert!(screen.contains("── Edit Product"));
        assert!(screen.contains("Running Shoes"));
    }

    #[test]
    fn test_delete_prompt() {
        let mut state = seeded();
        state.request_delete(3).unwrap();
        assert!(render(&state).contains("Delete \"Notebook\" (#3)? [y/N]"));
    }
}
