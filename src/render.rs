//! HTML Presentation Adapter
//!
//! Turns the typed view models into markup. This is the only module that
//! produces HTML, and every piece of place-supplied text (names, memos,
//! addresses, raw category ids, image filenames) passes through
//! [`escape_html`] on the way out.

use crate::session::Session;
use crate::view::card::{CardList, CardMedia, CardView, EMPTY_STATE_EMOJI, EMPTY_STATE_MESSAGE};
use crate::view::filter::{FilterBar, ACTIVE_FOREGROUND};
use crate::view::overlay::{DetailOverlay, PlaceDetail};
use crate::view::format_date_short;

/// Escape text for use in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full page for the current session and UI state
pub fn render_page(
    session: &Session,
    bar: &FilterBar,
    cards: &CardList,
    overlay: &DetailOverlay,
) -> String {
    let title = escape_html(session.config().title());
    let subtitle = escape_html(session.config().subtitle());
    let last_updated = session
        .places()
        .latest_date()
        .map(|date| {
            format!(
                "    <p id=\"last-updated\">{}</p>\n",
                escape_html(&format_date_short(date))
            )
        })
        .unwrap_or_default();

    let body_class = if overlay.scroll_locked() {
        " class=\"no-scroll\""
    } else {
        ""
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"ja\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"style.css\">\n\
         </head>\n\
         <body{body_class}>\n\
         <header>\n\
         \x20   <h1 id=\"site-title\">{title}</h1>\n\
         \x20   <p id=\"site-subtitle\">{subtitle}</p>\n\
         {last_updated}\
         </header>\n\
         {filters}\
         {cards}\
         {overlay}\
         </body>\n\
         </html>\n",
        filters = render_filter_bar(bar),
        cards = render_cards(cards),
        overlay = render_overlay(overlay),
    )
}

/// Render the filter controls, marking the single active one
pub fn render_filter_bar(bar: &FilterBar) -> String {
    let mut out = String::from("<div id=\"filters\">\n");
    for button in bar.buttons() {
        let class = if button.active {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        let style = if button.active {
            format!(
                " style=\"background: {}; color: {}\"",
                escape_html(button.active_background()),
                ACTIVE_FOREGROUND
            )
        } else {
            String::new()
        };
        let color_attr = button
            .color
            .as_deref()
            .map(|c| format!(" data-color=\"{}\"", escape_html(c)))
            .unwrap_or_default();
        out.push_str(&format!(
            "  <button class=\"{class}\" data-category=\"{id}\"{color_attr}{style}>{label}</button>\n",
            id = escape_html(&button.id),
            label = escape_html(&button.label),
        ));
    }
    out.push_str("</div>\n");
    out
}

/// Render the card grid, or the empty-state placeholder
pub fn render_cards(cards: &CardList) -> String {
    let mut out = String::from("<div id=\"cards\">\n");
    match cards {
        CardList::Empty => {
            out.push_str(&format!(
                "  <div class=\"empty-state\">\n\
                 \x20   <div class=\"empty-state-emoji\">{EMPTY_STATE_EMOJI}</div>\n\
                 \x20   <p>{EMPTY_STATE_MESSAGE}</p>\n\
                 \x20 </div>\n"
            ));
        }
        CardList::Cards(cards) => {
            for card in cards {
                out.push_str(&render_card(card));
            }
        }
    }
    out.push_str("</div>\n");
    out
}

fn render_card(card: &CardView) -> String {
    let media = match &card.media {
        CardMedia::Image { src, alt } => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(src),
            escape_html(alt)
        ),
        CardMedia::Emoji(emoji) => {
            format!("<span class=\"card-emoji\">{}</span>", escape_html(emoji))
        }
    };
    let memo = card
        .memo
        .as_deref()
        .map(|m| format!("    <p class=\"card-memo\">{}</p>\n", escape_html(m)))
        .unwrap_or_default();

    format!(
        "  <div class=\"card\">\n\
         \x20   <div class=\"card-image\" style=\"background: {gradient}\">{media}</div>\n\
         \x20   <div class=\"card-body\">\n\
         \x20     <span class=\"card-category\" style=\"background: {color}\">{label}</span>\n\
         \x20     <h3 class=\"card-title\">{name}</h3>\n\
         \x20     <p class=\"card-date\">{date}</p>\n\
         {memo}\
         \x20   </div>\n\
         \x20 </div>\n",
        gradient = escape_html(&card.header_gradient),
        color = escape_html(&card.category_color),
        label = escape_html(&card.category_label),
        name = escape_html(&card.name),
        date = escape_html(&card.date_label),
    )
}

/// Render the overlay: populated when shown, an empty hidden shell otherwise
pub fn render_overlay(overlay: &DetailOverlay) -> String {
    match overlay.detail() {
        Some(detail) => render_detail(detail),
        None => "<div id=\"modal\" class=\"hidden\"></div>\n".to_string(),
    }
}

fn render_detail(detail: &PlaceDetail) -> String {
    let image = detail
        .image
        .as_deref()
        .map(|src| {
            format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(src),
                escape_html(&detail.name)
            )
        })
        .unwrap_or_default();

    format!(
        "<div id=\"modal\">\n\
         \x20 <div class=\"modal-overlay\"></div>\n\
         \x20 <div class=\"modal-content\">\n\
         \x20   <button class=\"close-btn\">×</button>\n\
         \x20   <div class=\"place-image\">{image}</div>\n\
         \x20   <span class=\"category-badge\" style=\"background: {color}\">{badge}</span>\n\
         \x20   <h2 class=\"place-name\">{name}</h2>\n\
         \x20   <p class=\"visit-date\">{date}</p>\n\
         \x20   <p class=\"place-memo\">{memo}</p>\n\
         \x20   <p class=\"place-address\">{address}</p>\n\
         \x20 </div>\n\
         </div>\n",
        color = escape_html(&detail.badge_color),
        badge = escape_html(&detail.badge_label),
        name = escape_html(&detail.name),
        date = escape_html(&detail.date_label),
        memo = escape_html(&detail.memo),
        address = escape_html(&detail.address),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::place::Place;
    use crate::view::card::CardList;
    use crate::view::filter::FilterBar;

    fn session(places_json: &str) -> Session {
        let config: SiteConfig = serde_json::from_str(
            r##"{"siteTitle": "T", "categories": [{"id": "cafe", "label": "Cafe", "emoji": "☕", "color": "#ff0000"}]}"##,
        )
        .unwrap();
        let records: Vec<Place> = serde_json::from_str(places_json).unwrap();
        Session::from_parts(config, records)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_empty_state_has_marker_and_no_cards() {
        let html = render_cards(&CardList::Empty);
        assert!(html.contains("empty-state"));
        assert!(html.contains("まだ記録がありません"));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_cards_render_one_element_per_place() {
        let session = session(
            r#"[{"name": "A", "date": "2023-01-01", "category": "cafe"},
                {"name": "B", "date": "2023-06-01", "category": "cafe", "memo": "good"}]"#,
        );
        let grid = CardList::build(session.places().canonical(), session.categories());
        let html = render_cards(&grid);

        assert_eq!(html.matches("<div class=\"card\">").count(), 2);
        // Canonical order is newest first, so B renders before A.
        assert!(html.find(">B<").unwrap() < html.find(">A<").unwrap());
        assert_eq!(html.matches("card-memo").count(), 1);
    }

    #[test]
    fn test_place_text_is_escaped() {
        let session = session(
            r#"[{"name": "<script>x</script>", "date": "2023-01-01", "category": "cafe", "memo": "a & b"}]"#,
        );
        let grid = CardList::build(session.places().canonical(), session.categories());
        let html = render_cards(&grid);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_filter_bar_marks_active_button() {
        let session = session("[]");
        let mut bar = FilterBar::new(&session.config().categories);
        bar.select("cafe");
        let html = render_filter_bar(&bar);

        assert_eq!(html.matches("filter-btn active").count(), 1);
        assert!(html.contains("data-category=\"cafe\""));
        assert!(html.contains("background: #ff0000; color: #fff"));
        assert!(html.contains("すべて"));
    }

    #[test]
    fn test_page_includes_header_and_last_updated() {
        let session = session(r#"[{"name": "A", "date": "2023-06-01", "category": "cafe"}]"#);
        let bar = FilterBar::new(&session.config().categories);
        let grid = CardList::build(session.places().canonical(), session.categories());
        let html = render_page(&session, &bar, &grid, &DetailOverlay::Hidden);

        assert!(html.contains("<title>T</title>"));
        assert!(html.contains("id=\"site-title\">T<"));
        assert!(html.contains("2023/6/1"));
        assert!(html.contains("id=\"modal\" class=\"hidden\""));
        assert!(!html.contains("no-scroll"));
    }

    #[test]
    fn test_shown_overlay_locks_scroll_and_renders_detail() {
        let session = session(r#"[{"name": "A", "date": "2023-06-01", "category": "cafe"}]"#);
        let bar = FilterBar::new(&session.config().categories);
        let grid = CardList::build(session.places().canonical(), session.categories());

        let mut overlay = DetailOverlay::default();
        overlay.open(&session.places().canonical()[0], session.categories());
        let html = render_page(&session, &bar, &grid, &overlay);

        assert!(html.contains("no-scroll"));
        assert!(html.contains("place-name\">A<"));
        assert!(html.contains("category-badge"));
    }
}
