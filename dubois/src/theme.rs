//! The Du Bois table theme.
//!
//! Styles a dataset after the hand-drawn data portraits W.E.B. Du Bois
//! prepared for the 1900 Paris Exposition: parchment background, alice-blue
//! heading, a Baskerville font stack, equal column widths, bold capitalized
//! column labels and dark-gray body rules.
//!
//! ## Example
//!
//! ```rust
//! use dubois::{dubois_table, Frame, ThemeOptions};
//! use serde_json::json;
//!
//! let frame = Frame::new(["year", "life_expectancy"])
//!     .with_row([json!(1900), json!(47.3)]);
//!
//! let table = dubois_table(
//!     &frame,
//!     ThemeOptions::new()
//!         .title("Life Expectancy")
//!         .source_note("U.S. Census"),
//! )?;
//!
//! assert_eq!(table.column_label("life_expectancy"), Some("Life Expectancy"));
//! assert_eq!(table.options().table_width.unwrap().to_string(), "270px");
//! # Ok::<(), dubois::Error>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::Dataset;
use crate::error::Error;
use crate::output::{
    Font, FontWeight, Length, RenderOptions, StyledTable, TableBuilder, TableLayout, TableOptions,
    TextTransform,
};
use crate::Result;

/// Horizontal pixel allowance per column.
pub const PX_PER_COLUMN: u32 = 135;

/// Fixed visual settings of a theme.
///
/// `Default` is the Du Bois palette. Deserializing fills missing fields from
/// it, so a partial JSON document describes a variant of the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: String,
    pub font_size: Length,
    pub heading_background_color: String,
    pub layout: TableLayout,
    pub column_labels_font_weight: FontWeight,
    pub column_labels_text_transform: TextTransform,
    pub body_hlines_color: String,
    /// Font stack, most preferred first
    pub fonts: Vec<Font>,
    pub px_per_column: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::dubois()
    }
}

impl ThemeConfig {
    /// The Du Bois theme.
    pub fn dubois() -> Self {
        Self {
            background_color: "#F5F2E1".to_string(),
            font_size: Length::px(13.0),
            heading_background_color: "aliceblue".to_string(),
            layout: TableLayout::Auto,
            column_labels_font_weight: FontWeight::Bold,
            column_labels_text_transform: TextTransform::Capitalize,
            body_hlines_color: "darkgray".to_string(),
            // Web fonts first; the rest cover renderers that cannot load them.
            fonts: vec![
                Font::google("Baskervville SC"),
                Font::google("Libre Baskerville"),
                Font::system("Baskerville"),
                Font::system("Georgia"),
                Font::system("Serif"),
            ],
            px_per_column: PX_PER_COLUMN,
        }
    }

    /// Table-wide options for a table `width` wide.
    pub fn table_options(&self, width: Length) -> TableOptions {
        TableOptions::new()
            .table_background_color(self.background_color.as_str())
            .table_font_size(self.font_size)
            .heading_background_color(self.heading_background_color.as_str())
            .table_width(width)
            .table_layout(self.layout)
            .column_labels_font_weight(self.column_labels_font_weight)
            .column_labels_text_transform(self.column_labels_text_transform)
            .table_body_hlines_color(self.body_hlines_color.as_str())
    }
}

/// Per-call inputs to [`dubois_table`].
#[derive(Debug, Clone, Default)]
pub struct ThemeOptions {
    /// Main title above the table; no header is added without one
    pub title: Option<String>,
    /// Secondary title, shown only together with `title`
    pub subtitle: Option<String>,
    /// Attribution shown below the table
    pub source_note: Option<String>,
    /// Forwarded untouched to [`TableBuilder::new`]
    pub render: RenderOptions,
    pub theme: ThemeConfig,
}

impl ThemeOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn source_note(mut self, note: impl Into<String>) -> Self {
        self.source_note = Some(note.into());
        self
    }

    /// Set the constructor options passed through to the builder.
    pub fn render(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    pub fn theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }
}

/// Style `data` with the Du Bois theme.
///
/// Every column gets an equal share of the table width, which is
/// `px_per_column` pixels per column. Column names are turned into labels
/// with [`column_label`].
///
/// # Errors
///
/// - [`Error::ZeroColumns`] if the dataset has no columns; nothing is built.
/// - Whatever [`TableBuilder`] rejects in `options.render`, unchanged.
pub fn dubois_table<D: Dataset>(data: D, options: ThemeOptions) -> Result<StyledTable<D>> {
    let ThemeOptions {
        title,
        subtitle,
        source_note,
        render,
        theme,
    } = options;

    let n_cols = data.num_columns();
    let col_width = equal_column_width(n_cols)?;
    let width = table_width(n_cols, theme.px_per_column);
    let labels = column_labels(data.column_names());
    let widths: Vec<(String, Length)> = data
        .column_names()
        .iter()
        .map(|name| (name.clone(), col_width))
        .collect();

    debug!(
        "dubois theme: {} columns x {} rows, table width {}, column width {}",
        n_cols,
        data.num_rows(),
        width,
        col_width
    );

    let mut builder = TableBuilder::new(data, render)?
        .tab_options(theme.table_options(width))
        .opt_table_font(theme.fonts)
        .cols_label(labels)?
        .cols_width(widths)?;

    if let Some(title) = title {
        builder = builder.tab_header(title, subtitle);
    }

    if let Some(note) = source_note {
        builder = builder.tab_source_note(note);
    }

    Ok(builder.build())
}

/// Equal share of 100% for each of `n_cols` columns.
pub fn equal_column_width(n_cols: usize) -> Result<Length> {
    if n_cols == 0 {
        return Err(Error::ZeroColumns);
    }
    Ok(Length::pct(100.0 / n_cols as f64))
}

/// Total table width: `px_per_column` pixels per column.
pub fn table_width(n_cols: usize, px_per_column: u32) -> Length {
    Length::px(n_cols as f64 * f64::from(px_per_column))
}

/// Display label for a raw column name.
///
/// Underscores become spaces, then each word is title-cased: a cased letter
/// following an uncased character takes its titlecase form and every other
/// cased letter is lower-cased. Titlecase is the first character of the
/// upper-case expansion followed by the rest in lower case (`ß` → `Ss`,
/// `ﬁ` → `Fi`), except for letters with a dedicated titlecase form (`ǆ` →
/// `ǅ`, `ᾳ` → `ᾼ`). Multi-character titlecase mappings that keep a second
/// capital (`ŉ` → `ʼN`) come out as `ʼn`.
///
/// ```rust
/// use dubois::column_label;
///
/// assert_eq!(column_label("life_expectancy"), "Life Expectancy");
/// assert_eq!(column_label("GDP_per_capita"), "Gdp Per Capita");
/// ```
pub fn column_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    let mut prev_cased = false;

    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        let cased = c.is_uppercase() || c.is_lowercase() || is_titlecase(c);
        if cased && !prev_cased {
            push_titlecase(&mut label, c);
        } else if cased {
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
        prev_cased = cased;
    }

    label
}

fn push_titlecase(label: &mut String, c: char) {
    if let Some(t) = titlecase_form(c) {
        label.push(t);
        return;
    }
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        label.push(first);
        label.extend(upper.flat_map(char::to_lowercase));
    }
}

/// Letters of the Lt (titlecase) category.
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Single-character titlecase forms that differ from the upper-case one.
fn titlecase_form(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        // Greek with ypogegrammeni: lower case sits 8 below its titlecase
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        c if is_titlecase(c) => Some(c),
        _ => None,
    }
}

/// `(name, label)` pairs for every column, in column order.
pub fn column_labels(names: &[String]) -> Vec<(String, String)> {
    names
        .iter()
        .map(|name| (name.clone(), column_label(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;
    use proptest::prelude::*;
    use serde_json::json;

    fn census() -> Frame {
        Frame::new(["state", "negro_population", "percent_of_total"])
            .with_row([json!("Georgia"), json!(1_034_813), json!(46.7)])
    }

    #[test]
    fn test_column_label() {
        assert_eq!(column_label("life_expectancy"), "Life Expectancy");
        assert_eq!(column_label("year"), "Year");
        assert_eq!(column_label("GDP_per_capita"), "Gdp Per Capita");
        assert_eq!(column_label("x2y"), "X2Y");
        assert_eq!(column_label("__lead"), "  Lead");
        assert_eq!(column_label(""), "");
    }

    #[test]
    fn test_column_label_titlecase_forms() {
        assert_eq!(column_label("straße_ßa"), "Straße Ssa");
        assert_eq!(column_label("ﬁle_size"), "File Size");
        assert_eq!(column_label("\u{01C6}x_\u{01C4}y"), "\u{01C5}x \u{01C5}y");
        assert_eq!(column_label("x\u{01C5}"), "X\u{01C6}");
        assert_eq!(column_label("\u{1FB3}_\u{1F80}"), "\u{1FBC} \u{1F88}");
    }

    #[test]
    fn test_column_labels_keep_order() {
        let names = vec!["b_col".to_string(), "a_col".to_string()];
        assert_eq!(
            column_labels(&names),
            vec![
                ("b_col".to_string(), "B Col".to_string()),
                ("a_col".to_string(), "A Col".to_string()),
            ]
        );
    }

    #[test]
    fn test_equal_column_width() {
        assert_eq!(equal_column_width(1).unwrap(), Length::pct(100.0));
        assert_eq!(equal_column_width(4).unwrap(), Length::pct(25.0));
        assert_eq!(equal_column_width(0), Err(Error::ZeroColumns));
    }

    #[test]
    fn test_table_width() {
        assert_eq!(table_width(3, PX_PER_COLUMN), Length::px(405.0));
        assert_eq!(table_width(1, 200), Length::px(200.0));
    }

    #[test]
    fn test_theme_options_applied() {
        let table = dubois_table(census(), ThemeOptions::new()).unwrap();
        let options = table.options();
        assert_eq!(options.table_background_color.as_deref(), Some("#F5F2E1"));
        assert_eq!(options.table_font_size, Some(Length::px(13.0)));
        assert_eq!(options.heading_background_color.as_deref(), Some("aliceblue"));
        assert_eq!(options.table_width, Some(Length::px(405.0)));
        assert_eq!(options.table_layout, Some(TableLayout::Auto));
        assert_eq!(options.column_labels_font_weight, Some(FontWeight::Bold));
        assert_eq!(
            options.column_labels_text_transform,
            Some(TextTransform::Capitalize)
        );
        assert_eq!(options.table_body_hlines_color.as_deref(), Some("darkgray"));
    }

    #[test]
    fn test_font_stack() {
        let table = dubois_table(census(), ThemeOptions::new()).unwrap();
        let families: Vec<&str> = table.fonts().iter().map(Font::family).collect();
        assert_eq!(
            families,
            ["Baskervville SC", "Libre Baskerville", "Baskerville", "Georgia", "Serif"]
        );
        assert!(table.fonts()[0].import_url().is_some());
        assert!(table.fonts()[4].import_url().is_none());
    }

    #[test]
    fn test_every_column_gets_equal_width() {
        let table = dubois_table(census(), ThemeOptions::new()).unwrap();
        assert_eq!(table.column_widths().len(), 3);
        for (_, width) in table.column_widths() {
            assert_eq!(*width, Length::pct(100.0 / 3.0));
        }
    }

    #[test]
    fn test_no_title_no_header() {
        let table = dubois_table(census(), ThemeOptions::new().subtitle("ignored")).unwrap();
        assert!(table.header().is_none());
    }

    #[test]
    fn test_zero_columns_fails() {
        let err = dubois_table(Frame::default(), ThemeOptions::new().title("Empty")).unwrap_err();
        assert_eq!(err, Error::ZeroColumns);
    }

    #[test]
    fn test_custom_theme() {
        let theme = ThemeConfig {
            px_per_column: 100,
            background_color: "white".to_string(),
            ..ThemeConfig::dubois()
        };
        let table = dubois_table(census(), ThemeOptions::new().theme(theme)).unwrap();
        assert_eq!(table.options().table_width, Some(Length::px(300.0)));
        assert_eq!(
            table.options().table_background_color.as_deref(),
            Some("white")
        );
    }

    #[test]
    fn test_theme_config_partial_json() {
        let theme: ThemeConfig =
            serde_json::from_value(json!({"heading_background_color": "crimson"})).unwrap();
        assert_eq!(theme.heading_background_color, "crimson");
        assert_eq!(theme.px_per_column, PX_PER_COLUMN);
        assert_eq!(theme.fonts, ThemeConfig::dubois().fonts);
    }

    proptest! {
        #[test]
        fn prop_layout_scales_with_column_count(n in 1usize..500) {
            prop_assert_eq!(equal_column_width(n).unwrap(), Length::pct(100.0 / n as f64));
            prop_assert_eq!(table_width(n, PX_PER_COLUMN), Length::px(135.0 * n as f64));
        }

        #[test]
        fn prop_label_has_no_underscores(name in "[a-z_]{0,24}") {
            let label = column_label(&name);
            prop_assert!(!label.contains('_'));
            prop_assert_eq!(label.chars().count(), name.chars().count());
        }

        #[test]
        fn prop_label_words_capitalized(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
            let label = column_label(&words.join("_"));
            for (word, got) in words.iter().zip(label.split(' ')) {
                let mut expected = word[..1].to_uppercase();
                expected.push_str(&word[1..]);
                prop_assert_eq!(got, expected);
            }
        }
    }
}
