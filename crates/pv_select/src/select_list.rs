use std::borrow::Cow;
use std::fmt;

use derive_setters::Setters;
use pv_template::{StartTag, escape_text};
use tracing::{debug, trace};

use crate::SelectOption;

/// Builds the markup of a `<select>` dropdown.
///
/// Options are kept in insertion order, which is also the render order. At
/// most one option is selected at a time. The list is plain data without
/// interior locking, wrap it in a lock to share it between threads.
///
/// ```
/// use pv_select::SelectList;
///
/// let mut list = SelectList::new("colors").size(4);
/// list.add_option("Red", "Color1", false);
/// list.add_option("Blue", "Color2", true);
///
/// assert_eq!(list.selected().map(|o| o.value.as_str()), Some("Color2"));
/// assert!(list.render().contains(r#"size="4""#));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(strip_option, into)]
pub struct SelectList {
    /// Name of the control. `None` renders an empty `name` attribute.
    pub name: Option<String>,

    /// Number of visible rows. Zero or negative leaves `size` out.
    pub size: i64,

    /// Additional attributes written verbatim into the opening tag
    pub extra_attributes: String,

    /// Escape option values the same way display text is escaped. Values are
    /// written verbatim when unset.
    pub escape_values: bool,

    #[setters(skip)]
    options: Vec<SelectOption>,

    #[setters(skip)]
    selected_index: Option<usize>,
}

impl SelectList {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    /// Creates a list without a name.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Appends an option and returns the number of options after the insert.
    ///
    /// The returned value is a count, not the position of the new option.
    pub fn add_option(
        &mut self,
        display: impl Into<String>,
        value: impl Into<String>,
        selected: bool,
    ) -> usize {
        self.options.push(SelectOption::new(display, value));
        if selected {
            self.select_index(self.options.len() - 1);
        }
        self.options.len()
    }

    /// Appends every `(value, display)` entry in iteration order and returns
    /// the number of options afterwards.
    ///
    /// `selected` is applied to each entry in turn, so a `true` flag leaves
    /// the last entry selected.
    pub fn add_options<I, V, D>(&mut self, entries: I, selected: bool) -> usize
    where
        I: IntoIterator<Item = (V, D)>,
        V: Into<String>,
        D: Into<String>,
    {
        for (value, display) in entries {
            self.add_option(display, value, selected);
        }
        self.options.len()
    }

    pub fn item_count(&self) -> usize {
        self.options.len()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Position of the selected option as last set. Use [`Self::selected`]
    /// for a bounds-checked lookup.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// The selected option, if the selection points at an existing option.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected_index.and_then(|index| self.options.get(index))
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    /// Selects the first option whose value matches. Leaves the selection
    /// untouched when nothing matches.
    pub fn select_by_value(&mut self, value: &str, ignore_case: bool) {
        self.select_first(|option| option.value.as_str(), value, ignore_case);
    }

    /// Selects the first option whose display text matches. Leaves the
    /// selection untouched when nothing matches.
    pub fn select_by_display(&mut self, display: &str, ignore_case: bool) {
        self.select_first(|option| option.display.as_str(), display, ignore_case);
    }

    fn select_first(
        &mut self,
        field: impl Fn(&SelectOption) -> &str,
        needle: &str,
        ignore_case: bool,
    ) {
        let found = self.options.iter().position(|option| {
            let candidate = field(option);
            if ignore_case {
                eq_ignore_case(candidate, needle)
            } else {
                candidate == needle
            }
        });

        match found {
            Some(index) => self.select_index(index),
            None => debug!(needle, ignore_case, "No option matched, selection unchanged"),
        }
    }

    fn select_index(&mut self, index: usize) {
        debug!(name = ?self.name, index, "Selected option");
        self.selected_index = Some(index);
    }

    /// Renders the `<select>` element with one `<option>` per line.
    pub fn render(&self) -> String {
        let selected = self.selected().and(self.selected_index);
        let mut html = StartTag::new("select")
            .attr("name", self.name.as_deref().unwrap_or_default())
            .attr_if(self.size > 0, "size", self.size)
            .raw(&self.extra_attributes)
            .render();

        for (index, option) in self.options.iter().enumerate() {
            let value = if self.escape_values {
                escape_text(&option.value)
            } else {
                Cow::Borrowed(option.value.as_str())
            };
            let tag = StartTag::new("option")
                .attr("value", value)
                .attr_if(selected == Some(index), "selected", "selected");

            html.push_str("\n\t");
            html.push_str(&tag.render());
            html.push_str(&escape_text(&option.display));
            html.push_str("</option>");
        }

        html.push_str("\n</select>");
        trace!(name = ?self.name, options = self.options.len(), "Rendered select list");
        html
    }
}

impl fmt::Display for SelectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}
