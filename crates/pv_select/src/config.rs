use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, SelectList};

/// One entry of [`SelectConfig::options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionEntry {
    pub display: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

/// YAML description of a [`SelectList`].
///
/// `options` are added first, then `choices` (an ordered `value: display`
/// mapping) and finally the `selected_value` / `selected_display` lookups
/// run, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectConfig {
    pub name: Option<String>,
    pub size: i64,
    pub extra_attributes: String,
    pub escape_values: bool,
    pub options: Vec<OptionEntry>,
    pub choices: IndexMap<String, String>,
    pub selected_value: Option<String>,
    pub selected_display: Option<String>,
    /// Applies to both `selected_value` and `selected_display`
    pub ignore_case: bool,
}

impl SelectConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yml::from_str(content)?)
    }

    /// Parses either a single config or a sequence of configs.
    pub fn all_from_yaml(content: &str) -> Result<Vec<Self>> {
        let value: serde_yml::Value = serde_yml::from_str(content)?;
        if value.is_sequence() {
            Ok(serde_yml::from_value(value)?)
        } else {
            Ok(vec![serde_yml::from_value(value)?])
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_yaml(&read(path.as_ref())?)
    }

    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let configs = Self::all_from_yaml(&read(path.as_ref())?)?;
        debug!(path = %path.as_ref().display(), count = configs.len(), "Loaded select configs");
        Ok(configs)
    }

    pub fn into_select_list(self) -> SelectList {
        let mut list = match self.name {
            Some(name) => SelectList::new(name),
            None => SelectList::unnamed(),
        }
        .size(self.size)
        .extra_attributes(self.extra_attributes)
        .escape_values(self.escape_values);

        for entry in self.options {
            list.add_option(entry.display, entry.value, entry.selected);
        }
        list.add_options(self.choices, false);

        if let Some(value) = &self.selected_value {
            list.select_by_value(value, self.ignore_case);
        }
        if let Some(display) = &self.selected_display {
            list.select_by_display(display, self.ignore_case);
        }
        list
    }
}

impl From<SelectConfig> for SelectList {
    fn from(config: SelectConfig) -> Self {
        config.into_select_list()
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SelectOption;

    const COLORS: &str = r#"
name: myList2
extra_attributes: 'style="font-size:24px"'
options:
  - { display: Red, value: Color1 }
  - { display: Blue, value: Color2, selected: true }
choices:
  Color3: Yellow
  Color4: Green
"#;

    #[test]
    fn test_defaults_for_missing_fields() {
        let actual = SelectConfig::from_yaml("name: bare").unwrap();
        let expected = SelectConfig { name: Some("bare".to_string()), ..Default::default() };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_into_select_list() {
        let list = SelectConfig::from_yaml(COLORS).unwrap().into_select_list();

        let values: Vec<_> = list.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Color1", "Color2", "Color3", "Color4"]);
        assert_eq!(list.selected(), Some(&SelectOption::new("Blue", "Color2")));
        assert_eq!(list.extra_attributes, r#"style="font-size:24px""#);
        assert_eq!(list.name.as_deref(), Some("myList2"));
    }

    #[test]
    fn test_selected_lookups_run_after_options() {
        let yaml = format!("{COLORS}selected_display: yellow\nignore_case: true\n");
        let list: SelectList = SelectConfig::from_yaml(&yaml).unwrap().into();
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn test_selected_value_is_case_sensitive_by_default() {
        let yaml = format!("{COLORS}selected_value: color4\n");
        let list = SelectConfig::from_yaml(&yaml).unwrap().into_select_list();
        assert_eq!(list.selected_index(), Some(1));
    }

    #[test]
    fn test_unnamed_config() {
        let list = SelectConfig::from_yaml("size: 3").unwrap().into_select_list();
        assert_eq!(list.render(), "<select name=\"\" size=\"3\">\n</select>");
    }

    #[test]
    fn test_all_from_yaml_accepts_single_and_sequence() {
        let single = SelectConfig::all_from_yaml("name: one").unwrap();
        assert_eq!(single.len(), 1);

        let many = SelectConfig::all_from_yaml("- name: one\n- name: two\n").unwrap();
        let names: Vec<_> = many.iter().map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec![Some("one"), Some("two")]);
    }

    #[test]
    fn test_invalid_yaml() {
        let actual = SelectConfig::from_yaml("size: [not, a, number]");
        assert!(matches!(actual, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let actual = SelectConfig::from_yaml("name: n\noption:\n  - { display: One, value: a }\n");
        assert!(matches!(actual, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_unknown_option_field_is_rejected() {
        let actual =
            SelectConfig::from_yaml("options:\n  - { display: One, value: a, selcted: true }\n");
        assert!(matches!(actual, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_all_from_yaml_keeps_field_error() {
        let actual = SelectConfig::all_from_yaml("size: [not, a, number]").unwrap_err();
        assert!(matches!(actual, Error::Yaml(_)));
        assert!(actual.to_string().contains("invalid type"));
    }

    #[test]
    fn test_all_from_yaml_reports_unknown_field_in_sequence() {
        let actual = SelectConfig::all_from_yaml("- name: a\n- nmae: b\n").unwrap_err();
        assert!(actual.to_string().contains("nmae"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(COLORS.as_bytes()).unwrap();

        let actual = SelectConfig::load(file.path()).unwrap();
        let all = SelectConfig::load_all(file.path()).unwrap();

        assert_eq!(actual.options.len(), 2);
        assert_eq!(all, vec![actual]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let actual = SelectConfig::load(&path).unwrap_err();

        assert!(matches!(actual, Error::Io { .. }));
        assert!(actual.to_string().contains("missing.yaml"));
    }
}
