use std::collections::HashMap;

/// `KEY: VALUE` lines parsed from one order section. Lines without a colon are
/// ignored; values keep any colons after the first; duplicate keys keep the
/// last occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionFields {
    values: HashMap<String, String>,
}

impl SectionFields {
    pub fn parse(section: &str) -> Self {
        let mut values = HashMap::new();
        for line in section.lines() {
            let Some((key, value)) = line.split_once(':') else { continue };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            values.insert(key.to_string(), value.trim().to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
