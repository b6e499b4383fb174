use serde::{Deserialize, Serialize};

/// Declarative description of what to pull off a results page:
/// a base selector matching each record card, and per-field selectors
/// evaluated inside the card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSchema {
    /// Selector matching one element per record.
    pub base_selector: String,
    pub fields: Vec<FieldSpec>,
}

/// One named field within a record card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub selector: String,
    /// Attribute to read from the matched element; `None` means text content.
    #[serde(default)]
    pub attribute: Option<String>,
}

impl ExtractionSchema {
    /// Schema for the club directory's search result cards.
    pub fn club_cards() -> Self {
        Self {
            base_selector: "section.flex.w-full.flex-col.gap-4.rounded-2xl".to_string(),
            fields: vec![
                FieldSpec {
                    name: "club_name".to_string(),
                    selector: "h3.text-base.font-bold".to_string(),
                    attribute: None,
                },
                FieldSpec {
                    name: "club_link".to_string(),
                    selector: "a".to_string(),
                    attribute: Some("href".to_string()),
                },
            ],
        }
    }

    /// Generate the JavaScript that extracts records from the page.
    ///
    /// Runs in the browser context and returns
    /// `{ records: [{field: value, …}], html: <page markup> }`; missing
    /// elements and attributes yield empty strings rather than holes so the
    /// record list always deserializes.
    pub fn extraction_script(&self) -> String {
        let mut field_lines = String::new();
        for field in &self.fields {
            let getter = match &field.attribute {
                Some(attr) => format!(
                    "el ? (el.getAttribute('{}') || '') : ''",
                    escape_single_quotes(attr)
                ),
                None => "el ? el.textContent.trim() : ''".to_string(),
            };
            field_lines.push_str(&format!(
                r#"
                    {{
                        const el = card.querySelector('{selector}');
                        record['{name}'] = {getter};
                    }}"#,
                selector = escape_single_quotes(&field.selector),
                name = escape_single_quotes(&field.name),
                getter = getter,
            ));
        }

        format!(
            r#"
            (() => {{
                const records = [];
                for (const card of document.querySelectorAll('{base}')) {{
                    const record = {{}};{field_lines}
                    records.push(record);
                }}
                return {{
                    records,
                    html: document.documentElement.outerHTML,
                }};
            }})()
            "#,
            base = escape_single_quotes(&self.base_selector),
            field_lines = field_lines,
        )
    }

    /// Generate the JavaScript that simulates a click on the next-page
    /// control: scroll to the bottom, find the button by its visible text,
    /// scroll it into view, click. Returns whether a button was clicked.
    pub fn next_page_script(label: &str) -> String {
        format!(
            r#"
            (() => {{
                window.scrollTo(0, document.body.scrollHeight);
                for (const button of document.querySelectorAll('button')) {{
                    if (button.textContent.includes('{label}')) {{
                        button.scrollIntoView();
                        button.click();
                        return true;
                    }}
                }}
                return false;
            }})()
            "#,
            label = escape_single_quotes(label),
        )
    }
}

fn escape_single_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_script_contains_selectors() {
        let script = ExtractionSchema::club_cards().extraction_script();
        assert!(script.contains("section.flex.w-full.flex-col.gap-4.rounded-2xl"));
        assert!(script.contains("h3.text-base.font-bold"));
        assert!(script.contains("club_name"));
        assert!(script.contains("club_link"));
        assert!(script.contains("getAttribute('href')"));
        assert!(script.contains("outerHTML"));
    }

    #[test]
    fn test_extraction_script_escapes_quotes() {
        let schema = ExtractionSchema {
            base_selector: "a[title='x']".to_string(),
            fields: vec![],
        };
        let script = schema.extraction_script();
        assert!(script.contains(r"a[title=\'x\']"));
    }

    #[test]
    fn test_next_page_script_embeds_label() {
        let script = ExtractionSchema::next_page_script("Next page");
        assert!(script.contains("includes('Next page')"));
        assert!(script.contains("scrollIntoView"));
    }
}
